// ==========================================
// Calculadora UST - 步骤门禁策略
// ==========================================
// 职责: 判定向导能否从当前步骤前进
// 红线: 纯谓词,只读聚合状态,本身不是变更操作
// ==========================================
// 规则:
//   步骤1 → 姓名/邮箱/机构去空白后均非空
//   步骤2 → 至少存在一个画像
//   步骤3/4/5 → 恒允许 (项目与Squad配置均为可选)
//   未知步骤 → 不允许
// ==========================================

use crate::domain::squad::CalculatorState;

// ==========================================
// StepGate - 步骤门禁
// ==========================================
pub struct StepGate;

impl StepGate {
    /// 判定指定步骤能否前进
    pub fn can_advance(state: &CalculatorState, step: i32) -> bool {
        match step {
            1 => state.personal_info.is_complete(),
            2 => !state.professional_profiles.is_empty(),
            3 | 4 | 5 => true,
            _ => false,
        }
    }
}
