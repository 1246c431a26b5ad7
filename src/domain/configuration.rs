// ==========================================
// Calculadora UST - 配置参数领域模型
// ==========================================
// 向导第2步: UST测算的基础参数
// 红线: 整体替换,不提供字段级局部更新 (前端先合并再提交)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 默认配置常量
// ==========================================

/// UST单价默认值 (R$ 70,00)
pub const DEFAULT_UST_UNIT_VALUE: f64 = 70.0;

/// 合同期默认值 (52周 = 1年)
pub const DEFAULT_CONTRACT_DURATION_WEEKS: i32 = 52;

/// 每周工时默认值 (40小时)
pub const DEFAULT_HOURS_PER_WEEK: f64 = 40.0;

// ==========================================
// ConfigurationParams - 测算配置
// ==========================================
// 字段约束 (由API层校验): ust_unit_value > 0, contract_duration_weeks >= 1, hours_per_week > 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationParams {
    pub ust_unit_value: f64,          // UST单价 (R$)
    pub contract_duration_weeks: i32, // 合同期 (周)
    pub hours_per_week: f64,          // 每周工时
}

impl Default for ConfigurationParams {
    fn default() -> Self {
        Self {
            ust_unit_value: DEFAULT_UST_UNIT_VALUE,
            contract_duration_weeks: DEFAULT_CONTRACT_DURATION_WEEKS,
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
        }
    }
}
