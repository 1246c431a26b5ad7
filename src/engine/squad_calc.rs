// ==========================================
// Calculadora UST - Squad成员测算引擎
// ==========================================
// 职责: 由 (fcp, quantity, 配置, 档位总时长) 计算成员的四个派生字段
// 红线: 纯函数,确定性,永不失败; quantity=0 输出全零而非报错
// ==========================================
// 公式:
//   ust_per_week   = fcp * quantity * hours_per_week
//   reais_per_week = ust_per_week * ust_unit_value
//   total_ust      = ust_per_week * total_duration_weeks
//   total_reais    = reais_per_week * total_duration_weeks
// ==========================================

use crate::domain::configuration::ConfigurationParams;
use crate::domain::profile::ProfessionalProfile;
use crate::domain::squad::SquadMember;

// ==========================================
// SquadCalculator - Squad成员测算引擎
// ==========================================
pub struct SquadCalculator;

impl SquadCalculator {
    /// 创建新的Squad成员测算引擎
    pub fn new() -> Self {
        Self
    }

    /// 重算单个成员的四个派生字段
    ///
    /// 负值输入不做防御: 上游保证 quantity >= 0 且 fcp > 0,
    /// 万一越界则产出算术结果 (可能为负),不panic。
    pub fn recalculate(
        &self,
        member: &mut SquadMember,
        configuration: &ConfigurationParams,
        total_duration_weeks: i32,
    ) {
        let ust_per_week = member.fcp * member.quantity as f64 * configuration.hours_per_week;
        let reais_per_week = ust_per_week * configuration.ust_unit_value;

        member.ust_per_week = ust_per_week;
        member.reais_per_week = reais_per_week;
        member.total_ust = ust_per_week * total_duration_weeks as f64;
        member.total_reais = reais_per_week * total_duration_weeks as f64;
    }

    /// 从画像新建一条零人数成员行 (名册初始化用)
    ///
    /// profile_name / fcp 在此处定格为时点快照。
    pub fn new_member(
        &self,
        profile: &ProfessionalProfile,
        configuration: &ConfigurationParams,
        total_duration_weeks: i32,
    ) -> SquadMember {
        let mut member = SquadMember {
            profile_id: profile.id.clone(),
            profile_name: profile.profile_name.clone(),
            fcp: profile.fcp,
            quantity: 0,
            ust_per_week: 0.0,
            reais_per_week: 0.0,
            total_ust: 0.0,
            total_reais: 0.0,
        };
        self.recalculate(&mut member, configuration, total_duration_weeks);
        member
    }
}

impl Default for SquadCalculator {
    fn default() -> Self {
        Self::new()
    }
}
