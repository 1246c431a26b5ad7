// ==========================================
// Calculadora UST - Squad与聚合状态领域模型
// ==========================================
// 职责: Squad成员、按复杂度分档的Squad表、聚合根 CalculatorState
// 红线: 四个派生字段永远是纯函数输出,任何输入变化必须立即重算 (见 engine/squad_calc.rs)
// ==========================================

use crate::domain::configuration::ConfigurationParams;
use crate::domain::personal_info::PersonalInfo;
use crate::domain::profile::ProfessionalProfile;
use crate::domain::project::Project;
use crate::domain::types::ProjectComplexity;
use serde::{Deserialize, Serialize};

// ==========================================
// SquadMember - Squad成员行
// ==========================================
// 注意: profile_name / fcp 是画像的时点快照 (point-in-time snapshot),
// 画像改名或改FCP后不会自动回写,仅在 initialize_squad_roster 重建名册时刷新。
// profile_id 是弱引用: 画像删除后该行保留,引用可能解析不到。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadMember {
    pub profile_id: String,   // 画像ID (弱引用,不拥有)
    pub profile_name: String, // 画像名称快照
    pub fcp: f64,             // FCP快照
    pub quantity: i32,        // 分配人数 (>= 0)

    // ===== 派生字段 (由 SquadCalculator 统一计算) =====
    pub ust_per_week: f64,   // UST/周
    pub reais_per_week: f64, // R$/周
    pub total_ust: f64,      // UST总量
    pub total_reais: f64,    // R$总额
}

// ==========================================
// SquadTable - 单档位Squad表
// ==========================================
// 不变量: total_duration_weeks 恒等于该档位全部项目时长之和
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadTable {
    pub complexity: ProjectComplexity, // 复杂度档位
    pub total_duration_weeks: i32,     // 该档位项目总时长 (周)
    pub members: Vec<SquadMember>,     // 成员行 (名册初始化后每画像一行)
}

impl SquadTable {
    /// 创建空Squad表
    pub fn empty(complexity: ProjectComplexity) -> Self {
        Self {
            complexity,
            total_duration_weeks: 0,
            members: Vec::new(),
        }
    }
}

// ==========================================
// Squads - 三档位Squad集合
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squads {
    pub low: SquadTable,
    pub medium: SquadTable,
    pub high: SquadTable,
}

impl Squads {
    /// 创建三个空档位
    pub fn empty() -> Self {
        Self {
            low: SquadTable::empty(ProjectComplexity::Low),
            medium: SquadTable::empty(ProjectComplexity::Medium),
            high: SquadTable::empty(ProjectComplexity::High),
        }
    }

    /// 按档位取Squad表
    pub fn get(&self, complexity: ProjectComplexity) -> &SquadTable {
        match complexity {
            ProjectComplexity::Low => &self.low,
            ProjectComplexity::Medium => &self.medium,
            ProjectComplexity::High => &self.high,
        }
    }

    /// 按档位取Squad表 (可变)
    pub fn get_mut(&mut self, complexity: ProjectComplexity) -> &mut SquadTable {
        match complexity {
            ProjectComplexity::Low => &mut self.low,
            ProjectComplexity::Medium => &mut self.medium,
            ProjectComplexity::High => &mut self.high,
        }
    }
}

// ==========================================
// SquadTotals - 单档位合计 (只读查询)
// ==========================================
// 对应前端Squad表页脚的合计行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadTotals {
    pub complexity: ProjectComplexity,
    pub total_professionals: i32, // 人数合计
    pub ust_per_week: f64,        // UST/周合计
    pub reais_per_week: f64,      // R$/周合计
    pub total_ust: f64,           // UST总量合计
    pub total_reais: f64,         // R$总额合计
}

// ==========================================
// CalculatorState - 聚合根
// ==========================================
// 单一事实来源: 其余实体均由其拥有
// 生命周期: 会话开始时按默认值创建; reset 整体替换; 永不持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub current_step: i32, // 当前向导步骤 ∈ [1, TOTAL_STEPS]
    pub personal_info: PersonalInfo,
    pub configuration: ConfigurationParams,
    pub professional_profiles: Vec<ProfessionalProfile>,
    pub projects: Vec<Project>,
    pub squads: Squads,
}

impl CalculatorState {
    /// 默认初始状态 (单价70.00 / 合同52周 / 每周40小时, 空画像/项目/Squad, 第1步)
    pub fn initial() -> Self {
        Self {
            current_step: 1,
            personal_info: PersonalInfo::default(),
            configuration: ConfigurationParams::default(),
            professional_profiles: Vec::new(),
            projects: Vec::new(),
            squads: Squads::empty(),
        }
    }
}
