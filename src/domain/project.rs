// ==========================================
// Calculadora UST - 预估项目领域模型
// ==========================================
// 向导第3步: 预估项目清单
// 项目与画像相互独立,仅通过复杂度档位参与Squad时长聚合
// ==========================================

use crate::domain::types::ProjectComplexity;
use serde::{Deserialize, Serialize};

// ==========================================
// Project - 预估项目
// ==========================================
// 字段约束 (由API层校验): name 1..50, duration_weeks >= 1
// 红线: id 由引擎生成 (uuid v4),调用方不得自拟
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,                  // 项目ID (uuid v4)
    pub name: String,                // 项目名称
    pub complexity: ProjectComplexity, // 复杂度档位
    pub duration_weeks: i32,         // 预估时长 (周)
}

// ==========================================
// ProjectUpdate - 项目局部更新
// ==========================================
// None 字段保持原值
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub complexity: Option<ProjectComplexity>,
    pub duration_weeks: Option<i32>,
}
