// ==========================================
// Calculadora UST - 时长聚合引擎
// ==========================================
// 职责: 项目清单 → 按复杂度档位的总时长
// 红线: 纯函数,永不失败,与项目顺序无关,O(n)
// ==========================================

use crate::domain::project::Project;
use crate::domain::types::ProjectComplexity;
use serde::{Deserialize, Serialize};

// ==========================================
// DurationByComplexity - 分档位总时长
// ==========================================
// 无项目的档位为 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationByComplexity {
    pub low: i32,
    pub medium: i32,
    pub high: i32,
}

impl DurationByComplexity {
    /// 按档位取总时长
    pub fn get(&self, complexity: ProjectComplexity) -> i32 {
        match complexity {
            ProjectComplexity::Low => self.low,
            ProjectComplexity::Medium => self.medium,
            ProjectComplexity::High => self.high,
        }
    }
}

// ==========================================
// DurationAggregator - 时长聚合引擎
// ==========================================
pub struct DurationAggregator;

impl DurationAggregator {
    /// 创建新的时长聚合引擎
    pub fn new() -> Self {
        Self
    }

    /// 聚合全部项目的分档位总时长
    ///
    /// 每次项目变更 (新增/更新/删除) 后全量重算,不做增量维护。
    pub fn aggregate(&self, projects: &[Project]) -> DurationByComplexity {
        let mut totals = DurationByComplexity::default();
        for project in projects {
            match project.complexity {
                ProjectComplexity::Low => totals.low += project.duration_weeks,
                ProjectComplexity::Medium => totals.medium += project.duration_weeks,
                ProjectComplexity::High => totals.high += project.duration_weeks,
            }
        }
        totals
    }
}

impl Default for DurationAggregator {
    fn default() -> Self {
        Self::new()
    }
}
