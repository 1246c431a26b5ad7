// ==========================================
// Calculadora UST - 领域类型定义
// ==========================================
// 序列化格式: 小写标签 (与前端一致: "low"/"medium"/"high")
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 项目复杂度 (Project Complexity)
// ==========================================
// 红线: 封闭的三值标签,标签身份有意义,顺序无意义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectComplexity {
    Low,    // 低复杂度
    Medium, // 中复杂度
    High,   // 高复杂度
}

impl ProjectComplexity {
    /// 全部复杂度档位 (用于全档位重算遍历)
    pub const ALL: [ProjectComplexity; 3] = [
        ProjectComplexity::Low,
        ProjectComplexity::Medium,
        ProjectComplexity::High,
    ];

    /// 从字符串解析复杂度
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(ProjectComplexity::Low),
            "medium" => Some(ProjectComplexity::Medium),
            "high" => Some(ProjectComplexity::High),
            _ => None,
        }
    }

    /// 转换为前端使用的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectComplexity::Low => "low",
            ProjectComplexity::Medium => "medium",
            ProjectComplexity::High => "high",
        }
    }
}

impl fmt::Display for ProjectComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
