// ==========================================
// Calculadora UST - 专业人员画像领域模型
// ==========================================
// FCP = Fator de Conversão de Produtividade (生产率换算系数)
// ==========================================

use serde::{Deserialize, Serialize};

/// FCP 默认值
pub const DEFAULT_FCP: f64 = 1.0;

/// FCP 取值下限
pub const FCP_MIN: f64 = 0.1;

/// FCP 取值上限
pub const FCP_MAX: f64 = 10.0;

// ==========================================
// ProfessionalProfile - 专业人员画像
// ==========================================
// 字段约束 (由API层校验): profile_name 1..100, fcp ∈ [0.1, 10.0]
// 红线: id 由引擎生成 (uuid v4),调用方不得自拟
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalProfile {
    pub id: String,           // 画像ID (uuid v4)
    pub profile_name: String, // 画像名称 (如 "Desenvolvedor Sênior")
    pub fcp: f64,             // 生产率换算系数
}

// ==========================================
// ProfileUpdate - 画像局部更新
// ==========================================
// None 字段保持原值
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub profile_name: Option<String>,
    pub fcp: Option<f64>,
}
