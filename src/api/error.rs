// ==========================================
// Calculadora UST - API层错误类型
// ==========================================
// 职责: 定义API层错误类型; 引擎本身无错误分类 (给定合法输入全函数),
//       所有可失败路径集中在API边界 (输入校验/序列化)
// 红线: 所有错误信息必须包含显式原因 (可解释性)
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// ValidationViolation - 校验违规详情
// ==========================================

/// 校验违规详情 (逐字段)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationViolation {
    /// 违规字段 (camelCase,与前端表单字段一致)
    pub field: String,
    /// 违规代码 (稳定标识,如 "FULL_NAME_REQUIRED")
    pub code: String,
    /// 本地化违规消息 (按当前locale)
    pub message: String,
}

// ==========================================
// ApiError - API层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 字段校验失败 (带逐字段原因)
    #[error("输入校验失败: {reason}")]
    ValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    // ==========================================
    // 查询错误
    // ==========================================
    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("序列化失败: {0}")]
    SerializationError(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SerializationError(err.to_string())
    }
}
