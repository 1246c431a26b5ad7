// ==========================================
// Calculadora UST - 操作日志领域模型
// ==========================================
// 红线: 所有写入必须记录
// 用途: 审计追踪 (会话内存级,不持久化; reset 聚合状态不清空审计)
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

// ==========================================
// ActionType - 操作类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    UpdatePersonalInfo,  // 更新填报人信息
    UpdateConfiguration, // 更新测算配置
    AddProfile,          // 新增画像
    UpdateProfile,       // 更新画像
    DeleteProfile,       // 删除画像
    AddProject,          // 新增项目
    UpdateProject,       // 更新项目
    DeleteProject,       // 删除项目
    SetSquadQuantity,    // 调整Squad成员人数
    InitializeRoster,    // 重建Squad名册
    GoToStep,            // 步骤跳转
    Reset,               // 整体重置
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionType::UpdatePersonalInfo => "UPDATE_PERSONAL_INFO",
            ActionType::UpdateConfiguration => "UPDATE_CONFIGURATION",
            ActionType::AddProfile => "ADD_PROFILE",
            ActionType::UpdateProfile => "UPDATE_PROFILE",
            ActionType::DeleteProfile => "DELETE_PROFILE",
            ActionType::AddProject => "ADD_PROJECT",
            ActionType::UpdateProject => "UPDATE_PROJECT",
            ActionType::DeleteProject => "DELETE_PROJECT",
            ActionType::SetSquadQuantity => "SET_SQUAD_QUANTITY",
            ActionType::InitializeRoster => "INITIALIZE_ROSTER",
            ActionType::GoToStep => "GO_TO_STEP",
            ActionType::Reset => "RESET",
        };
        write!(f, "{}", s)
    }
}

// ==========================================
// ActionLog - 操作日志条目
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLog {
    pub log_id: String,             // 日志ID (uuid v4)
    pub action_type: ActionType,    // 操作类型
    pub action_ts: NaiveDateTime,   // 操作时间戳 (UTC)
    pub target_id: Option<String>,  // 目标实体ID (画像/项目; 全局操作为None)
    pub detail: Option<JsonValue>,  // 操作参数摘要 (JSON)
}

impl ActionLog {
    /// 以当前时间创建日志条目
    pub fn now(action_type: ActionType, target_id: Option<String>, detail: Option<JsonValue>) -> Self {
        Self {
            log_id: uuid::Uuid::new_v4().to_string(),
            action_type,
            action_ts: chrono::Utc::now().naive_utc(),
            target_id,
            detail,
        }
    }
}
