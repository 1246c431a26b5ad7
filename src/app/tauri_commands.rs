// ==========================================
// Calculadora UST - Tauri 命令
// ==========================================
// 职责: Tauri 命令定义,连接前端向导与后端 API
// 约定: 成功返回聚合快照 (或查询结果) 的JSON; 失败返回 ErrorResponse 的JSON
// ==========================================

#![cfg(feature = "tauri-app")]

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::{ProfileInput, ProjectInput};
use crate::app::state::AppState;
use crate::domain::configuration::ConfigurationParams;
use crate::domain::personal_info::PersonalInfo;
use crate::domain::profile::ProfileUpdate;
use crate::domain::project::ProjectUpdate;
use crate::domain::types::ProjectComplexity;

// ==========================================
// 公共工具: 错误映射、复杂度解析
// ==========================================

/// 错误响应 (返回给前端)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    /// 错误代码
    code: String,

    /// 错误消息
    message: String,

    /// 详细信息 (可选)
    details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串 (Tauri要求)
fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::SerializationError(_) => "SERIALIZATION_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
        .to_string(),
        message: err.to_string(),
        details: match &err {
            ApiError::ValidationError { violations, .. } => {
                Some(serde_json::json!({ "violations": violations }))
            }
            _ => None,
        },
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// 序列化命令结果
fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("序列化失败: {}", e))
}

/// 解析复杂度档位参数
fn parse_complexity(complexity: &str) -> Result<ProjectComplexity, String> {
    ProjectComplexity::from_str(complexity).ok_or_else(|| {
        map_api_error(ApiError::InvalidInput(format!(
            "复杂度档位无效: {} (应为 low/medium/high)",
            complexity
        )))
    })
}

// ==========================================
// 状态查询命令
// ==========================================

/// 查询当前聚合快照
#[tauri::command(rename_all = "snake_case")]
pub async fn get_calculator_state(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.calculator_api.get_state().map_err(map_api_error)?;
    to_json(&result)
}

/// 当前步骤能否前进
#[tauri::command(rename_all = "snake_case")]
pub async fn can_proceed_to_next_step(
    state: tauri::State<'_, AppState>,
) -> Result<String, String> {
    let result = state.calculator_api.can_proceed().map_err(map_api_error)?;
    to_json(&serde_json::json!({ "canProceed": result }))
}

/// Squad名册是否需要重建
#[tauri::command(rename_all = "snake_case")]
pub async fn needs_squad_init(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .calculator_api
        .needs_roster_init()
        .map_err(map_api_error)?;
    to_json(&serde_json::json!({ "needsInit": result }))
}

/// 项目汇总
#[tauri::command(rename_all = "snake_case")]
pub async fn get_project_summary(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .calculator_api
        .project_summary()
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 三档位Squad合计
#[tauri::command(rename_all = "snake_case")]
pub async fn get_squad_totals(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .calculator_api
        .all_squad_totals()
        .map_err(map_api_error)?;
    to_json(&result)
}

// ==========================================
// 步骤导航命令
// ==========================================

/// 跳转到指定步骤
#[tauri::command(rename_all = "snake_case")]
pub async fn go_to_step(state: tauri::State<'_, AppState>, step: i32) -> Result<String, String> {
    let result = state
        .calculator_api
        .set_current_step(step)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 前进一步
#[tauri::command(rename_all = "snake_case")]
pub async fn next_step(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.calculator_api.next_step().map_err(map_api_error)?;
    to_json(&result)
}

/// 后退一步
#[tauri::command(rename_all = "snake_case")]
pub async fn previous_step(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .calculator_api
        .previous_step()
        .map_err(map_api_error)?;
    to_json(&result)
}

// ==========================================
// 填报人信息命令
// ==========================================

/// 更新填报人信息
#[tauri::command(rename_all = "snake_case")]
pub async fn update_personal_info(
    state: tauri::State<'_, AppState>,
    personal_info: String,
) -> Result<String, String> {
    let info: PersonalInfo = serde_json::from_str(&personal_info)
        .map_err(|e| format!("解析填报人信息失败: {}", e))?;

    let result = state
        .calculator_api
        .update_personal_info(info)
        .map_err(map_api_error)?;
    to_json(&result)
}

// ==========================================
// 测算配置命令
// ==========================================

/// 更新测算配置
#[tauri::command(rename_all = "snake_case")]
pub async fn update_configuration(
    state: tauri::State<'_, AppState>,
    configuration: String,
) -> Result<String, String> {
    let config: ConfigurationParams =
        serde_json::from_str(&configuration).map_err(|e| format!("解析配置失败: {}", e))?;

    let result = state
        .calculator_api
        .update_configuration(config)
        .map_err(map_api_error)?;
    to_json(&result)
}

// ==========================================
// 画像管理命令
// ==========================================

/// 新增画像
#[tauri::command(rename_all = "snake_case")]
pub async fn add_professional_profile(
    state: tauri::State<'_, AppState>,
    profile: String,
) -> Result<String, String> {
    let input: ProfileInput =
        serde_json::from_str(&profile).map_err(|e| format!("解析画像失败: {}", e))?;

    let result = state
        .calculator_api
        .add_profile(input)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 局部更新画像
#[tauri::command(rename_all = "snake_case")]
pub async fn update_professional_profile(
    state: tauri::State<'_, AppState>,
    id: String,
    updates: String,
) -> Result<String, String> {
    let updates: ProfileUpdate =
        serde_json::from_str(&updates).map_err(|e| format!("解析画像更新失败: {}", e))?;

    let result = state
        .calculator_api
        .update_profile(&id, updates)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 删除画像 (前端负责二次确认)
#[tauri::command(rename_all = "snake_case")]
pub async fn delete_professional_profile(
    state: tauri::State<'_, AppState>,
    id: String,
) -> Result<String, String> {
    let result = state
        .calculator_api
        .delete_profile(&id)
        .map_err(map_api_error)?;
    to_json(&result)
}

// ==========================================
// 项目管理命令
// ==========================================

/// 新增项目
#[tauri::command(rename_all = "snake_case")]
pub async fn add_project(
    state: tauri::State<'_, AppState>,
    project: String,
) -> Result<String, String> {
    let input: ProjectInput =
        serde_json::from_str(&project).map_err(|e| format!("解析项目失败: {}", e))?;

    let result = state
        .calculator_api
        .add_project(input)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 局部更新项目
#[tauri::command(rename_all = "snake_case")]
pub async fn update_project(
    state: tauri::State<'_, AppState>,
    id: String,
    updates: String,
) -> Result<String, String> {
    let updates: ProjectUpdate =
        serde_json::from_str(&updates).map_err(|e| format!("解析项目更新失败: {}", e))?;

    let result = state
        .calculator_api
        .update_project(&id, updates)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 删除项目 (前端负责二次确认)
#[tauri::command(rename_all = "snake_case")]
pub async fn delete_project(
    state: tauri::State<'_, AppState>,
    id: String,
) -> Result<String, String> {
    let result = state
        .calculator_api
        .delete_project(&id)
        .map_err(map_api_error)?;
    to_json(&result)
}

// ==========================================
// Squad管理命令
// ==========================================

/// 设置Squad成员人数
#[tauri::command(rename_all = "snake_case")]
pub async fn set_squad_member_quantity(
    state: tauri::State<'_, AppState>,
    complexity: String,
    profile_id: String,
    quantity: i32,
) -> Result<String, String> {
    let complexity = parse_complexity(&complexity)?;

    let result = state
        .calculator_api
        .set_squad_member_quantity(complexity, &profile_id, quantity)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 重建Squad名册
#[tauri::command(rename_all = "snake_case")]
pub async fn initialize_squad_roster(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .calculator_api
        .initialize_squad_roster()
        .map_err(map_api_error)?;
    to_json(&result)
}

// ==========================================
// 整体重置命令
// ==========================================

/// 重置为默认初始状态
#[tauri::command(rename_all = "snake_case")]
pub async fn reset_calculator(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.calculator_api.reset().map_err(map_api_error)?;
    to_json(&result)
}

// ==========================================
// 审计与国际化命令
// ==========================================

/// 查询最近操作日志
#[tauri::command(rename_all = "snake_case")]
pub async fn list_action_logs(
    state: tauri::State<'_, AppState>,
    limit: usize,
) -> Result<String, String> {
    let result = state
        .calculator_api
        .list_action_logs(limit)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 切换界面语言 ("pt-BR" 或 "en")
#[tauri::command(rename_all = "snake_case")]
pub async fn set_app_locale(locale: String) -> Result<String, String> {
    crate::i18n::set_locale(&locale);
    to_json(&serde_json::json!({ "locale": crate::i18n::current_locale() }))
}
