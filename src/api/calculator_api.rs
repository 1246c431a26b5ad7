// ==========================================
// Calculadora UST - 测算业务 API
// ==========================================
// 职责: 包裹测算引擎,供 Tauri 命令调用
//       1. 输入校验 (InputValidator,引擎前置闸)
//       2. 串行化聚合访问 (Mutex,单次变更=单次原子迁移)
//       3. ActionLog记录 (所有写入必须记录)
//       4. 每次变更后返回完整聚合快照
// 红线: 对外只交付快照克隆,内部集合的可变引用绝不外泄
// ==========================================

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::error::ApiResult;
use crate::api::validator::InputValidator;
use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::configuration::ConfigurationParams;
use crate::domain::personal_info::PersonalInfo;
use crate::domain::profile::ProfileUpdate;
use crate::domain::project::ProjectUpdate;
use crate::domain::squad::{CalculatorState, SquadTotals};
use crate::domain::types::ProjectComplexity;
use crate::engine::calculator::CalculatorEngine;
use crate::engine::duration::DurationByComplexity;

/// 审计日志在内存中保留的最大条数 (超出丢弃最旧)
const MAX_ACTION_LOG_ENTRIES: usize = 1000;

// ==========================================
// 输入 DTO
// ==========================================

/// 新增画像输入 (id由引擎生成)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub profile_name: String,
    pub fcp: f64,
}

/// 新增项目输入 (id由引擎生成)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub name: String,
    pub complexity: ProjectComplexity,
    pub duration_weeks: i32,
}

// ==========================================
// 输出 DTO
// ==========================================

/// 项目汇总 (只读查询)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total_projects: usize,
    pub total_duration_weeks: i32,
    pub duration_by_complexity: DurationByComplexity,
}

// ==========================================
// CalculatorApi - 测算业务 API
// ==========================================
pub struct CalculatorApi {
    engine: Mutex<CalculatorEngine>,
    validator: InputValidator,
    action_log: Mutex<Vec<ActionLog>>,
}

impl CalculatorApi {
    /// 创建新的CalculatorApi实例 (默认初始状态)
    pub fn new() -> Self {
        Self {
            engine: Mutex::new(CalculatorEngine::new()),
            validator: InputValidator::new(),
            action_log: Mutex::new(Vec::new()),
        }
    }

    // ==========================================
    // 状态查询
    // ==========================================

    /// 当前聚合快照
    pub fn get_state(&self) -> ApiResult<CalculatorState> {
        Ok(self.engine.lock().unwrap().snapshot())
    }

    /// 当前步骤能否前进
    pub fn can_proceed(&self) -> ApiResult<bool> {
        Ok(self.engine.lock().unwrap().can_proceed())
    }

    /// 名册是否需要重建
    pub fn needs_roster_init(&self) -> ApiResult<bool> {
        Ok(self.engine.lock().unwrap().needs_roster_init())
    }

    /// 项目汇总
    pub fn project_summary(&self) -> ApiResult<ProjectSummary> {
        let engine = self.engine.lock().unwrap();
        Ok(ProjectSummary {
            total_projects: engine.total_projects(),
            total_duration_weeks: engine.total_project_duration(),
            duration_by_complexity: engine.duration_by_complexity(),
        })
    }

    /// 单档位Squad合计
    pub fn squad_totals(&self, complexity: ProjectComplexity) -> ApiResult<SquadTotals> {
        Ok(self.engine.lock().unwrap().squad_totals(complexity))
    }

    /// 三档位Squad合计
    pub fn all_squad_totals(&self) -> ApiResult<Vec<SquadTotals>> {
        let engine = self.engine.lock().unwrap();
        Ok(ProjectComplexity::ALL
            .iter()
            .map(|&c| engine.squad_totals(c))
            .collect())
    }

    // ==========================================
    // 步骤导航
    // ==========================================

    /// 跳转到指定步骤 (钳制到合法区间)
    pub fn set_current_step(&self, step: i32) -> ApiResult<CalculatorState> {
        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.set_current_step(step);
            engine.snapshot()
        };
        self.record(ActionType::GoToStep, None, Some(json!({ "step": step })));
        Ok(snapshot)
    }

    /// 前进一步
    pub fn next_step(&self) -> ApiResult<CalculatorState> {
        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.next_step();
            engine.snapshot()
        };
        self.record(ActionType::GoToStep, None, Some(json!({ "direction": "next" })));
        Ok(snapshot)
    }

    /// 后退一步
    pub fn previous_step(&self) -> ApiResult<CalculatorState> {
        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.previous_step();
            engine.snapshot()
        };
        self.record(ActionType::GoToStep, None, Some(json!({ "direction": "previous" })));
        Ok(snapshot)
    }

    // ==========================================
    // 填报人信息
    // ==========================================

    /// 更新填报人信息
    pub fn update_personal_info(&self, info: PersonalInfo) -> ApiResult<CalculatorState> {
        self.validator.validate_personal_info(&info)?;

        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.update_personal_info(info);
            engine.snapshot()
        };
        self.record(ActionType::UpdatePersonalInfo, None, None);
        Ok(snapshot)
    }

    // ==========================================
    // 测算配置
    // ==========================================

    /// 更新测算配置 (触发全部成员重算)
    pub fn update_configuration(&self, config: ConfigurationParams) -> ApiResult<CalculatorState> {
        self.validator.validate_configuration(&config)?;

        let detail = json!({
            "ustUnitValue": config.ust_unit_value,
            "contractDurationWeeks": config.contract_duration_weeks,
            "hoursPerWeek": config.hours_per_week,
        });
        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.update_configuration(config);
            engine.snapshot()
        };
        self.record(ActionType::UpdateConfiguration, None, Some(detail));
        Ok(snapshot)
    }

    // ==========================================
    // 画像管理
    // ==========================================

    /// 新增画像
    pub fn add_profile(&self, input: ProfileInput) -> ApiResult<CalculatorState> {
        self.validator
            .validate_profile_input(&input.profile_name, input.fcp)?;

        let (profile_id, snapshot) = {
            let mut engine = self.engine.lock().unwrap();
            let profile = engine.add_profile(input.profile_name, input.fcp);
            (profile.id, engine.snapshot())
        };
        self.record(
            ActionType::AddProfile,
            Some(profile_id),
            Some(json!({ "fcp": input.fcp })),
        );
        Ok(snapshot)
    }

    /// 局部更新画像
    pub fn update_profile(&self, id: &str, updates: ProfileUpdate) -> ApiResult<CalculatorState> {
        self.validator.validate_profile_update(&updates)?;

        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.update_profile(id, updates);
            engine.snapshot()
        };
        self.record(ActionType::UpdateProfile, Some(id.to_string()), None);
        Ok(snapshot)
    }

    /// 删除画像 (无确认,确认提示是前端职责)
    pub fn delete_profile(&self, id: &str) -> ApiResult<CalculatorState> {
        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.delete_profile(id);
            engine.snapshot()
        };
        self.record(ActionType::DeleteProfile, Some(id.to_string()), None);
        Ok(snapshot)
    }

    // ==========================================
    // 项目管理
    // ==========================================

    /// 新增项目 (触发全档位重算)
    pub fn add_project(&self, input: ProjectInput) -> ApiResult<CalculatorState> {
        self.validator
            .validate_project_input(&input.name, input.duration_weeks)?;

        let (project_id, snapshot) = {
            let mut engine = self.engine.lock().unwrap();
            let project = engine.add_project(input.name, input.complexity, input.duration_weeks);
            (project.id, engine.snapshot())
        };
        self.record(
            ActionType::AddProject,
            Some(project_id),
            Some(json!({
                "complexity": input.complexity.as_str(),
                "durationWeeks": input.duration_weeks,
            })),
        );
        Ok(snapshot)
    }

    /// 局部更新项目 (触发全档位重算)
    pub fn update_project(&self, id: &str, updates: ProjectUpdate) -> ApiResult<CalculatorState> {
        self.validator.validate_project_update(&updates)?;

        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.update_project(id, updates);
            engine.snapshot()
        };
        self.record(ActionType::UpdateProject, Some(id.to_string()), None);
        Ok(snapshot)
    }

    /// 删除项目 (触发全档位重算; 无确认,确认提示是前端职责)
    pub fn delete_project(&self, id: &str) -> ApiResult<CalculatorState> {
        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.delete_project(id);
            engine.snapshot()
        };
        self.record(ActionType::DeleteProject, Some(id.to_string()), None);
        Ok(snapshot)
    }

    // ==========================================
    // Squad管理
    // ==========================================

    /// 设置成员人数 (只重算该成员)
    pub fn set_squad_member_quantity(
        &self,
        complexity: ProjectComplexity,
        profile_id: &str,
        quantity: i32,
    ) -> ApiResult<CalculatorState> {
        self.validator.validate_quantity(quantity)?;

        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.set_squad_member_quantity(complexity, profile_id, quantity);
            engine.snapshot()
        };
        self.record(
            ActionType::SetSquadQuantity,
            Some(profile_id.to_string()),
            Some(json!({ "complexity": complexity.as_str(), "quantity": quantity })),
        );
        Ok(snapshot)
    }

    /// 重建Squad名册 (整表替换,已录入人数丢失)
    pub fn initialize_squad_roster(&self) -> ApiResult<CalculatorState> {
        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.initialize_squad_roster();
            engine.snapshot()
        };
        tracing::info!("Squad名册已重建 (人数归零)");
        self.record(ActionType::InitializeRoster, None, None);
        Ok(snapshot)
    }

    // ==========================================
    // 整体重置
    // ==========================================

    /// 重置为默认初始状态 (审计日志保留)
    pub fn reset(&self) -> ApiResult<CalculatorState> {
        let snapshot = {
            let mut engine = self.engine.lock().unwrap();
            engine.reset();
            engine.snapshot()
        };
        self.record(ActionType::Reset, None, None);
        Ok(snapshot)
    }

    // ==========================================
    // 审计日志
    // ==========================================

    /// 最近的操作日志 (新→旧)
    pub fn list_action_logs(&self, limit: usize) -> ApiResult<Vec<ActionLog>> {
        let logs = self.action_log.lock().unwrap();
        Ok(logs.iter().rev().take(limit).cloned().collect())
    }

    /// 记录一条操作日志 (超限丢弃最旧)
    fn record(&self, action_type: ActionType, target_id: Option<String>, detail: Option<serde_json::Value>) {
        let mut logs = self.action_log.lock().unwrap();
        logs.push(ActionLog::now(action_type, target_id, detail));
        if logs.len() > MAX_ACTION_LOG_ENTRIES {
            let excess = logs.len() - MAX_ACTION_LOG_ENTRIES;
            logs.drain(0..excess);
        }
    }
}

impl Default for CalculatorApi {
    fn default() -> Self {
        Self::new()
    }
}
