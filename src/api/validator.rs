// ==========================================
// Calculadora UST - 输入校验器
// ==========================================
// 职责: 字段级输入校验 (长度/数值区间/必填),在引擎调用之前执行;
//       引擎假定输入已合法,校验是展示边界的最后一道闸
// 红线: 违规逐字段收集后一次性返回,消息走 i18n (pt-BR 默认)
// ==========================================
// 约束清单 (与前端表单schema一致):
//   full_name 1..255 | email 1..50 且形如邮箱 | organization 非空
//   ust_unit_value > 0 | contract_duration_weeks >= 1 | hours_per_week > 0
//   profile_name 1..100 | fcp ∈ [0.1, 10.0]
//   project name 1..50 | duration_weeks >= 1 | quantity >= 0
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::configuration::ConfigurationParams;
use crate::domain::personal_info::PersonalInfo;
use crate::domain::profile::{ProfileUpdate, FCP_MAX, FCP_MIN};
use crate::domain::project::ProjectUpdate;
use crate::i18n::{t, t_with_args};

// 字段长度上限
const FULL_NAME_MAX: usize = 255;
const EMAIL_MAX: usize = 50;
const PROFILE_NAME_MAX: usize = 100;
const PROJECT_NAME_MAX: usize = 50;

// ==========================================
// InputValidator - 输入校验器
// ==========================================
pub struct InputValidator;

impl InputValidator {
    /// 创建新的输入校验器
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 填报人信息
    // ==========================================

    /// 校验填报人信息
    pub fn validate_personal_info(&self, info: &PersonalInfo) -> ApiResult<()> {
        let mut violations = Vec::new();

        let full_name = info.full_name.trim();
        if full_name.is_empty() {
            violations.push(violation("fullName", "FULL_NAME_REQUIRED", "validation.full_name_required"));
        } else if full_name.chars().count() > FULL_NAME_MAX {
            violations.push(violation("fullName", "FULL_NAME_TOO_LONG", "validation.full_name_too_long"));
        }

        let email = info.email.trim();
        if email.is_empty() {
            violations.push(violation("email", "EMAIL_REQUIRED", "validation.email_required"));
        } else if email.chars().count() > EMAIL_MAX {
            violations.push(violation("email", "EMAIL_TOO_LONG", "validation.email_too_long"));
        } else if !looks_like_email(email) {
            violations.push(violation("email", "EMAIL_INVALID", "validation.email_invalid"));
        }

        if info.organization.trim().is_empty() {
            violations.push(violation(
                "organization",
                "ORGANIZATION_REQUIRED",
                "validation.organization_required",
            ));
        }

        finish(violations)
    }

    // ==========================================
    // 测算配置
    // ==========================================

    /// 校验测算配置
    pub fn validate_configuration(&self, config: &ConfigurationParams) -> ApiResult<()> {
        let mut violations = Vec::new();

        if !(config.ust_unit_value > 0.0) {
            violations.push(violation(
                "ustUnitValue",
                "UST_UNIT_VALUE_POSITIVE",
                "validation.ust_unit_value_positive",
            ));
        }
        if config.contract_duration_weeks < 1 {
            violations.push(violation(
                "contractDurationWeeks",
                "CONTRACT_DURATION_MIN",
                "validation.contract_duration_min",
            ));
        }
        if !(config.hours_per_week > 0.0) {
            violations.push(violation(
                "hoursPerWeek",
                "HOURS_PER_WEEK_POSITIVE",
                "validation.hours_per_week_positive",
            ));
        }

        finish(violations)
    }

    // ==========================================
    // 画像
    // ==========================================

    /// 校验画像输入 (新增)
    pub fn validate_profile_input(&self, profile_name: &str, fcp: f64) -> ApiResult<()> {
        let mut violations = Vec::new();
        check_profile_name(profile_name, &mut violations);
        check_fcp(fcp, &mut violations);
        finish(violations)
    }

    /// 校验画像局部更新 (只校验提供的字段)
    pub fn validate_profile_update(&self, updates: &ProfileUpdate) -> ApiResult<()> {
        let mut violations = Vec::new();
        if let Some(profile_name) = &updates.profile_name {
            check_profile_name(profile_name, &mut violations);
        }
        if let Some(fcp) = updates.fcp {
            check_fcp(fcp, &mut violations);
        }
        finish(violations)
    }

    // ==========================================
    // 项目
    // ==========================================

    /// 校验项目输入 (新增)
    pub fn validate_project_input(&self, name: &str, duration_weeks: i32) -> ApiResult<()> {
        let mut violations = Vec::new();
        check_project_name(name, &mut violations);
        check_project_duration(duration_weeks, &mut violations);
        finish(violations)
    }

    /// 校验项目局部更新 (只校验提供的字段)
    pub fn validate_project_update(&self, updates: &ProjectUpdate) -> ApiResult<()> {
        let mut violations = Vec::new();
        if let Some(name) = &updates.name {
            check_project_name(name, &mut violations);
        }
        if let Some(duration_weeks) = updates.duration_weeks {
            check_project_duration(duration_weeks, &mut violations);
        }
        finish(violations)
    }

    // ==========================================
    // Squad
    // ==========================================

    /// 校验成员人数
    pub fn validate_quantity(&self, quantity: i32) -> ApiResult<()> {
        let mut violations = Vec::new();
        if quantity < 0 {
            violations.push(violation("quantity", "QUANTITY_NEGATIVE", "validation.quantity_negative"));
        }
        finish(violations)
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 内部辅助
// ==========================================

/// 构造违规条目 (消息按当前locale翻译)
fn violation(field: &str, code: &str, message_key: &str) -> ValidationViolation {
    ValidationViolation {
        field: field.to_string(),
        code: code.to_string(),
        message: t(message_key),
    }
}

/// 有违规则汇总为 ValidationError
fn finish(violations: Vec<ValidationViolation>) -> ApiResult<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::ValidationError {
            reason: t_with_args("validation.summary", &[("count", &violations.len().to_string())]),
            violations,
        })
    }
}

fn check_profile_name(profile_name: &str, violations: &mut Vec<ValidationViolation>) {
    let name = profile_name.trim();
    if name.is_empty() {
        violations.push(violation("profileName", "PROFILE_NAME_REQUIRED", "validation.profile_name_required"));
    } else if name.chars().count() > PROFILE_NAME_MAX {
        violations.push(violation("profileName", "PROFILE_NAME_TOO_LONG", "validation.profile_name_too_long"));
    }
}

fn check_fcp(fcp: f64, violations: &mut Vec<ValidationViolation>) {
    if !(FCP_MIN..=FCP_MAX).contains(&fcp) {
        violations.push(violation("fcp", "FCP_RANGE", "validation.fcp_range"));
    }
}

fn check_project_name(name: &str, violations: &mut Vec<ValidationViolation>) {
    let name = name.trim();
    if name.is_empty() {
        violations.push(violation("name", "PROJECT_NAME_REQUIRED", "validation.project_name_required"));
    } else if name.chars().count() > PROJECT_NAME_MAX {
        violations.push(violation("name", "PROJECT_NAME_TOO_LONG", "validation.project_name_too_long"));
    }
}

fn check_project_duration(duration_weeks: i32, violations: &mut Vec<ValidationViolation>) {
    if duration_weeks < 1 {
        violations.push(violation(
            "durationWeeks",
            "PROJECT_DURATION_MIN",
            "validation.project_duration_min",
        ));
    }
}

/// 简化的邮箱形状检查: local@domain 且 domain 含 '.'
/// 完整的RFC校验在前端表单完成,这里只挡明显畸形输入。
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
