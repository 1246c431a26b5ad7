// ==========================================
// Calculadora UST - 核心库
// ==========================================
// 技术栈: Tauri + Rust
// 系统定位: UST人员需求测算 - 派生状态重算引擎 (人工最终控制权)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::ProjectComplexity;

// 领域实体
pub use domain::{
    ActionLog, ActionType, CalculatorState, ConfigurationParams, PersonalInfo,
    ProfessionalProfile, Project, SquadMember, SquadTable, SquadTotals, Squads,
};

// 引擎
pub use engine::{
    CalculatorEngine, DurationAggregator, DurationByComplexity, SquadCalculator, StepGate,
};

// API
pub use api::{ApiError, ApiResult, CalculatorApi, InputValidator};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Calculadora UST";

// 向导步骤总数 (1:个人信息 2:配置 3:项目 4:Squad 5:结果)
pub const TOTAL_STEPS: i32 = 5;

// ==========================================
// 预编译检查
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_total_steps() {
        assert_eq!(TOTAL_STEPS, 5);
    }
}
