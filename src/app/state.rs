// ==========================================
// Calculadora UST - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 注意: 聚合为内存态,不持久化,进程重启即回到默认初始状态
// ==========================================

use std::sync::Arc;

use crate::api::CalculatorApi;

/// 应用状态
///
/// 包含所有API实例
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 测算API
    pub calculator_api: Arc<CalculatorApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 该方法会:
    /// 1. 创建测算引擎 (默认初始状态)
    /// 2. 创建API实例
    pub fn new() -> Self {
        tracing::info!("初始化AppState");

        let calculator_api = Arc::new(CalculatorApi::new());

        tracing::info!("AppState初始化完成");

        Self { calculator_api }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
