// ==========================================
// Calculadora UST - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust
// 系统定位: UST人员需求测算 - 决策支持工具
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use ust_calculator::app::AppState;

#[cfg(feature = "tauri-app")]
fn main() {
    use ust_calculator::app::tauri_commands::*;

    // 初始化日志系统
    ust_calculator::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 人员需求测算", ust_calculator::APP_NAME);
    tracing::info!("系统版本: {}", ust_calculator::VERSION);
    tracing::info!("==================================================");

    // 创建AppState (内存态聚合,无数据库)
    let app_state = AppState::new();

    tracing::info!("启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 状态查询命令 (5个)
            // ==========================================
            get_calculator_state,
            can_proceed_to_next_step,
            needs_squad_init,
            get_project_summary,
            get_squad_totals,

            // ==========================================
            // 步骤导航命令 (3个)
            // ==========================================
            go_to_step,
            next_step,
            previous_step,

            // ==========================================
            // 填报人与配置命令 (2个)
            // ==========================================
            update_personal_info,
            update_configuration,

            // ==========================================
            // 画像管理命令 (3个)
            // ==========================================
            add_professional_profile,
            update_professional_profile,
            delete_professional_profile,

            // ==========================================
            // 项目管理命令 (3个)
            // ==========================================
            add_project,
            update_project,
            delete_project,

            // ==========================================
            // Squad管理命令 (2个)
            // ==========================================
            set_squad_member_quantity,
            initialize_squad_roster,

            // ==========================================
            // 重置/审计/国际化命令 (3个)
            // ==========================================
            reset_calculator,
            list_action_logs,
            set_app_locale,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{} - 人员需求测算", ust_calculator::APP_NAME);
    println!("系统版本: {}", ust_calculator::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use ust_calculator::app::AppState;");

    // 库模式冒烟: 确认默认聚合可创建
    let state = AppState::new();
    let snapshot = state
        .calculator_api
        .get_state()
        .expect("默认聚合创建失败");
    println!();
    println!(
        "默认聚合已就绪: step={}, 单价=R${:.2}",
        snapshot.current_step, snapshot.configuration.ust_unit_value
    );
}
