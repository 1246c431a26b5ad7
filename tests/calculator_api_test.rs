// ==========================================
// CalculatorApi 集成测试
// ==========================================
// 测试范围:
// 1. 输入校验闸: 非法输入被拒,聚合不被污染
// 2. 变更后快照交付
// 3. 只读查询: 汇总/门禁/名册判定
// 4. ActionLog审计
// ==========================================

use ust_calculator::api::{ApiError, CalculatorApi, ProfileInput, ProjectInput};
use ust_calculator::domain::{ActionType, PersonalInfo};
use ust_calculator::{ConfigurationParams, ProjectComplexity};

// ==========================================
// 辅助函数
// ==========================================

/// 创建带一个画像和一个项目的API实例
fn setup_api() -> CalculatorApi {
    let api = CalculatorApi::new();
    api.add_profile(ProfileInput {
        profile_name: "Desenvolvedor".to_string(),
        fcp: 2.0,
    })
    .expect("新增画像失败");
    api.add_project(ProjectInput {
        name: "Portal".to_string(),
        complexity: ProjectComplexity::High,
        duration_weeks: 10,
    })
    .expect("新增项目失败");
    api.initialize_squad_roster().expect("名册重建失败");
    api
}

fn first_profile_id(api: &CalculatorApi) -> String {
    api.get_state().expect("快照读取失败").professional_profiles[0]
        .id
        .clone()
}

// ==========================================
// 校验闸测试
// ==========================================

#[test]
fn test_add_profile_rejeita_fcp_fora_do_intervalo() {
    let api = CalculatorApi::new();

    let result = api.add_profile(ProfileInput {
        profile_name: "Dev".to_string(),
        fcp: 42.0,
    });

    match result {
        Err(ApiError::ValidationError { violations, .. }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "fcp");
            assert_eq!(violations[0].code, "FCP_RANGE");
        }
        other => panic!("应返回ValidationError, 实际: {:?}", other.map(|_| ())),
    }

    // 聚合未被污染
    let state = api.get_state().expect("快照读取失败");
    assert!(state.professional_profiles.is_empty());
}

#[test]
fn test_update_configuration_rejeita_valores_invalidos() {
    let api = setup_api();

    let result = api.update_configuration(ConfigurationParams {
        ust_unit_value: -1.0,
        contract_duration_weeks: 52,
        hours_per_week: 40.0,
    });
    assert!(result.is_err(), "非法配置应被拒绝");

    // 原配置保持默认
    let state = api.get_state().expect("快照读取失败");
    assert_eq!(state.configuration.ust_unit_value, 70.0);
}

#[test]
fn test_update_personal_info_rejeita_email_invalido() {
    let api = CalculatorApi::new();

    let result = api.update_personal_info(PersonalInfo {
        full_name: "Maria".to_string(),
        email: "sem-arroba".to_string(),
        organization: "SEFAZ".to_string(),
    });
    assert!(result.is_err());

    let state = api.get_state().expect("快照读取失败");
    assert!(state.personal_info.email.is_empty());
}

#[test]
fn test_set_quantity_rejeita_negativo() {
    let api = setup_api();
    let id = first_profile_id(&api);

    let result = api.set_squad_member_quantity(ProjectComplexity::High, &id, -2);
    assert!(result.is_err());

    let state = api.get_state().expect("快照读取失败");
    assert_eq!(state.squads.high.members[0].quantity, 0);
}

// ==========================================
// 快照交付测试
// ==========================================

#[test]
fn test_mutation_returns_recomputed_snapshot() {
    let api = setup_api();
    let id = first_profile_id(&api);

    // 返回的快照已含本次变更的全部派生结果
    let snapshot = api
        .set_squad_member_quantity(ProjectComplexity::High, &id, 3)
        .expect("设置人数失败");

    let member = &snapshot.squads.high.members[0];
    assert_eq!(member.quantity, 3);
    assert_eq!(member.total_reais, 168_000.0);

    // 再次读取与返回快照一致
    assert_eq!(api.get_state().expect("快照读取失败"), snapshot);
}

#[test]
fn test_snapshots_are_detached_clones() {
    let api = setup_api();
    let mut snapshot = api.get_state().expect("快照读取失败");

    // 篡改快照不影响内部聚合
    snapshot.configuration.ust_unit_value = 999.0;
    snapshot.projects.clear();

    let fresh = api.get_state().expect("快照读取失败");
    assert_eq!(fresh.configuration.ust_unit_value, 70.0);
    assert_eq!(fresh.projects.len(), 1);
}

#[test]
fn test_step_navigation_via_api() {
    let api = setup_api();

    let snapshot = api.set_current_step(99).expect("跳转失败");
    assert_eq!(snapshot.current_step, 5); // 钳制到上限

    let snapshot = api.previous_step().expect("后退失败");
    assert_eq!(snapshot.current_step, 4);

    let snapshot = api.set_current_step(1).expect("跳转失败");
    assert_eq!(snapshot.current_step, 1);
}

#[test]
fn test_reset_via_api_restores_defaults() {
    let api = setup_api();
    api.update_configuration(ConfigurationParams {
        ust_unit_value: 88.0,
        contract_duration_weeks: 10,
        hours_per_week: 20.0,
    })
    .expect("更新配置失败");

    let snapshot = api.reset().expect("重置失败");
    assert_eq!(snapshot.configuration.ust_unit_value, 70.0);
    assert!(snapshot.professional_profiles.is_empty());
    assert!(snapshot.projects.is_empty());
    assert_eq!(snapshot.current_step, 1);
}

// ==========================================
// 只读查询测试
// ==========================================

#[test]
fn test_project_summary_query() {
    let api = setup_api();
    api.add_project(ProjectInput {
        name: "API".to_string(),
        complexity: ProjectComplexity::Low,
        duration_weeks: 4,
    })
    .expect("新增项目失败");

    let summary = api.project_summary().expect("汇总查询失败");
    assert_eq!(summary.total_projects, 2);
    assert_eq!(summary.total_duration_weeks, 14);
    assert_eq!(summary.duration_by_complexity.high, 10);
    assert_eq!(summary.duration_by_complexity.low, 4);
    assert_eq!(summary.duration_by_complexity.medium, 0);
}

#[test]
fn test_squad_totals_query() {
    let api = setup_api();
    let id = first_profile_id(&api);
    api.set_squad_member_quantity(ProjectComplexity::High, &id, 3)
        .expect("设置人数失败");

    let totals = api
        .squad_totals(ProjectComplexity::High)
        .expect("合计查询失败");
    assert_eq!(totals.total_professionals, 3);
    assert_eq!(totals.ust_per_week, 240.0);
    assert_eq!(totals.total_reais, 168_000.0);

    let all = api.all_squad_totals().expect("合计查询失败");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].complexity, ProjectComplexity::Low);
    assert_eq!(all[0].total_professionals, 0);
}

#[test]
fn test_needs_roster_init_tracks_profile_changes() {
    let api = setup_api();
    assert!(!api.needs_roster_init().expect("判定失败"));

    api.add_profile(ProfileInput {
        profile_name: "QA".to_string(),
        fcp: 0.8,
    })
    .expect("新增画像失败");
    assert!(api.needs_roster_init().expect("判定失败"));

    api.initialize_squad_roster().expect("名册重建失败");
    assert!(!api.needs_roster_init().expect("判定失败"));
}

#[test]
fn test_can_proceed_follows_current_step() {
    let api = CalculatorApi::new();
    // 步骤1,填报人信息为空 → 不允许
    assert!(!api.can_proceed().expect("门禁判定失败"));

    api.update_personal_info(PersonalInfo {
        full_name: "Maria".to_string(),
        email: "maria@org.br".to_string(),
        organization: "SEFAZ".to_string(),
    })
    .expect("更新填报人失败");
    assert!(api.can_proceed().expect("门禁判定失败"));
}

// ==========================================
// 审计日志测试
// ==========================================

#[test]
fn test_action_log_records_mutations() {
    let api = setup_api();
    let id = first_profile_id(&api);
    api.set_squad_member_quantity(ProjectComplexity::High, &id, 2)
        .expect("设置人数失败");

    let logs = api.list_action_logs(10).expect("日志查询失败");
    // 新→旧: 最近一条是人数调整
    assert_eq!(logs[0].action_type, ActionType::SetSquadQuantity);
    assert_eq!(logs[0].target_id.as_deref(), Some(id.as_str()));

    // setup_api 的三次写入也在
    let types: Vec<ActionType> = logs.iter().map(|l| l.action_type).collect();
    assert!(types.contains(&ActionType::AddProfile));
    assert!(types.contains(&ActionType::AddProject));
    assert!(types.contains(&ActionType::InitializeRoster));
}

#[test]
fn test_action_log_survives_reset() {
    let api = setup_api();
    api.reset().expect("重置失败");

    // 审计轨迹独立于聚合生命周期
    let logs = api.list_action_logs(10).expect("日志查询失败");
    assert_eq!(logs[0].action_type, ActionType::Reset);
    assert!(logs.len() > 1);
}

#[test]
fn test_rejected_mutation_not_logged() {
    let api = CalculatorApi::new();
    let _ = api.add_profile(ProfileInput {
        profile_name: "".to_string(),
        fcp: 1.0,
    });

    // 校验失败的操作不产生审计条目
    let logs = api.list_action_logs(10).expect("日志查询失败");
    assert!(logs.is_empty());
}
