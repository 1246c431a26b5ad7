// ==========================================
// CalculatorEngine 集成测试
// ==========================================
// 测试范围:
// 1. 时长聚合正确性
// 2. Squad成员测算公式
// 3. 配置/项目变更的级联重算
// 4. 名册初始化幂等性
// 5. 步骤门禁边界
// 6. 整体重置
// ==========================================

use ust_calculator::domain::{CalculatorState, PersonalInfo, ProfileUpdate, ProjectUpdate};
use ust_calculator::engine::CalculatorEngine;
use ust_calculator::{ConfigurationParams, ProjectComplexity};

// ==========================================
// 辅助函数
// ==========================================

/// 创建带画像与项目的测试引擎
fn setup_engine() -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    engine.add_profile("Desenvolvedor".to_string(), 2.0);
    engine.add_profile("Analista de Testes".to_string(), 1.0);
    engine.add_project("Portal".to_string(), ProjectComplexity::High, 10);
    engine.add_project("API".to_string(), ProjectComplexity::Low, 4);
    engine.initialize_squad_roster();
    engine
}

/// 校验聚合一致性不变量:
/// 1. 各档位总时长 == 该档位项目时长之和
/// 2. 每个成员的四个派生字段 == 纯函数输出
/// 3. 当前步骤在 [1, 5] 内
fn assert_consistent(state: &CalculatorState) {
    for complexity in ProjectComplexity::ALL {
        let expected_duration: i32 = state
            .projects
            .iter()
            .filter(|p| p.complexity == complexity)
            .map(|p| p.duration_weeks)
            .sum();

        let table = state.squads.get(complexity);
        assert_eq!(
            table.total_duration_weeks, expected_duration,
            "档位{}总时长与项目之和不一致",
            complexity
        );

        for member in &table.members {
            let ust_per_week =
                member.fcp * member.quantity as f64 * state.configuration.hours_per_week;
            let reais_per_week = ust_per_week * state.configuration.ust_unit_value;
            assert_eq!(member.ust_per_week, ust_per_week);
            assert_eq!(member.reais_per_week, reais_per_week);
            assert_eq!(member.total_ust, ust_per_week * expected_duration as f64);
            assert_eq!(member.total_reais, reais_per_week * expected_duration as f64);
        }
    }

    assert!((1..=5).contains(&state.current_step));
}

fn profile_id(engine: &CalculatorEngine, index: usize) -> String {
    engine.state().professional_profiles[index].id.clone()
}

// ==========================================
// 时长聚合测试
// ==========================================

#[test]
fn test_duration_aggregation_matches_project_sums() {
    let mut engine = CalculatorEngine::new();
    engine.add_project("A".to_string(), ProjectComplexity::Low, 3);
    engine.add_project("B".to_string(), ProjectComplexity::Low, 7);
    engine.add_project("C".to_string(), ProjectComplexity::Medium, 5);

    let totals = engine.duration_by_complexity();
    assert_eq!(totals.low, 10);
    assert_eq!(totals.medium, 5);
    assert_eq!(totals.high, 0); // 无项目档位恰好为0

    assert_consistent(engine.state());
}

// ==========================================
// Squad测算公式测试
// ==========================================

#[test]
fn test_squad_arithmetic_reference_case() {
    // 固定参考值: fcp=2.0, qty=3, 40h, R$70, 10周
    let mut engine = CalculatorEngine::new();
    engine.add_profile("Dev".to_string(), 2.0);
    engine.add_project("Portal".to_string(), ProjectComplexity::High, 10);
    engine.initialize_squad_roster();
    let id = profile_id(&engine, 0);

    engine.set_squad_member_quantity(ProjectComplexity::High, &id, 3);

    let member = &engine.state().squads.high.members[0];
    assert_eq!(member.ust_per_week, 240.0);
    assert_eq!(member.reais_per_week, 16_800.0);
    assert_eq!(member.total_ust, 2_400.0);
    assert_eq!(member.total_reais, 168_000.0);
    assert_consistent(engine.state());
}

#[test]
fn test_zero_quantity_members_stay_all_zero() {
    let engine = setup_engine();
    for complexity in ProjectComplexity::ALL {
        for member in &engine.state().squads.get(complexity).members {
            assert_eq!(member.quantity, 0);
            assert_eq!(member.ust_per_week, 0.0);
            assert_eq!(member.reais_per_week, 0.0);
            assert_eq!(member.total_ust, 0.0);
            assert_eq!(member.total_reais, 0.0);
        }
    }
}

// ==========================================
// 级联重算测试
// ==========================================

#[test]
fn test_configuration_change_recomputes_reais_not_ust() {
    let mut engine = setup_engine();
    let dev = profile_id(&engine, 0);
    engine.set_squad_member_quantity(ProjectComplexity::High, &dev, 3);

    let before = engine.state().squads.high.members[0].clone();

    // 只改单价: UST口径不变,R$口径变
    engine.update_configuration(ConfigurationParams {
        ust_unit_value: 90.0,
        contract_duration_weeks: 52,
        hours_per_week: 40.0,
    });

    let after = &engine.state().squads.high.members[0];
    assert_eq!(after.ust_per_week, before.ust_per_week);
    assert_eq!(after.total_ust, before.total_ust);
    assert_eq!(after.reais_per_week, 21_600.0);
    assert_eq!(after.total_reais, 216_000.0);
    assert_consistent(engine.state());
}

#[test]
fn test_configuration_change_keeps_tier_durations() {
    let mut engine = setup_engine();
    let high_duration = engine.state().squads.high.total_duration_weeks;

    engine.update_configuration(ConfigurationParams {
        ust_unit_value: 70.0,
        contract_duration_weeks: 26,
        hours_per_week: 30.0,
    });

    // 配置变更不触碰档位总时长
    assert_eq!(engine.state().squads.high.total_duration_weeks, high_duration);
    assert_consistent(engine.state());
}

#[test]
fn test_project_change_cascades_only_affected_tier_totals() {
    let mut engine = setup_engine();
    let dev = profile_id(&engine, 0);
    engine.set_squad_member_quantity(ProjectComplexity::High, &dev, 2);
    engine.set_squad_member_quantity(ProjectComplexity::Low, &dev, 1);

    let low_before = engine.state().squads.low.clone();
    let high_total_before = engine.state().squads.high.members[0].total_ust;

    // 新增 high 档位项目 (+5周): 只有 high 档位口径变化
    engine.add_project("Migração".to_string(), ProjectComplexity::High, 5);

    let state = engine.state();
    assert_eq!(state.squads.high.total_duration_weeks, 15);
    assert_eq!(state.squads.low, low_before);
    assert!(state.squads.high.members[0].total_ust > high_total_before);
    assert_consistent(state);
}

#[test]
fn test_update_project_complexity_moves_duration_between_tiers() {
    let mut engine = setup_engine();
    let project_id = engine.state().projects[1].id.clone(); // "API", low, 4周

    engine.update_project(
        &project_id,
        ProjectUpdate {
            name: None,
            complexity: Some(ProjectComplexity::Medium),
            duration_weeks: Some(6),
        },
    );

    let state = engine.state();
    assert_eq!(state.squads.low.total_duration_weeks, 0);
    assert_eq!(state.squads.medium.total_duration_weeks, 6);
    assert_eq!(state.squads.high.total_duration_weeks, 10);
    assert_consistent(state);
}

#[test]
fn test_delete_project_recomputes_all_tiers() {
    let mut engine = setup_engine();
    let dev = profile_id(&engine, 0);
    engine.set_squad_member_quantity(ProjectComplexity::High, &dev, 2);
    let project_id = engine.state().projects[0].id.clone(); // "Portal", high, 10周

    engine.delete_project(&project_id);

    let state = engine.state();
    assert_eq!(state.squads.high.total_duration_weeks, 0);
    // 人数保留,总量归零 (时长为0)
    let member = state
        .squads
        .high
        .members
        .iter()
        .find(|m| m.profile_id == dev)
        .expect("成员应保留");
    assert_eq!(member.quantity, 2);
    assert_eq!(member.total_ust, 0.0);
    assert!(member.ust_per_week > 0.0);
    assert_consistent(state);
}

// ==========================================
// 名册初始化测试
// ==========================================

#[test]
fn test_roster_initialization_is_idempotent() {
    let mut engine = setup_engine();

    engine.initialize_squad_roster();
    let first = engine.snapshot();

    engine.initialize_squad_roster();
    let second = engine.snapshot();

    // 画像/项目不变时,两次重建产出完全一致的名册
    assert_eq!(first, second);
}

#[test]
fn test_roster_initialization_zeroes_entered_quantities() {
    let mut engine = setup_engine();
    let dev = profile_id(&engine, 0);
    engine.set_squad_member_quantity(ProjectComplexity::High, &dev, 4);

    engine.initialize_squad_roster();

    // 整表替换: 已录入人数丢失
    for member in &engine.state().squads.high.members {
        assert_eq!(member.quantity, 0);
    }
    assert_consistent(engine.state());
}

#[test]
fn test_roster_tracks_current_profile_set() {
    let mut engine = setup_engine();
    engine.add_profile("Arquiteto".to_string(), 3.0);
    assert!(engine.needs_roster_init());

    engine.initialize_squad_roster();
    assert!(!engine.needs_roster_init());

    let state = engine.state();
    for complexity in ProjectComplexity::ALL {
        assert_eq!(
            state.squads.get(complexity).members.len(),
            state.professional_profiles.len()
        );
    }
}

// ==========================================
// 画像弱引用语义测试
// ==========================================

#[test]
fn test_profile_rename_does_not_resync_roster_snapshot() {
    let mut engine = setup_engine();
    let dev = profile_id(&engine, 0);

    engine.update_profile(
        &dev,
        ProfileUpdate {
            profile_name: Some("Desenvolvedor Sênior".to_string()),
            fcp: None,
        },
    );

    // 时点快照: 名册里的名称保持旧值
    let member = engine
        .state()
        .squads
        .low
        .members
        .iter()
        .find(|m| m.profile_id == dev)
        .expect("成员应存在");
    assert_eq!(member.profile_name, "Desenvolvedor");
}

// ==========================================
// 步骤门禁测试
// ==========================================

#[test]
fn test_step_gate_boundaries() {
    let mut engine = CalculatorEngine::new();

    // 步骤1: 填报人信息不完整 → 不允许
    assert!(!engine.can_proceed());

    engine.update_personal_info(PersonalInfo {
        full_name: "Maria".to_string(),
        email: "maria@org.br".to_string(),
        organization: "SEFAZ".to_string(),
    });
    assert!(engine.can_proceed());

    // 步骤2: 无画像 → 不允许; 有画像 → 允许
    engine.next_step();
    assert!(!engine.can_proceed());
    engine.add_profile("Dev".to_string(), 1.0);
    assert!(engine.can_proceed());

    // 步骤3/4/5: 恒允许 (项目与Squad均可选)
    for _ in 0..3 {
        engine.next_step();
        assert!(engine.can_proceed());
    }
}

// ==========================================
// 整体重置测试
// ==========================================

#[test]
fn test_reset_restores_exact_initial_state() {
    let mut engine = setup_engine();
    let dev = profile_id(&engine, 0);
    engine.update_personal_info(PersonalInfo {
        full_name: "Maria".to_string(),
        email: "maria@org.br".to_string(),
        organization: "SEFAZ".to_string(),
    });
    engine.update_configuration(ConfigurationParams {
        ust_unit_value: 85.5,
        contract_duration_weeks: 26,
        hours_per_week: 30.0,
    });
    engine.set_squad_member_quantity(ProjectComplexity::High, &dev, 3);
    engine.set_current_step(4);

    engine.reset();

    // 任意变更序列后,重置结果与全新初始状态逐位一致
    assert_eq!(engine.snapshot(), CalculatorState::initial());
}
