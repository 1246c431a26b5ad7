// ==========================================
// Calculadora UST - 测算状态引擎
// ==========================================
// 职责: 独占持有聚合状态 CalculatorState,暴露全部变更操作;
//       每次变更后重跑时长聚合与Squad成员测算,保证聚合内部一致
// 红线: 引擎不做输入校验 (API层已校验),给定合法输入每个操作都是全函数;
//       未命中id的更新/删除静默跳过 (记debug日志)
// 红线: 项目变更触发全档位全量重算,不做增量diff (规模小,简单优先)
// ==========================================

use crate::domain::configuration::ConfigurationParams;
use crate::domain::personal_info::PersonalInfo;
use crate::domain::profile::{ProfessionalProfile, ProfileUpdate};
use crate::domain::project::{Project, ProjectUpdate};
use crate::domain::squad::{CalculatorState, SquadTotals};
use crate::domain::types::ProjectComplexity;
use crate::engine::duration::{DurationAggregator, DurationByComplexity};
use crate::engine::squad_calc::SquadCalculator;
use crate::engine::step_gate::StepGate;
use crate::TOTAL_STEPS;
use tracing::instrument;

// ==========================================
// CalculatorEngine - 测算状态引擎
// ==========================================
pub struct CalculatorEngine {
    state: CalculatorState,
    duration_aggregator: DurationAggregator,
    squad_calc: SquadCalculator,
}

impl CalculatorEngine {
    /// 以默认初始状态创建引擎
    pub fn new() -> Self {
        Self {
            state: CalculatorState::initial(),
            duration_aggregator: DurationAggregator::new(),
            squad_calc: SquadCalculator::new(),
        }
    }

    // ==========================================
    // 状态读取
    // ==========================================

    /// 只读访问聚合状态
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// 聚合状态快照 (克隆,外部拿不到内部可变引用)
    pub fn snapshot(&self) -> CalculatorState {
        self.state.clone()
    }

    // ==========================================
    // 步骤导航
    // ==========================================

    /// 跳转到指定步骤 (钳制到 [1, TOTAL_STEPS])
    pub fn set_current_step(&mut self, step: i32) {
        self.state.current_step = step.clamp(1, TOTAL_STEPS);
    }

    /// 前进一步 (上限 TOTAL_STEPS)
    pub fn next_step(&mut self) {
        self.state.current_step = (self.state.current_step + 1).min(TOTAL_STEPS);
    }

    /// 后退一步 (下限 1)
    pub fn previous_step(&mut self) {
        self.state.current_step = (self.state.current_step - 1).max(1);
    }

    /// 当前步骤能否前进 (步骤门禁,只读)
    pub fn can_proceed(&self) -> bool {
        StepGate::can_advance(&self.state, self.state.current_step)
    }

    // ==========================================
    // 填报人信息
    // ==========================================

    /// 整体替换填报人信息 (无派生数据,不触发重算)
    pub fn update_personal_info(&mut self, personal_info: PersonalInfo) {
        self.state.personal_info = personal_info;
    }

    // ==========================================
    // 测算配置
    // ==========================================

    /// 整体替换配置,并按各档位当前总时长重算全部Squad成员
    ///
    /// 本操作不改变 total_duration_weeks (时长只依赖项目清单)。
    #[instrument(skip_all)]
    pub fn update_configuration(&mut self, configuration: ConfigurationParams) {
        self.state.configuration = configuration;
        self.recalculate_members_against_configuration();
    }

    // ==========================================
    // 画像管理
    // ==========================================

    /// 新增画像 (引擎生成uuid)
    ///
    /// 不会自动向任何Squad表追加成员行 (名册按需显式重建)。
    pub fn add_profile(&mut self, profile_name: String, fcp: f64) -> ProfessionalProfile {
        let profile = ProfessionalProfile {
            id: uuid::Uuid::new_v4().to_string(),
            profile_name,
            fcp,
        };
        self.state.professional_profiles.push(profile.clone());
        profile
    }

    /// 局部更新画像
    ///
    /// 不回写既有Squad成员行的 profile_name/fcp 快照 (快照在名册重建时刷新)。
    pub fn update_profile(&mut self, id: &str, updates: ProfileUpdate) {
        match self
            .state
            .professional_profiles
            .iter_mut()
            .find(|p| p.id == id)
        {
            Some(profile) => {
                if let Some(profile_name) = updates.profile_name {
                    profile.profile_name = profile_name;
                }
                if let Some(fcp) = updates.fcp {
                    profile.fcp = fcp;
                }
            }
            None => tracing::debug!(profile_id = id, "update_profile: 画像不存在,跳过"),
        }
    }

    /// 删除画像
    ///
    /// 引用该画像的Squad成员行保持原样 (悬空弱引用,名册重建时被丢弃)。
    pub fn delete_profile(&mut self, id: &str) {
        let before = self.state.professional_profiles.len();
        self.state.professional_profiles.retain(|p| p.id != id);
        if self.state.professional_profiles.len() == before {
            tracing::debug!(profile_id = id, "delete_profile: 画像不存在,跳过");
        }
    }

    // ==========================================
    // 项目管理
    // ==========================================

    /// 新增项目 (引擎生成uuid),随后全档位重算
    pub fn add_project(
        &mut self,
        name: String,
        complexity: ProjectComplexity,
        duration_weeks: i32,
    ) -> Project {
        let project = Project {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            complexity,
            duration_weeks,
        };
        self.state.projects.push(project.clone());
        self.recalculate_all_squads();
        project
    }

    /// 局部更新项目,随后全档位重算
    pub fn update_project(&mut self, id: &str, updates: ProjectUpdate) {
        match self.state.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                if let Some(name) = updates.name {
                    project.name = name;
                }
                if let Some(complexity) = updates.complexity {
                    project.complexity = complexity;
                }
                if let Some(duration_weeks) = updates.duration_weeks {
                    project.duration_weeks = duration_weeks;
                }
            }
            None => tracing::debug!(project_id = id, "update_project: 项目不存在,跳过"),
        }
        self.recalculate_all_squads();
    }

    /// 删除项目,随后全档位重算
    pub fn delete_project(&mut self, id: &str) {
        let before = self.state.projects.len();
        self.state.projects.retain(|p| p.id != id);
        if self.state.projects.len() == before {
            tracing::debug!(project_id = id, "delete_project: 项目不存在,跳过");
        }
        self.recalculate_all_squads();
    }

    // ==========================================
    // Squad管理
    // ==========================================

    /// 设置指定档位中某画像成员的人数,并只重算该成员
    ///
    /// 其余成员与其他档位不受影响; 未命中成员时静默跳过。
    pub fn set_squad_member_quantity(
        &mut self,
        complexity: ProjectComplexity,
        profile_id: &str,
        quantity: i32,
    ) {
        let configuration = self.state.configuration.clone();
        let table = self.state.squads.get_mut(complexity);
        let total_duration_weeks = table.total_duration_weeks;

        match table
            .members
            .iter_mut()
            .find(|m| m.profile_id == profile_id)
        {
            Some(member) => {
                member.quantity = quantity;
                self.squad_calc
                    .recalculate(member, &configuration, total_duration_weeks);
            }
            None => tracing::debug!(
                complexity = %complexity,
                profile_id,
                "set_squad_member_quantity: 成员不存在,跳过"
            ),
        }
    }

    /// 重建全部档位的Squad名册
    ///
    /// 每档位按当前画像清单生成一行零人数成员 (时点快照定格于此),
    /// 并按当前项目聚合时长完成测算。整表替换: 已录入的人数会丢失,
    /// 引用已删画像的行被丢弃。
    #[instrument(skip_all, fields(profiles = self.state.professional_profiles.len()))]
    pub fn initialize_squad_roster(&mut self) {
        let totals = self.duration_aggregator.aggregate(&self.state.projects);
        let configuration = self.state.configuration.clone();
        let profiles = self.state.professional_profiles.clone();

        for complexity in ProjectComplexity::ALL {
            let total_duration_weeks = totals.get(complexity);
            let members = profiles
                .iter()
                .map(|p| self.squad_calc.new_member(p, &configuration, total_duration_weeks))
                .collect();

            let table = self.state.squads.get_mut(complexity);
            table.total_duration_weeks = total_duration_weeks;
            table.members = members;
        }
    }

    /// 名册是否需要重建 (任一档位成员数 != 画像数)
    ///
    /// 前端进入Squad步骤时以此判定是否调用 initialize_squad_roster。
    pub fn needs_roster_init(&self) -> bool {
        let profile_count = self.state.professional_profiles.len();
        ProjectComplexity::ALL
            .iter()
            .any(|&c| self.state.squads.get(c).members.len() != profile_count)
    }

    // ==========================================
    // 只读汇总查询
    // ==========================================

    /// 项目总数
    pub fn total_projects(&self) -> usize {
        self.state.projects.len()
    }

    /// 全部项目时长之和 (周,不分档位)
    pub fn total_project_duration(&self) -> i32 {
        self.state.projects.iter().map(|p| p.duration_weeks).sum()
    }

    /// 分档位项目总时长
    pub fn duration_by_complexity(&self) -> DurationByComplexity {
        self.duration_aggregator.aggregate(&self.state.projects)
    }

    /// 单档位合计 (人数/UST/R$,对应前端表格页脚)
    pub fn squad_totals(&self, complexity: ProjectComplexity) -> SquadTotals {
        let table = self.state.squads.get(complexity);
        let mut totals = SquadTotals {
            complexity,
            total_professionals: 0,
            ust_per_week: 0.0,
            reais_per_week: 0.0,
            total_ust: 0.0,
            total_reais: 0.0,
        };
        for member in &table.members {
            totals.total_professionals += member.quantity;
            totals.ust_per_week += member.ust_per_week;
            totals.reais_per_week += member.reais_per_week;
            totals.total_ust += member.total_ust;
            totals.total_reais += member.total_reais;
        }
        totals
    }

    // ==========================================
    // 整体重置
    // ==========================================

    /// 整体替换为默认初始状态
    pub fn reset(&mut self) {
        tracing::info!("重置聚合状态为默认初始值");
        self.state = CalculatorState::initial();
    }

    // ==========================================
    // 内部重算 (级联核心)
    // ==========================================

    /// 项目变更后的全档位重算:
    /// 1. 全量重跑时长聚合
    /// 2. 每档位写入新总时长
    /// 3. 重算该档位全部成员
    /// 三步对外表现为单次原子状态迁移 (调用方只见重算完成后的快照)。
    #[instrument(skip_all, fields(projects = self.state.projects.len()))]
    fn recalculate_all_squads(&mut self) {
        let totals = self.duration_aggregator.aggregate(&self.state.projects);
        let configuration = self.state.configuration.clone();

        for complexity in ProjectComplexity::ALL {
            let total_duration_weeks = totals.get(complexity);
            let table = self.state.squads.get_mut(complexity);
            table.total_duration_weeks = total_duration_weeks;
            for member in &mut table.members {
                self.squad_calc
                    .recalculate(member, &configuration, total_duration_weeks);
            }
        }
    }

    /// 配置变更后的成员重算: 沿用各档位当前总时长,只重算成员字段
    fn recalculate_members_against_configuration(&mut self) {
        let configuration = self.state.configuration.clone();

        for complexity in ProjectComplexity::ALL {
            let table = self.state.squads.get_mut(complexity);
            let total_duration_weeks = table.total_duration_weeks;
            for member in &mut table.members {
                self.squad_calc
                    .recalculate(member, &configuration, total_duration_weeks);
            }
        }
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
