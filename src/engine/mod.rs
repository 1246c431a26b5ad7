// ==========================================
// Calculadora UST - 引擎层
// ==========================================
// 职责: 实现测算业务规则,不做输入校验,不做I/O
// 红线: 聚合状态只经引擎操作变更; 每次变更后派生数据必须立即重算
// ==========================================

pub mod calculator;
pub mod duration;
pub mod squad_calc;
pub mod step_gate;

// 重导出核心引擎
pub use calculator::CalculatorEngine;
pub use duration::{DurationAggregator, DurationByComplexity};
pub use squad_calc::SquadCalculator;
pub use step_gate::StepGate;
