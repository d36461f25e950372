//! 图核心模块
//!
//! 符号图及其度数统计

mod stats;
mod symbol_graph;

pub use stats::DegreeStats;
pub use symbol_graph::SymbolGraph;
