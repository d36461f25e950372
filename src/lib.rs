//! SymbolGraph - 符号无向图
//!
//! 以字符串标签标识顶点的无向多重图，支持：
//! - 构造时确定顶点集合，之后逐条添加边
//! - 邻接表查询
//! - 度数、最大度数、平均度数、自环数等统计

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{DegreeStats, SymbolGraph};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
