//! 度数统计快照
//!
//! 将符号图的各项统计汇总为可导出的快照

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 可导出的统计快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeStats {
    /// 顶点数
    pub vertices: usize,
    /// 边数
    pub edges: usize,
    /// 最大度数
    pub max_degree: usize,
    /// 平均度数
    pub avg_degree: f64,
    /// 自环数
    pub self_loops: usize,
}

impl DegreeStats {
    /// 导出为 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::SerializationError(e.to_string()))
    }
}

impl fmt::Display for DegreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices, {} edges, max degree {}, avg degree {:.2}, {} self-loops",
            self.vertices, self.edges, self.max_degree, self.avg_degree, self.self_loops
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SymbolGraph;

    #[test]
    fn test_stats_snapshot() {
        let mut graph = SymbolGraph::new(["A", "B", "C"]);
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "C").unwrap();
        graph.add_edge("A", "A").unwrap();

        let stats = graph.stats();
        assert_eq!(stats.vertices, 3);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.avg_degree, 2.0);
        assert_eq!(stats.self_loops, 1);
        assert_eq!(
            stats.to_string(),
            "3 vertices, 3 edges, max degree 3, avg degree 2.00, 1 self-loops"
        );
    }

    #[test]
    fn test_stats_json() {
        let mut graph = SymbolGraph::new(["x", "y"]);
        graph.add_edge("x", "y").unwrap();

        let json = graph.stats().to_json().unwrap();
        assert!(json.contains("\"edges\":1"));

        let restored: DegreeStats = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, graph.stats());
    }

    #[test]
    fn test_stats_empty_graph() {
        let stats = SymbolGraph::default().stats();
        assert_eq!(stats.vertices, 0);
        assert_eq!(stats.max_degree, 0);
        assert_eq!(stats.avg_degree, 0.0);
    }
}
