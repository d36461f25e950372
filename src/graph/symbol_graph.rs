//! 符号图
//!
//! 以字符串标签标识顶点的无向图（允许平行边与自环）

use super::stats::DegreeStats;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// 符号图
///
/// 顶点集合在创建时确定，之后只能逐条添加边。
/// 同一对顶点重复 `add_edge` 会产生平行边；自环 `v-v` 在 `v` 的邻接表中出现两次。
#[derive(Debug, Clone, Default)]
pub struct SymbolGraph {
    /// 邻接表（键集合即顶点集合）
    adjacency: HashMap<String, Vec<String>>,
    /// 边的数目
    edge_count: usize,
}

impl SymbolGraph {
    /// 创建一个包含给定顶点、但不含边的图
    ///
    /// 重复的标签只保留一个顶点。
    pub fn new<I, S>(vertices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        let mut supplied = 0usize;
        for label in vertices {
            supplied += 1;
            adjacency.entry(label.into()).or_insert_with(Vec::new);
        }

        debug!(supplied, distinct = adjacency.len(), "symbol graph created");

        Self {
            adjacency,
            edge_count: 0,
        }
    }

    /// 获取顶点数
    pub fn vertices_number(&self) -> usize {
        self.adjacency.len()
    }

    /// 获取边数
    pub fn edge_number(&self) -> usize {
        self.edge_count
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, v: &str) -> bool {
        self.adjacency.contains_key(v)
    }

    /// 遍历所有顶点（顺序不确定）
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// 向图中添加一条边 v-w
    ///
    /// 两个端点都必须已存在；检查在任何修改之前完成，失败时图保持不变。
    pub fn add_edge(&mut self, v: &str, w: &str) -> Result<()> {
        for label in [v, w] {
            if !self.adjacency.contains_key(label) {
                warn!(vertex = label, "add_edge rejected: unknown vertex");
                return Err(Error::VertexNotFound(label.to_string()));
            }
        }

        // 自环同样登记两次
        if let Some(list) = self.adjacency.get_mut(v) {
            list.push(w.to_string());
        }
        if let Some(list) = self.adjacency.get_mut(w) {
            list.push(v.to_string());
        }
        self.edge_count += 1;

        trace!(v, w, edges = self.edge_count, "edge added");
        Ok(())
    }

    /// 和 v 相邻的所有顶点（按插入顺序）
    pub fn adj(&self, v: &str) -> Result<&[String]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::VertexNotFound(v.to_string()))
    }

    /// 计算 v 的度数
    pub fn degree(&self, v: &str) -> Result<usize> {
        self.adj(v).map(<[String]>::len)
    }

    /// 计算所有顶点的最大度数，空图返回 0
    pub fn max_degree(&self) -> usize {
        self.adjacency.values().map(Vec::len).max().unwrap_or(0)
    }

    /// 计算所有顶点的平均度数
    ///
    /// 使用浮点除法（1 条边、3 个顶点得到 0.666…，而不是截断的 0）。
    /// 空图返回 0.0。
    pub fn avg_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        (2 * self.edge_count) as f64 / self.adjacency.len() as f64
    }

    /// 计算自环个数
    pub fn number_of_self_loops(&self) -> usize {
        let count: usize = self
            .adjacency
            .iter()
            .map(|(v, list)| list.iter().filter(|w| *w == v).count())
            .sum();
        // 每个自环被记录两次
        count / 2
    }

    /// 获取统计快照
    pub fn stats(&self) -> DegreeStats {
        DegreeStats {
            vertices: self.vertices_number(),
            edges: self.edge_number(),
            max_degree: self.max_degree(),
            avg_degree: self.avg_degree(),
            self_loops: self.number_of_self_loops(),
        }
    }
}

impl fmt::Display for SymbolGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.vertices_number(),
            self.edge_count
        )?;
        for (v, list) in &self.adjacency {
            write!(f, "{}:", v)?;
            for w in list {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
