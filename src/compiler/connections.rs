use crate::workflow::WorkflowEdge;
use ahash::AHashMap;

/// Per-compile lookup from a target node id to the ordered list of source
/// node ids feeding it. Rebuilt from the edge snapshot on every compile;
/// source order preserves edge traversal order, it is never sorted.
#[derive(Debug, Default)]
pub struct ConnectionIndex {
    incoming: AHashMap<String, Vec<String>>,
}

impl ConnectionIndex {
    pub fn build(edges: &[WorkflowEdge]) -> Self {
        let mut incoming: AHashMap<String, Vec<String>> = AHashMap::new();
        for edge in edges {
            incoming
                .entry(edge.target.clone())
                .or_default()
                .push(edge.source.clone());
        }
        Self { incoming }
    }

    /// Ordered upstream source ids of `target`, empty when nothing feeds it.
    pub fn sources_of(&self, target: &str) -> &[String] {
        self.incoming.get(target).map(Vec::as_slice).unwrap_or(&[])
    }
}
