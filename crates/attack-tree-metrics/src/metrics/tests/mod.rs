//! Tests for metrics aggregation and resolution.


use crate::model::{AttackGraph, AttackNode, AttackPotential};

pub(crate) fn ap(time: u32, expertise: u32, knowledge: u32, access: u32, equipment: u32) -> AttackPotential {
    AttackPotential::new(time, expertise, knowledge, access, equipment)
}

pub(crate) fn leaf(id: &str, potential: AttackPotential) -> AttackNode {
    AttackNode::leaf(id, potential)
}

pub(crate) fn graph(nodes: Vec<AttackNode>) -> AttackGraph {
    AttackGraph::from_nodes(nodes).expect("test graph must build")
}

pub(crate) fn path(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}
