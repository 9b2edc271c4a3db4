//! Snapshot fixtures.
//!
//! ```text
//! G1 unlock vehicle [attack-root, OR]
//! ├── relay [AND]                      relay_capture (4,3,3,1,4)
//! │                                    relay_forward (1,3,3,1,4)
//! ├── obd (1,6,7,4,4)                  requires cfg-obd-port
//! ├── ota_chain [AND]                  mitm (4,6,3,1,4)
//! │                                    fw_sign_bypass (19,8,11,99,9)
//! └── bypass_immobilizer [circumvent-root, AND]
//!                                      side_channel (1,3,0,1,0)
//!                                      relay_forward (shared)
//! G2 disable braking [attack-root, AND] can_inject (4,6,3,4,4)
//!                                       gateway_bypass (10,6,7,4,7)
//! G3 orphan [attack-root]              -> missing
//! asset-ecu (asset record, ignored)
//! ```

#![allow(dead_code)]

use attack_tree_metrics::{AttackGraph, AttackNode, AttackPotential, LogicGate};

pub const VEHICLE_SNAPSHOT: &str = r#"[
  {"id": "G1", "kind": "attack", "tags": ["attack-root"], "logic_gate": "OR",
   "children": ["relay", "obd", "ota_chain", "bypass_immobilizer"],
   "label": "Unlock vehicle without key"},
  {"id": "relay", "logic_gate": "AND", "children": ["relay_capture", "relay_forward"]},
  {"id": "obd", "required_configurations": ["cfg-obd-port"],
   "attack_potential": {"time": 1, "expertise": 6, "knowledge": 7, "access": 4, "equipment": 4}},
  {"id": "ota_chain", "logic_gate": "AND", "children": ["mitm", "fw_sign_bypass"]},
  {"id": "bypass_immobilizer", "tags": ["circumvent-root"], "logic_gate": "AND",
   "children": ["side_channel", "relay_forward"]},
  {"id": "relay_capture",
   "attack_potential": {"time": 4, "expertise": 3, "knowledge": 3, "access": 1, "equipment": 4}},
  {"id": "relay_forward",
   "attack_potential": {"time": 1, "expertise": 3, "knowledge": 3, "access": 1, "equipment": 4}},
  {"id": "mitm",
   "attack_potential": {"time": 4, "expertise": 6, "knowledge": 3, "access": 1, "equipment": 4}},
  {"id": "fw_sign_bypass",
   "attack_potential": {"time": 19, "expertise": 8, "knowledge": 11, "access": 99, "equipment": 9}},
  {"id": "side_channel",
   "attack_potential": {"time": 1, "expertise": 3, "knowledge": 0, "access": 1, "equipment": 0}},
  {"id": "G2", "tags": ["attack-root"], "logic_gate": "AND",
   "children": ["can_inject", "gateway_bypass"]},
  {"id": "can_inject",
   "attack_potential": {"time": 4, "expertise": 6, "knowledge": 3, "access": 4, "equipment": 4}},
  {"id": "gateway_bypass",
   "attack_potential": {"time": 10, "expertise": 6, "knowledge": 7, "access": 4, "equipment": 7}},
  {"id": "G3", "tags": ["attack-root"], "children": ["missing"]},
  {"id": "asset-ecu", "kind": "asset", "label": "Body control ECU"}
]"#;

pub fn vehicle_graph() -> AttackGraph {
    AttackGraph::from_json(VEHICLE_SNAPSHOT).expect("vehicle snapshot must decode")
}

/// OR root over `width` AND gates, each joining `fan_in` leaves.
///
/// Leaf `g{i}_l{j}` has rating `(i + j) % 20` in the time dimension.
pub fn generate_wide_tree(width: usize, fan_in: usize) -> AttackGraph {
    let mut nodes = Vec::with_capacity(1 + width * (fan_in + 1));
    nodes.push(AttackNode::attack_root(
        "root",
        Some(LogicGate::Or),
        (0..width).map(|i| format!("g{}", i)),
    ));
    for i in 0..width {
        nodes.push(AttackNode::gate(
            format!("g{}", i),
            LogicGate::And,
            (0..fan_in).map(|j| format!("g{}_l{}", i, j)),
        ));
        for j in 0..fan_in {
            nodes.push(AttackNode::leaf(
                format!("g{}_l{}", i, j),
                AttackPotential::new(((i + j) % 20) as u32, 1, 1, 1, 1),
            ));
        }
    }
    AttackGraph::from_nodes(nodes).expect("generated tree must build")
}

/// AND root over `depth` OR gates of `branching` leaves: branching^depth paths.
pub fn generate_product_tree(depth: usize, branching: usize) -> AttackGraph {
    let mut nodes = Vec::with_capacity(1 + depth * (branching + 1));
    nodes.push(AttackNode::attack_root(
        "root",
        Some(LogicGate::And),
        (0..depth).map(|d| format!("or{}", d)),
    ));
    for d in 0..depth {
        nodes.push(AttackNode::gate(
            format!("or{}", d),
            LogicGate::Or,
            (0..branching).map(|b| format!("or{}_l{}", d, b)),
        ));
        for b in 0..branching {
            nodes.push(AttackNode::leaf(
                format!("or{}_l{}", d, b),
                AttackPotential::new(b as u32, d as u32 % 5, 0, 0, 0),
            ));
        }
    }
    AttackGraph::from_nodes(nodes).expect("generated tree must build")
}
