//! Behavior trees over caller-defined blackboard state.
//!
//! Trees are immutable once built: every evaluation walks the same structure against the
//! blackboard the caller passes in, so one tree can drive any number of agents.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod node;
pub mod nodes;

pub use node::{BoxedNode, Node, Status};
pub use nodes::{Condition, Inverter, Selector, Sequence, Task};
