//! Finite-state machines over caller-defined blackboard state.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod machine;
pub mod state;

pub use machine::{SimpleMachine, StackMachine};
pub use state::{BoxedState, State};
