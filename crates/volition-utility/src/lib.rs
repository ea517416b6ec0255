//! Utility AI selection primitives.
//!
//! Score a set of actions against the blackboard and run the highest-scoring one.
//! Tie-breaking is stable by action order for determinism.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod evaluator;

pub use evaluator::{Action, BoxedAction, Evaluator};
