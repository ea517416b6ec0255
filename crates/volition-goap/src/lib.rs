//! Goal-oriented action planning over caller-defined blackboard state.
//!
//! The planner runs a lowest-cost-first search from an initial blackboard value to a goal
//! value, using a library of actions the caller supplies. It returns a [`Plan`]: an ordered
//! sequence of those actions that, executed front to back, transforms the initial state into
//! the goal state.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod blackboard;
pub mod plan;
pub mod planner;

pub use action::{Action, BoxedAction};
pub use blackboard::Blackboard;
pub use plan::Plan;
pub use planner::{Planner, PlannerConfig};
