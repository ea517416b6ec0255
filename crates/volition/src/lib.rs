//! Umbrella crate that re-exports the `volition-*` building blocks.
//!
//! Behavior trees, finite-state machines, goal-oriented action planning, and utility
//! selection, all over blackboard state the caller defines. The primitives are independent;
//! composing them (a tree leaf that runs a plan, a machine state that ticks a tree) is plain
//! caller code.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use volition_bt as bt;

#[cfg(feature = "fsm")]
#[cfg_attr(docsrs, doc(cfg(feature = "fsm")))]
pub use volition_fsm as fsm;

#[cfg(feature = "goap")]
#[cfg_attr(docsrs, doc(cfg(feature = "goap")))]
pub use volition_goap as goap;

#[cfg(feature = "utility")]
#[cfg_attr(docsrs, doc(cfg(feature = "utility")))]
pub use volition_utility as utility;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use volition_tools as tools;
