//! Tooling primitives for the volition decision-making crates.
//!
//! This crate is intentionally lightweight and engine-agnostic. Higher-level integrations
//! (inspectors, debug overlays, log shipping) should live in dedicated adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, SharedTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};
