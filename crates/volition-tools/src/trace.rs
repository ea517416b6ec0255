#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

/// A small, allocation-friendly trace event.
///
/// This is intentionally "dumb data" so it can be recorded while agents decide and act, and
/// later rendered by tooling. Specific subsystems can define their own richer event types on
/// top of this; `a` and `b` carry whatever two payloads the emitter finds useful (a step
/// ordinal, a resource amount, a score quantized by the caller).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tag: Cow<'static, str>,
    pub a: u64,
    pub b: u64,
}

impl TraceEvent {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            a: 0,
            b: 0,
        }
    }

    pub fn with_a(mut self, a: u64) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: u64) -> Self {
        self.b = b;
        self
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// A clonable handle to a shared [`TraceLog`].
///
/// Decision-making values frequently outlive or get moved away from the code that wants to
/// observe them (a planner moves its actions into the plan it returns). Cloning a
/// `SharedTraceSink` into both places lets every clone emit into, and inspect, the same log.
/// Single-threaded, like the rest of this crate.
#[derive(Debug, Clone, Default)]
pub struct SharedTraceSink {
    log: Rc<RefCell<TraceLog>>,
}

impl SharedTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// Snapshot of the recorded events, in emission order.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.log.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().events.clear();
    }
}

impl TraceSink for SharedTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.log.borrow_mut().push(event);
    }
}
