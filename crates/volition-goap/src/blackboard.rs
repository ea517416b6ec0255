use std::hash::Hash;

/// World state the planner can search over.
///
/// Any value type satisfying the bounds is a blackboard; the planner imposes no structure
/// beyond them. `Eq` defines which states are interchangeable during search, and `Hash` must
/// agree with it: two equal states must hash identically. The planner cannot check that
/// agreement, so a derive (or a pair of manual impls covering the same fields) is on the
/// caller. States are treated as immutable values and cloned at every search step.
pub trait Blackboard: Clone + Eq + Hash + 'static {}

impl<B: Clone + Eq + Hash + 'static> Blackboard for B {}
