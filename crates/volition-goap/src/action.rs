use crate::blackboard::Blackboard;

/// One atomic thing an agent can do, parameterized by blackboard type.
///
/// Actions are the edges of the search graph: `check_preconditions` gates whether the edge
/// exists at a given state, `apply_effects` produces the successor state, and `cost` weighs
/// the edge. Costs are assumed non-negative; a negative cost voids the lowest-cost-first
/// guarantee without being detected.
pub trait Action<B: Blackboard>: 'static {
    /// Cost of taking this action from `blackboard`. May depend on the state.
    fn cost(&self, blackboard: &B) -> f32;

    /// Whether this action applies at `blackboard`. Must not mutate anything observable.
    fn check_preconditions(&self, blackboard: &B) -> bool;

    /// Apply this action's effects to `blackboard` in place.
    ///
    /// The state transition must be identical for both values of `dry_run`. The flag only
    /// tells the action whether it is being speculated over during search (`true`, possibly
    /// many times, on throwaway clones) or committed during plan execution (`false`, exactly
    /// once per plan step, on the caller's live blackboard). Gate observational side effects
    /// such as telemetry on `!dry_run`; never gate the transition itself.
    fn apply_effects(&self, blackboard: &mut B, dry_run: bool);
}

/// Owned, type-erased action. Plans and planners hold their action libraries this way.
pub type BoxedAction<B> = Box<dyn Action<B>>;
