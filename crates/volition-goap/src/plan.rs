use crate::action::BoxedAction;
use crate::blackboard::Blackboard;

/// An ordered sequence of actions produced by [`Planner::search`](crate::Planner::search).
///
/// A plan owns the action library it was planned from, so executing it never depends on the
/// planner or any caller-held action list still being alive. Steps are consumed front to back
/// through [`run_next`](Plan::run_next); there is no random access, no peeking at upcoming
/// actions, and no rewinding.
///
/// An empty plan means one of three things the caller cannot distinguish here: the goal was
/// already satisfied by the initial state, the goal is unreachable, or the search budget ran
/// out. Callers that need to tell "nothing to do" from "no way to do it" must compare their
/// initial state against the goal themselves before planning.
pub struct Plan<B: Blackboard> {
    actions: Vec<BoxedAction<B>>,
    steps: Vec<usize>,
    index: usize,
}

impl<B: Blackboard> Plan<B> {
    pub(crate) fn from_steps(actions: Vec<BoxedAction<B>>, steps: Vec<usize>) -> Self {
        Self {
            actions,
            steps,
            index: 0,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            actions: Vec::new(),
            steps: Vec::new(),
            index: 0,
        }
    }

    /// Number of steps remaining. Shrinks as the plan is run.
    pub fn len(&self) -> usize {
        self.steps.len() - self.index
    }

    /// True when no steps remain.
    pub fn is_empty(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Execute the next step by applying its action's effects to `blackboard`, committed
    /// (`dry_run = false`). Does nothing once the plan is exhausted.
    pub fn run_next(&mut self, blackboard: &mut B) {
        if let Some(&action_idx) = self.steps.get(self.index) {
            self.actions[action_idx].apply_effects(blackboard, false);
            self.index += 1;
        }
    }
}
