/// One scored option the evaluator can pick.
pub trait Action<B>: 'static {
    /// How attractive this action is at `blackboard`. Higher wins. `NaN` is treated as
    /// `f32::NEG_INFINITY`.
    fn score(&self, blackboard: &B) -> f32;

    /// Apply this action to `blackboard`.
    fn apply(&self, blackboard: &mut B);
}

/// Owned, type-erased action.
pub type BoxedAction<B> = Box<dyn Action<B>>;

/// Scores every action and applies the single best one.
pub struct Evaluator<B> {
    actions: Vec<BoxedAction<B>>,
}

impl<B: 'static> Evaluator<B> {
    pub fn new(actions: Vec<BoxedAction<B>>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[BoxedAction<B>] {
        &self.actions
    }

    /// Apply the highest-scoring action to `blackboard`.
    ///
    /// With a non-empty action list, exactly one action is applied per call; equal scores keep
    /// the earliest action. An empty evaluator does nothing.
    pub fn run(&self, blackboard: &mut B) {
        let mut best_idx: Option<usize> = None;
        let mut best_score = f32::NEG_INFINITY;

        for (idx, action) in self.actions.iter().enumerate() {
            let score = action.score(blackboard);
            let score = if score.is_nan() {
                f32::NEG_INFINITY
            } else {
                score
            };

            if best_idx.is_none() || score > best_score {
                best_idx = Some(idx);
                best_score = score;
            }
        }

        if let Some(idx) = best_idx {
            self.actions[idx].apply(blackboard);
        }
    }
}
