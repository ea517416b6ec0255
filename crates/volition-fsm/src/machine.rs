use crate::state::BoxedState;

/// A machine that is in at most one state at a time.
pub struct SimpleMachine<B> {
    current: Option<BoxedState<B>>,
    paused: bool,
}

impl<B: 'static> Default for SimpleMachine<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: 'static> SimpleMachine<B> {
    pub fn new() -> Self {
        Self {
            current: None,
            paused: false,
        }
    }

    /// Transition to `state`, or clear the machine with `None`.
    ///
    /// The old state exits before the new one enters. A state entering a paused machine is
    /// paused immediately after entering.
    pub fn set_state(&mut self, state: Option<BoxedState<B>>, blackboard: &mut B) {
        if let Some(old) = self.current.as_mut() {
            old.exit(blackboard);
        }

        self.current = state;

        if let Some(new) = self.current.as_mut() {
            new.enter(blackboard);
            if self.paused {
                new.pause(blackboard);
            }
        }
    }

    pub fn pause(&mut self, blackboard: &mut B) {
        self.paused = true;
        if let Some(state) = self.current.as_mut() {
            state.pause(blackboard);
        }
    }

    pub fn resume(&mut self, blackboard: &mut B) {
        self.paused = false;
        if let Some(state) = self.current.as_mut() {
            state.resume(blackboard);
        }
    }

    /// Forward to the current state, unless the machine is paused.
    pub fn update(&mut self, blackboard: &mut B) {
        if self.paused {
            return;
        }

        if let Some(state) = self.current.as_mut() {
            state.update(blackboard);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// A machine holding a stack of states; only the top one updates.
///
/// Pushing pauses the state underneath, popping resumes it. Useful for interruptions that
/// should hand control straight back: a fight during travel, a menu over gameplay.
pub struct StackMachine<B> {
    stack: Vec<BoxedState<B>>,
}

impl<B: 'static> Default for StackMachine<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: 'static> StackMachine<B> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push_state(&mut self, mut state: BoxedState<B>, blackboard: &mut B) {
        if let Some(top) = self.stack.last_mut() {
            top.pause(blackboard);
        }

        state.enter(blackboard);
        self.stack.push(state);
    }

    /// Exit and discard the top state, resuming the one underneath. Does nothing on an empty
    /// stack.
    pub fn pop_state(&mut self, blackboard: &mut B) {
        if let Some(mut top) = self.stack.pop() {
            top.exit(blackboard);
        }

        if let Some(top) = self.stack.last_mut() {
            top.resume(blackboard);
        }
    }

    /// Forward to the top state, if any.
    pub fn update(&mut self, blackboard: &mut B) {
        if let Some(top) = self.stack.last_mut() {
            top.update(blackboard);
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
