/// One state an agent can be in, with lifecycle hooks around [`update`](State::update).
///
/// `enter`/`exit` bracket a state's time as the machine's current state; `pause`/`resume`
/// bracket the stretches where the state is current but shadowed (machine paused, or another
/// state pushed on top). Only `update` is required; the other hooks default to no-ops.
pub trait State<B>: 'static {
    fn enter(&mut self, _blackboard: &mut B) {}

    fn exit(&mut self, _blackboard: &mut B) {}

    fn pause(&mut self, _blackboard: &mut B) {}

    fn resume(&mut self, _blackboard: &mut B) {}

    fn update(&mut self, blackboard: &mut B);
}

/// Owned, type-erased state. Machines hold their states this way.
pub type BoxedState<B> = Box<dyn State<B>>;
