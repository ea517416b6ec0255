use crate::node::{BoxedNode, Node, Status};

/// Evaluates children in order, stopping at the first one that does not succeed.
///
/// An empty sequence succeeds vacuously.
pub struct Sequence<B> {
    children: Vec<BoxedNode<B>>,
}

impl<B> Sequence<B> {
    pub fn new(children: Vec<BoxedNode<B>>) -> Self {
        Self { children }
    }
}

impl<B: 'static> Node<B> for Sequence<B> {
    fn evaluate(&self, blackboard: &mut B) -> Status {
        for child in &self.children {
            let status = child.evaluate(blackboard);
            if !status.is_success() {
                return status;
            }
        }

        Status::Success
    }
}

/// Evaluates children in order, stopping at the first one that does not fail.
///
/// An empty selector fails vacuously.
pub struct Selector<B> {
    children: Vec<BoxedNode<B>>,
}

impl<B> Selector<B> {
    pub fn new(children: Vec<BoxedNode<B>>) -> Self {
        Self { children }
    }
}

impl<B: 'static> Node<B> for Selector<B> {
    fn evaluate(&self, blackboard: &mut B) -> Status {
        for child in &self.children {
            let status = child.evaluate(blackboard);
            if !status.is_failure() {
                return status;
            }
        }

        Status::Failure
    }
}

/// Swaps its child's `Success` and `Failure`; `Running` passes through.
pub struct Inverter<B> {
    child: BoxedNode<B>,
}

impl<B> Inverter<B> {
    pub fn new(child: BoxedNode<B>) -> Self {
        Self { child }
    }
}

impl<B: 'static> Node<B> for Inverter<B> {
    fn evaluate(&self, blackboard: &mut B) -> Status {
        match self.child.evaluate(blackboard) {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            status => status,
        }
    }
}

/// Leaf that maps a read-only predicate to `Success`/`Failure`.
pub struct Condition<F> {
    check: F,
}

impl<F> Condition<F> {
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<B, F> Node<B> for Condition<F>
where
    F: Fn(&B) -> bool + 'static,
{
    fn evaluate(&self, blackboard: &mut B) -> Status {
        if (self.check)(blackboard) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Leaf that runs caller code against the blackboard.
pub struct Task<F> {
    run: F,
}

impl<F> Task<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<B, F> Node<B> for Task<F>
where
    F: Fn(&mut B) -> Status + 'static,
{
    fn evaluate(&self, blackboard: &mut B) -> Status {
        (self.run)(blackboard)
    }
}
