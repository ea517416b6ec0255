/// Result of evaluating a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
    Running,
}

impl Status {
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }
}

/// A behavior tree node.
///
/// Evaluation reads and mutates the blackboard but never the tree: nodes take `&self` so the
/// built tree stays shareable across evaluations. `Running` propagates out of composites
/// untouched, letting a caller re-evaluate the whole tree next frame.
pub trait Node<B>: 'static {
    fn evaluate(&self, blackboard: &mut B) -> Status;
}

/// Owned, type-erased node. Composites hold their children this way.
pub type BoxedNode<B> = Box<dyn Node<B>>;
