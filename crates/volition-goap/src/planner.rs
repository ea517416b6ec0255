use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::action::BoxedAction;
use crate::blackboard::Blackboard;
use crate::plan::Plan;

#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    /// Maximum number of frontier nodes processed before the search gives up.
    /// Zero means unbounded.
    pub max_iterations: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { max_iterations: 0 }
    }
}

/// Lowest-cost-first planner over a library of [`Action`](crate::Action)s.
pub struct Planner<B: Blackboard> {
    actions: Vec<BoxedAction<B>>,
    config: PlannerConfig,
}

// Search tree node. Nodes live in a flat arena and refer to their parent by
// index, together with the index of the action that produced them.
struct SearchNode<B> {
    state: B,
    cost: f32,
    parent: Option<(usize, usize)>,
}

struct OpenEntry {
    cost: f32,
    tie: u64,
    node: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap. Equal
        // costs fall back to the push counter, so the frontier is FIFO among
        // ties and the search is deterministic for a fixed action order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl<B: Blackboard> Planner<B> {
    pub fn new(actions: Vec<BoxedAction<B>>) -> Self {
        Self {
            actions,
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn actions(&self) -> &[BoxedAction<B>] {
        &self.actions
    }

    /// Search for a lowest-cost action sequence transforming `initial` into `goal`.
    ///
    /// The goal test is strict structural equality: a state satisfies the goal only when it
    /// `==` the goal value, extra progress included. Consumes the planner; the action library
    /// moves into the returned [`Plan`].
    ///
    /// Returns an empty plan when `initial` already equals `goal`, when no action sequence
    /// reaches `goal`, or when `max_iterations` is exhausted first. With an unbounded budget
    /// the search terminates only if the reachable state space is finite, so callers whose
    /// actions can grow state without limit should configure a budget.
    pub fn search(self, initial: B, goal: B) -> Plan<B> {
        let Planner { actions, config } = self;

        let mut arena = vec![SearchNode {
            state: initial,
            cost: 0.0,
            parent: None,
        }];

        let mut open = BinaryHeap::new();
        let mut tie: u64 = 0;
        open.push(OpenEntry {
            cost: 0.0,
            tie,
            node: 0,
        });
        tie += 1;

        let mut visited: HashSet<B> = HashSet::new();
        let mut iterations: usize = 0;

        while let Some(entry) = open.pop() {
            if config.max_iterations != 0 && iterations == config.max_iterations {
                return Plan::empty();
            }
            iterations += 1;

            if arena[entry.node].state == goal {
                return Plan::from_steps(actions, reconstruct(&arena, entry.node));
            }

            // Lazy deletion: a state reached more cheaply earlier has already
            // been expanded, and this stale entry can be dropped.
            if visited.contains(&arena[entry.node].state) {
                continue;
            }

            let current_cost = arena[entry.node].cost;
            let current = arena[entry.node].state.clone();
            visited.insert(current.clone());

            for (action_idx, action) in actions.iter().enumerate() {
                if !action.check_preconditions(&current) {
                    continue;
                }

                let mut next = current.clone();
                action.apply_effects(&mut next, true);
                if visited.contains(&next) {
                    continue;
                }

                let next_cost = current_cost + action.cost(&current);
                arena.push(SearchNode {
                    state: next,
                    cost: next_cost,
                    parent: Some((entry.node, action_idx)),
                });
                open.push(OpenEntry {
                    cost: next_cost,
                    tie,
                    node: arena.len() - 1,
                });
                tie += 1;
            }
        }

        Plan::empty()
    }
}

// Reconstruct the step list by walking parent links back to the root.
fn reconstruct<B>(arena: &[SearchNode<B>], node: usize) -> Vec<usize> {
    let mut steps = Vec::new();
    let mut current = node;
    while let Some((parent, action_idx)) = arena[current].parent {
        steps.push(action_idx);
        current = parent;
    }
    steps.reverse();
    steps
}
