use volition::bt::{Condition, Node, Sequence, Status, Task};
use volition::goap::{Action, BoxedAction, Planner};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct Pantry {
    ingredients: u32,
    meals: u32,
}

struct BuyIngredient;

impl Action<Pantry> for BuyIngredient {
    fn cost(&self, _blackboard: &Pantry) -> f32 {
        1.0
    }

    fn check_preconditions(&self, _blackboard: &Pantry) -> bool {
        true
    }

    fn apply_effects(&self, blackboard: &mut Pantry, _dry_run: bool) {
        blackboard.ingredients += 1;
    }
}

struct Cook;

impl Action<Pantry> for Cook {
    fn cost(&self, _blackboard: &Pantry) -> f32 {
        1.0
    }

    fn check_preconditions(&self, blackboard: &Pantry) -> bool {
        blackboard.ingredients >= 2
    }

    fn apply_effects(&self, blackboard: &mut Pantry, _dry_run: bool) {
        blackboard.ingredients -= 2;
        blackboard.meals += 1;
    }
}

fn kitchen_actions() -> Vec<BoxedAction<Pantry>> {
    vec![Box::new(BuyIngredient), Box::new(Cook)]
}

// A tree leaf that plans and executes a whole meal in one evaluation.
fn cook_a_meal() -> Task<impl Fn(&mut Pantry) -> Status> {
    Task::new(|pantry: &mut Pantry| {
        let goal = Pantry {
            ingredients: 0,
            meals: pantry.meals + 1,
        };

        let mut plan = Planner::new(kitchen_actions()).search(*pantry, goal);
        if plan.is_empty() {
            return Status::Failure;
        }

        while !plan.is_empty() {
            plan.run_next(pantry);
        }

        if *pantry == goal {
            Status::Success
        } else {
            Status::Failure
        }
    })
}

#[test]
fn tree_leaf_plans_and_executes_a_goal() {
    let tree = Sequence::new(vec![
        Box::new(Condition::new(|pantry: &Pantry| pantry.meals == 0)),
        Box::new(cook_a_meal()),
    ]);

    let mut pantry = Pantry::default();
    assert_eq!(tree.evaluate(&mut pantry), Status::Success);
    assert_eq!(
        pantry,
        Pantry {
            ingredients: 0,
            meals: 1
        }
    );

    // Second pass: the condition gates the leaf off and nothing changes.
    assert_eq!(tree.evaluate(&mut pantry), Status::Failure);
    assert_eq!(
        pantry,
        Pantry {
            ingredients: 0,
            meals: 1
        }
    );
}
