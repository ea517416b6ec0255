use volition_goap::{Action, BoxedAction, Planner};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct Camp {
    has_axe: bool,
    has_pickaxe: bool,
    wood: u32,
    gold: u32,
    stone: u32,
}

struct GetAxe;

impl Action<Camp> for GetAxe {
    fn cost(&self, _blackboard: &Camp) -> f32 {
        1.0
    }

    fn check_preconditions(&self, blackboard: &Camp) -> bool {
        !blackboard.has_axe
    }

    fn apply_effects(&self, blackboard: &mut Camp, _dry_run: bool) {
        blackboard.has_axe = true;
    }
}

struct GetPickaxe;

impl Action<Camp> for GetPickaxe {
    fn cost(&self, _blackboard: &Camp) -> f32 {
        3.0
    }

    fn check_preconditions(&self, blackboard: &Camp) -> bool {
        !blackboard.has_pickaxe
    }

    fn apply_effects(&self, blackboard: &mut Camp, _dry_run: bool) {
        blackboard.has_pickaxe = true;
    }
}

struct ChopTree;

impl Action<Camp> for ChopTree {
    fn cost(&self, _blackboard: &Camp) -> f32 {
        1.0
    }

    fn check_preconditions(&self, blackboard: &Camp) -> bool {
        blackboard.has_axe
    }

    fn apply_effects(&self, blackboard: &mut Camp, _dry_run: bool) {
        blackboard.wood += 1;
    }
}

struct MineGold;

impl Action<Camp> for MineGold {
    fn cost(&self, _blackboard: &Camp) -> f32 {
        2.0
    }

    fn check_preconditions(&self, blackboard: &Camp) -> bool {
        blackboard.has_pickaxe
    }

    fn apply_effects(&self, blackboard: &mut Camp, _dry_run: bool) {
        blackboard.gold += 1;
    }
}

struct MineStone;

impl Action<Camp> for MineStone {
    fn cost(&self, _blackboard: &Camp) -> f32 {
        2.0
    }

    fn check_preconditions(&self, blackboard: &Camp) -> bool {
        blackboard.has_pickaxe
    }

    fn apply_effects(&self, blackboard: &mut Camp, _dry_run: bool) {
        blackboard.stone += 1;
    }
}

fn main() {
    let actions: Vec<BoxedAction<Camp>> = vec![
        Box::new(GetAxe),
        Box::new(GetPickaxe),
        Box::new(ChopTree),
        Box::new(MineGold),
        Box::new(MineStone),
    ];

    let initial = Camp::default();
    let goal = Camp {
        has_axe: true,
        has_pickaxe: true,
        wood: 2,
        gold: 1,
        stone: 1,
    };

    let mut plan = Planner::new(actions).search(initial, goal);
    println!("planned {} steps", plan.len());

    let mut camp = initial;
    while !plan.is_empty() {
        plan.run_next(&mut camp);
        println!("  {camp:?}");
    }
}
