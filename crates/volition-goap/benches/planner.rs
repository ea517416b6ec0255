use criterion::{black_box, criterion_group, criterion_main, Criterion};
use volition_goap::{Action, BoxedAction, Planner};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct Settlement {
    wood: u32,
    storage: bool,
    food: u32,
    gold: u32,
    stone: u32,
}

struct Step {
    precondition: fn(&Settlement) -> bool,
    effect: fn(&mut Settlement),
}

impl Action<Settlement> for Step {
    fn cost(&self, _blackboard: &Settlement) -> f32 {
        1.0
    }

    fn check_preconditions(&self, blackboard: &Settlement) -> bool {
        (self.precondition)(blackboard)
    }

    fn apply_effects(&self, blackboard: &mut Settlement, _dry_run: bool) {
        (self.effect)(blackboard)
    }
}

fn settlement_actions() -> Vec<BoxedAction<Settlement>> {
    vec![
        Box::new(Step {
            precondition: |_| true,
            effect: |s| s.wood += 1,
        }),
        Box::new(Step {
            precondition: |s| s.wood >= 10 && !s.storage,
            effect: |s| {
                s.storage = true;
                s.wood -= 10;
            },
        }),
        Box::new(Step {
            precondition: |s| s.storage,
            effect: |s| s.food += 1,
        }),
        Box::new(Step {
            precondition: |s| s.storage,
            effect: |s| s.gold += 1,
        }),
        Box::new(Step {
            precondition: |s| s.storage,
            effect: |s| s.stone += 1,
        }),
    ]
}

fn bench_planner(c: &mut Criterion) {
    let initial = Settlement::default();
    let goal = Settlement {
        storage: true,
        food: 3,
        gold: 2,
        stone: 1,
        ..Settlement::default()
    };

    c.bench_function("volition-goap/planner.search(settlement)", |b| {
        b.iter(|| {
            let planner = Planner::new(settlement_actions());
            let plan = planner.search(black_box(initial), black_box(goal));
            black_box(plan.len());
        })
    });
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
