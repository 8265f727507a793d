//! Free `converge` / `merge` entry points.

use tenet::{converge, merge, GreenfieldState, PrincipleStore};
use test_fixtures::scenarios::convergence_scenario;

#[test]
fn converge_then_merge_round() {
    let scenario = convergence_scenario("honesty_three_categories");
    let (store, validation) = converge(
        &scenario.build_signals(),
        &PrincipleStore::new(),
        GreenfieldState::Enforce,
    )
    .unwrap();

    assert!(validation.valid);
    assert_eq!(store.principles.len(), 1);
    // "truth" in the representative text selects the truth anchor.
    assert_eq!(store.axioms.values().next().unwrap().canonical.anchor, "真");

    assert_eq!(merge(&store, &store).unwrap(), store);
}

#[test]
fn converge_does_not_touch_the_input_store() {
    let signals = convergence_scenario("split_dimensions").build_signals();
    let before = PrincipleStore::new();
    let (after, validation) = converge(&signals, &before, GreenfieldState::Bootstrap).unwrap();

    assert!(before.is_empty());
    assert_eq!(after.principles.len(), 3);
    assert_eq!(validation.would_reject.as_deref(), Some("no-axioms-generated"));
}
