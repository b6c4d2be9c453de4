//! Summarization over fixture registries: nesting, aggregation, and graph
//! validity failures.

use cookbook_core::{
    summarize,
    types::{EntryName, RawEntry},
    CookbookError, Registry,
};
use rstest::{fixture, rstest};

fn quantities(summary: &cookbook_core::Summary) -> Vec<(&str, u64)> {
    summary.ingredients.iter().map(|(name, qty)| (name.as_str(), *qty)).collect()
}

#[fixture]
fn brunch() -> Registry {
    Registry::from_entries([
        RawEntry::ingredient("Egg", 5),
        RawEntry::recipe("Omelette", [("Egg", 2)]),
        RawEntry::recipe("Brunch", [("Omelette", 1), ("Egg", 3)]),
    ])
    .expect("brunch fixture")
}

// ---------------------------------------------------------------------------
// 1. Successful expansion
// ---------------------------------------------------------------------------

#[rstest]
fn nested_recipe_merges_repeated_ingredient(brunch: Registry) {
    let summary = summarize(&brunch, "Brunch").expect("summary");
    assert_eq!(summary.name, EntryName::from("Brunch"));
    // One omelette (2 eggs) plus 3 loose eggs, 5 per egg.
    assert_eq!(summary.cook_time, 2 * 5 + 3 * 5);
    assert_eq!(quantities(&summary), [("Egg", 5)]);
}

#[rstest]
fn flat_recipe_matches_direct_sum() {
    let registry = Registry::from_entries([
        RawEntry::ingredient("Beef", 5),
        RawEntry::ingredient("Egg", 3),
        RawEntry::ingredient("Bun", 0),
        RawEntry::recipe("Burger", [("Beef", 2), ("Egg", 1), ("Bun", 2)]),
    ])
    .expect("fixture");
    let summary = summarize(&registry, "Burger").expect("summary");
    assert_eq!(summary.cook_time, 2 * 5 + 3);
    assert_eq!(quantities(&summary), [("Beef", 2), ("Egg", 1), ("Bun", 2)]);
}

#[rstest]
fn multipliers_compound_through_levels() {
    let registry = Registry::from_entries([
        RawEntry::ingredient("Flour", 1),
        RawEntry::ingredient("Water", 2),
        RawEntry::recipe("Dough", [("Flour", 3), ("Water", 1)]),
        RawEntry::recipe("Loaf", [("Dough", 2)]),
        RawEntry::recipe("Bakery Order", [("Loaf", 4)]),
    ])
    .expect("fixture");
    let summary = summarize(&registry, "Bakery Order").expect("summary");
    // 4 loaves * 2 dough = 8 dough; 24 flour, 8 water.
    assert_eq!(quantities(&summary), [("Flour", 24), ("Water", 8)]);
    assert_eq!(summary.cook_time, 24 + 8 * 2);
}

#[rstest]
fn diamond_is_summed_not_rejected() {
    let registry = Registry::from_entries([
        RawEntry::ingredient("Stock", 10),
        RawEntry::recipe("Sauce", [("Stock", 1)]),
        RawEntry::recipe("Left", [("Sauce", 1)]),
        RawEntry::recipe("Right", [("Sauce", 2)]),
        RawEntry::recipe("Plate", [("Left", 1), ("Right", 1)]),
    ])
    .expect("fixture");
    let summary = summarize(&registry, "Plate").expect("summary");
    assert_eq!(quantities(&summary), [("Stock", 3)]);
    assert_eq!(summary.cook_time, 30);
}

#[rstest]
fn registration_order_does_not_matter() {
    let forward = Registry::from_entries([
        RawEntry::ingredient("Egg", 5),
        RawEntry::recipe("Omelette", [("Egg", 2)]),
        RawEntry::recipe("Brunch", [("Omelette", 1), ("Egg", 3)]),
    ])
    .expect("forward");
    let backward = Registry::from_entries([
        RawEntry::recipe("Brunch", [("Omelette", 1), ("Egg", 3)]),
        RawEntry::recipe("Omelette", [("Egg", 2)]),
        RawEntry::ingredient("Egg", 5),
    ])
    .expect("backward");
    assert_eq!(
        summarize(&forward, "Brunch").expect("forward summary"),
        summarize(&backward, "Brunch").expect("backward summary"),
    );
}

#[rstest]
fn empty_recipe_has_zero_totals() {
    let registry = Registry::from_entries([RawEntry::recipe("Air", Vec::<(&str, i64)>::new())])
        .expect("fixture");
    let summary = summarize(&registry, "Air").expect("summary");
    assert_eq!(summary.cook_time, 0);
    assert!(summary.ingredients.is_empty());
}

// ---------------------------------------------------------------------------
// 2. Lookup failures
// ---------------------------------------------------------------------------

#[rstest]
fn missing_root_is_not_found(brunch: Registry) {
    let err = summarize(&brunch, "Dinner").unwrap_err();
    assert!(matches!(err, CookbookError::NotFound { .. }), "got: {err}");
}

#[rstest]
fn root_lookup_is_exact(brunch: Registry) {
    let err = summarize(&brunch, "brunch").unwrap_err();
    assert!(matches!(err, CookbookError::NotFound { .. }), "got: {err}");
}

#[rstest]
fn ingredient_root_is_not_a_recipe(brunch: Registry) {
    let err = summarize(&brunch, "Egg").unwrap_err();
    assert!(matches!(err, CookbookError::NotARecipe { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 3. Graph validity
// ---------------------------------------------------------------------------

#[rstest]
fn dangling_reference_fails_whole_summary() {
    let registry = Registry::from_entries([
        RawEntry::ingredient("Egg", 5),
        RawEntry::recipe("Shakshuka", [("Egg", 3), ("Tomato", 4)]),
    ])
    .expect("fixture");
    let err = summarize(&registry, "Shakshuka").unwrap_err();
    assert!(matches!(err, CookbookError::DanglingReference { .. }), "got: {err}");
    assert!(err.to_string().contains("Tomato"));
}

#[rstest]
fn mutual_recursion_is_cyclic() {
    let registry = Registry::from_entries([
        RawEntry::recipe("A", [("B", 1)]),
        RawEntry::recipe("B", [("A", 1)]),
    ])
    .expect("fixture");
    let err = summarize(&registry, "A").unwrap_err();
    assert!(matches!(err, CookbookError::CyclicReference { .. }), "got: {err}");
    assert_eq!(err.to_string(), "cyclic reference: A -> B -> A");
}

#[rstest]
fn cycle_below_root_is_detected() {
    let registry = Registry::from_entries([
        RawEntry::ingredient("Salt", 1),
        RawEntry::recipe("Top", [("Salt", 1), ("Loop One", 1)]),
        RawEntry::recipe("Loop One", [("Loop Two", 2)]),
        RawEntry::recipe("Loop Two", [("Loop One", 2)]),
    ])
    .expect("fixture");
    let err = summarize(&registry, "Top").unwrap_err();
    assert!(matches!(err, CookbookError::CyclicReference { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 4. Scale
// ---------------------------------------------------------------------------

/// A unique letters-only name, so it survives normalization unchanged.
fn level_name(prefix: &str, i: usize) -> String {
    let mut n = i;
    let mut name = String::from(prefix);
    loop {
        name.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
        if n == 0 {
            return name;
        }
    }
}

fn normalized(raw: &str) -> String {
    cookbook_core::normalize(raw).expect("letters-only name")
}

#[test]
fn long_chain_resolves_on_small_stack() {
    const LEVELS: usize = 100_000;

    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            let mut entries = vec![
                RawEntry::ingredient("Seed", 2),
                RawEntry::recipe(level_name("Level", 0), [("Seed", 1)]),
            ];
            for i in 1..LEVELS {
                entries.push(RawEntry::recipe(level_name("Level", i), [(level_name("Level", i - 1), 1)]));
            }
            let registry = Registry::from_entries(entries).expect("fixture");
            let top = normalized(&level_name("Level", LEVELS - 1));
            let summary = summarize(&registry, &top).expect("summary");
            (summary.cook_time, quantities(&summary).iter().map(|(n, q)| (n.to_string(), *q)).collect::<Vec<_>>())
        })
        .expect("spawn");

    let (cook_time, counts) = handle.join().expect("no stack overflow");
    assert_eq!(cook_time, 2);
    assert_eq!(counts, [("Seed".to_string(), 1)]);
}

/// `Node_i` requires `Left_i` and `Right_i`; both require `Node_{i-1}`.
/// Every level doubles the number of paths to the bottom.
fn diamond_stack(levels: usize) -> (Registry, String) {
    let mut entries = vec![
        RawEntry::ingredient("Seed", 1),
        RawEntry::recipe(level_name("Node", 0), [("Seed", 1)]),
    ];
    for i in 1..=levels {
        let below = level_name("Node", i - 1);
        entries.push(RawEntry::recipe(level_name("Left", i), [(below.clone(), 1)]));
        entries.push(RawEntry::recipe(level_name("Right", i), [(below, 1)]));
        entries.push(RawEntry::recipe(
            level_name("Node", i),
            [(level_name("Left", i), 1), (level_name("Right", i), 1)],
        ));
    }
    let registry = Registry::from_entries(entries).expect("fixture");
    (registry, normalized(&level_name("Node", levels)))
}

#[test]
fn stacked_diamonds_expand_each_recipe_once() {
    let (registry, top) = diamond_stack(63);
    let summary = summarize(&registry, &top).expect("summary");
    assert_eq!(quantities(&summary), [("Seed", 1u64 << 63)]);
    assert_eq!(summary.cook_time, 1u64 << 63);
}

#[test]
fn stacked_diamonds_past_u64_overflow() {
    let (registry, top) = diamond_stack(64);
    let err = summarize(&registry, &top).unwrap_err();
    assert!(matches!(err, CookbookError::Overflow { .. }), "got: {err}");
}
