//! Recipe summarization: depth-first expansion of a recipe graph.
//!
//! Every required item is looked up in the registry. Ingredients contribute
//! `cook_time * quantity` to their recipe's total and `quantity` to their
//! aggregated count; nested recipes contribute their own totals scaled by the
//! item's quantity.
//!
//! Expansion runs on an explicit stack of frames, one per recipe currently
//! being expanded, so depth is bounded by memory rather than the thread
//! stack. Re-entering a recipe already on the stack is a cycle. A recipe that
//! finished expanding keeps its per-unit totals for the rest of the call, so
//! reaching it again from another branch costs one scaled merge.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::error::CookbookError;
use crate::registry::Registry;
use crate::types::{EntryKind, EntryName, RequiredItem, Summary};

/// Summarize the recipe registered under `root`.
///
/// `root` is matched against registry keys exactly. Either the full summary is
/// returned or nothing is.
pub fn summarize(registry: &Registry, root: &str) -> Result<Summary, CookbookError> {
    let entry = registry.get(root).ok_or_else(|| CookbookError::NotFound {
        name: root.to_owned(),
    })?;
    let EntryKind::Recipe { required_items } = &entry.kind else {
        return Err(CookbookError::NotARecipe {
            name: entry.name.clone(),
        });
    };

    let totals = expand(registry, &entry.name, required_items)?;
    Ok(Summary {
        name: entry.name.clone(),
        cook_time: totals.cook_time,
        ingredients: totals.ingredients,
    })
}

/// Cook time and ingredient counts for one unit of a recipe.
#[derive(Debug, Default)]
struct Totals {
    cook_time: u64,
    /// First-discovery order.
    ingredients: IndexMap<EntryName, u64>,
}

impl Totals {
    fn add_ingredient(&mut self, name: &EntryName, cook_time: u64, quantity: u64) -> Option<()> {
        self.cook_time = self.cook_time.checked_add(cook_time.checked_mul(quantity)?)?;
        self.add_count(name, quantity)
    }

    /// Merge `quantity` units of `child` into `self`, keeping `self`'s order
    /// and appending names first seen in `child`.
    fn absorb(&mut self, child: &Totals, quantity: u64) -> Option<()> {
        self.cook_time = self.cook_time.checked_add(child.cook_time.checked_mul(quantity)?)?;
        for (name, count) in &child.ingredients {
            self.add_count(name, count.checked_mul(quantity)?)?;
        }
        Some(())
    }

    fn add_count(&mut self, name: &EntryName, count: u64) -> Option<()> {
        match self.ingredients.get_mut(name) {
            Some(total) => *total = total.checked_add(count)?,
            None => {
                self.ingredients.insert(name.clone(), count);
            }
        }
        Some(())
    }
}

/// A recipe being expanded: its items, the next one to visit, and the
/// totals gathered so far.
struct Frame<'a> {
    name: &'a EntryName,
    items: &'a [RequiredItem],
    next: usize,
    totals: Totals,
}

impl<'a> Frame<'a> {
    fn new(name: &'a EntryName, items: &'a [RequiredItem]) -> Self {
        Self {
            name,
            items,
            next: 0,
            totals: Totals::default(),
        }
    }

    fn overflow(&self) -> CookbookError {
        CookbookError::Overflow {
            name: self.name.clone(),
        }
    }
}

fn expand<'a>(
    registry: &'a Registry,
    root: &'a EntryName,
    items: &'a [RequiredItem],
) -> Result<Totals, CookbookError> {
    let mut stack = vec![Frame::new(root, items)];
    let mut on_path: HashSet<&'a EntryName> = HashSet::from([root]);
    let mut expanded: HashMap<&'a EntryName, Totals> = HashMap::new();

    while let Some(frame) = stack.last_mut() {
        let items = frame.items;
        let Some(item) = items.get(frame.next) else {
            // Frame finished: fold it into its parent, or return it if root.
            let Some(done) = stack.pop() else { break };
            on_path.remove(done.name);
            let Some(parent) = stack.last_mut() else {
                return Ok(done.totals);
            };
            let quantity = parent.items[parent.next].quantity;
            parent
                .totals
                .absorb(&done.totals, quantity)
                .ok_or_else(|| parent.overflow())?;
            parent.next += 1;
            expanded.insert(done.name, done.totals);
            continue;
        };

        let entry = registry
            .get(item.name.as_str())
            .ok_or_else(|| CookbookError::DanglingReference {
                recipe: frame.name.clone(),
                missing: item.name.clone(),
            })?;

        match &entry.kind {
            EntryKind::Ingredient { cook_time } => {
                frame
                    .totals
                    .add_ingredient(&entry.name, *cook_time, item.quantity)
                    .ok_or_else(|| frame.overflow())?;
                frame.next += 1;
            }
            EntryKind::Recipe { required_items } => {
                if let Some(done) = expanded.get(&entry.name) {
                    frame
                        .totals
                        .absorb(done, item.quantity)
                        .ok_or_else(|| frame.overflow())?;
                    frame.next += 1;
                } else if on_path.contains(&entry.name) {
                    return Err(cycle(&stack, &entry.name));
                } else {
                    on_path.insert(&entry.name);
                    stack.push(Frame::new(&entry.name, required_items));
                }
            }
        }
    }

    // The root frame always returns from inside the loop.
    Ok(Totals::default())
}

fn cycle(stack: &[Frame<'_>], repeated: &EntryName) -> CookbookError {
    let start = stack
        .iter()
        .position(|frame| frame.name == repeated)
        .unwrap_or(0);
    let mut path: Vec<EntryName> = stack[start..].iter().map(|f| f.name.clone()).collect();
    path.push(repeated.clone());
    CookbookError::CyclicReference { path }
}
