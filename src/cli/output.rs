use serde::Serialize;

use crate::model::Item;
use crate::ops::list_ops;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    pub items: Vec<ItemJson>,
    pub remaining: usize,
}

pub fn item_to_json(item: &Item) -> ItemJson {
    ItemJson {
        id: item.id.clone(),
        text: item.text.clone(),
        completed: item.completed,
    }
}

// ---------------------------------------------------------------------------
// Printing
// ---------------------------------------------------------------------------

/// Print a filtered view of the list, plus the remaining count.
/// `all_items` is the full collection (remaining count ignores the filter).
pub fn print_list(visible: &[&Item], all_items: &[Item], json: bool) {
    if json {
        let out = ListJson {
            items: visible.iter().map(|i| item_to_json(i)).collect(),
            remaining: list_ops::remaining_count(all_items),
        };
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return;
    }

    if visible.is_empty() {
        println!("(empty)");
    }
    for item in visible {
        let mark = if item.completed { 'x' } else { ' ' };
        // Short id prefix is enough to address an item on the CLI
        let short = item.id.get(..8).unwrap_or(&item.id);
        println!("[{}] {}  {}", mark, short, item.text);
    }
    let remaining = list_ops::remaining_count(all_items);
    let noun = if remaining == 1 { "item" } else { "items" };
    println!("{} {} left", remaining, noun);
}
