//! Pure list operations.
//!
//! Every mutation takes the collection explicitly, edits it in place, and
//! reports whether anything changed so the caller knows when to persist.
//! Invalid input (blank text, unknown id) degrades to a no-op rather than
//! an error — nothing in this module can fail.

use crate::model::{Filter, Item};

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Append a new item to the end of the list.
/// Returns the assigned id, or None if the trimmed text is empty.
pub fn add(items: &mut Vec<Item>, text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let item = Item::new(text.to_string());
    let id = item.id.clone();
    items.push(item);
    Some(id)
}

/// Flip the completion flag on the item matching `id`.
pub fn toggle(items: &mut [Item], id: &str) -> bool {
    match items.iter_mut().find(|i| i.id == id) {
        Some(item) => {
            item.completed = !item.completed;
            true
        }
        None => false,
    }
}

/// Remove the item matching `id`, preserving the order of the rest.
pub fn remove(items: &mut Vec<Item>, id: &str) -> bool {
    let before = items.len();
    items.retain(|i| i.id != id);
    items.len() != before
}

/// Replace the text of the item matching `id`.
/// No-op if the trimmed new text is empty or equal to the current text.
pub fn edit(items: &mut [Item], id: &str, new_text: &str) -> bool {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return false;
    }
    match items.iter_mut().find(|i| i.id == id) {
        Some(item) if item.text != new_text => {
            item.text = new_text.to_string();
            true
        }
        _ => false,
    }
}

/// Remove every completed item. Idempotent.
pub fn clear_completed(items: &mut Vec<Item>) -> bool {
    let before = items.len();
    items.retain(|i| !i.completed);
    items.len() != before
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Count of items not yet completed
pub fn remaining_count(items: &[Item]) -> usize {
    items.iter().filter(|i| !i.completed).count()
}

/// The items visible under `filter`, in list order. Never mutates or reorders.
pub fn visible(items: &[Item], filter: Filter) -> Vec<&Item> {
    items.iter().filter(|i| filter.matches(i)).collect()
}

/// Find an item by exact id
pub fn find<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|i| i.id == id)
}

/// Resolve a (possibly partial) id to a full one.
/// Exact match wins; otherwise a prefix match must be unique.
pub fn resolve_id(items: &[Item], partial: &str) -> Option<String> {
    if partial.is_empty() {
        return None;
    }
    if let Some(item) = find(items, partial) {
        return Some(item.id.clone());
    }
    let mut matches = items.iter().filter(|i| i.id.starts_with(partial));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None; // ambiguous
    }
    Some(first.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn texts(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.text.clone()).collect()
    }

    #[test]
    fn add_trims_and_rejects_blank() {
        let mut items = Vec::new();
        assert_eq!(add(&mut items, ""), None);
        assert_eq!(add(&mut items, "   "), None);
        assert!(items.is_empty());

        let id = add(&mut items, "  Buy milk  ").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Buy milk");
        assert_eq!(items[0].id, id);
        assert!(!items[0].completed);
    }

    #[test]
    fn ids_stay_unique_across_op_sequences() {
        let mut items = Vec::new();
        let a = add(&mut items, "a").unwrap();
        let b = add(&mut items, "b").unwrap();
        add(&mut items, "c").unwrap();
        toggle(&mut items, &a);
        remove(&mut items, &b);
        edit(&mut items, &a, "a2");
        add(&mut items, "d").unwrap();
        clear_completed(&mut items);
        add(&mut items, "e").unwrap();

        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn toggle_adjusts_remaining_by_one() {
        let mut items = Vec::new();
        let id = add(&mut items, "Buy milk").unwrap();
        assert_eq!(remaining_count(&items), 1);
        assert!(toggle(&mut items, &id));
        assert_eq!(remaining_count(&items), 0);
        assert!(toggle(&mut items, &id));
        assert_eq!(remaining_count(&items), 1);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut items = Vec::new();
        add(&mut items, "a").unwrap();
        let snapshot = items.clone();
        assert!(!toggle(&mut items, "nope"));
        assert_eq!(items, snapshot);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut items = Vec::new();
        add(&mut items, "a").unwrap();
        let b = add(&mut items, "b").unwrap();
        add(&mut items, "c").unwrap();
        assert!(remove(&mut items, &b));
        assert!(!remove(&mut items, &b));
        assert_eq!(texts(&visible(&items, Filter::All)), vec!["a", "c"]);
    }

    #[test]
    fn edit_rejects_blank_and_unchanged_text() {
        let mut items = Vec::new();
        let id = add(&mut items, "a").unwrap();
        assert!(!edit(&mut items, &id, ""));
        assert!(!edit(&mut items, &id, "   "));
        assert!(!edit(&mut items, &id, "a"));
        assert!(!edit(&mut items, &id, "  a  "));
        assert!(!edit(&mut items, "nope", "b"));
        assert_eq!(items[0].text, "a");

        assert!(edit(&mut items, &id, "  b  "));
        assert_eq!(items[0].text, "b");
    }

    #[test]
    fn clear_completed_is_idempotent() {
        let mut items = Vec::new();
        let a = add(&mut items, "a").unwrap();
        add(&mut items, "b").unwrap();
        toggle(&mut items, &a);

        assert!(clear_completed(&mut items));
        let once = items.clone();
        assert!(!clear_completed(&mut items));
        assert_eq!(items, once);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "b");
    }

    #[test]
    fn visible_respects_each_filter() {
        let mut items = Vec::new();
        let a = add(&mut items, "a").unwrap();
        add(&mut items, "b").unwrap();
        toggle(&mut items, &a);

        assert!(visible(&items, Filter::Active).iter().all(|i| !i.completed));
        assert!(
            visible(&items, Filter::Completed)
                .iter()
                .all(|i| i.completed)
        );
        assert_eq!(visible(&items, Filter::All).len(), items.len());
    }

    #[test]
    fn end_to_end_add_toggle_filter() {
        let mut items = Vec::new();
        let a = add(&mut items, "A").unwrap();
        add(&mut items, "B").unwrap();
        toggle(&mut items, &a);

        assert_eq!(texts(&visible(&items, Filter::Active)), vec!["B"]);
        assert_eq!(texts(&visible(&items, Filter::Completed)), vec!["A"]);
        assert_eq!(remaining_count(&items), 1);
    }

    #[test]
    fn resolve_id_needs_a_unique_prefix() {
        let mut items = vec![
            Item {
                id: "abc-1".into(),
                text: "x".into(),
                completed: false,
            },
            Item {
                id: "abd-2".into(),
                text: "y".into(),
                completed: false,
            },
        ];
        assert_eq!(resolve_id(&items, "abc"), Some("abc-1".into()));
        assert_eq!(resolve_id(&items, "ab"), None);
        assert_eq!(resolve_id(&items, ""), None);
        assert_eq!(resolve_id(&items, "zzz"), None);

        // Exact match wins even when it is also a prefix of another id
        items.push(Item {
            id: "abc".into(),
            text: "z".into(),
            completed: false,
        });
        assert_eq!(resolve_id(&items, "abc"), Some("abc".into()));
    }
}
