//! To-do items and the ordered list persisted to LocalStorage
//!
//! Serialized form is a plain JSON array of `{"id": number, "text": string}`.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Item identifier: creation time in milliseconds, bumped past the largest
/// existing id when the clock would collide
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display text, never empty after trimming
    pub text: String,
}

/// Insertion-ordered list of items
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Largest id in the list (ids are not guaranteed sorted for hand-edited storage)
    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }

    /// Id for an item created at `now_ms`
    ///
    /// Uses the timestamp when it is ahead of every stored id, otherwise the
    /// next id after the current maximum. If the maximum is `u64::MAX` the
    /// smallest unused id is taken instead.
    pub fn next_id(&self, now_ms: u64) -> ItemId {
        match self.max_id() {
            Some(ItemId(max)) if now_ms <= max => match max.checked_add(1) {
                Some(next) => ItemId(next),
                None => self.lowest_free_id(),
            },
            _ => ItemId(now_ms),
        }
    }

    fn lowest_free_id(&self) -> ItemId {
        let used: HashSet<u64> = self.items.iter().map(|item| item.id.0).collect();
        // At most `len` ids are taken, so one of 0..=len is free
        (0..=self.items.len() as u64)
            .find(|id| !used.contains(id))
            .map(ItemId)
            .unwrap_or_default()
    }

    /// Append a new item with trimmed `text`
    /// Returns None (and leaves the list untouched) if the trimmed text is empty
    pub fn append(&mut self, text: &str, now_ms: u64) -> Option<&Item> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let item = Item {
            id: self.next_id(now_ms),
            text: text.to_string(),
        };
        self.items.push(item);
        self.items.last()
    }

    /// Remove every item with the given id, keeping the order of the rest
    /// Returns how many items were removed
    pub fn remove(&mut self, id: ItemId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, text: &str) -> Item {
        Item {
            id: ItemId(id),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_append_trims_and_uses_timestamp() {
        let mut list = ItemList::new();
        let added = list.append("  buy milk \n", 1_000).cloned();
        assert_eq!(added, Some(item(1_000, "buy milk")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_append_rejects_blank_text() {
        let mut list = ItemList::new();
        assert!(list.append("", 1_000).is_none());
        assert!(list.append(" \t ", 1_000).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_next_id_bumps_past_collision() {
        let mut list = ItemList::new();
        list.append("first", 5_000);
        list.append("second", 5_000);
        list.append("third", 4_000);

        let ids: Vec<u64> = list.iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![5_000, 5_001, 5_002]);
    }

    #[test]
    fn test_next_id_after_max_id_stays_unique() {
        let mut list = ItemList::from(vec![item(u64::MAX, "last possible"), item(0, "zero")]);
        let id = list.append("new", 1_000).map(|i| i.id).unwrap();
        assert_ne!(id, ItemId(u64::MAX));
        assert_eq!(id, ItemId(1));
        assert_eq!(list.len(), 3);

        // Deleting the new item leaves the old ones alone
        assert_eq!(list.remove(id), 1);
        assert!(list.contains(ItemId(u64::MAX)));
        assert!(list.contains(ItemId(0)));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = ItemList::from(vec![item(1, "a"), item(2, "b"), item(3, "c")]);
        assert_eq!(list.remove(ItemId(2)), 1);
        assert_eq!(list.as_slice(), &[item(1, "a"), item(3, "c")]);

        assert_eq!(list.remove(ItemId(42)), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_json_shape_is_plain_array() {
        let list = ItemList::from(vec![item(1_700_000_000_000, "walk dog")]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"id":1700000000000,"text":"walk dog"}]"#);

        let parsed: ItemList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn test_item_id_from_str() {
        assert_eq!("123".parse::<ItemId>(), Ok(ItemId(123)));
        assert_eq!(" 42 ".parse::<ItemId>(), Ok(ItemId(42)));
        assert!("abc".parse::<ItemId>().is_err());
        assert!("-1".parse::<ItemId>().is_err());
    }
}
