use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A mapping from item name to quantity.
///
/// Used for entry payments, keys, and awards of a dialog point, and as the
/// backing store of an [`Inventory`](crate::Inventory). Ordered by item name
/// so listings and serialized output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemMap(BTreeMap<String, u32>);

impl ItemMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`, accumulating onto any existing entry.
    pub fn with(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.add(item, quantity);
        self
    }

    /// Add `quantity` of `item`, accumulating onto any existing entry.
    pub fn add(&mut self, item: impl Into<String>, quantity: u32) {
        let entry = self.0.entry(item.into()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Quantity stored for `item` (zero when absent).
    pub fn get(&self, item: &str) -> u32 {
        self.0.get(item).copied().unwrap_or(0)
    }

    /// Iterate `(item, quantity)` pairs in item-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut BTreeMap<String, u32> {
        &mut self.0
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for ItemMap {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut map = ItemMap::new();
        for (item, quantity) in iter {
            map.add(item, quantity);
        }
        map
    }
}

impl fmt::Display for ItemMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("nothing");
        }
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k} x{v}")).collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates() {
        let map = ItemMap::new().with("Gold", 10).with("Gold", 5);
        assert_eq!(map.get("Gold"), 15);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn missing_item_is_zero() {
        assert_eq!(ItemMap::new().get("Flag"), 0);
    }

    #[test]
    fn display_lists_items_in_name_order() {
        let map: ItemMap = [("Gold", 3), ("Axe", 1)].into_iter().collect();
        assert_eq!(map.to_string(), "Axe x1, Gold x3");
        assert_eq!(ItemMap::new().to_string(), "nothing");
    }

    #[test]
    fn serializes_as_plain_object() {
        let map = ItemMap::new().with("Gold", 10);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Gold":10}"#);
        let back: ItemMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
