use std::fmt;

use tracing::warn;

use crate::items::ItemMap;

/// Records an over-withdrawal: more of an item was dropped than was held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    /// Item name.
    pub item: String,
    /// Quantity that was asked to be dropped.
    pub requested: u32,
    /// Quantity that was actually held (and removed).
    pub held: u32,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tried to drop {} {} but only {} held",
            self.requested, self.item, self.held
        )
    }
}

/// The player's item store.
///
/// Quantities never go negative: dropping more than is held clamps the
/// entry to zero and reports a [`Shortfall`]. Items at zero are removed, so
/// adding and then dropping the same quantity restores the exact prior
/// contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: ItemMap,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory holding the given items.
    pub fn from_items(items: ItemMap) -> Self {
        let mut inventory = Self::new();
        inventory.add_all(&items);
        inventory
    }

    /// Add `quantity` copies of `item`.
    pub fn add_copies(&mut self, item: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        self.items.add(item, quantity);
    }

    /// Remove `quantity` copies of `item`, clamping at zero.
    ///
    /// Returns the shortfall when fewer than `quantity` were held.
    pub fn drop_copies(&mut self, item: &str, quantity: u32) -> Option<Shortfall> {
        if quantity == 0 {
            return None;
        }
        let entries = self.items.entries_mut();
        let held = entries.get(item).copied().unwrap_or(0);

        if held > quantity {
            entries.insert(item.to_string(), held - quantity);
            return None;
        }

        entries.remove(item);
        if held == quantity {
            return None;
        }

        let shortfall = Shortfall {
            item: item.to_string(),
            requested: quantity,
            held,
        };
        warn!(item, requested = quantity, held, "inventory underflow clamped to zero");
        Some(shortfall)
    }

    /// Add every item of `items`.
    pub fn add_all(&mut self, items: &ItemMap) {
        for (item, quantity) in items.iter() {
            self.add_copies(item, quantity);
        }
    }

    /// Drop every item of `items`, returning any shortfalls.
    pub fn drop_all(&mut self, items: &ItemMap) -> Vec<Shortfall> {
        items
            .iter()
            .filter_map(|(item, quantity)| self.drop_copies(item, quantity))
            .collect()
    }

    /// True if the inventory holds at least every quantity in `required`.
    ///
    /// Entries with a zero requirement are ignored, and an empty requirement
    /// is always satisfied.
    pub fn holds(&self, required: &ItemMap) -> bool {
        required
            .iter()
            .filter(|(_, quantity)| *quantity > 0)
            .all(|(item, quantity)| self.items.get(item) >= quantity)
    }

    /// Quantity held of `item`.
    pub fn quantity(&self, item: &str) -> u32 {
        self.items.get(item)
    }

    /// Iterate held items in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter()
    }

    /// The held items as a map.
    pub fn items(&self) -> &ItemMap {
        &self.items
    }

    /// Number of distinct items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold(quantity: u32) -> Inventory {
        let mut inv = Inventory::new();
        inv.add_copies("Gold", quantity);
        inv
    }

    #[test]
    fn add_creates_and_accumulates() {
        let mut inv = gold(50);
        inv.add_copies("Gold", 10);
        inv.add_copies("Flag", 1);
        assert_eq!(inv.quantity("Gold"), 60);
        assert_eq!(inv.quantity("Flag"), 1);
    }

    #[test]
    fn drop_within_holdings() {
        let mut inv = gold(50);
        assert_eq!(inv.drop_copies("Gold", 10), None);
        assert_eq!(inv.quantity("Gold"), 40);
    }

    #[test]
    fn drop_everything_removes_entry() {
        let mut inv = gold(10);
        assert_eq!(inv.drop_copies("Gold", 10), None);
        assert!(inv.is_empty());
    }

    #[test]
    fn over_withdrawal_clamps_and_reports() {
        let mut inv = gold(5);
        let shortfall = inv.drop_copies("Gold", 8).unwrap();
        assert_eq!(shortfall.requested, 8);
        assert_eq!(shortfall.held, 5);
        assert_eq!(inv.quantity("Gold"), 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn dropping_unknown_item_reports_shortfall() {
        let mut inv = Inventory::new();
        let shortfall = inv.drop_copies("Flag", 1).unwrap();
        assert_eq!(shortfall.held, 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn zero_quantities_are_ignored() {
        let mut inv = Inventory::new();
        inv.add_copies("Gold", 0);
        assert!(inv.is_empty());
        assert_eq!(inv.drop_copies("Gold", 0), None);
    }

    #[test]
    fn holds_checks_minimums() {
        let inv = gold(50);
        assert!(inv.holds(&ItemMap::new()));
        assert!(inv.holds(&ItemMap::new().with("Gold", 50)));
        assert!(!inv.holds(&ItemMap::new().with("Gold", 51)));
        assert!(!inv.holds(&ItemMap::new().with("Gold", 10).with("Flag", 1)));
        assert!(inv.holds(&ItemMap::new().with("Flag", 0)));
    }

    #[test]
    fn add_then_drop_all_restores_contents() {
        let mut inv = gold(50);
        let before = inv.clone();
        let award = ItemMap::new().with("Gold", 10).with("Flag", 1);
        inv.add_all(&award);
        assert!(inv.drop_all(&award).is_empty());
        assert_eq!(inv, before);
    }
}
