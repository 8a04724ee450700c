use serde::{Deserialize, Serialize};

use crate::items::ItemMap;

/// A node of the story: the text shown on arrival, where the player can go
/// next, and what entering it costs, requires, and grants.
///
/// Points are assembled with the `with_*` builder methods while a story is
/// being built and are only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogPoint {
    name: String,
    answer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    jumps: Vec<String>,
    #[serde(default, skip_serializing_if = "ItemMap::is_empty")]
    payment: ItemMap,
    #[serde(default, skip_serializing_if = "ItemMap::is_empty")]
    keys: ItemMap,
    #[serde(default, skip_serializing_if = "ItemMap::is_empty")]
    award: ItemMap,
}

impl DialogPoint {
    /// Create a point with the given name and answer text.
    pub fn new(name: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            answer: answer.into(),
            ..Self::default()
        }
    }

    /// Add an outgoing jump to the named point.
    pub fn with_jump(mut self, target: impl Into<String>) -> Self {
        self.jumps.push(target.into());
        self
    }

    /// Add an item to the entry payment.
    pub fn with_payment(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.payment.add(item, quantity);
        self
    }

    /// Add an item to the entry keys.
    pub fn with_key(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.keys.add(item, quantity);
        self
    }

    /// Add an item to the entry award.
    pub fn with_award(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.award.add(item, quantity);
        self
    }

    /// Unique name, used as the graph key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text displayed when the player arrives.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Outgoing jump targets, in authoring order.
    pub fn jumps(&self) -> &[String] {
        &self.jumps
    }

    /// Items deducted when this point is entered.
    pub fn entry_payment(&self) -> &ItemMap {
        &self.payment
    }

    /// Items that must be held (not consumed) to enter this point.
    pub fn entry_keys(&self) -> &ItemMap {
        &self.keys
    }

    /// Items granted when this point is entered.
    pub fn entry_award(&self) -> &ItemMap {
        &self.award
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_builder() {
        let point = DialogPoint::new("First point", "Your are in first point")
            .with_jump("Second point")
            .with_jump("Third point")
            .with_payment("Gold", 10)
            .with_key("Flag", 1);

        assert_eq!(point.name(), "First point");
        assert_eq!(point.answer(), "Your are in first point");
        assert_eq!(point.jumps(), ["Second point", "Third point"]);
        assert_eq!(point.entry_payment().get("Gold"), 10);
        assert_eq!(point.entry_keys().get("Flag"), 1);
        assert!(point.entry_award().is_empty());
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let point: DialogPoint =
            serde_json::from_str(r#"{"name": "End", "answer": "The end."}"#).unwrap();
        assert_eq!(point.name(), "End");
        assert!(point.jumps().is_empty());
        assert!(point.entry_keys().is_empty());
    }

    #[test]
    fn serialization_skips_empty_fields() {
        let point = DialogPoint::new("Last point", "Return?").with_award("Flag", 1);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["award"]["Flag"], 1);
        assert!(json.get("payment").is_none());
        assert!(json.get("jumps").is_none());
    }
}
