use serde::{Deserialize, Serialize};

/// `strftime`-style layout of [`InventoryItem::created_at`], in local time.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single tracked product.
///
/// `id` and `created_at` are assigned by the store when the row is created
/// and never change afterwards. Only `quantity` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: i64,
    /// `YYYY-MM-DD HH:MM:SS`. The column is nullable, so rows written by
    /// other tools may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Fields supplied by the caller when registering a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub price: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i64, price: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Result of an operation that targets an existing item by id.
///
/// `NotFound` is an expected outcome, not an error: callers branch on it.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    NotFound,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Success.is_not_found());
        assert!(Outcome::NotFound.is_not_found());
    }

    #[test]
    fn test_item_json_omits_missing_timestamp() {
        let item = InventoryItem {
            id: 1,
            name: "Widget".to_string(),
            quantity: 10,
            price: 500,
            created_at: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Widget");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Outcome::NotFound).unwrap(),
            "\"not_found\""
        );
    }
}
