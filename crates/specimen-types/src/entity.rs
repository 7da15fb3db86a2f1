use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `items` table created by the schema bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item with a fresh UUID v7 identifier.
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            quantity,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new_assigns_distinct_ids() {
        let a = Item::new("potato", 1);
        let b = Item::new("potato", 1);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "potato");
        assert_eq!(a.quantity, 1);
    }
}
