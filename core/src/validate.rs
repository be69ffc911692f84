//! Caller-side input validation.
//!
//! The front end runs these checks before handing input to the store, so
//! that a rejected form never touches the database.
//!
//! # Examples
//!
//! ```
//! use inventory_core::*;
//!
//! assert!(validate_new_item(&NewItem::new("Bolt", 0, 0)).is_ok());
//! assert_eq!(
//!     validate_new_item(&NewItem::new("Bolt", -1, 0)),
//!     Err(ValidationError::NegativeQuantity(-1)),
//! );
//! ```

use thiserror::Error;

use crate::NewItem;

/// Input rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Item name is empty.
    #[error("item name must not be empty")]
    EmptyName,
    /// Quantity below zero.
    #[error("quantity must not be negative (got {0})")]
    NegativeQuantity(i64),
    /// Price below zero.
    #[error("price must not be negative (got {0})")]
    NegativePrice(i64),
}

/// Validates a new item: non-empty name, non-negative quantity and price.
///
/// Only the emptiness of the name is checked; whitespace-only names are
/// accepted as-is.
pub fn validate_new_item(item: &NewItem) -> Result<(), ValidationError> {
    if item.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    validate_amounts(item.quantity, item.price)
}

/// Validates the numeric fields of a new item: quantity, then price.
pub fn validate_amounts(quantity: i64, price: i64) -> Result<(), ValidationError> {
    validate_amount(quantity)?;
    validate_price(price)
}

/// Validates a stock quantity, e.g. the target of a quantity update.
pub fn validate_amount(quantity: i64) -> Result<(), ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity(quantity));
    }
    Ok(())
}

/// Validates a unit price.
pub fn validate_price(price: i64) -> Result<(), ValidationError> {
    if price < 0 {
        return Err(ValidationError::NegativePrice(price));
    }
    Ok(())
}
