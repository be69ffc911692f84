//! Core item types and caller-side validation for the inventory tool.
//!
//! This crate defines the data shared between the store and whatever
//! front end drives it:
//!
//! - [`InventoryItem`]: one stored row (id, name, quantity, price,
//!   creation timestamp).
//! - [`NewItem`]: the fields a caller supplies when creating an item.
//! - [`Outcome`]: the result of an update or delete that targets an id,
//!   which may legitimately not exist.
//!
//! Validation ([`validate_new_item`], [`validate_amount`], [`validate_price`]) is run by the
//! caller before an item reaches the store.
//!
//! # Example
//!
//! ```
//! use inventory_core::*;
//!
//! let item = NewItem::new("Widget", 10, 500);
//! assert!(validate_new_item(&item).is_ok());
//!
//! let blank = NewItem::new("", 1, 1);
//! assert_eq!(validate_new_item(&blank), Err(ValidationError::EmptyName));
//! ```

mod types;
mod validate;

pub use types::*;
pub use validate::{
    ValidationError, validate_amount, validate_amounts, validate_new_item, validate_price,
};
