//! # db-catalog
//!
//! Database schema metadata as a typed composite tree.
//!
//! Every node in the tree is a [`CatalogObject`]: a name, a type tag, at most
//! one parent, and children grouped by type. The generic node owns all
//! structural invariants:
//!
//! - **Symmetric links**: a parent's children entry and the child's parent
//!   reference always agree, by instance identity
//! - **Sibling uniqueness**: `(name, type)` is unique within one parent
//! - **Single parent**: re-attaching detaches from the previous parent first
//! - **No empty groups**: a type group disappears with its last child
//!
//! The typed views [`Schema`], [`Table`], and [`Column`] narrow the generic
//! API to legal attachments and domain vocabulary.
//!
//! ## Example
//!
//! ```
//! use db_catalog::Schema;
//!
//! fn main() -> db_catalog::Result<()> {
//!     let sales = Schema::new("sales");
//!     let orders = sales.add_table("orders")?;
//!     let id = orders.add_column("id")?;
//!
//!     assert!(sales.table("orders").unwrap().has_column("id"));
//!     assert_eq!(id.full_name(), "sales.orders.id");
//!
//!     orders.remove_column("id");
//!     assert!(id.table().is_none());
//!     Ok(())
//! }
//! ```
//!
//! ## Ownership
//!
//! Handles are `Rc`-based: a parent's children map holds the only strong
//! references downward, while the upward link is weak. Dropping the last
//! handle to a root releases the whole tree ([`live_object_count`] exposes
//! this). Handles are not sendable across threads; a tree is a
//! single-threaded structure by construction.

pub mod error;
pub mod object;
pub mod props;
pub mod render;
pub mod snapshot;
pub mod views;

// Re-exports for convenient access
pub use error::{CatalogError, Result};
pub use object::{CatalogObject, ChildGroups, TYPE_COLUMN, TYPE_SCHEMA, TYPE_TABLE, TYPE_VIEW};
pub use props::{live_object_count, PropertyMap};
pub use render::NameTemplate;
pub use snapshot::CatalogSnapshot;
pub use views::{Column, Schema, Table};
