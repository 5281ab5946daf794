//! Typed views over the generic catalog node.
//!
//! [`Schema`], [`Table`], and [`Column`] wrap a [`CatalogObject`] handle and
//! expose domain vocabulary with a fixed type tag: a schema adds tables, a
//! table adds columns and names its schema, a column names its table. The
//! generic node does not restrict which type may nest under which; the
//! restriction lives entirely in which operations each view exposes.

mod column;
mod schema;
mod table;

pub use column::Column;
pub use schema::Schema;
pub use table::Table;

use crate::error::{CatalogError, Result};
use crate::object::CatalogObject;

/// Check a generic handle's tag before wrapping it in a typed view.
fn expect_tag(object: &CatalogObject, expected: &str) -> Result<()> {
    let actual = object.type_tag();
    if actual == expected {
        Ok(())
    } else {
        Err(CatalogError::type_mismatch(expected, actual))
    }
}
