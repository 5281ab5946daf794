//! Column view: a leaf under a table.

use std::fmt;

use crate::error::Result;
use crate::object::{CatalogObject, TYPE_COLUMN, TYPE_TABLE};
use crate::views::{expect_tag, Table};

/// Typed view over a `column` node. Columns have no children; only the
/// parent relation (the owning table) is exposed.
#[derive(Debug, Clone)]
pub struct Column {
    object: CatalogObject,
}

impl Column {
    /// Create a detached column.
    pub fn new(name: impl Into<String>) -> Self {
        let object = CatalogObject::new(name, TYPE_COLUMN);
        object.set_name_pattern("{column_name}");
        Column { object }
    }

    pub(crate) fn wrap(object: CatalogObject) -> Self {
        Column { object }
    }

    /// The underlying generic node.
    pub fn as_object(&self) -> &CatalogObject {
        &self.object
    }

    /// The column name.
    pub fn name(&self) -> String {
        self.object.name()
    }

    /// Dotted path up the tree, e.g. `sales.orders.id`.
    pub fn full_name(&self) -> String {
        self.object.qualified_name()
    }

    /// Attach this column under a fresh table with the given name.
    ///
    /// Returns the new table; the caller must hold it, since the column's
    /// upward link does not keep the table alive.
    pub fn set_table(&self, table_name: impl Into<String>) -> Result<Table> {
        self.object.set_parent(table_name, TYPE_TABLE).map(Table::wrap)
    }

    /// Attach this column under an existing table, detaching from any
    /// current one.
    pub fn set_table_instance(&self, table: &Table) -> Result<()> {
        self.object.set_parent_instance(table.as_object())
    }

    /// The owning table, when attached to one.
    pub fn table(&self) -> Option<Table> {
        self.object.parent().and_then(|p| Table::try_from(p).ok())
    }
}

impl TryFrom<CatalogObject> for Column {
    type Error = crate::error::CatalogError;

    fn try_from(object: CatalogObject) -> Result<Self> {
        expect_tag(&object, TYPE_COLUMN)?;
        Ok(Column::wrap(object))
    }
}

impl From<Column> for CatalogObject {
    fn from(column: Column) -> Self {
        column.object
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.object, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_table_instance() {
        let table = Table::new("orders");
        let id = Column::new("id");
        id.set_table_instance(&table).unwrap();
        assert!(id.table().unwrap().as_object().same_object(table.as_object()));
        assert!(table.has_column_instance(&id));
    }

    #[test]
    fn test_set_table_returns_owning_handle() {
        let id = Column::new("id");
        let table = id.set_table("orders").unwrap();
        assert!(table.has_column_instance(&id));
        assert_eq!(id.full_name(), "orders.id");
    }

    #[test]
    fn test_detached_column_has_no_table() {
        let id = Column::new("id");
        assert!(id.table().is_none());
    }
}
