//! Table view: a named collection of columns under a schema.

use std::fmt;

use crate::error::Result;
use crate::object::{CatalogObject, TYPE_COLUMN, TYPE_TABLE};
use crate::views::{expect_tag, Column, Schema};

/// Typed view over a `table` node. Only `column` children are reachable
/// through it; the parent relation is exposed as the table's schema.
#[derive(Debug, Clone)]
pub struct Table {
    object: CatalogObject,
}

impl Table {
    /// Create a detached table.
    pub fn new(name: impl Into<String>) -> Self {
        let object = CatalogObject::new(name, TYPE_TABLE);
        object.set_name_pattern("{table_name}");
        Table { object }
    }

    pub(crate) fn wrap(object: CatalogObject) -> Self {
        Table { object }
    }

    /// The underlying generic node.
    pub fn as_object(&self) -> &CatalogObject {
        &self.object
    }

    /// The table name.
    pub fn name(&self) -> String {
        self.object.name()
    }

    /// Dotted path including the schema when attached, e.g. `sales.orders`.
    pub fn full_name(&self) -> String {
        self.object.qualified_name()
    }

    // ------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------

    /// Create a fresh column on this table and return it.
    pub fn add_column(&self, column_name: impl Into<String>) -> Result<Column> {
        self.object
            .add_child(column_name, TYPE_COLUMN)
            .map(Column::wrap)
    }

    /// Attach an existing column to this table.
    pub fn add_column_instance(&self, column: &Column) -> Result<()> {
        self.object.add_child_instance(column.as_object())
    }

    /// Look up a column by name.
    pub fn column(&self, column_name: &str) -> Option<Column> {
        self.object.child(column_name, TYPE_COLUMN).map(Column::wrap)
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, column_name: &str) -> bool {
        self.object.has_child(column_name, TYPE_COLUMN)
    }

    /// Whether this exact column instance is attached here.
    pub fn has_column_instance(&self, column: &Column) -> bool {
        self.object.has_child_instance(column.as_object())
    }

    /// Remove a column by name; no-op when absent.
    pub fn remove_column(&self, column_name: &str) -> Option<Column> {
        self.object
            .remove_child(column_name, TYPE_COLUMN)
            .map(Column::wrap)
    }

    /// Remove this exact column instance.
    pub fn remove_column_instance(&self, column: &Column) -> Result<()> {
        self.object.remove_child_instance(column.as_object())
    }

    /// All columns, in insertion order.
    pub fn columns(&self) -> Vec<Column> {
        self.object
            .children_of_type(TYPE_COLUMN)
            .into_values()
            .map(Column::wrap)
            .collect()
    }

    // ------------------------------------------------------------------
    // Schema (parent relation)
    // ------------------------------------------------------------------

    /// Attach this table under a schema, detaching from any current one.
    pub fn set_schema(&self, schema: &Schema) -> Result<()> {
        self.object.set_parent_instance(schema.as_object())
    }

    /// The owning schema, when attached to one.
    pub fn schema(&self) -> Option<Schema> {
        self.object.parent().and_then(|p| Schema::try_from(p).ok())
    }

    /// Detach from the owning schema.
    pub fn remove_schema(&self) -> Result<()> {
        self.object.remove_parent()
    }
}

impl TryFrom<CatalogObject> for Table {
    type Error = crate::error::CatalogError;

    fn try_from(object: CatalogObject) -> Result<Self> {
        expect_tag(&object, TYPE_TABLE)?;
        Ok(Table::wrap(object))
    }
}

impl From<Table> for CatalogObject {
    fn from(table: Table) -> Self {
        table.object
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.object, f)
    }
}
