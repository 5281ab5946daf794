//! Schema view: a named collection of tables.

use std::fmt;

use crate::error::Result;
use crate::object::{CatalogObject, TYPE_SCHEMA, TYPE_TABLE};
use crate::views::{expect_tag, Table};

/// Typed view over a `schema` node. Only `table` children are reachable
/// through it.
#[derive(Debug, Clone)]
pub struct Schema {
    object: CatalogObject,
}

impl Schema {
    /// Create a detached schema.
    pub fn new(name: impl Into<String>) -> Self {
        let object = CatalogObject::new(name, TYPE_SCHEMA);
        object.set_name_pattern("{schema_name}");
        Schema { object }
    }

    pub(crate) fn wrap(object: CatalogObject) -> Self {
        Schema { object }
    }

    /// The underlying generic node.
    pub fn as_object(&self) -> &CatalogObject {
        &self.object
    }

    /// The schema name.
    pub fn name(&self) -> String {
        self.object.name()
    }

    /// Create a fresh table under this schema and return it.
    pub fn add_table(&self, table_name: impl Into<String>) -> Result<Table> {
        self.object
            .add_child(table_name, TYPE_TABLE)
            .map(Table::wrap)
    }

    /// Attach an existing table under this schema.
    pub fn add_table_instance(&self, table: &Table) -> Result<()> {
        self.object.add_child_instance(table.as_object())
    }

    /// Look up a table by name.
    pub fn table(&self, table_name: &str) -> Option<Table> {
        self.object.child(table_name, TYPE_TABLE).map(Table::wrap)
    }

    /// Whether a table with this name exists.
    pub fn has_table(&self, table_name: &str) -> bool {
        self.object.has_child(table_name, TYPE_TABLE)
    }

    /// Whether this exact table instance is attached here.
    pub fn has_table_instance(&self, table: &Table) -> bool {
        self.object.has_child_instance(table.as_object())
    }

    /// Remove a table by name; no-op when absent.
    pub fn remove_table(&self, table_name: &str) -> Option<Table> {
        self.object.remove_child(table_name, TYPE_TABLE).map(Table::wrap)
    }

    /// Remove this exact table instance.
    pub fn remove_table_instance(&self, table: &Table) -> Result<()> {
        self.object.remove_child_instance(table.as_object())
    }

    /// All tables, in insertion order.
    pub fn tables(&self) -> Vec<Table> {
        self.object
            .children_of_type(TYPE_TABLE)
            .into_values()
            .map(Table::wrap)
            .collect()
    }
}

impl TryFrom<CatalogObject> for Schema {
    type Error = crate::error::CatalogError;

    fn try_from(object: CatalogObject) -> Result<Self> {
        expect_tag(&object, TYPE_SCHEMA)?;
        Ok(Schema::wrap(object))
    }
}

impl From<Schema> for CatalogObject {
    fn from(schema: Schema) -> Self {
        schema.object
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.object, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::object::TYPE_TABLE;

    #[test]
    fn test_add_and_get_table() {
        let schema = Schema::new("sales");
        let orders = schema.add_table("orders").unwrap();
        assert!(schema.has_table("orders"));
        assert!(schema.has_table_instance(&orders));
        assert!(schema
            .table("orders")
            .unwrap()
            .as_object()
            .same_object(orders.as_object()));
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let schema = Schema::new("sales");
        schema.add_table("orders").unwrap();
        assert_eq!(
            schema.add_table("orders").unwrap_err(),
            CatalogError::duplicate_child("orders", TYPE_TABLE)
        );
    }

    #[test]
    fn test_add_table_instance_sets_schema() {
        let schema = Schema::new("sales");
        let orders = Table::new("orders");
        schema.add_table_instance(&orders).unwrap();
        assert!(orders.schema().unwrap().as_object().same_object(schema.as_object()));
    }

    #[test]
    fn test_remove_table() {
        let schema = Schema::new("sales");
        let orders = schema.add_table("orders").unwrap();
        let removed = schema.remove_table("orders").unwrap();
        assert!(removed.as_object().same_object(orders.as_object()));
        assert!(!schema.has_table("orders"));
        assert!(schema.remove_table("orders").is_none());
    }

    #[test]
    fn test_tables_in_insertion_order() {
        let schema = Schema::new("sales");
        for name in ["orders", "customers"] {
            schema.add_table(name).unwrap();
        }
        let names: Vec<String> = schema.tables().iter().map(Table::name).collect();
        assert_eq!(names, vec!["orders", "customers"]);
    }

    #[test]
    fn test_try_from_checks_tag() {
        let node = CatalogObject::new("orders", TYPE_TABLE);
        assert!(Schema::try_from(node).is_err());
    }

    #[test]
    fn test_display_renders_name() {
        let schema = Schema::new("sales");
        assert_eq!(schema.to_string(), "sales");
    }
}
