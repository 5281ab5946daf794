//! Name rendering for catalog objects.
//!
//! Each node carries a [`NameTemplate`] deciding how it prints: a pattern
//! string with `{placeholder}` slots, substituted at render time. The default
//! pattern is `{object_name}`, which resolves to the node's own name; typed
//! views install domain patterns such as `{schema_name}`. Composition policy
//! beyond that (for example rendering a column as `schema.table.column`) is
//! the caller's, via [`CatalogObject::qualified_name`](crate::CatalogObject::qualified_name)
//! or a custom pattern.

/// Pattern with `{placeholder}` slots, rendered against a variable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    pattern: String,
}

/// Placeholder every node can resolve to its own name.
pub const VAR_OBJECT_NAME: &str = "object_name";

impl NameTemplate {
    /// Create a template from a pattern string.
    pub fn new(pattern: impl Into<String>) -> Self {
        NameTemplate {
            pattern: pattern.into(),
        }
    }

    /// The raw pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Substitute `{key}` slots from `vars`.
    ///
    /// Placeholders with no matching variable are left verbatim; rendering
    /// never fails.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = self.pattern.clone();
        for (key, value) in vars {
            let slot = format!("{{{key}}}");
            if out.contains(&slot) {
                out = out.replace(&slot, value);
            }
        }
        out
    }
}

impl Default for NameTemplate {
    fn default() -> Self {
        NameTemplate::new(format!("{{{VAR_OBJECT_NAME}}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_renders_object_name() {
        let template = NameTemplate::default();
        assert_eq!(template.pattern(), "{object_name}");
        assert_eq!(template.render(&[("object_name", "orders")]), "orders");
    }

    #[test]
    fn test_multiple_placeholders() {
        let template = NameTemplate::new("{schema_name}.{table_name}");
        let rendered = template.render(&[("schema_name", "sales"), ("table_name", "orders")]);
        assert_eq!(rendered, "sales.orders");
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let template = NameTemplate::new("{object_name}@{db_name}");
        assert_eq!(template.render(&[("object_name", "orders")]), "orders@{db_name}");
    }

    #[test]
    fn test_literal_text_untouched() {
        let template = NameTemplate::new("tbl_{object_name}");
        assert_eq!(template.render(&[("object_name", "orders")]), "tbl_orders");
    }
}
