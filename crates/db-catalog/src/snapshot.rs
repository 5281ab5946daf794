//! Serializable value copies of catalog trees.
//!
//! A [`CatalogSnapshot`] is a plain value tree: no shared handles, no
//! back-references, serde-friendly. Callers use it to persist, diff, or ship
//! catalog metadata; the crate itself performs no I/O.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::object::CatalogObject;

/// Deep value copy of a catalog node and everything beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Node name.
    pub name: String,
    /// Node type tag.
    pub type_tag: String,
    /// Node attributes, in insertion order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, String>,
    /// Child snapshots, grouped order first (type, then name insertion order).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CatalogSnapshot>,
}

impl CatalogObject {
    /// Produce a deep value copy of this node and its descendants.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let groups = self.children();
        let children = groups
            .values()
            .flat_map(|group| group.values())
            .map(CatalogObject::snapshot)
            .collect();
        CatalogSnapshot {
            name: self.name(),
            type_tag: self.type_tag(),
            properties: self.properties().to_map(),
            children,
        }
    }

    /// Rebuild a linked tree from a snapshot.
    ///
    /// Goes through the same attach primitives as the public API, so a
    /// malformed snapshot (duplicate `(name, type)` among siblings) fails
    /// with the usual [`DuplicateChild`](crate::CatalogError::DuplicateChild).
    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> Result<CatalogObject> {
        let node = CatalogObject::new(snapshot.name.clone(), snapshot.type_tag.clone());
        for (key, value) in &snapshot.properties {
            node.set_property(key.clone(), value.clone());
        }
        for child in &snapshot.children {
            node.add_child_instance(&CatalogObject::from_snapshot(child)?)?;
        }
        Ok(node)
    }
}
