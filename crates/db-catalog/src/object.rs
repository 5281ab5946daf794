//! The generic catalog node.
//!
//! [`CatalogObject`] is a cheaply cloneable handle to a node in the metadata
//! tree. Each node has a name, a type tag, at most one parent, and children
//! grouped by type. All structural invariants live here:
//!
//! - **Symmetry**: a child's parent link and the parent's children entry
//!   always agree, by instance identity.
//! - **Uniqueness**: `(name, type)` is unique within one parent's group.
//! - **Single parent**: attaching under a new parent detaches from the old.
//! - **No dangling groups**: a type group is removed when its last child is.
//!
//! # Ownership
//!
//! A parent's children map holds the only strong references downward; the
//! upward link is a [`Weak`] back-pointer. Dropping the last external handle
//! to a root therefore releases the entire tree. The flip side: a parent
//! created by [`set_parent`](CatalogObject::set_parent) is returned to the
//! caller and must be held, or it is dropped immediately.
//!
//! Handles are `Rc`-based and not sendable across threads; a tree is
//! single-threaded by construction.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use crate::error::{CatalogError, Result};
use crate::props::{self, PropertyMap};
use crate::render::{NameTemplate, VAR_OBJECT_NAME};

/// Type tag for schema nodes.
pub const TYPE_SCHEMA: &str = "schema";
/// Type tag for table nodes.
pub const TYPE_TABLE: &str = "table";
/// Type tag for view nodes.
pub const TYPE_VIEW: &str = "view";
/// Type tag for column nodes.
pub const TYPE_COLUMN: &str = "column";

/// Children grouped as `type → (name → child)`, insertion-ordered.
pub type ChildGroups = IndexMap<String, IndexMap<String, CatalogObject>>;

struct ObjectInner {
    name: String,
    type_tag: String,
    template: NameTemplate,
    properties: PropertyMap,
    parent: Weak<RefCell<ObjectInner>>,
    children: ChildGroups,
}

impl Drop for ObjectInner {
    fn drop(&mut self) {
        props::record_drop();
    }
}

/// Handle to a node in the catalog tree.
///
/// Cloning the handle clones a reference, not the node; two clones compare
/// identical under [`same_object`](Self::same_object). Two distinct nodes
/// with equal `(name, type)` never do.
#[derive(Clone)]
pub struct CatalogObject {
    inner: Rc<RefCell<ObjectInner>>,
}

impl CatalogObject {
    /// Create a detached node with the given name and type tag.
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        props::record_construct();
        CatalogObject {
            inner: Rc::new(RefCell::new(ObjectInner {
                name: name.into(),
                type_tag: type_tag.into(),
                template: NameTemplate::default(),
                properties: PropertyMap::new(),
                parent: Weak::new(),
                children: IndexMap::new(),
            })),
        }
    }

    /// Whether `self` and `other` are the same node (instance identity).
    pub fn same_object(&self, other: &CatalogObject) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// The node's name.
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// The node's type tag.
    pub fn type_tag(&self) -> String {
        self.inner.borrow().type_tag.clone()
    }

    /// Set the name of a detached node.
    ///
    /// Refused with [`CatalogError::Attached`] while the node has a parent,
    /// since the parent's children map is keyed by name; use
    /// [`rename`](Self::rename) instead.
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        if self.parent().is_some() {
            return Err(CatalogError::attached(self.name(), self.type_tag()));
        }
        self.inner.borrow_mut().name = name.into();
        Ok(())
    }

    /// Set the type tag of a detached node.
    ///
    /// Refused with [`CatalogError::Attached`] while the node has a parent;
    /// use [`retag`](Self::retag) instead.
    pub fn set_type_tag(&self, type_tag: impl Into<String>) -> Result<()> {
        if self.parent().is_some() {
            return Err(CatalogError::attached(self.name(), self.type_tag()));
        }
        self.inner.borrow_mut().type_tag = type_tag.into();
        Ok(())
    }

    /// Rename the node, re-keying the parent's children map atomically.
    ///
    /// Fails with [`CatalogError::DuplicateChild`] if a sibling of the same
    /// type already carries the new name; the tree is unchanged on failure.
    /// A renamed entry moves to the end of its sibling group.
    pub fn rename(&self, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        let old_name = self.name();
        if new_name == old_name {
            return Ok(());
        }
        let type_tag = self.type_tag();
        if let Some(parent) = self.parent() {
            if parent.has_child(&new_name, &type_tag) {
                return Err(CatalogError::duplicate_child(new_name, type_tag));
            }
            let mut inner = parent.inner.borrow_mut();
            if let Some(group) = inner.children.get_mut(&type_tag) {
                if let Some(handle) = group.shift_remove(&old_name) {
                    group.insert(new_name.clone(), handle);
                }
            }
        }
        self.inner.borrow_mut().name = new_name;
        Ok(())
    }

    /// Change the node's type tag, moving it between the parent's groups.
    ///
    /// Fails with [`CatalogError::DuplicateChild`] if the target group already
    /// holds the name; the tree is unchanged on failure. The vacated group is
    /// pruned when it empties.
    pub fn retag(&self, new_tag: impl Into<String>) -> Result<()> {
        let new_tag = new_tag.into();
        let old_tag = self.type_tag();
        if new_tag == old_tag {
            return Ok(());
        }
        let name = self.name();
        if let Some(parent) = self.parent() {
            if parent.has_child(&name, &new_tag) {
                return Err(CatalogError::duplicate_child(name, new_tag));
            }
            let mut inner = parent.inner.borrow_mut();
            let handle = inner
                .children
                .get_mut(&old_tag)
                .and_then(|group| group.shift_remove(&name));
            if let Some(handle) = handle {
                if inner.children.get(&old_tag).is_some_and(|g| g.is_empty()) {
                    inner.children.shift_remove(&old_tag);
                }
                inner
                    .children
                    .entry(new_tag.clone())
                    .or_default()
                    .insert(name, handle);
            }
        }
        self.inner.borrow_mut().type_tag = new_tag;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// Set an attribute on the node, returning the previous value if any.
    pub fn set_property(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.borrow_mut().properties.set(key, value)
    }

    /// Get an attribute value.
    pub fn property(&self, key: &str) -> Option<String> {
        self.inner.borrow().properties.get(key).map(str::to_string)
    }

    /// Remove an attribute.
    pub fn remove_property(&self, key: &str) -> Option<String> {
        self.inner.borrow_mut().properties.remove(key)
    }

    /// A copy of the node's attribute map.
    pub fn properties(&self) -> PropertyMap {
        self.inner.borrow().properties.clone()
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Replace the node's name pattern.
    pub fn set_name_pattern(&self, pattern: impl Into<String>) {
        self.inner.borrow_mut().template = NameTemplate::new(pattern);
    }

    /// The node's name pattern.
    pub fn name_pattern(&self) -> String {
        self.inner.borrow().template.pattern().to_string()
    }

    /// Render the node's display name through its template.
    ///
    /// Two variables are supplied: `object_name` and `<type>_name` (for
    /// example `table_name` on a table node), both resolving to the node's
    /// own name.
    pub fn display_name(&self) -> String {
        let inner = self.inner.borrow();
        let tag_var = format!("{}_name", inner.type_tag);
        inner.template.render(&[
            (VAR_OBJECT_NAME, inner.name.as_str()),
            (tag_var.as_str(), inner.name.as_str()),
        ])
    }

    /// Dotted path from the root to this node, e.g. `sales.orders.id`.
    pub fn qualified_name(&self) -> String {
        let mut parts = vec![self.name()];
        let mut cursor = self.parent();
        while let Some(node) = cursor {
            parts.push(node.name());
            cursor = node.parent();
        }
        parts.reverse();
        parts.join(".")
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Whether a non-empty group of `type_tag` children exists.
    pub fn has_child_type(&self, type_tag: &str) -> bool {
        self.inner
            .borrow()
            .children
            .get(type_tag)
            .is_some_and(|group| !group.is_empty())
    }

    /// Whether a child with exactly `(name, type_tag)` exists.
    pub fn has_child(&self, name: &str, type_tag: &str) -> bool {
        self.inner
            .borrow()
            .children
            .get(type_tag)
            .is_some_and(|group| group.contains_key(name))
    }

    /// Whether `child` itself (identity, not name equality) is among the
    /// children of its own type.
    pub fn has_child_instance(&self, child: &CatalogObject) -> bool {
        let type_tag = child.type_tag();
        self.inner
            .borrow()
            .children
            .get(&type_tag)
            .is_some_and(|group| group.values().any(|c| c.same_object(child)))
    }

    /// The child with `(name, type_tag)`, if present.
    pub fn child(&self, name: &str, type_tag: &str) -> Option<CatalogObject> {
        self.inner
            .borrow()
            .children
            .get(type_tag)
            .and_then(|group| group.get(name))
            .cloned()
    }

    /// All children, grouped by type then name, in insertion order.
    pub fn children(&self) -> ChildGroups {
        self.inner.borrow().children.clone()
    }

    /// The `name → child` group for one type; empty if the group is absent.
    pub fn children_of_type(&self, type_tag: &str) -> IndexMap<String, CatalogObject> {
        self.inner
            .borrow()
            .children
            .get(type_tag)
            .cloned()
            .unwrap_or_default()
    }

    /// The node's parent, if it has one that is still alive.
    pub fn parent(&self) -> Option<CatalogObject> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| CatalogObject { inner })
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Construct a fresh `(name, type_tag)` child, attach it, and return it.
    ///
    /// Fails with [`CatalogError::DuplicateChild`] if the slot is taken.
    pub fn add_child(
        &self,
        name: impl Into<String>,
        type_tag: impl Into<String>,
    ) -> Result<CatalogObject> {
        let name = name.into();
        let type_tag = type_tag.into();
        if self.has_child(&name, &type_tag) {
            return Err(CatalogError::duplicate_child(name, type_tag));
        }
        let child = CatalogObject::new(name, type_tag);
        self.attach(&child);
        Ok(child)
    }

    /// Attach an existing node as a child.
    ///
    /// The node is first detached from any current parent. Fails with
    /// [`CatalogError::DuplicateChild`] if `(name, type)` is already taken
    /// here (including by `child` itself), or [`CatalogError::WouldCycle`] if
    /// `child` is this node or one of its ancestors. No mutation on failure.
    pub fn add_child_instance(&self, child: &CatalogObject) -> Result<()> {
        let name = child.name();
        let type_tag = child.type_tag();
        if self.has_child(&name, &type_tag) {
            return Err(CatalogError::duplicate_child(name, type_tag));
        }
        if self.would_create_cycle(child) {
            return Err(CatalogError::would_cycle(name, type_tag));
        }
        child.detach_from_parent();
        self.attach(child);
        Ok(())
    }

    /// Remove the child with `(name, type_tag)`, clearing its parent link.
    ///
    /// Returns the removed node, or `None` if no such child exists (a no-op,
    /// not an error). The emptied type group is pruned.
    pub fn remove_child(&self, name: &str, type_tag: &str) -> Option<CatalogObject> {
        self.take_child(name, type_tag)
    }

    /// Remove `child` (matched by identity), clearing its parent link.
    ///
    /// Fails with [`CatalogError::NotAChild`] if `child` is not currently a
    /// child of this node.
    pub fn remove_child_instance(&self, child: &CatalogObject) -> Result<()> {
        if !self.has_child_instance(child) {
            return Err(CatalogError::not_a_child(child.name(), child.type_tag()));
        }
        self.take_child(&child.name(), &child.type_tag());
        Ok(())
    }

    /// Construct a fresh `(name, type_tag)` parent, attach under it, and
    /// return the parent.
    ///
    /// Detaches from any current parent first. The returned handle is the
    /// only strong reference to the new parent; drop it and the parent (and
    /// this node's membership in it) goes with it.
    pub fn set_parent(
        &self,
        name: impl Into<String>,
        type_tag: impl Into<String>,
    ) -> Result<CatalogObject> {
        let parent = CatalogObject::new(name, type_tag);
        parent.add_child_instance(self)?;
        Ok(parent)
    }

    /// Attach under an existing node.
    ///
    /// A no-op when `parent` already is this node's parent; otherwise
    /// detaches from any current parent and attaches, with the same failure
    /// modes as [`add_child_instance`](Self::add_child_instance).
    pub fn set_parent_instance(&self, parent: &CatalogObject) -> Result<()> {
        if let Some(current) = self.parent() {
            if current.same_object(parent) {
                return Ok(());
            }
        }
        parent.add_child_instance(self)
    }

    /// Detach from the current parent.
    ///
    /// Removes this node from the parent's children (when still listed) and
    /// clears the back-reference. Fails with [`CatalogError::NoParent`] when
    /// the node has no live parent.
    pub fn remove_parent(&self) -> Result<()> {
        let parent = self.parent().ok_or(CatalogError::NoParent)?;
        if parent.has_child_instance(self) {
            parent.take_child(&self.name(), &self.type_tag());
        } else {
            self.inner.borrow_mut().parent = Weak::new();
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// True if `candidate` is this node or one of its ancestors, i.e.
    /// attaching `candidate` beneath this node would loop the tree.
    fn would_create_cycle(&self, candidate: &CatalogObject) -> bool {
        let mut cursor = Some(self.clone());
        while let Some(node) = cursor {
            if node.same_object(candidate) {
                return true;
            }
            cursor = node.parent();
        }
        false
    }

    /// Leave the current parent, if any. Unlike `remove_parent`, a missing
    /// parent is not an error here.
    fn detach_from_parent(&self) {
        if let Some(parent) = self.parent() {
            if parent.has_child_instance(self) {
                parent.take_child(&self.name(), &self.type_tag());
            } else {
                self.inner.borrow_mut().parent = Weak::new();
            }
        }
    }

    /// Insert `child` into our children and point its back-reference here.
    /// Callers have already run the duplicate and cycle checks.
    fn attach(&self, child: &CatalogObject) {
        let name = child.name();
        let type_tag = child.type_tag();
        self.inner
            .borrow_mut()
            .children
            .entry(type_tag.clone())
            .or_default()
            .insert(name.clone(), child.clone());
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        tracing::trace!("attached {} '{}' under '{}'", type_tag, name, self.name());
    }

    /// Remove `(name, type_tag)` from our children, prune the group if it
    /// emptied, and clear the removed child's back-reference.
    fn take_child(&self, name: &str, type_tag: &str) -> Option<CatalogObject> {
        let child = {
            let mut inner = self.inner.borrow_mut();
            let group = inner.children.get_mut(type_tag)?;
            let child = group.shift_remove(name)?;
            if group.is_empty() {
                inner.children.shift_remove(type_tag);
            }
            child
        };
        child.inner.borrow_mut().parent = Weak::new();
        tracing::trace!("detached {} '{}' from '{}'", type_tag, name, self.name());
        Some(child)
    }
}

impl fmt::Display for CatalogObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl fmt::Debug for CatalogObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("CatalogObject")
            .field("name", &inner.name)
            .field("type_tag", &inner.type_tag)
            .field(
                "children",
                &inner
                    .children
                    .iter()
                    .map(|(tag, group)| (tag.as_str(), group.len()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_object(name: &str, type_tag: &str) -> CatalogObject {
        CatalogObject::new(name, type_tag)
    }

    fn make_parent_with_child() -> (CatalogObject, CatalogObject) {
        let parent = make_object("sales", TYPE_SCHEMA);
        let child = parent.add_child("orders", TYPE_TABLE).unwrap();
        (parent, child)
    }

    // ------------------------------------------------------------------
    // Symmetry
    // ------------------------------------------------------------------

    #[test]
    fn test_add_child_links_both_sides() {
        let (parent, child) = make_parent_with_child();
        assert!(child.parent().unwrap().same_object(&parent));
        assert!(parent.child("orders", TYPE_TABLE).unwrap().same_object(&child));
        assert!(parent.has_child_instance(&child));
    }

    #[test]
    fn test_add_child_instance_links_both_sides() {
        let parent = make_object("sales", TYPE_SCHEMA);
        let child = make_object("orders", TYPE_TABLE);
        parent.add_child_instance(&child).unwrap();
        assert!(child.parent().unwrap().same_object(&parent));
        assert!(parent.child("orders", TYPE_TABLE).unwrap().same_object(&child));
    }

    #[test]
    fn test_remove_child_instance_detaches_both_sides() {
        let (parent, child) = make_parent_with_child();
        parent.remove_child_instance(&child).unwrap();
        assert!(child.parent().is_none());
        assert!(!parent.has_child("orders", TYPE_TABLE));
    }

    #[test]
    fn test_remove_child_clears_parent_reference() {
        let (parent, child) = make_parent_with_child();
        let removed = parent.remove_child("orders", TYPE_TABLE).unwrap();
        assert!(removed.same_object(&child));
        assert!(child.parent().is_none());
    }

    // ------------------------------------------------------------------
    // Uniqueness
    // ------------------------------------------------------------------

    #[test]
    fn test_add_child_duplicate_rejected() {
        let (parent, child) = make_parent_with_child();
        let err = parent.add_child("orders", TYPE_TABLE).unwrap_err();
        assert_eq!(
            err,
            CatalogError::duplicate_child("orders", TYPE_TABLE)
        );
        // Failed call left the children set unchanged.
        assert_eq!(parent.children_of_type(TYPE_TABLE).len(), 1);
        assert!(parent.child("orders", TYPE_TABLE).unwrap().same_object(&child));
    }

    #[test]
    fn test_add_child_instance_duplicate_rejected_without_mutation() {
        let (parent, _child) = make_parent_with_child();
        let imposter = make_object("orders", TYPE_TABLE);
        let err = parent.add_child_instance(&imposter).unwrap_err();
        assert_eq!(err, CatalogError::duplicate_child("orders", TYPE_TABLE));
        assert!(imposter.parent().is_none());
        assert_eq!(parent.children_of_type(TYPE_TABLE).len(), 1);
    }

    #[test]
    fn test_same_name_different_type_allowed() {
        let parent = make_object("sales", TYPE_SCHEMA);
        parent.add_child("audit", TYPE_TABLE).unwrap();
        parent.add_child("audit", TYPE_VIEW).unwrap();
        assert!(parent.has_child("audit", TYPE_TABLE));
        assert!(parent.has_child("audit", TYPE_VIEW));
    }

    // ------------------------------------------------------------------
    // Identity vs structural equality
    // ------------------------------------------------------------------

    #[test]
    fn test_has_child_instance_uses_identity() {
        let (parent, child) = make_parent_with_child();
        let lookalike = make_object("orders", TYPE_TABLE);
        assert!(parent.has_child_instance(&child));
        assert!(!parent.has_child_instance(&lookalike));
    }

    #[test]
    fn test_remove_child_instance_rejects_lookalike() {
        let (parent, _child) = make_parent_with_child();
        let lookalike = make_object("orders", TYPE_TABLE);
        let err = parent.remove_child_instance(&lookalike).unwrap_err();
        assert_eq!(err, CatalogError::not_a_child("orders", TYPE_TABLE));
        assert!(parent.has_child("orders", TYPE_TABLE));
    }

    // ------------------------------------------------------------------
    // Group pruning and no-op removal
    // ------------------------------------------------------------------

    #[test]
    fn test_group_pruned_after_last_removal() {
        let (parent, _child) = make_parent_with_child();
        assert!(parent.has_child_type(TYPE_TABLE));
        parent.remove_child("orders", TYPE_TABLE);
        assert!(!parent.has_child_type(TYPE_TABLE));
        assert!(!parent.children().contains_key(TYPE_TABLE));
    }

    #[test]
    fn test_remove_absent_child_is_noop() {
        let parent = make_object("sales", TYPE_SCHEMA);
        assert!(parent.remove_child("ghost", TYPE_TABLE).is_none());
    }

    // ------------------------------------------------------------------
    // Parent handling
    // ------------------------------------------------------------------

    #[test]
    fn test_set_parent_instance_idempotent() {
        let (parent, child) = make_parent_with_child();
        child.set_parent_instance(&parent).unwrap();
        child.set_parent_instance(&parent).unwrap();
        assert_eq!(parent.children_of_type(TYPE_TABLE).len(), 1);
        assert!(child.parent().unwrap().same_object(&parent));
    }

    #[test]
    fn test_reparent_moves_between_parents() {
        let (first, child) = make_parent_with_child();
        let second = make_object("archive", TYPE_SCHEMA);
        child.set_parent_instance(&second).unwrap();
        assert!(!first.has_child_instance(&child));
        assert!(second.has_child_instance(&child));
        assert!(child.parent().unwrap().same_object(&second));
    }

    #[test]
    fn test_set_parent_returns_live_handle() {
        let child = make_object("orders", TYPE_TABLE);
        let parent = child.set_parent("sales", TYPE_SCHEMA).unwrap();
        assert!(parent.has_child_instance(&child));
        assert!(child.parent().unwrap().same_object(&parent));
    }

    #[test]
    fn test_set_parent_detaches_old_parent() {
        let (first, child) = make_parent_with_child();
        let second = child.set_parent("archive", TYPE_SCHEMA).unwrap();
        assert!(!first.has_child_instance(&child));
        assert!(second.has_child_instance(&child));
    }

    #[test]
    fn test_dropped_parent_reads_as_none() {
        let child = make_object("orders", TYPE_TABLE);
        {
            let _parent = child.set_parent("sales", TYPE_SCHEMA).unwrap();
            assert!(child.parent().is_some());
        }
        assert!(child.parent().is_none());
    }

    #[test]
    fn test_remove_parent_without_parent_errors() {
        let orphan = make_object("orders", TYPE_TABLE);
        assert_eq!(orphan.remove_parent().unwrap_err(), CatalogError::NoParent);
    }

    #[test]
    fn test_remove_parent_detaches_both_sides() {
        let (parent, child) = make_parent_with_child();
        child.remove_parent().unwrap();
        assert!(child.parent().is_none());
        assert!(!parent.has_child("orders", TYPE_TABLE));
    }

    // ------------------------------------------------------------------
    // Cycle rejection
    // ------------------------------------------------------------------

    #[test]
    fn test_self_attach_rejected() {
        let node = make_object("sales", TYPE_SCHEMA);
        let err = node.add_child_instance(&node).unwrap_err();
        assert_eq!(err, CatalogError::would_cycle("sales", TYPE_SCHEMA));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_ancestor_attach_rejected() {
        let root = make_object("sales", TYPE_SCHEMA);
        let table = root.add_child("orders", TYPE_TABLE).unwrap();
        let column = table.add_child("id", TYPE_COLUMN).unwrap();
        let err = column.add_child_instance(&root).unwrap_err();
        assert_eq!(err, CatalogError::would_cycle("sales", TYPE_SCHEMA));
        // The rejected attach changed nothing.
        assert!(root.parent().is_none());
        assert!(!column.has_child_type(TYPE_SCHEMA));
    }

    // ------------------------------------------------------------------
    // Renaming
    // ------------------------------------------------------------------

    #[test]
    fn test_set_name_refused_while_attached() {
        let (_parent, child) = make_parent_with_child();
        let err = child.set_name("invoices").unwrap_err();
        assert_eq!(err, CatalogError::attached("orders", TYPE_TABLE));
        assert_eq!(child.name(), "orders");
    }

    #[test]
    fn test_set_name_on_detached_node() {
        let node = make_object("orders", TYPE_TABLE);
        node.set_name("invoices").unwrap();
        assert_eq!(node.name(), "invoices");
    }

    #[test]
    fn test_rename_rekeys_parent_map() {
        let (parent, child) = make_parent_with_child();
        child.rename("invoices").unwrap();
        assert_eq!(child.name(), "invoices");
        assert!(parent.child("invoices", TYPE_TABLE).unwrap().same_object(&child));
        assert!(!parent.has_child("orders", TYPE_TABLE));
    }

    #[test]
    fn test_rename_duplicate_sibling_rejected() {
        let (parent, child) = make_parent_with_child();
        parent.add_child("invoices", TYPE_TABLE).unwrap();
        let err = child.rename("invoices").unwrap_err();
        assert_eq!(err, CatalogError::duplicate_child("invoices", TYPE_TABLE));
        assert_eq!(child.name(), "orders");
        assert!(parent.child("orders", TYPE_TABLE).unwrap().same_object(&child));
    }

    #[test]
    fn test_retag_moves_groups_and_prunes() {
        let (parent, child) = make_parent_with_child();
        child.retag(TYPE_VIEW).unwrap();
        assert_eq!(child.type_tag(), TYPE_VIEW);
        assert!(!parent.has_child_type(TYPE_TABLE));
        assert!(parent.child("orders", TYPE_VIEW).unwrap().same_object(&child));
    }

    // ------------------------------------------------------------------
    // Queries and iteration
    // ------------------------------------------------------------------

    #[test]
    fn test_children_iteration_order_is_insertion_order() {
        let parent = make_object("sales", TYPE_SCHEMA);
        for name in ["orders", "customers", "items"] {
            parent.add_child(name, TYPE_TABLE).unwrap();
        }
        let names: Vec<String> = parent.children_of_type(TYPE_TABLE).keys().cloned().collect();
        assert_eq!(names, vec!["orders", "customers", "items"]);
    }

    #[test]
    fn test_children_of_absent_type_is_empty() {
        let parent = make_object("sales", TYPE_SCHEMA);
        assert!(parent.children_of_type(TYPE_COLUMN).is_empty());
        assert!(!parent.has_child_type(TYPE_COLUMN));
        assert!(parent.child("id", TYPE_COLUMN).is_none());
    }

    #[test]
    fn test_children_returns_full_grouping() {
        let parent = make_object("sales", TYPE_SCHEMA);
        parent.add_child("orders", TYPE_TABLE).unwrap();
        parent.add_child("recent_orders", TYPE_VIEW).unwrap();
        let groups = parent.children();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[TYPE_TABLE].len(), 1);
        assert_eq!(groups[TYPE_VIEW].len(), 1);
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    #[test]
    fn test_display_uses_template() {
        let node = make_object("orders", TYPE_TABLE);
        assert_eq!(node.name_pattern(), "{object_name}");
        assert_eq!(node.to_string(), "orders");
        node.set_name_pattern("{table_name}!");
        assert_eq!(node.to_string(), "orders!");
    }

    #[test]
    fn test_qualified_name_walks_ancestors() {
        let root = make_object("sales", TYPE_SCHEMA);
        let table = root.add_child("orders", TYPE_TABLE).unwrap();
        let column = table.add_child("id", TYPE_COLUMN).unwrap();
        assert_eq!(column.qualified_name(), "sales.orders.id");
        assert_eq!(root.qualified_name(), "sales");
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    #[test]
    fn test_properties_round_trip() {
        let node = make_object("id", TYPE_COLUMN);
        assert_eq!(node.set_property("data_type", "bigint"), None);
        assert_eq!(node.property("data_type").as_deref(), Some("bigint"));
        assert_eq!(node.remove_property("data_type").as_deref(), Some("bigint"));
        assert!(node.properties().is_empty());
    }
}
