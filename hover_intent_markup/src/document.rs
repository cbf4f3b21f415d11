// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, class edits, queries.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::types::{Element, ElementFlags, ElementId};

/// An element tree with class lists and bounds.
#[derive(Default)]
pub struct Document {
    slots: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("slots_total", &total)
            .field("elements_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    element: Element,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the element as a root.
    pub fn insert(&mut self, parent: Option<ElementId>, element: Element) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Node::new(generation, element));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Node::new(generation, element)));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        let id = ElementId::new(idx as u32, generation);
        if let Some(p) = parent.filter(|p| self.is_alive(*p)) {
            self.node_mut(p).children.push(id);
            self.node_mut(id).parent = Some(p);
        }
        id
    }

    /// Remove an element (and its subtree) from the document.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
        self.free_subtree(id);
    }

    fn free_subtree(&mut self, id: ElementId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.free_subtree(child);
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Element data, if `id` is live.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.node_opt(id).map(|n| &n.element)
    }

    /// Parent of a live element.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.node_opt(id)?.parent
    }

    /// Children of a live element in document order. Empty for stale ids.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Root elements in slot order.
    pub fn roots(&self) -> Vec<ElementId> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match n {
                Some(n) if n.parent.is_none() =>
                {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "ElementId uses 32-bit indices by design."
                    )]
                    Some(ElementId::new(i as u32, n.generation))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns true if the live element carries `class`.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node_opt(id)
            .is_some_and(|n| n.element.classes.iter().any(|c| c == class))
    }

    /// Class list of a live element. Empty for stale ids.
    pub fn classes(&self, id: ElementId) -> &[String] {
        self.node_opt(id)
            .map(|n| n.element.classes.as_slice())
            .unwrap_or(&[])
    }

    /// Add `class` to a live element.
    ///
    /// Returns true if the class was not present before. Stale ids return false.
    pub fn add_class(&mut self, id: ElementId, class: &str) -> bool {
        let Some(n) = self.node_opt_mut(id) else {
            return false;
        };
        if n.element.classes.iter().any(|c| c == class) {
            return false;
        }
        n.element.classes.push(String::from(class));
        true
    }

    /// Remove `class` from a live element.
    ///
    /// Returns true if the class was present. Stale ids return false.
    pub fn remove_class(&mut self, id: ElementId, class: &str) -> bool {
        let Some(n) = self.node_opt_mut(id) else {
            return false;
        };
        let before = n.element.classes.len();
        n.element.classes.retain(|c| c != class);
        n.element.classes.len() != before
    }

    /// Update document-space bounds.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.bounds = bounds;
        }
    }

    /// Update pointer flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.flags = flags;
        }
    }

    /// Elements carrying `class`, in document order.
    ///
    /// With `Some(scope)` this searches the descendants of `scope`, excluding `scope`
    /// itself. With `None` it searches every root tree.
    pub fn query_class(&self, scope: Option<ElementId>, class: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        match scope {
            Some(s) => {
                for &c in self.children_of(s) {
                    self.collect_class(c, class, &mut out);
                }
            }
            None => {
                for r in self.roots() {
                    self.collect_class(r, class, &mut out);
                }
            }
        }
        out
    }

    fn collect_class(&self, id: ElementId, class: &str, out: &mut Vec<ElementId>) {
        if self.has_class(id, class) {
            out.push(id);
        }
        for &c in self.children_of(id) {
            self.collect_class(c, class, out);
        }
    }

    /// Root→target path to the deepest pickable element under `pt`.
    ///
    /// Later siblings are painted on top, so they are tested first. A non-pickable element
    /// is skipped but its descendants are still considered, and the returned path then
    /// contains only pickable elements. Bounds are not clipped by ancestors: a child
    /// overflowing its parent is still hit, and the parent still appears on the path.
    /// Returns an empty path when nothing is hit.
    pub fn hit_path(&self, pt: Point) -> Vec<ElementId> {
        let roots = self.roots();
        for &r in roots.iter().rev() {
            let mut path = Vec::new();
            if self.hit_recursive(r, pt, &mut path) {
                return path;
            }
        }
        Vec::new()
    }

    fn hit_recursive(&self, id: ElementId, pt: Point, path: &mut Vec<ElementId>) -> bool {
        let Some(node) = self.node_opt(id) else {
            return false;
        };
        let pickable = node.element.flags.contains(ElementFlags::PICKABLE);
        if pickable {
            path.push(id);
        }
        for &c in node.children.iter().rev() {
            if self.hit_recursive(c, pt, path) {
                return true;
            }
        }
        if pickable && node.element.bounds.contains(pt) {
            return true;
        }
        if pickable {
            path.pop();
        }
        false
    }

    // --- internals ---

    fn node(&self, id: ElementId) -> &Node {
        self.slots[id.idx()].as_ref().expect("dangling ElementId")
    }

    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        self.slots[id.idx()].as_mut().expect("dangling ElementId")
    }

    fn node_opt(&self, id: ElementId) -> Option<&Node> {
        let n = self.slots.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.slots.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}

impl Node {
    fn new(generation: u32, element: Element) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn menu_doc() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new();
        let body = doc.insert(
            None,
            Element::new("body").with_bounds(Rect::new(0.0, 0.0, 800.0, 600.0)),
        );
        let dropdown = doc.insert(
            Some(body),
            Element::new("li")
                .with_class("dropdown")
                .with_bounds(Rect::new(10.0, 10.0, 110.0, 40.0)),
        );
        let menu = doc.insert(
            Some(dropdown),
            Element::new("ul")
                .with_class("dropdown-menu")
                .with_bounds(Rect::new(10.0, 40.0, 160.0, 200.0)),
        );
        (doc, body, dropdown, menu)
    }

    #[test]
    fn insert_links_parent_and_children() {
        let (doc, body, dropdown, menu) = menu_doc();
        assert_eq!(doc.parent_of(menu), Some(dropdown));
        assert_eq!(doc.children_of(body), &[dropdown]);
        assert_eq!(doc.roots(), vec![body]);
    }

    #[test]
    fn remove_frees_subtree_and_bumps_generation() {
        let (mut doc, body, dropdown, menu) = menu_doc();
        doc.remove(dropdown);
        assert!(!doc.is_alive(dropdown));
        assert!(!doc.is_alive(menu));
        assert!(doc.children_of(body).is_empty());

        let reused = doc.insert(Some(body), Element::new("li"));
        assert!(reused.generation() > 1, "freed slot should be reused");
        assert_ne!(reused, dropdown);
        assert_ne!(reused, menu);
        assert!(!doc.has_class(menu, "dropdown-menu"));
    }

    #[test]
    fn class_edits_report_changes() {
        let (mut doc, _, _, menu) = menu_doc();
        assert!(doc.add_class(menu, "show"));
        assert!(!doc.add_class(menu, "show"));
        assert_eq!(doc.classes(menu).len(), 2);
        assert!(doc.remove_class(menu, "show"));
        assert!(!doc.remove_class(menu, "show"));
        assert!(!doc.has_class(menu, "show"));
    }

    #[test]
    fn stale_ids_are_ignored() {
        let (mut doc, _, dropdown, menu) = menu_doc();
        doc.remove(dropdown);
        assert!(!doc.add_class(menu, "show"));
        assert!(!doc.remove_class(menu, "dropdown-menu"));
        assert!(doc.element(menu).is_none());
    }

    #[test]
    fn query_class_excludes_scope_and_keeps_document_order() {
        let (mut doc, body, dropdown, _) = menu_doc();
        let second = doc.insert(Some(body), Element::new("li").with_class("dropdown"));
        assert_eq!(doc.query_class(Some(body), "dropdown"), vec![dropdown, second]);
        assert_eq!(doc.query_class(None, "dropdown"), vec![dropdown, second]);
        assert!(doc.query_class(Some(dropdown), "dropdown").is_empty());
    }

    #[test]
    fn hit_path_reaches_deepest_element() {
        let (doc, body, dropdown, menu) = menu_doc();
        assert_eq!(doc.hit_path(Point::new(20.0, 20.0)), vec![body, dropdown]);
        // The menu overflows the dropdown's box but is still its descendant.
        assert_eq!(
            doc.hit_path(Point::new(150.0, 100.0)),
            vec![body, dropdown, menu]
        );
        assert_eq!(doc.hit_path(Point::new(500.0, 500.0)), vec![body]);
        assert!(doc.hit_path(Point::new(900.0, 900.0)).is_empty());
    }

    #[test]
    fn hit_path_prefers_later_siblings() {
        let mut doc = Document::new();
        let root = doc.insert(
            None,
            Element::new("div").with_bounds(Rect::new(0.0, 0.0, 100.0, 100.0)),
        );
        let _under = doc.insert(
            Some(root),
            Element::new("div").with_bounds(Rect::new(0.0, 0.0, 50.0, 50.0)),
        );
        let over = doc.insert(
            Some(root),
            Element::new("div").with_bounds(Rect::new(25.0, 25.0, 75.0, 75.0)),
        );
        assert_eq!(doc.hit_path(Point::new(30.0, 30.0)), vec![root, over]);
    }

    #[test]
    fn non_pickable_elements_pass_the_pointer_through() {
        let (mut doc, body, dropdown, menu) = menu_doc();
        doc.set_flags(dropdown, ElementFlags::empty());
        assert_eq!(doc.hit_path(Point::new(20.0, 20.0)), vec![body]);
        assert_eq!(doc.hit_path(Point::new(150.0, 100.0)), vec![body, menu]);
    }
}
