//! Fragment builder: grows one node tree from a sub-sequence of the event
//! stream.

use crate::error::{ModelError, Result};
use crate::event::{Attribute, TextKind};
use crate::node::{Element, Node, NodeTree};

/// Where a start-element event landed in the builder's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The element became the builder's tree root. The caller registers the
    /// model at this point so it is visible before the region closes.
    Root,
    /// The element was appended as a child at the cursor.
    Child,
}

/// Builds the node tree for one open model region.
///
/// The builder starts at a synthetic document root. The first start-element
/// event establishes the tree root; subsequent events grow the tree at a
/// cursor that descends on element starts and ascends on element ends. When
/// the cursor ascends past the root element the tree is complete.
///
/// The cursor is an index path from the root to the current element. The
/// tree is append-only, so the path stays valid until the next cursor move.
#[derive(Debug)]
pub struct FragmentBuilder {
    region: String,
    root: Option<Element>,
    path: Vec<usize>,
    complete: bool,
}

impl FragmentBuilder {
    /// Create a builder for the given region name.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            root: None,
            path: Vec::new(),
            complete: false,
        }
    }

    /// The region name this builder was opened for.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Whether the cursor has returned to the synthetic document root,
    /// i.e. the tree is fully built.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Handle an element start.
    ///
    /// # Errors
    /// Returns `ModelError::CursorUnderflow` if the region is already
    /// complete, which means the event source violated nesting order.
    pub fn start_element(&mut self, name: &str, attributes: Vec<Attribute>) -> Result<Placement> {
        if self.complete {
            return Err(ModelError::CursorUnderflow {
                region: self.region.clone(),
            });
        }

        let element = Element::new(name, attributes);
        match self.cursor_mut() {
            None => {
                // First element of the region becomes the tree root.
                self.root = Some(element);
                Ok(Placement::Root)
            }
            Some(cursor) => {
                cursor.push_child(Node::Element(element));
                let index = cursor.child_count() - 1;
                self.path.push(index);
                Ok(Placement::Child)
            }
        }
    }

    /// Handle character content at the cursor.
    ///
    /// Content arriving before the first element, and whitespace-only
    /// content, are dropped. Entity content is stored as a text leaf.
    pub fn text(&mut self, content: &str, kind: TextKind) {
        if content.trim().is_empty() {
            return;
        }

        // A bare document root cannot hold text.
        let Some(cursor) = self.cursor_mut() else {
            return;
        };

        let node = match kind {
            TextKind::Text | TextKind::Entity => Node::Text(content.to_string()),
            TextKind::CData => Node::CData(content.to_string()),
            TextKind::Comment => Node::Comment(content.to_string()),
        };
        cursor.push_child(node);
    }

    /// Handle an element end: ascend the cursor.
    ///
    /// # Errors
    /// Returns `ModelError::CursorUnderflow` if no element is open.
    pub fn end_element(&mut self) -> Result<()> {
        if self.complete || self.root.is_none() {
            return Err(ModelError::CursorUnderflow {
                region: self.region.clone(),
            });
        }

        if self.path.pop().is_none() {
            // Root element closed: cursor is back at the document root.
            self.complete = true;
        }
        Ok(())
    }

    /// Name of the element the cursor currently sits in, or `None` while at
    /// the synthetic document root.
    #[must_use]
    pub fn open_element(&self) -> Option<&str> {
        if self.complete {
            return None;
        }
        let mut current = self.root.as_ref()?;
        for &index in &self.path {
            match current.child(index) {
                Some(Node::Element(element)) => current = element,
                _ => return None,
            }
        }
        Some(current.name())
    }

    /// Consume the builder, returning its tree.
    ///
    /// Returns `None` if no element was ever opened. The tree may be
    /// incomplete; callers check [`is_complete`](Self::is_complete) first
    /// when that matters.
    #[must_use]
    pub fn into_tree(self) -> Option<NodeTree> {
        self.root.map(NodeTree::new)
    }

    /// The cursor element, or `None` while at the synthetic document root.
    ///
    /// Text arriving after completion falls through to `None` as well and is
    /// dropped, matching the bare-document-root rule.
    fn cursor_mut(&mut self) -> Option<&mut Element> {
        if self.complete {
            return None;
        }
        let mut current = self.root.as_mut()?;
        for &index in &self.path {
            match current.child_mut(index) {
                Some(Node::Element(element)) => current = element,
                _ => return None,
            }
        }
        Some(current)
    }
}
