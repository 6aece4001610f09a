//! In-memory node tree built for one model region.
//!
//! The tree is an ownership hierarchy: each element owns its children in
//! document order, and there are no parent back-pointers. Construction is
//! append-only; once a tree is handed to the registry it is no longer
//! mutated.

use crate::event::Attribute;

/// A node in a fragment model tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a name, attributes and ordered children.
    Element(Element),
    /// Character data.
    Text(String),
    /// CDATA section content.
    CData(String),
    /// Comment content.
    Comment(String),
}

impl Node {
    /// Return the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Check if this is an element node.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }
}

/// An element node owning its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    /// Create a new element with no children.
    #[must_use]
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
            children: Vec::new(),
        }
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in document order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterate over element children only.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Find the first child element with the given name.
    #[must_use]
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|child| child.name == name)
    }

    /// Concatenated text and CDATA content of this element and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        self.collect_text(&mut content);
        content
    }

    fn collect_text(&self, content: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) | Node::CData(text) => content.push_str(text),
                Node::Element(element) => element.collect_text(content),
                Node::Comment(_) => {}
            }
        }
    }

    /// Append a child node. Construction is append-only.
    pub(crate) fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Mutable access to a child by index, for cursor descent.
    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    /// Shared access to a child by index.
    pub(crate) fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Number of children, used to address the most recently appended child.
    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// A completed (or partially built) model tree, rooted at a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTree {
    root: Element,
}

impl NodeTree {
    pub(crate) fn new(root: Element) -> Self {
        Self { root }
    }

    /// The root element of this model.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Consume the tree, returning the root element.
    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }
}
