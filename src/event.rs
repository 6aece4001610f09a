//! Event-stream interface consumed from the streaming document source.
//!
//! The event source (tokenizer, SAX driver, ...) is external to this crate.
//! It must deliver events in well-nested order: every `EndElement` closes the
//! most recently unclosed `StartElement` of the same name. Violations surface
//! as protocol errors during processing.

/// Kind of character content carried by a [`StreamEvent::Text`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Plain character data.
    Text,
    /// CDATA section content.
    CData,
    /// Comment content.
    Comment,
    /// Resolved entity content. Stored in the tree as a text leaf.
    Entity,
}

/// An element attribute, passed through opaquely from the event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single event from the streaming document source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// An element opened.
    StartElement {
        /// Element name.
        name: String,
        /// Attributes in document order.
        attributes: Vec<Attribute>,
    },
    /// Character content inside the current element.
    Text {
        /// The raw content.
        content: String,
        /// What kind of content this is.
        kind: TextKind,
    },
    /// An element closed.
    EndElement {
        /// Element name, matching the most recent unclosed start.
        name: String,
    },
}

impl StreamEvent {
    /// Create a start-element event.
    #[must_use]
    pub fn start(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::StartElement {
            name: name.into(),
            attributes,
        }
    }

    /// Create a plain text event.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            kind: TextKind::Text,
        }
    }

    /// Create a CDATA event.
    #[must_use]
    pub fn cdata(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            kind: TextKind::CData,
        }
    }

    /// Create a comment event.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            kind: TextKind::Comment,
        }
    }

    /// Create a resolved-entity text event.
    #[must_use]
    pub fn entity(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            kind: TextKind::Entity,
        }
    }

    /// Create an end-element event.
    #[must_use]
    pub fn end(name: impl Into<String>) -> Self {
        Self::EndElement { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        let event = StreamEvent::start("order", vec![Attribute::new("id", "332")]);
        match event {
            StreamEvent::StartElement { name, attributes } => {
                assert_eq!(name, "order");
                assert_eq!(attributes.len(), 1);
                assert_eq!(attributes[0].name, "id");
                assert_eq!(attributes[0].value, "332");
            }
            _ => panic!("expected StartElement"),
        }

        assert_eq!(
            StreamEvent::cdata("raw"),
            StreamEvent::Text {
                content: "raw".to_string(),
                kind: TextKind::CData,
            }
        );
        assert_eq!(
            StreamEvent::end("order"),
            StreamEvent::EndElement {
                name: "order".to_string()
            }
        );
    }
}
