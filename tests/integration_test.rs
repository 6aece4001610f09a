//! End-to-end tests driving the model creator from parsed XML.
//!
//! Uses roxmltree as the test-side event source: fixture documents are
//! parsed and replayed as stream events, the way a SAX driver would deliver
//! them in a real pipeline.

use fragment_model::{
    Attribute, ModelConfig, ModelCreator, ModelError, ModelState, Node, PassContext, StreamEvent,
    UnclosedPolicy,
};
use pretty_assertions::assert_eq;

/// The order message from the model-creator documentation: two model names
/// (order, order-item), order-items nested inside order.
const ORDER_XML: &str = r#"<order id="332">
    <header>
        <!-- who ordered -->
        <customer number="123">Joe</customer>
    </header>
    <order-items>
        <order-item id="1">
            <product>1</product>
            <quantity>2</quantity>
            <price>8.80</price>
        </order-item>
        <order-item id="2">
            <product>2</product>
            <quantity>2</quantity>
            <price>8.80</price>
        </order-item>
        <order-item id="3">
            <product>3</product>
            <quantity>2</quantity>
            <price>8.80</price>
        </order-item>
    </order-items>
</order>"#;

/// Flatten a parsed document into stream events, depth first.
fn to_events(node: roxmltree::Node<'_, '_>, events: &mut Vec<StreamEvent>) {
    if node.is_element() {
        let attributes = node
            .attributes()
            .map(|attr| Attribute::new(attr.name(), attr.value()))
            .collect();
        events.push(StreamEvent::start(node.tag_name().name(), attributes));
        for child in node.children() {
            to_events(child, events);
        }
        events.push(StreamEvent::end(node.tag_name().name()));
    } else if node.is_text() {
        if let Some(text) = node.text() {
            events.push(StreamEvent::text(text));
        }
    } else if node.is_comment() {
        if let Some(text) = node.text() {
            events.push(StreamEvent::comment(text));
        }
    }
}

fn parse_events(xml: &str) -> Vec<StreamEvent> {
    let doc = roxmltree::Document::parse(xml).expect("fixture XML parses");
    let mut events = Vec::new();
    to_events(doc.root_element(), &mut events);
    events
}

fn run_pass(creator: &ModelCreator, events: &[StreamEvent]) -> PassContext {
    let mut ctx = PassContext::new();
    for event in events {
        creator.process(&mut ctx, event).expect("well-nested events");
    }
    ctx
}

#[test]
fn order_model_excludes_nested_order_item_data() {
    let creator = ModelCreator::new(ModelConfig::new(["order", "order-item"])).unwrap();
    let ctx = run_pass(&creator, &parse_events(ORDER_XML));
    let models = creator.finish(ctx).unwrap();

    let order = models.get("order").expect("order model");
    let root = order.root();
    assert_eq!(root.name(), "order");
    assert_eq!(root.attribute("id"), Some("332"));

    // Header content is part of the order model.
    let customer = root
        .find_child("header")
        .and_then(|header| header.find_child("customer"))
        .expect("customer inside header");
    assert_eq!(customer.attribute("number"), Some("123"));
    assert_eq!(customer.text_content(), "Joe");

    // order-items is an empty placeholder: its order-item children were
    // diverted to their own builders.
    let order_items = root.find_child("order-items").expect("order-items");
    assert!(order_items.children().is_empty());
}

#[test]
fn last_sibling_region_wins() {
    let creator = ModelCreator::new(ModelConfig::new(["order", "order-item"])).unwrap();
    let ctx = run_pass(&creator, &parse_events(ORDER_XML));
    let models = creator.finish(ctx).unwrap();

    let item = models.get("order-item").expect("order-item model");
    assert_eq!(item.root().attribute("id"), Some("3"));
    assert_eq!(
        item.root().find_child("product").map(|p| p.text_content()),
        Some("3".to_string())
    );
    assert!(models.is_complete("order-item"));
}

#[test]
fn stack_depth_tracks_nesting_not_repetition() {
    let creator = ModelCreator::new(ModelConfig::new(["order", "order-item"])).unwrap();
    let mut ctx = PassContext::new();
    let mut max_depth = 0;

    for event in parse_events(ORDER_XML) {
        creator.process(&mut ctx, &event).unwrap();
        max_depth = max_depth.max(ctx.depth());
    }

    // Three order-item siblings, but never more than order + one item open.
    assert_eq!(max_depth, 2);
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn whitespace_between_elements_never_stored() {
    let creator = ModelCreator::new(ModelConfig::new(["order", "order-item"])).unwrap();
    let ctx = run_pass(&creator, &parse_events(ORDER_XML));
    let models = creator.finish(ctx).unwrap();

    fn assert_no_blank_text(element: &fragment_model::Element) {
        for child in element.children() {
            match child {
                Node::Text(text) | Node::CData(text) => {
                    assert!(!text.trim().is_empty(), "whitespace-only leaf stored");
                }
                Node::Element(inner) => assert_no_blank_text(inner),
                Node::Comment(_) => {}
            }
        }
    }

    for name in ["order", "order-item"] {
        assert_no_blank_text(models.get(name).expect("model").root());
    }
}

#[test]
fn comments_are_kept_as_comment_leaves() {
    let creator = ModelCreator::new(ModelConfig::new(["order"])).unwrap();
    let ctx = run_pass(&creator, &parse_events(ORDER_XML));
    let models = creator.finish(ctx).unwrap();

    let header = models
        .get("order")
        .and_then(|order| order.root().find_child("header"))
        .expect("header");
    let comment = header
        .children()
        .iter()
        .find(|node| matches!(node, Node::Comment(_)));
    assert_eq!(
        comment,
        Some(&Node::Comment(" who ordered ".to_string()))
    );
}

#[test]
fn partial_model_visible_while_region_open() {
    let creator = ModelCreator::new(ModelConfig::new(["order"])).unwrap();
    let mut ctx = PassContext::new();

    creator
        .process(
            &mut ctx,
            &StreamEvent::start("order", vec![Attribute::new("id", "332")]),
        )
        .unwrap();

    let snapshot = ctx.models().get("order").expect("open model visible");
    assert_eq!(snapshot.root().attribute("id"), Some("332"));
    assert_eq!(ctx.models().state("order"), Some(ModelState::Open));
}

#[test]
fn region_exit_with_no_open_region_is_an_error() {
    let creator = ModelCreator::new(ModelConfig::new(["order"])).unwrap();
    let mut ctx = PassContext::new();

    let result = creator.process(&mut ctx, &StreamEvent::end("order"));
    assert!(matches!(result, Err(ModelError::EmptyBuilderStack(_))));

    // The failed pass is abandoned; a fresh context starts clean.
    let fresh = PassContext::new();
    assert_eq!(fresh.depth(), 0);
}

#[test]
fn truncated_document_aborts_by_default() {
    let creator = ModelCreator::new(ModelConfig::new(["order", "order-item"])).unwrap();
    let mut ctx = PassContext::new();

    // Stream cut off inside the second order-item.
    for event in [
        StreamEvent::start("order", Vec::new()),
        StreamEvent::start("order-items", Vec::new()),
        StreamEvent::start("order-item", vec![Attribute::new("id", "1")]),
        StreamEvent::end("order-item"),
        StreamEvent::start("order-item", vec![Attribute::new("id", "2")]),
        StreamEvent::start("product", Vec::new()),
        StreamEvent::text("2"),
    ] {
        creator.process(&mut ctx, &event).unwrap();
    }

    let result = creator.finish(ctx);
    match result {
        Err(ModelError::UnclosedRegions { names }) => {
            assert_eq!(names, ["order", "order-item"]);
        }
        other => panic!("expected UnclosedRegions, got {other:?}"),
    }
}

#[test]
fn truncated_document_publishes_partials_when_configured() {
    let config = ModelConfig::new(["order", "order-item"])
        .with_unclosed_policy(UnclosedPolicy::PublishPartial);
    let creator = ModelCreator::new(config).unwrap();
    let mut ctx = PassContext::new();

    for event in [
        StreamEvent::start("order", Vec::new()),
        StreamEvent::start("order-item", vec![Attribute::new("id", "2")]),
        StreamEvent::start("product", Vec::new()),
        StreamEvent::text("2"),
    ] {
        creator.process(&mut ctx, &event).unwrap();
    }

    let models = creator.finish(ctx).unwrap();

    // Both partial trees published, marked open.
    assert_eq!(models.state("order"), Some(ModelState::Open));
    assert_eq!(models.state("order-item"), Some(ModelState::Open));
    let item = models.get("order-item").expect("partial order-item");
    assert_eq!(
        item.root().find_child("product").map(|p| p.text_content()),
        Some("2".to_string())
    );
}

#[test]
fn yaml_configured_pass() {
    let config = ModelConfig::from_yaml(
        r"
model_names:
  - order-item
unclosed_policy: abort
",
    )
    .unwrap();
    let creator = ModelCreator::new(config).unwrap();

    let ctx = run_pass(&creator, &parse_events(ORDER_XML));
    let models = creator.finish(ctx).unwrap();

    // Only order-item is modeled; order is just an unmatched wrapper.
    assert!(models.get("order").is_none());
    assert_eq!(
        models.get("order-item").map(|t| t.root().attribute("id")),
        Some(Some("3"))
    );
}
