//! Tests for the session forest and its id-addressed mutation operations

use spatialdom::domain::error::DomainError;
use spatialdom::domain::forest::Forest;
use spatialdom::domain::node::{Node, NodeId};
use spatialdom::domain::tag::TagType;

/// Forest with one div root holding one h1 child.
fn div_with_h1() -> (Forest, NodeId, NodeId) {
    let mut forest = Forest::new();
    let div = Node::new(TagType::Div);
    let div_id = div.id;
    forest.insert_child(div, None, None);
    let h1 = Node::new(TagType::H1);
    let h1_id = h1.id;
    forest.insert_child(h1, Some(div_id), None);
    (forest, div_id, h1_id)
}

#[test]
fn given_empty_forest_when_inserting_root_then_node_is_findable() {
    // Arrange
    let mut forest = Forest::new();
    let node = Node::new(TagType::Div);
    let id = node.id;

    // Act
    let inserted = forest.insert_child(node, None, None);

    // Assert
    assert!(inserted);
    let found = forest.find_node(id).expect("node should be findable");
    assert_eq!(found.id, id);
    assert_eq!(found.tag, TagType::Div);
}

#[test]
fn given_parent_id_when_inserting_then_child_nests_under_parent() {
    let (forest, div_id, h1_id) = div_with_h1();

    let root = &forest.roots()[0];
    assert_eq!(root.id, div_id);
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].id, h1_id);
}

#[test]
fn given_media_parent_when_inserting_child_then_noop() {
    // Arrange
    let mut forest = Forest::new();
    let img = Node::new(TagType::Img);
    let img_id = img.id;
    forest.insert_child(img, None, None);

    // Act
    let inserted = forest.insert_child(Node::new(TagType::Span), Some(img_id), None);

    // Assert
    assert!(!inserted);
    assert_eq!(forest.node_count(), 1);
    assert!(forest.find_node(img_id).unwrap().children.is_empty());
}

#[test]
fn given_unknown_parent_when_inserting_then_noop() {
    let mut forest = Forest::new();
    forest.insert_child(Node::new(TagType::Div), None, None);

    let inserted = forest.insert_child(Node::new(TagType::P), Some(NodeId::new_v4()), None);

    assert!(!inserted);
    assert_eq!(forest.node_count(), 1);
}

#[test]
fn given_out_of_range_index_when_inserting_then_appends() {
    let mut forest = Forest::new();
    let first = Node::new(TagType::Div);
    let first_id = first.id;
    forest.insert_child(first, None, None);

    let second = Node::new(TagType::Section);
    let second_id = second.id;
    forest.insert_child(second, None, Some(99));

    assert_eq!(forest.roots()[0].id, first_id);
    assert_eq!(forest.roots()[1].id, second_id);
}

#[test]
fn given_explicit_index_when_inserting_then_lands_at_position() {
    let mut forest = Forest::new();
    forest.insert_child(Node::new(TagType::Div), None, None);
    forest.insert_child(Node::new(TagType::Footer), None, None);

    let middle = Node::new(TagType::Main);
    let middle_id = middle.id;
    forest.insert_child(middle, None, Some(1));

    assert_eq!(forest.roots()[1].id, middle_id);
    assert_eq!(forest.len(), 3);

    let front = Node::new(TagType::Header);
    let front_id = front.id;
    forest.insert_child(front, None, Some(0));
    assert_eq!(forest.roots()[0].id, front_id);
}

#[test]
fn given_root_id_when_removing_then_returns_node_and_forgets_id() {
    let (mut forest, div_id, h1_id) = div_with_h1();

    let removed = forest.remove_node(div_id).expect("root should be removed");

    assert_eq!(removed.id, div_id);
    assert!(forest.is_empty());
    // The whole subtree is gone with its owner
    assert!(forest.find_node(div_id).is_none());
    assert!(forest.find_node(h1_id).is_none());
}

#[test]
fn given_nested_id_when_removing_then_detaches_subtree_only() {
    let (mut forest, div_id, h1_id) = div_with_h1();

    let removed = forest.remove_node(h1_id).expect("child should be removed");

    assert_eq!(removed.id, h1_id);
    assert_eq!(removed.tag, TagType::H1);
    assert!(forest.find_node(h1_id).is_none());
    assert!(forest.find_node(div_id).unwrap().children.is_empty());
}

#[test]
fn given_unknown_id_when_removing_then_returns_none() {
    let (mut forest, _, _) = div_with_h1();

    assert!(forest.remove_node(NodeId::new_v4()).is_none());
    assert_eq!(forest.node_count(), 2);
}

#[test]
fn given_two_roots_when_moving_one_under_other_then_relocated_with_same_id() {
    // Arrange
    let mut forest = Forest::new();
    let container = Node::new(TagType::Div);
    let container_id = container.id;
    forest.insert_child(container, None, None);
    let block = Node::new(TagType::P);
    let block_id = block.id;
    forest.insert_child(block, None, None);

    // Act
    forest
        .move_node(block_id, Some(container_id), None)
        .unwrap();

    // Assert
    assert_eq!(forest.len(), 1);
    let moved = forest.find_node(block_id).expect("moved node keeps its id");
    assert_eq!(moved.tag, TagType::P);
    assert_eq!(forest.roots()[0].children[0].id, block_id);
}

#[test]
fn given_move_into_own_descendant_then_rejected_and_forest_untouched() {
    // Arrange: div > section > p
    let mut forest = Forest::new();
    let div = Node::new(TagType::Div);
    let div_id = div.id;
    forest.insert_child(div, None, None);
    let section = Node::new(TagType::Section);
    let section_id = section.id;
    forest.insert_child(section, Some(div_id), None);
    let p = Node::new(TagType::P);
    let p_id = p.id;
    forest.insert_child(p, Some(section_id), None);
    let before = forest.clone();

    // Act
    let result = forest.move_node(div_id, Some(p_id), None);

    // Assert
    assert_eq!(
        result,
        Err(DomainError::InvalidMove {
            node: div_id,
            target: p_id
        })
    );
    assert_eq!(forest, before);
}

#[test]
fn given_move_onto_itself_then_rejected() {
    let (mut forest, div_id, _) = div_with_h1();
    let before = forest.clone();

    let result = forest.move_node(div_id, Some(div_id), None);

    assert!(matches!(result, Err(DomainError::InvalidMove { .. })));
    assert_eq!(forest, before);
}

#[test]
fn given_move_under_media_tag_then_noop_and_node_stays() {
    let mut forest = Forest::new();
    let img = Node::new(TagType::Img);
    let img_id = img.id;
    forest.insert_child(img, None, None);
    let span = Node::new(TagType::Span);
    let span_id = span.id;
    forest.insert_child(span, None, None);

    forest.move_node(span_id, Some(img_id), None).unwrap();

    // Still a root, not dropped
    assert_eq!(forest.len(), 2);
    assert!(forest.find_node(span_id).is_some());
    assert!(forest.find_node(img_id).unwrap().children.is_empty());
}

#[test]
fn given_move_to_root_sequence_then_detached_from_parent() {
    let (mut forest, div_id, h1_id) = div_with_h1();

    forest.move_node(h1_id, None, Some(0)).unwrap();

    assert_eq!(forest.len(), 2);
    assert_eq!(forest.roots()[0].id, h1_id);
    assert!(forest.find_node(div_id).unwrap().children.is_empty());
}

#[test]
fn given_unknown_id_when_moving_then_noop() {
    let (mut forest, div_id, _) = div_with_h1();
    let before = forest.clone();

    forest.move_node(NodeId::new_v4(), Some(div_id), None).unwrap();

    assert_eq!(forest, before);
}

#[test]
fn given_text_update_then_set_and_empty_string_clears() {
    let (mut forest, _, h1_id) = div_with_h1();

    assert!(forest.update_text(h1_id, "Hello World"));
    assert_eq!(
        forest.find_node(h1_id).unwrap().text.as_deref(),
        Some("Hello World")
    );

    assert!(forest.update_text(h1_id, ""));
    assert_eq!(forest.find_node(h1_id).unwrap().text, None);
}

#[test]
fn given_unknown_id_when_updating_text_then_noop() {
    let (mut forest, _, _) = div_with_h1();

    assert!(!forest.update_text(NodeId::new_v4(), "ignored"));
}

#[test]
fn given_attribute_update_then_set_and_none_removes() {
    let (mut forest, div_id, _) = div_with_h1();

    assert!(forest.update_attribute(div_id, "class", Some("card")));
    assert_eq!(
        forest.find_node(div_id).unwrap().attributes.get("class"),
        Some(&"card".to_string())
    );

    assert!(forest.update_attribute(div_id, "class", None));
    assert!(forest.find_node(div_id).unwrap().attributes.is_empty());

    // Removing a key that was never set is still a successful no-op
    assert!(forest.update_attribute(div_id, "missing", None));
}

#[test]
fn given_multiple_roots_when_finding_then_searches_roots_in_order() {
    let mut forest = Forest::new();
    let first = Node::new(TagType::Header);
    let first_id = first.id;
    forest.insert_child(first, None, None);
    let second = Node::new(TagType::Footer);
    let second_id = second.id;
    forest.insert_child(second, None, None);
    let nested = Node::new(TagType::P);
    let nested_id = nested.id;
    forest.insert_child(nested, Some(second_id), None);

    assert_eq!(forest.find_node(first_id).unwrap().tag, TagType::Header);
    assert_eq!(forest.find_node(nested_id).unwrap().tag, TagType::P);
    assert_eq!(forest.node_count(), 3);
}
