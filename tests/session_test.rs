//! End-to-end session tests: build a level through mutation operations,
//! then exercise verdict, markup and layout together

use spatialdom::application::progress::Progress;
use spatialdom::application::session::{DropEvent, PuzzleSession};
use spatialdom::domain::level;
use spatialdom::domain::tag::TagType;
use spatialdom::util::testing;

fn level_one_session() -> PuzzleSession {
    let level = level::catalog().into_iter().next().expect("catalog level 1");
    PuzzleSession::new(level)
}

#[test]
fn given_level_one_built_by_operations_then_correct_with_markup_and_layout() {
    testing::init_test_setup();

    // Arrange: build the target structure through the mutation engine
    let mut session = level_one_session();
    let div = session.insert_tag(TagType::Div, None, None).unwrap();
    let h1 = session.insert_tag(TagType::H1, Some(div), None).unwrap();
    session.update_text(h1, "Hello World");
    let p = session.insert_tag(TagType::P, Some(div), None).unwrap();
    session.update_text(p, "Welcome to SpatialDOM!");

    // Act
    let verdict = session.check();

    // Assert: verdict
    assert!(verdict.correct);
    assert!(verdict.hints.is_empty());

    // Assert: serialization nests one level per depth
    assert_eq!(
        session.markup(),
        "<div>\n  <h1>Hello World</h1>\n  <p>Welcome to SpatialDOM!</p>\n</div>"
    );

    // Assert: layout yields one root entry plus two stacked children, with
    // the second child's center lower by the first child's height plus gap
    // (both children are equally tall here)
    let params = spatialdom::domain::layout::LayoutParams::default();
    let geometry = session.layout(&params);
    assert_eq!(geometry.len(), 3);
    let first = &geometry[&h1];
    let second = &geometry[&p];
    let delta = first.position.y - second.position.y;
    assert!(
        (delta - (first.size.y + params.child_gap)).abs() < 1e-4,
        "expected stack offset of height+gap, got {delta}"
    );
    assert_eq!(geometry[&div].depth, 0);
    assert_eq!(first.depth, 1);
}

#[test]
fn given_incomplete_build_then_incorrect_with_hints() {
    let mut session = level_one_session();
    let div = session.insert_tag(TagType::Div, None, None).unwrap();
    session.insert_tag(TagType::H1, Some(div), None);

    let verdict = session.check();

    assert!(!verdict.correct);
    assert_eq!(
        verdict.hints,
        vec!["Need 1 more child element inside <div>.".to_string()]
    );
}

#[test]
fn given_two_roots_then_incorrect_even_if_one_matches() {
    let mut session = level_one_session();
    let div = session.insert_tag(TagType::Div, None, None).unwrap();
    let h1 = session.insert_tag(TagType::H1, Some(div), None).unwrap();
    session.update_text(h1, "Hello World");
    let p = session.insert_tag(TagType::P, Some(div), None).unwrap();
    session.update_text(p, "Welcome to SpatialDOM!");
    // Stray extra root
    session.insert_tag(TagType::Span, None, None);

    assert!(!session.check().correct);
}

#[test]
fn given_empty_session_then_hint_suggests_root_tag() {
    let session = level_one_session();

    let verdict = session.check();

    assert!(!verdict.correct);
    assert_eq!(verdict.hints, vec!["Start by adding a <div> tag.".to_string()]);
}

#[test]
fn given_drop_event_with_known_tag_then_inserted() {
    let mut session = level_one_session();
    let div = session.insert_tag(TagType::Div, None, None).unwrap();

    let id = session.apply_drop(&DropEvent {
        tag: "h1".to_string(),
        parent: Some(div),
        index: None,
    });

    let id = id.expect("drop should insert");
    assert_eq!(session.find_node(id).unwrap().tag, TagType::H1);
}

#[test]
fn given_drop_event_with_mixed_case_identifier_then_resolves() {
    let mut session = level_one_session();

    let id = session.apply_drop(&DropEvent {
        tag: "DIV".to_string(),
        parent: None,
        index: None,
    });

    assert!(id.is_some());
}

#[test]
fn given_drop_event_with_unresolvable_tag_then_ignored() {
    let mut session = level_one_session();

    let id = session.apply_drop(&DropEvent {
        tag: "marquee".to_string(),
        parent: None,
        index: None,
    });

    assert!(id.is_none());
    assert!(session.forest().is_empty());
}

#[test]
fn given_selected_node_when_removed_then_selection_clears() {
    let mut session = level_one_session();
    let div = session.insert_tag(TagType::Div, None, None).unwrap();
    session.select(Some(div));

    session.remove_node(div);

    assert_eq!(session.selected(), None);
}

#[test]
fn given_fresh_progress_then_only_first_level_unlocked() {
    let progress = Progress::new();

    assert!(progress.is_unlocked(1));
    assert!(!progress.is_unlocked(2));
    assert!(!progress.is_unlocked(3));
}

#[test]
fn given_completed_level_then_next_level_unlocks() {
    let mut progress = Progress::new();

    progress.mark_completed(1);

    assert!(progress.is_completed(1));
    assert!(!progress.is_completed(2));
    assert!(progress.is_unlocked(2));
    assert!(!progress.is_unlocked(3));
}
