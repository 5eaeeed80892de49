//! Tests for RoomArena

use dquest::util::testing;
use dquest::{QuestError, RoomArena, ROOM_NAME_CAP};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_overlong_name_when_inserting_then_name_is_truncated() {
    // Arrange
    let mut arena = RoomArena::new();
    let long_name = "a".repeat(ROOM_NAME_CAP + 30);

    // Act
    let idx = arena.insert(&long_name);

    // Assert
    let room = arena.room(idx).unwrap();
    assert_eq!(room.name().chars().count(), ROOM_NAME_CAP);
    assert!(long_name.starts_with(room.name()));
}

#[test]
fn given_multibyte_name_when_truncating_then_no_char_is_split() {
    // Arrange
    let mut arena = RoomArena::new();
    let long_name = "á".repeat(ROOM_NAME_CAP + 10);

    // Act
    let idx = arena.insert(&long_name);

    // Assert
    let room = arena.room(idx).unwrap();
    assert_eq!(room.name().chars().count(), ROOM_NAME_CAP);
    assert!(room.name().chars().all(|c| c == 'á'));
}

#[test]
fn given_short_name_when_inserting_then_name_is_kept_verbatim() {
    let mut arena = RoomArena::new();
    let idx = arena.insert("Hall de Entrada");
    assert_eq!(arena.room(idx).unwrap().name(), "Hall de Entrada");
}

#[test]
fn given_empty_arena_when_inserting_then_first_room_becomes_root() {
    let mut arena = RoomArena::new();
    assert!(arena.root().is_none());

    let first = arena.insert("root");
    let _second = arena.insert("other");

    assert_eq!(arena.root(), Some(first));
}

#[test]
fn given_occupied_slot_when_linking_then_errors_without_rewiring() {
    // Arrange
    let mut arena = RoomArena::new();
    let root = arena.insert("root");
    let a = arena.insert("a");
    let b = arena.insert("b");
    arena.link_left(root, a).unwrap();

    // Act
    let result = arena.link_left(root, b);

    // Assert
    assert!(matches!(result, Err(QuestError::SlotOccupied { .. })));
    assert_eq!(arena.room(root).unwrap().left(), Some(a));
}

#[test]
fn given_child_with_parent_when_linking_under_second_parent_then_errors() {
    // Arrange
    let mut arena = RoomArena::new();
    let root = arena.insert("root");
    let left = arena.insert("left");
    let right = arena.insert("right");
    arena.link_left(root, left).unwrap();
    arena.link_right(root, right).unwrap();
    assert_eq!(arena.room(left).unwrap().parent(), Some(root));

    // Act: hang the left child off the right one as well
    let result = arena.link_left(right, left);

    // Assert: one parent per room
    assert!(matches!(result, Err(QuestError::AlreadyLinked { .. })));
    assert!(arena.room(right).unwrap().left().is_none());
}

#[test]
fn given_root_as_child_when_linking_then_cycle_is_rejected() {
    // Arrange
    let mut arena = RoomArena::new();
    let root = arena.insert("root");
    let leaf = arena.insert("leaf");
    arena.link_left(root, leaf).unwrap();

    // Act: wiring the root under its own descendant would close a cycle
    let result = arena.link_right(leaf, root);

    // Assert: rejected, and post-order traversal still terminates
    assert!(matches!(result, Err(QuestError::AlreadyLinked { .. })));
    assert_eq!(arena.iter_postorder().count(), 2);
}

#[test]
fn given_same_room_as_parent_and_child_when_linking_then_errors() {
    let mut arena = RoomArena::new();
    let _root = arena.insert("root");
    let floater = arena.insert("floater");

    let result = arena.link_left(floater, floater);
    assert!(matches!(result, Err(QuestError::AlreadyLinked { .. })));
    assert!(arena.room(floater).unwrap().is_leaf());
}

#[test]
fn given_dismantled_arena_when_linking_with_stale_index_then_errors() {
    let mut arena = RoomArena::new();
    let root = arena.insert("root");
    let child = arena.insert("child");
    arena.dismantle();

    let fresh = arena.insert("fresh");
    let annex = arena.insert("annex");
    let result = arena.link_left(fresh, child);
    assert!(matches!(result, Err(QuestError::RoomNotFound(_))));
    let result = arena.link_right(root, annex);
    assert!(matches!(result, Err(QuestError::RoomNotFound(_))));
}

#[test]
fn given_full_tree_when_iterating_postorder_then_children_precede_parents() {
    // Arrange: root with two subtrees, left one internal
    let mut arena = RoomArena::new();
    let root = arena.insert("root");
    let left = arena.insert("left");
    let right = arena.insert("right");
    let ll = arena.insert("left-left");
    let lr = arena.insert("left-right");
    arena.link_left(root, left).unwrap();
    arena.link_right(root, right).unwrap();
    arena.link_left(left, ll).unwrap();
    arena.link_right(left, lr).unwrap();

    // Act
    let names: Vec<&str> = arena.iter_postorder().map(|(_, r)| r.name()).collect();

    // Assert
    assert_eq!(
        names,
        vec!["left-left", "left-right", "left", "right", "root"]
    );
}

#[test]
fn given_tree_when_dismantling_then_every_room_released_exactly_once() {
    // Arrange
    let mut arena = RoomArena::new();
    let root = arena.insert("root");
    let left = arena.insert("left");
    let right = arena.insert("right");
    arena.link_left(root, left).unwrap();
    arena.link_right(root, right).unwrap();
    assert_eq!(arena.len(), 3);

    // Act
    let released = arena.dismantle();

    // Assert: back to the pre-build baseline, second pass is a no-op
    assert_eq!(released, 3);
    assert_eq!(arena.len(), 0);
    assert!(arena.is_empty());
    assert!(arena.root().is_none());
    assert_eq!(arena.dismantle(), 0);
}

#[test]
fn given_tree_when_collecting_leaves_then_ordered_left_to_right() {
    let mut arena = RoomArena::new();
    let root = arena.insert("root");
    let left = arena.insert("left");
    let right = arena.insert("right");
    let ll = arena.insert("left-left");
    arena.link_left(root, left).unwrap();
    arena.link_right(root, right).unwrap();
    arena.link_left(left, ll).unwrap();

    assert_eq!(arena.leaf_rooms(), vec!["left-left", "right"]);
}

#[test]
fn given_trees_of_known_shape_when_measuring_depth_then_matches() {
    let mut arena = RoomArena::new();
    assert_eq!(arena.depth(), 0);

    let root = arena.insert("root");
    assert_eq!(arena.depth(), 1);

    let left = arena.insert("left");
    arena.link_left(root, left).unwrap();
    let ll = arena.insert("left-left");
    arena.link_left(left, ll).unwrap();
    assert_eq!(arena.depth(), 3);
}
