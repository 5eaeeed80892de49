use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{QuestError, QuestResult};

/// Maximum number of visible characters kept from a room name.
pub const ROOM_NAME_CAP: usize = 49;

/// Which child slot of a parent room a link occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A room in the mansion: a binary tree node with a bounded display name.
#[derive(Debug)]
pub struct Room {
    name: String,
    parent: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

impl Room {
    /// Names longer than [`ROOM_NAME_CAP`] characters are truncated on a
    /// char boundary; the stored string is always valid UTF-8.
    fn new(name: &str) -> Self {
        let name = if name.chars().count() > ROOM_NAME_CAP {
            name.chars().take(ROOM_NAME_CAP).collect()
        } else {
            name.to_string()
        };
        Self {
            name,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn left(&self) -> Option<Index> {
        self.left
    }

    pub fn right(&self) -> Option<Index> {
        self.right
    }

    /// A leaf room has no exits; reaching one ends exploration.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Arena-based binary tree holding the mansion map.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// The first inserted room becomes the root; child slots are wired explicitly
/// via [`link_left`](Self::link_left) / [`link_right`](Self::link_right).
#[derive(Debug)]
pub struct RoomArena {
    arena: Arena<Room>,
    root: Option<Index>,
}

impl Default for RoomArena {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, name: &str) -> Index {
        let idx = self.arena.insert(Room::new(name));
        if self.root.is_none() {
            self.root = Some(idx);
        }
        idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn link_left(&mut self, parent: Index, child: Index) -> QuestResult<()> {
        self.link(parent, child, Side::Left)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn link_right(&mut self, parent: Index, child: Index) -> QuestResult<()> {
        self.link(parent, child, Side::Right)
    }

    fn link(&mut self, parent: Index, child: Index, side: Side) -> QuestResult<()> {
        let child_room = self
            .arena
            .get(child)
            .ok_or(QuestError::RoomNotFound(child))?;
        // One parent per room: a child that already hangs off a slot, the
        // root, or a self-link would break the tree shape (cycles included)
        if child_room.parent.is_some() || Some(child) == self.root || parent == child {
            return Err(QuestError::AlreadyLinked {
                child: child_room.name.clone(),
            });
        }
        let room = self
            .arena
            .get_mut(parent)
            .ok_or(QuestError::RoomNotFound(parent))?;
        let slot = match side {
            Side::Left => &mut room.left,
            Side::Right => &mut room.right,
        };
        if slot.is_some() {
            return Err(QuestError::SlotOccupied {
                parent: room.name.clone(),
                side,
            });
        }
        *slot = Some(child);
        if let Some(child_room) = self.arena.get_mut(child) {
            child_room.parent = Some(parent);
        }
        Ok(())
    }

    pub fn room(&self, idx: Index) -> Option<&Room> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        if let Some(room) = self.room(idx) {
            1 + self
                .children(room)
                .map(|child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all leaf room names, left-to-right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_rooms(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, idx: Index, leaves: &mut Vec<String>) {
        if let Some(room) = self.room(idx) {
            if room.is_leaf() {
                leaves.push(room.name.clone());
            } else {
                for child in self.children(room) {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    fn children<'a>(&self, room: &'a Room) -> impl Iterator<Item = Index> + 'a {
        room.left.into_iter().chain(room.right)
    }

    /// Tears the tree down in post-order (left subtree, right subtree, then
    /// the room itself), removing every room exactly once.
    ///
    /// Returns the number of rooms removed; the arena is empty afterwards,
    /// so a second call removes nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn dismantle(&mut self) -> usize {
        let order: Vec<Index> = self.iter_postorder().map(|(idx, _)| idx).collect();
        let mut removed = 0;
        for idx in order {
            if self.arena.remove(idx).is_some() {
                removed += 1;
            }
        }
        self.root = None;
        removed
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a RoomArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a RoomArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, false));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(room) = self.arena.room(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    // Right pushed first so the left subtree pops first
                    if let Some(right) = room.right() {
                        self.stack.push((right, false));
                    }
                    if let Some(left) = room.left() {
                        self.stack.push((left, false));
                    }
                } else {
                    return Some((current_idx, room));
                }
            }
        }
        None
    }
}
