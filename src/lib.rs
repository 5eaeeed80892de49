//! Detective Quest: a small interactive text-adventure over a fixed
//! binary-tree mansion map.
//!
//! The map lives in an arena ([`arena::RoomArena`]), is wired once by
//! [`map::build_mansion`], explored read-only by [`explorer::Explorer`],
//! and torn down post-order via [`arena::RoomArena::dismantle`].

pub mod arena;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod explorer;
pub mod map;
pub mod util;

pub use arena::{Room, RoomArena, ROOM_NAME_CAP};
pub use errors::{QuestError, QuestResult};
pub use explorer::{Explorer, Outcome};
