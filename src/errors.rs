use generational_arena::Index;
use thiserror::Error;

use crate::arena::Side;
use crate::exitcode;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Room not found in map: {0:?}")]
    RoomNotFound(Index),

    #[error("The {side} slot of \"{parent}\" is already linked")]
    SlotOccupied { parent: String, side: Side },

    #[error("Room \"{child}\" is already part of the tree and cannot be linked again")]
    AlreadyLinked { child: String },

    #[error("The mansion map has no rooms")]
    EmptyMap,

    #[error("Input/output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type QuestResult<T> = Result<T, QuestError>;

impl QuestError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuestError::Io(_) => exitcode::IOERR,
            QuestError::RoomNotFound(_)
            | QuestError::SlotOccupied { .. }
            | QuestError::AlreadyLinked { .. }
            | QuestError::EmptyMap => exitcode::SOFTWARE,
        }
    }
}
