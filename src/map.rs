//! The hardcoded mansion map.

use tracing::{debug, instrument};

use crate::arena::RoomArena;
use crate::errors::QuestResult;

/// Builds the fixed five-room mansion:
///
/// ```text
/// Hall de Entrada
/// ├── Sala de Estar
/// │   ├── Jardim
/// │   └── Biblioteca
/// └── Cozinha
/// ```
///
/// Cozinha, Jardim and Biblioteca are leaves. The whole arena is returned
/// only once fully wired; on error the caller never sees a partial map.
#[instrument]
pub fn build_mansion() -> QuestResult<RoomArena> {
    let mut map = RoomArena::new();

    let hall = map.insert("Hall de Entrada");
    let sala_estar = map.insert("Sala de Estar");
    let cozinha = map.insert("Cozinha");
    let jardim = map.insert("Jardim");
    let biblioteca = map.insert("Biblioteca");

    map.link_left(hall, sala_estar)?;
    map.link_right(hall, cozinha)?;
    map.link_left(sala_estar, jardim)?;
    map.link_right(sala_estar, biblioteca)?;

    debug!(rooms = map.len(), depth = map.depth(), "mansion map built");
    Ok(map)
}
