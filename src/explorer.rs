//! Interactive exploration loop over a mansion map.
//!
//! The explorer owns only its cursor; the map is borrowed read-only for the
//! whole session. Input and output are generic so tests can script a session
//! against in-memory buffers.

use std::io::{BufRead, Write};

use generational_arena::Index;
use tracing::{instrument, trace, warn};

use crate::arena::{Room, RoomArena};
use crate::errors::{QuestError, QuestResult};

/// How an exploration session ended. Both variants are normal terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cursor reached a leaf room.
    Completed,
    /// The user chose 's' before reaching a leaf.
    Quit,
}

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Left,
    Right,
    Quit,
    Invalid,
}

/// Extracts the first non-whitespace character of the line and maps its
/// ASCII uppercase form to a choice. Blank and whitespace-only lines are
/// invalid.
fn parse_choice(line: &str) -> Choice {
    match line.chars().find(|c| !c.is_whitespace()) {
        Some(c) => match c.to_ascii_uppercase() {
            'E' => Choice::Left,
            'D' => Choice::Right,
            'S' => Choice::Quit,
            _ => Choice::Invalid,
        },
        None => Choice::Invalid,
    }
}

pub struct Explorer<'a, R, W> {
    map: &'a RoomArena,
    cursor: Index,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Explorer<'a, R, W> {
    /// Positions the cursor at the map's root.
    pub fn new(map: &'a RoomArena, input: R, output: W) -> QuestResult<Self> {
        let cursor = map.root().ok_or(QuestError::EmptyMap)?;
        Ok(Self {
            map,
            cursor,
            input,
            output,
        })
    }

    fn room(&self, idx: Index) -> QuestResult<&'a Room> {
        self.map.room(idx).ok_or(QuestError::RoomNotFound(idx))
    }

    /// Runs the session until a leaf is reached or the user quits.
    ///
    /// Read failures and end-of-input are retried: the prompt repeats and
    /// the cursor stays put. Invalid characters and missing directions are
    /// reported and retried the same way.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> QuestResult<Outcome> {
        loop {
            let room = self.room(self.cursor)?;
            writeln!(self.output, "\nVocê está na sala: {}", room.name())?;

            if room.is_leaf() {
                writeln!(self.output, "Você chegou ao fim da exploração!")?;
                writeln!(
                    self.output,
                    "Esta sala não possui mais caminhos — é um nó-folha da mansão."
                )?;
                writeln!(self.output, "Missão encerrada com sucesso!")?;
                return Ok(Outcome::Completed);
            }

            writeln!(self.output, "Escolha o caminho:")?;
            if let Some(left) = room.left() {
                let name = self.room(left)?.name();
                writeln!(self.output, " (e) Ir para a esquerda -> {}", name)?;
            }
            if let Some(right) = room.right() {
                let name = self.room(right)?.name();
                writeln!(self.output, " (d) Ir para a direita -> {}", name)?;
            }
            writeln!(self.output, " (s) Sair da exploração")?;
            write!(self.output, "Digite sua escolha: ")?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    trace!("end of input, re-prompting");
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "input read failed, re-prompting");
                    continue;
                }
            }

            match parse_choice(&line) {
                Choice::Left => {
                    if let Some(left) = room.left() {
                        self.cursor = left;
                    } else {
                        writeln!(
                            self.output,
                            "Não há caminho para a esquerda. Escolha novamente."
                        )?;
                    }
                }
                Choice::Right => {
                    if let Some(right) = room.right() {
                        self.cursor = right;
                    } else {
                        writeln!(
                            self.output,
                            "Não há caminho para a direita. Escolha novamente."
                        )?;
                    }
                }
                Choice::Quit => {
                    writeln!(self.output, "Você optou por sair da exploração.")?;
                    return Ok(Outcome::Quit);
                }
                Choice::Invalid => {
                    writeln!(self.output, "Entrada inválida. Digite 'e', 'd' ou 's'.")?;
                }
            }
        }
    }
}
