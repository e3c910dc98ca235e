use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Session lifecycle. `Ready` means no press has been applied yet; the
/// first press moves the session to `Active`. `Won` is terminal, a new
/// session starts from a freshly generated board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Won,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    state: EngineState,
    move_count: Saturating<u32>,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            move_count: Saturating(0),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> bool {
        self.board[coords]
    }

    /// How many lights are still on.
    pub fn lights_on(&self) -> CellCount {
        self.board.lit_count()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count.0
    }

    /// Applies one press: the cell and its orthogonal neighbors flip, the
    /// previous board is replaced wholesale. Rejected with
    /// [`GameError::AlreadyEnded`] once the session is won.
    pub fn press(&mut self, coords: Coord2) -> Result<PressOutcome> {
        self.check_not_finished()?;

        self.board = self.board.toggle(coords)?;
        self.move_count += 1;

        if self.board.is_dark() {
            log::debug!("Press at {:?} turned the last light off", coords);
            self.state = EngineState::Won;
            Ok(PressOutcome::Won)
        } else {
            self.mark_started();
            log::debug!(
                "Press at {:?}, {} lights still on",
                coords,
                self.board.lit_count()
            );
            Ok(PressOutcome::Toggled)
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            self.state = EngineState::Active;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
