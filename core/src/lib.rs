#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub light_chance: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, light_chance: f64) -> Self {
        Self { size, light_chance }
    }

    pub fn new((rows, cols): Coord2, light_chance: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if !(0.0..=1.0).contains(&light_chance) {
            return Err(GameError::ChanceOutOfRange);
        }
        Ok(Self::new_unchecked((rows, cols), light_chance))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Rectangular grid of lights. Cell state is a plain boolean: lit or unlit.
///
/// Boards are value-like: [`Board::toggle`] returns a new board and leaves
/// the receiver untouched, so a caller can keep the previous state around as
/// a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    lights: Array2<bool>,
    lit_count: CellCount,
}

impl Board {
    /// Board of the given size with every light off.
    pub fn dark(size: Coord2) -> Self {
        Self {
            lights: Array2::default(size.to_nd_index()),
            lit_count: 0,
        }
    }

    pub fn from_light_mask(lights: Array2<bool>) -> Self {
        let lit_count = lights
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap();
        Self { lights, lit_count }
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut lights: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in lit_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            lights[coords.to_nd_index()] = true;
        }

        Ok(Self::from_light_mask(lights))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.lights.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.lights.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.lit_count
    }

    /// Win condition: every light is off.
    pub fn is_dark(&self) -> bool {
        self.lit_count == 0
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Flips `coords` and the in-bounds subset of its orthogonal neighbors,
    /// returning the result as a new board.
    ///
    /// Neighbors that fall outside the grid are skipped without effect. The
    /// primary coordinate itself must be in bounds: out of range is
    /// [`GameError::InvalidCoords`], never a silent no-op.
    pub fn toggle(&self, coords: Coord2) -> Result<Board> {
        let coords = self.validate_coords(coords)?;
        let mut next = self.clone();
        next.toggle_in_place(coords);
        Ok(next)
    }

    pub(crate) fn toggle_in_place(&mut self, coords: Coord2) {
        self.flip(coords);
        for pos in self.iter_neighbors(coords) {
            self.flip(pos);
        }
    }

    fn flip(&mut self, coords: Coord2) {
        let cell = &mut self.lights[coords.to_nd_index()];
        *cell = !*cell;
        if *cell {
            self.lit_count += 1;
        } else {
            self.lit_count -= 1;
        }
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.lights.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.lights[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PressOutcome {
    Toggled,
    Won,
}

impl PressOutcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}
