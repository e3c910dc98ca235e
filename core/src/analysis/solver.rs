use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Set of cells to press. Presses commute and pressing a cell twice cancels
/// out, so a plan is a plain mask with no ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PressPlan {
    presses: Array2<bool>,
    press_count: CellCount,
}

impl PressPlan {
    fn from_press_mask(presses: Array2<bool>) -> Self {
        let press_count = presses
            .iter()
            .filter(|&&press| press)
            .count()
            .try_into()
            .unwrap();
        Self {
            presses,
            press_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.presses.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn press_count(&self) -> CellCount {
        self.press_count
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.presses[coords.to_nd_index()]
    }

    pub fn iter_presses(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.presses
            .indexed_iter()
            .filter(|&(_, &press)| press)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Applies every press in the plan, returning the resulting board.
    pub fn apply(&self, board: &Board) -> Result<Board> {
        if board.size() != self.size() {
            return Err(GameError::ShapeMismatch);
        }

        let mut next = board.clone();
        for coords in self.iter_presses() {
            next.toggle_in_place(coords);
        }
        Ok(next)
    }
}

pub fn is_solvable(board: &Board) -> bool {
    solve(board).is_some()
}

/// Finds a set of presses that turns every light off, if one exists.
///
/// Works by light chasing: once the first-row presses are fixed, every later
/// press is forced by the light left in the row above, so only a cols-sized
/// GF(2) system for the first row needs solving. The returned plan is one
/// solution, not necessarily the one with the fewest presses.
pub fn solve(board: &Board) -> Option<PressPlan> {
    if board.total_cells() == 0 {
        return Some(PressPlan::from_press_mask(Array2::default(
            board.size().to_nd_index(),
        )));
    }

    let (_, cols) = board.size();
    let cols = usize::from(cols);

    let (_, base) = chase(board, &vec![false; cols]);

    // The bottom-row residue is affine in the first-row presses: column c of
    // the linear part is chase(e_c) xor chase(0).
    let columns: Vec<Vec<bool>> = (0..cols)
        .map(|c| {
            let mut first_row = vec![false; cols];
            first_row[c] = true;
            let (_, residue) = chase(board, &first_row);
            residue.iter().zip(&base).map(|(&a, &b)| a ^ b).collect()
        })
        .collect();

    let first_row = solve_gf2(&columns, &base)?;
    let (presses, _) = chase(board, &first_row);
    Some(PressPlan::from_press_mask(presses))
}

/// Presses the given first-row cells, then chases every remaining light down
/// the grid. Returns the full press mask and the lights left in the bottom
/// row, which are zero exactly when `first_row` solves the board.
fn chase(board: &Board, first_row: &[bool]) -> (Array2<bool>, Vec<bool>) {
    let (rows, cols) = board.size();
    let mut scratch = board.clone();
    let mut presses: Array2<bool> = Array2::default(board.size().to_nd_index());

    for (col, &press) in first_row.iter().enumerate() {
        if press {
            presses[[0, col]] = true;
            scratch.toggle_in_place((0, col as Coord));
        }
    }

    for row in 1..rows {
        for col in 0..cols {
            if scratch[(row - 1, col)] {
                presses[[usize::from(row), usize::from(col)]] = true;
                scratch.toggle_in_place((row, col));
            }
        }
    }

    let bottom = rows - 1;
    let residue = (0..cols).map(|col| scratch[(bottom, col)]).collect();
    (presses, residue)
}

/// Gauss-Jordan elimination over GF(2) on the square system given by
/// `columns` and `target`. Free variables are pinned to false.
fn solve_gf2(columns: &[Vec<bool>], target: &[bool]) -> Option<Vec<bool>> {
    let n = columns.len();
    let mut rows: Vec<Vec<bool>> = (0..n)
        .map(|r| {
            let mut row: Vec<bool> = columns.iter().map(|column| column[r]).collect();
            row.push(target[r]);
            row
        })
        .collect();

    let mut pivot_row_of_col = vec![None; n];
    let mut next_pivot = 0;
    for col in 0..n {
        let Some(found) = (next_pivot..n).find(|&r| rows[r][col]) else {
            continue;
        };
        rows.swap(next_pivot, found);

        let pivot_row = rows[next_pivot].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            if r != next_pivot && row[col] {
                for (cell, &pivot_cell) in row.iter_mut().zip(&pivot_row) {
                    *cell ^= pivot_cell;
                }
            }
        }

        pivot_row_of_col[col] = Some(next_pivot);
        next_pivot += 1;
    }

    // rows without a pivot are all-zero on the left, any residue on the
    // right means the system has no solution
    if rows[next_pivot..].iter().any(|row| row[n]) {
        return None;
    }

    let mut first_row = vec![false; n];
    for (col, pivot) in pivot_row_of_col.iter().enumerate() {
        if let Some(r) = *pivot {
            first_row[col] = rows[r][n];
        }
    }
    Some(first_row)
}
