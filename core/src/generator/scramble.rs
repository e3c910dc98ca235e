use super::*;

/// Generation strategy that starts from a dark board and presses random
/// cells. Every board built this way can be pressed back to dark, which
/// plain per-cell sampling does not guarantee; the light chance of the
/// config is ignored, only its size is used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrambleBoardGenerator {
    seed: u64,
    presses: CellCount,
}

impl ScrambleBoardGenerator {
    pub const fn new(seed: u64, presses: CellCount) -> Self {
        Self { seed, presses }
    }
}

impl BoardGenerator for ScrambleBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.presses == 0 {
            log::warn!("Zero scramble presses always leave the board dark");
            return Err(GameError::DegenerateChance);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..MAX_GEN_ATTEMPTS {
            let mut board = Board::dark(config.size);
            for _ in 0..self.presses {
                let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
                board.toggle_in_place(coords);
            }

            // presses can cancel each other out, scramble again if they did
            if !board.is_dark() {
                return Ok(board);
            }
        }

        log::warn!(
            "{} presses cancelled out in {} scrambles, giving up",
            self.presses,
            MAX_GEN_ATTEMPTS
        );
        Err(GameError::DegenerateChance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrambled_board_is_never_all_off() {
        let config = GameConfig::new((4, 4), 0.0).unwrap();

        for seed in 0..64 {
            let board = ScrambleBoardGenerator::new(seed, 10)
                .generate(config)
                .unwrap();
            assert!(!board.is_dark(), "seed {seed}");
        }
    }

    #[test]
    fn scrambled_board_is_always_solvable() {
        let config = GameConfig::new((5, 5), 0.0).unwrap();

        for seed in 0..16 {
            let board = ScrambleBoardGenerator::new(seed, 12)
                .generate(config)
                .unwrap();

            let plan = solve(&board).expect("scrambled boards always have a plan");
            assert!(plan.apply(&board).unwrap().is_dark(), "seed {seed}");
        }
    }

    #[test]
    fn zero_presses_fail_instead_of_spinning() {
        let config = GameConfig::new((3, 3), 0.5).unwrap();

        assert_eq!(
            ScrambleBoardGenerator::new(1, 0).generate(config),
            Err(GameError::DegenerateChance)
        );
    }

    #[test]
    fn same_seed_reproduces_the_same_board() {
        let config = GameConfig::new((6, 4), 0.0).unwrap();

        let first = ScrambleBoardGenerator::new(3, 9).generate(config).unwrap();
        let second = ScrambleBoardGenerator::new(3, 9).generate(config).unwrap();

        assert_eq!(first, second);
    }
}
