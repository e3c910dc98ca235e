use ndarray::Array2;

use super::*;

/// Generation strategy that samples every cell independently against the
/// configured light chance. Boards that come out with all lights off are
/// resampled from scratch, so a fresh game always has something to do.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        let chance = config.light_chance;
        if chance.is_nan() || chance <= 0.0 {
            log::warn!("Light chance {} can never produce a lit cell", chance);
            return Err(GameError::DegenerateChance);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for attempt in 0..MAX_GEN_ATTEMPTS {
            let board = Board::from_light_mask(Array2::from_shape_fn(
                config.size.to_nd_index(),
                |_| rng.random::<f64>() < chance,
            ));

            if !board.is_dark() {
                if attempt > 0 {
                    log::debug!("Accepted board after {} all-off rejections", attempt);
                }
                return Ok(board);
            }
        }

        log::warn!(
            "All lights off in {} boards at chance {}, giving up",
            MAX_GEN_ATTEMPTS,
            chance
        );
        Err(GameError::DegenerateChance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_board_is_never_all_off() {
        let config = GameConfig::new((3, 3), 0.25).unwrap();

        for seed in 0..64 {
            let board = RandomBoardGenerator::new(seed).generate(config).unwrap();
            assert!(!board.is_dark(), "seed {seed}");
            assert_eq!(board.size(), (3, 3));
        }
    }

    #[test]
    fn zero_chance_fails_instead_of_spinning() {
        let config = GameConfig::new((3, 3), 0.0).unwrap();

        assert_eq!(
            RandomBoardGenerator::new(1).generate(config),
            Err(GameError::DegenerateChance)
        );
    }

    #[test]
    fn full_chance_lights_every_cell() {
        let config = GameConfig::new((4, 2), 1.0).unwrap();

        let board = RandomBoardGenerator::new(9).generate(config).unwrap();

        assert_eq!(board.lit_count(), board.total_cells());
    }

    #[test]
    fn same_seed_reproduces_the_same_board() {
        let config = GameConfig::new((5, 5), 0.4).unwrap();

        let first = RandomBoardGenerator::new(42).generate(config).unwrap();
        let second = RandomBoardGenerator::new(42).generate(config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_dimensions_are_rejected() {
        let config = GameConfig::new_unchecked((0, 5), 0.5);

        assert_eq!(
            RandomBoardGenerator::new(1).generate(config),
            Err(GameError::EmptyBoard)
        );
    }
}
