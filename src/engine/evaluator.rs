use crate::amazons::board::Board;

/// Tunable weights for the four-term linear evaluator. `Default` reproduces
/// the spec's own constants exactly; the CLI and test suite may override them
/// to experiment, but nothing in the engine depends on any value but the
/// default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalWeights {
    pub mobility: i32,
    pub territory: i32,
    pub reachability: i32,
    pub relative_territory: i32,
}

impl Default for EvalWeights {
    fn default() -> EvalWeights {
        EvalWeights { mobility: 2, territory: 8, reachability: 8, relative_territory: 2 }
    }
}

/// The static evaluator for nonterminal positions: mobility, territory,
/// reachability and relative territory, each `self_value - opponent_value`
/// from `engine_player`'s perspective, combined via `EvalWeights`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    pub weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Evaluator {
        Evaluator { weights }
    }

    pub fn evaluate(&self, board: &mut Board, engine_player: u8) -> i32 {
        let opponent = 1 - engine_player;

        let mobility = self.mobility(board, engine_player) - self.mobility(board, opponent);

        let self_reach = board.reachability_grid(engine_player);
        let opp_reach = board.reachability_grid(opponent);
        let to_move = board.to_move();

        let territory = self.territory(&self_reach, &opp_reach, engine_player, to_move);
        let reachability = self_reach.iter().filter(|d| d.is_some()).count() as i32
            - opp_reach.iter().filter(|d| d.is_some()).count() as i32;
        let relative_territory = self.relative_territory(&self_reach, &opp_reach);

        let total = self.weights.mobility as f64 * mobility as f64
            + self.weights.territory as f64 * territory
            + self.weights.reachability as f64 * reachability as f64
            + self.weights.relative_territory as f64 * relative_territory as f64;

        total.round() as i32
    }

    fn mobility(&self, board: &mut Board, player: u8) -> i32 {
        board.queens(player).to_vec().iter().map(|&q| board.reachable_from(q, None).len() as i32).sum()
    }

    /// The self-minus-opponent quarter-point race over every cell, already
    /// divided by the quarter-unit base (so ties contribute 0.25, strict wins 1.0).
    fn territory(&self, self_reach: &[Option<u32>], opp_reach: &[Option<u32>], engine_player: u8, to_move: u8) -> f64 {
        let mut self_quarters = 0i32;
        let mut opp_quarters = 0i32;
        for (ds, d_opp) in self_reach.iter().zip(opp_reach.iter()) {
            match (ds, d_opp) {
                (Some(_), None) => self_quarters += 4,
                (None, Some(_)) => opp_quarters += 4,
                (Some(a), Some(b)) if a < b => self_quarters += 4,
                (Some(a), Some(b)) if b < a => opp_quarters += 4,
                (Some(_), Some(_)) => {
                    if to_move == engine_player {
                        self_quarters += 1;
                    } else {
                        opp_quarters += 1;
                    }
                }
                (None, None) => {}
            }
        }
        (self_quarters - opp_quarters) as f64 / 4.0
    }

    fn relative_territory(&self, self_reach: &[Option<u32>], opp_reach: &[Option<u32>]) -> i32 {
        let mut total = 0i32;
        for (ds, d_opp) in self_reach.iter().zip(opp_reach.iter()) {
            total += match (ds, d_opp) {
                (Some(_), None) => 4,
                (None, Some(_)) => -4,
                (Some(a), Some(b)) => *b as i32 - *a as i32,
                (None, None) => 0,
            };
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_match_the_specified_constants() {
        let weights = EvalWeights::default();
        assert_eq!(weights.mobility, 2);
        assert_eq!(weights.territory, 8);
        assert_eq!(weights.reachability, 8);
        assert_eq!(weights.relative_territory, 2);
    }

    #[test]
    fn default_opening_score_negates_under_player_swap() {
        let mut board = Board::default_opening(10).unwrap();
        let evaluator = Evaluator::default();
        let score0 = evaluator.evaluate(&mut board, 0);
        let score1 = evaluator.evaluate(&mut board, 1);
        assert_eq!(score0, -score1);
    }

    #[test]
    fn swapping_player_roles_on_a_symmetric_position_negates_the_score() {
        let mut board = Board::new(6).unwrap();
        board.place_queen("a1".parse().unwrap(), 0).unwrap();
        board.place_queen("f6".parse().unwrap(), 1).unwrap();
        let evaluator = Evaluator::default();
        let score0 = evaluator.evaluate(&mut board, 0);
        let score1 = evaluator.evaluate(&mut board, 1);
        assert_eq!(score0, -score1);
    }
}
