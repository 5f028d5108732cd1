pub mod evaluator;
pub mod search;
pub mod timer;
pub mod tree;

use std::time::Duration;

use crate::amazons::action::Action;
use crate::amazons::board::Board;
use crate::amazons::errors::EngineError;

pub use evaluator::{EvalWeights, Evaluator};
pub use timer::Timer;
pub use tree::SearchNode;

/// The engine side of a game: a fast internal board, which player it is
/// playing, its time budget per move, and the persistent search tree that
/// survives across turns for move ordering. Grounded on the teacher's
/// `LTPServer`/`BLITSAgent` split, collapsed into a single façade since this
/// engine has no separate strategy-selection surface.
pub struct Engine {
    board: Board,
    engine_player: u8,
    time_budget: Duration,
    evaluator: Evaluator,
    root: SearchNode,
}

impl Engine {
    pub fn new(board: Board, engine_player: u8, time_budget: Duration) -> Engine {
        Engine { board, engine_player, time_budget, evaluator: Evaluator::default(), root: SearchNode::root() }
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Engine {
        self.evaluator = Evaluator::new(weights);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Synchronises the fast internal board with whatever the opponent has
    /// played since the engine's last turn, searches for a move, commits it
    /// to the internal board, and returns it. `opponent_suffix` is the tail
    /// of actions the external board has recorded since this engine last
    /// moved; applying it here is far cheaper than re-copying the full
    /// external position on every turn.
    pub fn choose_action(&mut self, opponent_suffix: &[Action]) -> Result<Action, EngineError> {
        for &action in opponent_suffix {
            self.board.apply(action);
            self.root = self.root.descend(action);
        }

        let chosen = search::choose_action(&mut self.board, &mut self.root, self.engine_player, &self.evaluator, self.time_budget)?;

        self.board.apply(chosen);
        self.root = self.root.descend(chosen);
        Ok(chosen)
    }
}
