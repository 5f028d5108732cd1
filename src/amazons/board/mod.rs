mod empties;
mod indexing;
mod moves;
mod territory;

pub use empties::EmptyCells;
pub use moves::Rays;

use crate::amazons::action::Action;
use crate::amazons::cell::Cell;
use crate::amazons::consts::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, PLAYER_0_DEFAULT_POS, PLAYER_1_DEFAULT_POS};
use crate::amazons::errors::EngineError;
use crate::amazons::position::Position;

/// Whether the game is decided. The side to move loses as soon as it has no
/// legal action left; there are no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress { to_move: u8 },
    Over { winner: u8 },
}

/// A Game of the Amazons position: an N×N grid plus the derived indices kept
/// consistent with it on every mutation (invariants I1-I4: `empty_cells`
/// mirrors the grid's empty cells exactly; `queens[p]` is exactly the set of
/// cells holding a queen of player `p`; per-player queen and cumulative arrow
/// counts are monotonic within a game; `history.len()` is the number of
/// applied-and-not-undone actions). Mutated in place by the engine via
/// `apply`/`undo` rather than copied, mirroring the teacher's in-place
/// `Board`.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    empty_cells: EmptyCells,
    queens: [Vec<Position>; 2],
    history: Vec<Action>,
    generation: u64,
    reach_cache: Vec<Option<(u64, Rays)>>,
    has_moves_cache: [Option<(u64, bool)>; 2],
}

impl Board {
    /// An empty `size`x`size` board with no queens or arrows placed yet.
    pub fn new(size: usize) -> Result<Board, EngineError> {
        if !(2 < size && size <= MAX_BOARD_SIZE) {
            return Err(EngineError::InvalidPosition {
                input: size.to_string(),
                reason: format!("board size must be in 3..={MAX_BOARD_SIZE}"),
            });
        }
        Ok(Board {
            size,
            grid: vec![Cell::Empty; size * size],
            empty_cells: EmptyCells::full(size),
            queens: [Vec::new(), Vec::new()],
            history: Vec::new(),
            generation: 0,
            reach_cache: vec![None; size * size],
            has_moves_cache: [None, None],
        })
    }

    /// The standard 10x10 opening: 4 queens per side at the positions in
    /// `consts::PLAYER_{0,1}_DEFAULT_POS`, no arrows shot yet.
    pub fn default_opening(size: usize) -> Result<Board, EngineError> {
        if size != DEFAULT_BOARD_SIZE {
            return Err(EngineError::InvalidPosition {
                input: size.to_string(),
                reason: format!("the default opening is only defined for a {DEFAULT_BOARD_SIZE}x{DEFAULT_BOARD_SIZE} board"),
            });
        }
        let mut board = Board::new(size)?;
        for tag in PLAYER_0_DEFAULT_POS {
            board.place_queen(tag.parse().expect("built-in default positions always parse"), 0)?;
        }
        for tag in PLAYER_1_DEFAULT_POS {
            board.place_queen(tag.parse().expect("built-in default positions always parse"), 1)?;
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn queens(&self, player: u8) -> &[Position] {
        &self.queens[player as usize]
    }

    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Player 0 moves first; parity of the history length says whose turn it is.
    pub fn to_move(&self) -> u8 {
        (self.history.len() % 2) as u8
    }

    /// Setup-only placement, used by `default_opening` and the board-file
    /// loader. Not part of the apply/undo history.
    pub fn place_queen(&mut self, pos: Position, player: u8) -> Result<(), EngineError> {
        self.require_empty(&pos)?;
        self.set_unchecked(&pos, Cell::queen_of(player));
        self.empty_cells.set_occupied(&pos);
        self.queens[player as usize].push(pos);
        self.bump_generation();
        Ok(())
    }

    /// Setup-only placement of a pre-existing arrow (board-file loading).
    pub fn place_arrow(&mut self, pos: Position) -> Result<(), EngineError> {
        self.require_empty(&pos)?;
        self.set_unchecked(&pos, Cell::Arrow);
        self.empty_cells.set_occupied(&pos);
        self.bump_generation();
        Ok(())
    }

    fn require_empty(&self, pos: &Position) -> Result<(), EngineError> {
        if !self.in_bounds(pos) {
            return Err(EngineError::InvalidPosition {
                input: pos.notate(),
                reason: format!("out of bounds for a {}x{} board", self.size, self.size),
            });
        }
        if !self.get_unchecked(pos).is_empty() {
            return Err(EngineError::InvalidPosition {
                input: pos.notate(),
                reason: "cell is already occupied".to_string(),
            });
        }
        Ok(())
    }

    fn bump_generation(&mut self) {
        self.generation += 1;
    }

    /// Applies `action` without re-deriving legality. Precondition: `action`
    /// is legal for the board's current state — the search only ever passes
    /// actions it generated itself via `actions_for`, so this is checked with
    /// `debug_assert!` rather than surfaced as a recoverable error.
    pub fn apply(&mut self, action: Action) {
        debug_assert_eq!(action.player, self.to_move(), "action played out of turn");
        debug_assert!(self.get_unchecked(&action.source).queen_player() == Some(action.player));
        debug_assert!(self.empty_cells.contains(&action.destination));

        self.set_unchecked(&action.source, Cell::Empty);
        self.empty_cells.set_empty(&action.source);

        self.set_unchecked(&action.destination, Cell::queen_of(action.player));
        self.empty_cells.set_occupied(&action.destination);

        self.set_unchecked(&action.arrow, Cell::Arrow);
        self.empty_cells.set_occupied(&action.arrow);

        let queens = &mut self.queens[action.player as usize];
        let slot = queens.iter().position(|&q| q == action.source).expect("source holds one of this player's queens");
        queens[slot] = action.destination;

        self.history.push(action);
        self.bump_generation();
    }

    /// Validates `action` against `actions_for(action.player)` before applying;
    /// the entry point for untrusted (human/UI) input.
    pub fn try_apply(&mut self, action: Action) -> Result<(), EngineError> {
        if action.player != self.to_move() {
            return Err(EngineError::InvalidAction { action, reason: "not this player's turn".to_string() });
        }
        let legal = self.actions_for(action.player);
        if !legal.contains(&action) {
            return Err(EngineError::InvalidAction { action, reason: "not a legal queen-move/arrow-shot pair".to_string() });
        }
        self.apply(action);
        Ok(())
    }

    /// Reverses the most recently applied action. Strict LIFO: `undo` after
    /// `undo` walks `history` back to empty, at which point it errors.
    pub fn undo(&mut self) -> Result<Action, EngineError> {
        let action = self.history.pop().ok_or(EngineError::EmptyHistory)?;

        self.set_unchecked(&action.destination, Cell::Empty);
        self.empty_cells.set_empty(&action.destination);

        self.set_unchecked(&action.arrow, Cell::Empty);
        self.empty_cells.set_empty(&action.arrow);

        self.set_unchecked(&action.source, Cell::queen_of(action.player));
        self.empty_cells.set_occupied(&action.source);

        let queens = &mut self.queens[action.player as usize];
        let slot = queens.iter().position(|&q| q == action.destination).expect("destination holds one of this player's queens");
        queens[slot] = action.source;

        self.bump_generation();
        Ok(action)
    }

    /// The side to move loses as soon as it cannot act.
    pub fn status(&mut self) -> Status {
        let to_move = self.to_move();
        if self.has_moves(to_move) {
            Status::InProgress { to_move }
        } else {
            Status::Over { winner: 1 - to_move }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opening_places_four_queens_each_side() {
        let board = Board::default_opening(10).unwrap();
        assert_eq!(board.queens(0).len(), 4);
        assert_eq!(board.queens(1).len(), 4);
        assert_eq!(board.to_move(), 0);
    }

    #[test]
    fn default_opening_rejects_non_default_size() {
        assert!(Board::default_opening(12).is_err());
    }

    #[test]
    fn apply_then_undo_restores_exact_state() {
        let mut board = Board::default_opening(10).unwrap();
        let before = board.clone();
        let action = board.actions_for(0)[0];
        board.apply(action);
        assert_eq!(board.history().len(), 1);
        let undone = board.undo().unwrap();
        assert_eq!(undone, action);
        assert_eq!(board.history().len(), 0);
        assert_eq!(board.queens(0), before.queens(0));
        assert_eq!(board.queens(1), before.queens(1));
        for r in 0..10 {
            for c in 0..10 {
                let p = Position::new(r, c);
                assert_eq!(board.get(&p).unwrap(), before.get(&p).unwrap());
            }
        }
    }

    #[test]
    fn undo_with_empty_history_errors() {
        let mut board = Board::default_opening(10).unwrap();
        assert_eq!(board.undo(), Err(EngineError::EmptyHistory));
    }

    #[test]
    fn try_apply_rejects_illegal_action() {
        let mut board = Board::default_opening(10).unwrap();
        let bogus = Action::new("a4".parse().unwrap(), "a4".parse().unwrap(), "a4".parse().unwrap(), 0);
        assert!(board.try_apply(bogus).is_err());
    }

    #[test]
    fn forced_loss_is_reported_for_the_boxed_in_side() {
        let mut board = Board::new(4).unwrap();
        board.place_queen("b2".parse().unwrap(), 0).unwrap();
        board.place_queen("d4".parse().unwrap(), 1).unwrap();
        for neighbour in ["a1", "a2", "a3", "b1", "b3", "c1", "c2", "c3"] {
            board.place_arrow(neighbour.parse().unwrap()).unwrap();
        }
        assert_eq!(board.status(), Status::Over { winner: 1 });
    }
}
