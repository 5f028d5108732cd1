/// The board size used when no explicit size is given (`Board::default_opening`).
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// The largest board size the notation layer can represent: columns are tagged
/// with a single letter `a..z`.
pub const MAX_BOARD_SIZE: usize = 26;

/// Number of queens each player starts with on the default opening.
pub const DEFAULT_QUEENS_PER_PLAYER: usize = 4;

/// A terminal-position score large enough to dominate any heuristic evaluation.
/// Adjusted by remaining depth so that the search prefers to win sooner and
/// lose later (see `Evaluator`/`search`). Grounded on `original_source/src/const.py`'s
/// `WIN = 100000`.
pub const WIN: i32 = 100_000;

/// Iterative deepening never searches past this depth.
pub const MAX_DEPTH: u8 = 10;

/// player-0's starting queen squares on the default 10x10 opening.
pub const PLAYER_0_DEFAULT_POS: [&str; 4] = ["a4", "d1", "g1", "j4"];

/// player-1's starting queen squares on the default 10x10 opening.
pub const PLAYER_1_DEFAULT_POS: [&str; 4] = ["a7", "d10", "g10", "j7"];
