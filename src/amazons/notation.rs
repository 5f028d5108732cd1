use itertools::Itertools;
use regex::Regex;

use crate::amazons::action::Action;
use crate::amazons::board::Board;
use crate::amazons::errors::EngineError;
use crate::amazons::position::Position;

/// Parses the 4-line ASCII board-file format into a `Board`: board size,
/// player-0 queens, player-1 queens, arrows, one comma-separated list per
/// line. Never falls back to a default on malformed input — that choice
/// belongs to the CLI, not the library.
pub struct BoardFile;

impl BoardFile {
    pub fn parse(contents: &str) -> Result<Board, EngineError> {
        let mut lines = contents.lines();

        let size_line = lines.next().ok_or_else(|| EngineError::InvalidPosition {
            input: String::new(),
            reason: "board file is missing the size line".to_string(),
        })?;
        let size: usize = size_line.trim().parse().map_err(|_| EngineError::InvalidPosition {
            input: size_line.to_string(),
            reason: "board size must be an integer".to_string(),
        })?;

        let mut board = Board::new(size)?;

        let queens0 = lines.next().unwrap_or("");
        let queens1 = lines.next().unwrap_or("");
        let arrows = lines.next().unwrap_or("");

        for tag in Self::tokens(queens0) {
            board.place_queen(tag.parse().map_err(|_| Self::bad_position(tag))?, 0)?;
        }
        for tag in Self::tokens(queens1) {
            board.place_queen(tag.parse().map_err(|_| Self::bad_position(tag))?, 1)?;
        }
        for tag in Self::tokens(arrows) {
            board.place_arrow(tag.parse().map_err(|_| Self::bad_position(tag))?)?;
        }

        Ok(board)
    }

    fn tokens(line: &str) -> impl Iterator<Item = &str> {
        line.split(',').map(str::trim).filter(|tok| !tok.is_empty())
    }

    fn bad_position(tag: &str) -> EngineError {
        EngineError::InvalidPosition { input: tag.to_string(), reason: "not a valid position".to_string() }
    }

    /// Renders a board back into its 4-line form, for round-trip tests and
    /// for saving a position mid-game.
    pub fn render(board: &Board) -> String {
        let render_line = |positions: &[Position]| positions.iter().map(Position::notate).join(",");
        let arrows = (0..board.size())
            .flat_map(|r| (0..board.size()).map(move |c| Position::new(r, c)))
            .filter(|p| matches!(board.get(p), Ok(crate::amazons::cell::Cell::Arrow)))
            .map(|p| p.notate())
            .join(",");
        format!(
            "{}\n{}\n{}\n{}\n",
            board.size(),
            render_line(board.queens(0)),
            render_line(board.queens(1)),
            arrows,
        )
    }
}

/// Parses `source>destination>arrow` move notation into an unvalidated triple;
/// the caller (`Board::try_apply`) is responsible for checking it against a
/// specific board. The shape is checked with a regex first, the teacher's way
/// of rejecting garbage before the field-by-field `Position::from_str` calls
/// ever run (`battle_of_lits::notation`'s `Regex::new` for its move grammar).
pub struct MoveString;

impl MoveString {
    fn pattern() -> Regex {
        Regex::new(r"^(?<source>[a-zA-Z]\d{1,2})>(?<destination>[a-zA-Z]\d{1,2})>(?<arrow>[a-zA-Z]\d{1,2})$")
            .expect("move-string pattern is a fixed, valid regex")
    }

    pub fn parse(s: &str, player: u8) -> Result<Action, EngineError> {
        let trimmed = s.trim();
        let captures = Self::pattern().captures(trimmed).ok_or_else(|| EngineError::InvalidPosition {
            input: trimmed.to_string(),
            reason: "expected 'source>destination>arrow'".to_string(),
        })?;
        let parse_one = |name: &str| -> Result<Position, EngineError> {
            let tag = &captures[name];
            tag.parse().map_err(|_| EngineError::InvalidPosition {
                input: tag.to_string(),
                reason: "not a valid position".to_string(),
            })
        };
        Ok(Action::new(parse_one("source")?, parse_one("destination")?, parse_one("arrow")?, player))
    }
}
