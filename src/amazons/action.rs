use crate::amazons::position::Position;

/// A full turn: move one queen, then shoot an arrow from the queen's destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub source: Position,
    pub destination: Position,
    pub arrow: Position,
    pub player: u8,
}

impl Action {
    pub fn new(source: Position, destination: Position, arrow: Position, player: u8) -> Action {
        Action { source, destination, arrow, player }
    }

    pub fn notate(&self) -> String {
        format!("{}>{}>{}", self.source, self.destination, self.arrow)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}
