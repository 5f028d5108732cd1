use crate::amazons::action::Action;

/// The typed failure modes at the edges of the core: malformed external input
/// and engine-internal bugs that should never actually fire. `InvalidPosition`
/// and `InvalidAction` are recoverable and meant to be matched on by callers
/// (the CLI re-prompts on them); `EmptyHistory` and `NoActionFound` are
/// asserted against internally and exist as a typed surface for misuse from
/// outside the search's own call discipline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    InvalidPosition { input: String, reason: String },
    InvalidAction { action: Action, reason: String },
    EmptyHistory,
    NoActionFound,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidPosition { input, reason } => {
                write!(f, "invalid position '{input}': {reason}")
            }
            EngineError::InvalidAction { action, reason } => {
                write!(f, "invalid action {action}: {reason}")
            }
            EngineError::EmptyHistory => write!(f, "undo called with no history to undo"),
            EngineError::NoActionFound => {
                write!(f, "search produced no action in a non-terminal position")
            }
        }
    }
}

impl std::error::Error for EngineError {}
