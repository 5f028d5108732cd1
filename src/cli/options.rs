use std::time::Duration;

use clap::Parser;

/// Command-line configuration for the `amazons` binary, grounded on the
/// teacher's `LTPServerOptions`.
#[derive(Clone, Debug, Parser)]
pub struct CliOptions {
    /// Path to a board file to load at startup; falls back to the default
    /// 10x10 opening when omitted.
    #[arg(short, long)]
    pub board_file: Option<String>,

    /// Per-move time budget, in milliseconds.
    #[arg(short, long, default_value_t = 2_000)]
    pub time_budget_ms: u64,

    /// Which player the engine plays: 0 or 1.
    #[arg(short, long, default_value_t = 1)]
    pub engine_player: u8,

    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl CliOptions {
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_time_budget_and_log_level_flags() {
        let options = CliOptions::parse_from(["amazons", "--time-budget-ms", "500", "--log-level", "debug"]);
        assert_eq!(options.time_budget(), Duration::from_millis(500));
        assert_eq!(options.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn defaults_to_engine_playing_player_one() {
        let options = CliOptions::parse_from(["amazons"]);
        assert_eq!(options.engine_player, 1);
        assert_eq!(options.time_budget(), Duration::from_millis(2_000));
    }
}
