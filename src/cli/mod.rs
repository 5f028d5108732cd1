mod options;

use std::process::exit;

pub use options::CliOptions;

use crate::amazons::board::{Board, Status};
use crate::amazons::consts::DEFAULT_BOARD_SIZE;
use crate::amazons::notation::{BoardFile, MoveString};
use crate::engine::{Engine, Evaluator};
use crate::utils::prelude::*;

/// The read-line command loop: the crate's external-collaborator stand-in.
/// It owns no engine internals — it only calls `Engine::choose_action` and
/// `Board::try_apply`/`Board::status`, the same boundary the teacher's
/// `LTPServer` keeps with `BLITSAgent`.
pub struct CliDriver {
    config: CliOptions,
    board: Option<Board>,
    engine: Option<Engine>,
    synced_len: usize,
}

impl CliDriver {
    pub fn new(config: CliOptions) -> CliDriver {
        CliDriver { config, board: None, engine: None, synced_len: 0 }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                return Ok(());
            }
            let args: Vec<&str> = line.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");
            self.dispatch(cmd, args.get(1..).unwrap_or(&[]))?;
        }
    }

    fn dispatch(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd {
            "" => Ok(()),
            "newgame" => self.new_game(args),
            "play" => self.play(args),
            "bestmove" => self.bestmove(),
            "undo" => self.undo(),
            "score" => self.score(),
            "status" => self.status(),
            "quit" => exit(0),
            _ => Err(anyhow!("unrecognized command '{cmd}'")),
        };

        if let Err(err) = &result {
            log::warn!("encountered recoverable error:\n{err}");
            println!("err: {err}");
        }
        Ok(())
    }

    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let path = args.first().map(|s| s.to_string()).or_else(|| self.config.board_file.clone());
        let board = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(&path).with_context(|| format!("reading board file {path}"))?;
                BoardFile::parse(&contents)?
            }
            None => Board::default_opening(DEFAULT_BOARD_SIZE)?,
        };

        self.engine = Some(Engine::new(board.clone(), self.config.engine_player, self.config.time_budget()));
        self.synced_len = 0;
        self.board = Some(board);

        println!("{}", BoardFile::render(self.get()?));
        Ok(())
    }

    fn play(&mut self, args: &[&str]) -> Result<()> {
        let notation = args.first().ok_or_else(|| anyhow!("no move provided"))?;
        let player = self.get()?.to_move();
        let action = MoveString::parse(notation, player)?;
        self.get_mut()?.try_apply(action)?;

        println!("{}", action.notate());
        Ok(())
    }

    fn bestmove(&mut self) -> Result<()> {
        let suffix: Vec<_> = self.get()?.history()[self.synced_len..].to_vec();
        let engine = self.engine.as_mut().ok_or_else(|| anyhow!("no game in progress"))?;
        let action = engine.choose_action(&suffix)?;

        self.get_mut()?.try_apply(action)?;
        self.synced_len = self.get()?.history().len();

        println!("{}", action.notate());
        Ok(())
    }

    fn undo(&mut self) -> Result<()> {
        self.get_mut()?.undo()?;
        if self.synced_len > self.get()?.history().len() {
            let board = self.get()?.clone();
            self.synced_len = board.history().len();
            self.engine = Some(Engine::new(board, self.config.engine_player, self.config.time_budget()));
        }
        println!("{}", BoardFile::render(self.get()?));
        Ok(())
    }

    fn score(&mut self) -> Result<()> {
        let evaluator = Evaluator::default();
        let engine_player = self.config.engine_player;
        let score = evaluator.evaluate(self.get_mut()?, engine_player);
        println!("{score}");
        Ok(())
    }

    fn status(&mut self) -> Result<()> {
        match self.get_mut()?.status() {
            Status::InProgress { to_move } => println!("in progress, player {to_move} to move"),
            Status::Over { winner } => println!("over, player {winner} wins"),
        }
        Ok(())
    }

    fn get(&self) -> Result<&Board> {
        self.board.as_ref().ok_or_else(|| anyhow!("no game in progress"))
    }

    fn get_mut(&mut self) -> Result<&mut Board> {
        self.board.as_mut().ok_or_else(|| anyhow!("no game in progress"))
    }
}
