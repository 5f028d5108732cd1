#![allow(dead_code)]

pub mod amazons;
pub mod cli;
pub mod engine;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeSet, HashMap, HashSet},
            ops::{Add, Sub},
        };
    }
}

pub mod prelude {
    pub use super::amazons::prelude::*;
    pub use super::cli::{CliDriver, CliOptions};
    pub use super::engine::{EvalWeights, Engine, Evaluator};
    pub use super::utils::prelude::*;
}
