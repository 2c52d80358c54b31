use clap::{Parser, Subcommand, command};
use std::path::PathBuf;

use crate::config::{DATA_DIR, PEOPLE_COUNT, TOP_COUNT};

#[derive(Parser)]
#[command()]
pub struct Args {
    /// Directory holding the name lists and the people file
    #[arg(long, global = true, default_value = DATA_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the people file
    Generate {
        /// The number of people to generate
        #[arg(default_value_t = PEOPLE_COUNT)]
        count: u32,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Never pick the last entry of a name list
        #[arg(long)]
        exclude_last: bool,
    },
    /// Print statistics for the people file
    Analyze {
        /// Length of the top-N lists
        #[arg(long, default_value_t = TOP_COUNT)]
        top: usize,
    },
}
