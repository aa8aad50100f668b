use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "enigma", version, about = "Rotor cipher machine simulator")]
pub struct Cli {
    /// Trace every keystroke (rotor settings and signal path) on stderr.
    #[arg(long)]
    pub verbose: bool,

    /// Machine configuration file.
    pub config: PathBuf,

    /// Messages to process (default: stdin).
    pub input: Option<PathBuf>,

    /// Where to write processed messages (default: stdout).
    pub output: Option<PathBuf>,
}
