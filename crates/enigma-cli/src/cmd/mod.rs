use anyhow::{Context, Result};

use crate::args::Cli;
use crate::io::{export, input};

mod process;

pub use process::process;

/// Load the machine described by `cli.config` and run every message through it.
pub fn run(cli: Cli) -> Result<()> {
    let config = input::read_config(&cli.config)?;
    let mut machine = enigma_core::config::load_machine(&config)
        .with_context(|| format!("bad configuration in {}", cli.config.display()))?;
    machine.set_verbose(cli.verbose);

    let messages = input::open_messages(cli.input.as_deref())?;
    let mut out = export::open_output(cli.output.as_deref())?;
    process(&mut machine, messages, &mut out)
}
