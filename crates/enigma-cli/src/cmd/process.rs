use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use enigma_core::machine::Machine;
use enigma_core::setup::{is_setup_line, set_up};

use crate::io::export;

/// Run each line of `input` through `machine`.
///
/// Setup lines reconfigure the machine and produce no output. Every other
/// line is converted and written to `out` in five-symbol groups.
pub fn process<R, W>(machine: &mut Machine, input: R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write + ?Sized,
{
    for (n, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let lineno = n + 1;

        if is_setup_line(&line) {
            set_up(machine, &line).with_context(|| format!("line {lineno}: bad setup"))?;
            tracing::debug!(lineno, settings = %machine.settings(), "machine set up");
            continue;
        }

        let converted = machine
            .convert_str(&line)
            .with_context(|| format!("line {lineno}: cannot convert message"))?;
        export::write_message_line(out, &converted)?;
    }

    out.flush()?;
    Ok(())
}
