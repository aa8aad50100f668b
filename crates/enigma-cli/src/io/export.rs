use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use enigma_core::text::{group, GROUP_SIZE};

/// Open the destination for processed messages: the named file, or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let f = File::create(p).with_context(|| format!("could not open {}", p.display()))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Write `msg` as one line of five-symbol groups.
pub fn write_message_line<W: Write + ?Sized>(out: &mut W, msg: &str) -> Result<()> {
    writeln!(out, "{}", group(msg, GROUP_SIZE))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_grouped_line() {
        let mut buf = Vec::new();
        write_message_line(&mut buf, "QVPQSOKOILPUBKJ").unwrap();
        write_message_line(&mut buf, "").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "QVPQS OKOIL PUBKJ\n\n");
    }
}
