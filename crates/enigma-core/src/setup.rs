//! Message-group setup lines.
//!
//! A setup line selects the rotors for the following messages, gives their
//! starting positions, and wires the plugboard:
//!
//! ```text
//! * B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)
//! ```
//!
//! Any line containing `*` is a setup line. The `*` may stand alone or be
//! glued to the first rotor name (`*B`).

use crate::config::Tokens;
use crate::errors::{EnigmaError, EnigmaResult};
use crate::machine::Machine;
use crate::permutation::Permutation;

/// Marks a setup line.
pub const SETUP_MARKER: char = '*';

/// True iff `line` is a setup line rather than a message.
pub fn is_setup_line(line: &str) -> bool {
    line.contains(SETUP_MARKER)
}

/// A parsed setup line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupLine {
    /// Rotor names, reflector first.
    pub rotors: Vec<String>,
    /// Initial positions of slots `1..`, leftmost first.
    pub setting: String,
    /// Plugboard wiring in cycle notation.
    pub plugboard: String,
}

/// Parse a setup line for a machine with `num_rotors` slots.
pub fn parse_setup_line(line: &str, num_rotors: usize) -> EnigmaResult<SetupLine> {
    let mut tokens = Tokens::new(line);

    let mut rotors = Vec::new();
    let lead = tokens.next("setup marker")?;
    let lead = lead.strip_prefix(SETUP_MARKER).unwrap_or(lead);
    if !lead.is_empty() {
        rotors.push(lead.to_string());
    }
    while rotors.len() < num_rotors {
        let what = format!("rotor {} of {num_rotors}", rotors.len() + 1);
        rotors.push(tokens.next(&what)?.to_string());
    }

    let setting = tokens.next("rotor setting")?.to_string();
    let plugboard = tokens.cycles()?;
    if let Some(extra) = tokens.peek() {
        return Err(EnigmaError::malformed_cycle(format!(
            "unexpected plugboard token {extra:?}"
        )));
    }

    Ok(SetupLine {
        rotors,
        setting,
        plugboard,
    })
}

impl SetupLine {
    /// Apply this setup to `machine`, replacing its rotors, settings and
    /// plugboard. The machine is left untouched on error.
    pub fn apply(&self, machine: &mut Machine) -> EnigmaResult<()> {
        let plugboard = Permutation::parse(&self.plugboard, machine.alphabet().clone())?;
        machine.configure(&self.rotors, &self.setting, plugboard)
    }
}

/// Parse `line` against `machine` and apply it.
pub fn set_up(machine: &mut Machine, line: &str) -> EnigmaResult<()> {
    parse_setup_line(line, machine.num_rotors())?.apply(machine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_machine;
    use assert_matches::assert_matches;

    const CONFIG: &str = "ABCD 3 1\n R1 R (AB) (CD)\n F1 N (AC)\n M1 MA (ABCD)\n";

    #[test]
    fn detects_setup_lines() {
        assert!(is_setup_line("* R1 F1 M1 AB"));
        assert!(is_setup_line("*R1 F1 M1 AB"));
        assert!(!is_setup_line("ABCD ABCD"));
    }

    #[test]
    fn parses_standalone_marker() {
        let s = parse_setup_line("* B Beta III IV I AXLE (HQ) (EX) (IP)", 5).unwrap();
        assert_eq!(s.rotors, ["B", "Beta", "III", "IV", "I"]);
        assert_eq!(s.setting, "AXLE");
        assert_eq!(s.plugboard, "(HQ) (EX) (IP)");
    }

    #[test]
    fn parses_glued_marker() {
        let s = parse_setup_line("*B Beta III IV I AXLE", 5).unwrap();
        assert_eq!(s.rotors[0], "B");
        assert_eq!(s.plugboard, "");
    }

    #[test]
    fn truncated_setup_rejected() {
        assert_matches!(parse_setup_line("* R1 F1", 3), Err(EnigmaError::Truncated(_)));
        assert_matches!(parse_setup_line("* R1 F1 M1", 3), Err(EnigmaError::Truncated(_)));
    }

    #[test]
    fn huge_slot_count_runs_out_of_tokens() {
        assert_matches!(
            parse_setup_line("* R1 M1 A", 1_000_000_000_000),
            Err(EnigmaError::Truncated(_))
        );
    }

    #[test]
    fn stray_plugboard_token_rejected() {
        assert_matches!(
            parse_setup_line("* R1 F1 M1 AB (AC) D", 3),
            Err(EnigmaError::MalformedCycle(_))
        );
    }

    #[test]
    fn applies_to_machine() {
        let mut m = load_machine(CONFIG).unwrap();
        set_up(&mut m, "* R1 F1 M1 AC (BD)").unwrap();
        assert!(m.is_ready());
        assert_eq!(m.settings(), "AC");
        assert_eq!(m.plugboard().permute_symbol('B').unwrap(), 'D');
    }

    #[test]
    fn reflector_must_come_first() {
        let mut m = load_machine(CONFIG).unwrap();
        assert_matches!(
            set_up(&mut m, "* F1 R1 M1 AA"),
            Err(EnigmaError::ReflectorRequired(name)) if name == "F1"
        );
        assert!(!m.is_ready());
    }

    #[test]
    fn bad_plugboard_leaves_machine_unchanged() {
        let mut m = load_machine(CONFIG).unwrap();
        set_up(&mut m, "* R1 F1 M1 AB").unwrap();
        assert_matches!(
            set_up(&mut m, "* R1 F1 M1 CC (AB) (BC)"),
            Err(EnigmaError::MalformedCycle(_))
        );
        assert_eq!(m.settings(), "AB");
    }

    #[test]
    fn setup_resets_rotor_state() {
        let mut m = load_machine(CONFIG).unwrap();
        set_up(&mut m, "* R1 F1 M1 AA").unwrap();
        let first = m.convert_str("ABCDABCD").unwrap();
        set_up(&mut m, "* R1 F1 M1 AA").unwrap();
        assert_eq!(m.convert_str("ABCDABCD").unwrap(), first);
    }
}
