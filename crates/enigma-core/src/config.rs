//! Machine configuration text.
//!
//! A configuration is a whitespace-separated token stream:
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ      alphabet
//! 5 3                             rotor slots, pawls
//! I MQ (AELTPHQXRU) (BKNW) ...    name, type+notches, cycles
//! Beta N (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B R (AE) (BN) (CK) ...
//! ```
//!
//! The type token starts with `M` (moving, followed by its notch symbols), `N`
//! (fixed) or `R` (reflector). Every token that starts with `(` after it
//! belongs to the rotor's wiring.
//!
//! This module only parses text handed to it; reading files is up to the
//! caller.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::errors::{EnigmaError, EnigmaResult};
use crate::machine::Machine;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// One rotor descriptor, as written in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    pub name: String,
    pub tag: char,
    pub notches: String,
    pub cycles: String,
}

impl RotorSpec {
    /// Build the rotor over `alphabet`.
    pub fn build(&self, alphabet: &Arc<Alphabet>) -> EnigmaResult<Rotor> {
        let perm = Permutation::parse(&self.cycles, alphabet.clone())?;
        match self.tag {
            'M' => Rotor::moving(self.name.clone(), perm, &self.notches),
            'N' | 'R' if !self.notches.is_empty() => Err(EnigmaError::InvalidNotch {
                rotor: self.name.clone(),
                reason: "only moving rotors have notches".to_string(),
            }),
            'N' => Ok(Rotor::fixed(self.name.clone(), perm)),
            'R' => Ok(Rotor::reflector(self.name.clone(), perm)),
            other => Err(EnigmaError::UnknownRotorType {
                rotor: self.name.clone(),
                tag: other.to_string(),
            }),
        }
    }
}

/// A parsed machine configuration.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    pub alphabet: Arc<Alphabet>,
    pub num_rotors: usize,
    pub num_pawls: usize,
    pub rotors: Vec<RotorSpec>,
}

impl MachineConfig {
    /// Build every rotor and the machine holding them.
    pub fn build(&self) -> EnigmaResult<Machine> {
        validate_config(self)?;
        let pool = self
            .rotors
            .iter()
            .map(|spec| spec.build(&self.alphabet))
            .collect::<EnigmaResult<Vec<_>>>()?;
        Machine::new(self.alphabet.clone(), self.num_rotors, self.num_pawls, pool)
    }
}

/// Whitespace tokenizer with one token of lookahead.
pub(crate) struct Tokens<'a> {
    inner: std::iter::Peekable<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().peekable(),
        }
    }

    pub(crate) fn next(&mut self, what: &str) -> EnigmaResult<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| EnigmaError::truncated(format!("expected {what}")))
    }

    pub(crate) fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    /// Consume consecutive `(...)` tokens and join them with spaces.
    pub(crate) fn cycles(&mut self) -> EnigmaResult<String> {
        let mut cycles = Vec::new();
        while let Some(tok) = self.peek().filter(|t| t.starts_with('(')) {
            if !tok.ends_with(')') {
                return Err(EnigmaError::malformed_cycle(format!(
                    "token {tok:?} is not parenthesized"
                )));
            }
            cycles.push(tok);
            self.inner.next();
        }
        Ok(cycles.join(" "))
    }
}

fn parse_count(tok: &str, what: &str) -> EnigmaResult<usize> {
    tok.parse()
        .map_err(|_| EnigmaError::invalid_config(format!("expected {what}, found {tok:?}")))
}

/// Parse configuration text.
pub fn parse_config(text: &str) -> EnigmaResult<MachineConfig> {
    let mut tokens = Tokens::new(text);

    let alphabet = Arc::new(Alphabet::new(tokens.next("alphabet")?)?);
    let num_rotors = parse_count(tokens.next("number of rotor slots")?, "number of rotor slots")?;
    let num_pawls = parse_count(tokens.next("number of pawls")?, "number of pawls")?;
    if tokens.peek().is_some_and(|t| t.parse::<i64>().is_ok()) {
        return Err(EnigmaError::invalid_config(
            "only two numbers (rotor slots and pawls) may follow the alphabet",
        ));
    }

    let mut rotors = Vec::new();
    while let Some(name) = tokens.peek() {
        tokens.next("rotor name")?;
        let kind = tokens.next(&format!("type of rotor {name}"))?;
        let mut chars = kind.chars();
        let tag = chars.next().unwrap_or_default();
        let notches = chars.as_str().to_string();
        let cycles = tokens.cycles()?;
        rotors.push(RotorSpec {
            name: name.to_string(),
            tag,
            notches,
            cycles,
        });
    }

    let cfg = MachineConfig {
        alphabet,
        num_rotors,
        num_pawls,
        rotors,
    };
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Validate the machine dimensions and descriptor tags.
pub fn validate_config(cfg: &MachineConfig) -> EnigmaResult<()> {
    if cfg.num_rotors <= 1 {
        return Err(EnigmaError::invalid_config(
            "number of rotor slots must be greater than one",
        ));
    }

    if cfg.num_pawls >= cfg.num_rotors {
        return Err(EnigmaError::invalid_config(
            "number of pawls must be smaller than number of rotor slots",
        ));
    }

    if let Some(spec) = cfg.rotors.iter().find(|s| !matches!(s.tag, 'M' | 'N' | 'R')) {
        return Err(EnigmaError::UnknownRotorType {
            rotor: spec.name.clone(),
            tag: spec.tag.to_string(),
        });
    }

    if cfg.num_rotors > cfg.rotors.len() {
        return Err(EnigmaError::invalid_config(format!(
            "{} rotor slots but only {} rotors described",
            cfg.num_rotors,
            cfg.rotors.len()
        )));
    }

    Ok(())
}

/// Parse configuration text and build the machine it describes.
pub fn load_machine(text: &str) -> EnigmaResult<Machine> {
    parse_config(text)?.build()
}
