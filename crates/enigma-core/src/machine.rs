//! The machine: rotor slots, plugboard, stepping, and signal routing.
//!
//! Slot 0 holds the reflector; slot `num_rotors - 1` holds the fastest rotor.
//! Each keystroke first steps the rotors, then routes the signal
//!
//! ```text
//! plugboard -> slots n-1 ..= 0 (forward) -> slots 1 ..= n-1 (backward) -> plugboard
//! ```
//!
//! Stepping decisions for one keystroke are all taken from the notch positions
//! seen before anything moves:
//! - the fastest slot always advances;
//! - slot `i` in `1..n-1` advances iff it is a moving rotor and slot `i + 1`
//!   sits at a notch;
//! - the reflector never advances.
//!
//! A rotor resting on its own notch does not step itself; only its left
//! neighbor is carried.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::errors::{EnigmaError, EnigmaResult};
use crate::permutation::Permutation;
use crate::rotor::Rotor;
use crate::text::strip_whitespace;

/// A configured rotor machine.
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Arc<Alphabet>,
    num_rotors: usize,
    num_pawls: usize,
    /// Every rotor the machine may use, each at setting 0.
    pool: Vec<Rotor>,
    /// Rotors currently inserted, reflector first.
    slots: Vec<Rotor>,
    plugboard: Permutation,
    /// Emit a keystroke trace on every conversion.
    verbose: bool,
}

impl Machine {
    /// A machine with `num_rotors` slots and `num_pawls` pawls choosing its
    /// rotors from `pool`. No rotors are inserted yet; the plugboard is the
    /// identity.
    pub fn new(
        alphabet: Arc<Alphabet>,
        num_rotors: usize,
        num_pawls: usize,
        pool: Vec<Rotor>,
    ) -> EnigmaResult<Self> {
        if num_rotors <= 1 {
            return Err(EnigmaError::invalid_config(format!(
                "a machine needs more than one rotor slot, got {num_rotors}"
            )));
        }
        if num_pawls >= num_rotors {
            return Err(EnigmaError::invalid_config(format!(
                "{num_pawls} pawls must be fewer than {num_rotors} rotor slots"
            )));
        }
        for (i, rotor) in pool.iter().enumerate() {
            if pool[..i].iter().any(|r| r.name() == rotor.name()) {
                return Err(EnigmaError::DuplicateRotor(rotor.name().to_string()));
            }
            if rotor.alphabet() != &alphabet {
                return Err(EnigmaError::invalid_config(format!(
                    "rotor {} is wired over a different alphabet",
                    rotor.name()
                )));
            }
        }

        tracing::debug!(num_rotors, num_pawls, available = pool.len(), "machine built");

        Ok(Self {
            plugboard: Permutation::identity(alphabet.clone()),
            alphabet,
            num_rotors,
            num_pawls,
            pool,
            slots: Vec::new(),
            verbose: false,
        })
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Number of pawls, and so of moving rotors.
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// Rotor in slot `k`, slot 0 being the reflector.
    pub fn rotor(&self, k: usize) -> Option<&Rotor> {
        self.slots.get(k)
    }

    /// All rotors available for insertion.
    pub fn available_rotors(&self) -> &[Rotor] {
        &self.pool
    }

    pub fn plugboard(&self) -> &Permutation {
        &self.plugboard
    }

    /// Enable or disable the per-keystroke trace.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// True once every slot is filled and slot 0 holds a reflector.
    pub fn is_ready(&self) -> bool {
        self.slots.len() == self.num_rotors && self.slots.first().is_some_and(Rotor::reflects)
    }

    /// Current settings of slots `1..`, as symbols.
    pub fn settings(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .map(|r| self.symbol(r.setting()))
            .collect()
    }

    /// Fill the slots with the rotors named by `ids`, in order, each at
    /// setting 0.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, ids: &[S]) -> EnigmaResult<()> {
        self.slots = self.resolve_slots(ids)?;
        Ok(())
    }

    /// Set slots `1..` from the symbols of `setting`, leftmost first.
    pub fn set_rotors(&mut self, setting: &str) -> EnigmaResult<()> {
        if self.slots.len() != self.num_rotors {
            return Err(EnigmaError::NotConfigured("no rotors inserted".to_string()));
        }
        let mut staged = self.slots.clone();
        self.apply_setting(&mut staged, setting)?;
        self.slots = staged;
        Ok(())
    }

    /// Install `plugboard` as the plugboard wiring.
    pub fn set_plugboard(&mut self, plugboard: Permutation) -> EnigmaResult<()> {
        self.check_alphabet(&plugboard)?;
        self.plugboard = plugboard;
        Ok(())
    }

    /// Replace rotors, settings and plugboard in one step.
    ///
    /// Slot 0 must receive a reflector. On error the machine is unchanged.
    pub fn configure<S: AsRef<str>>(
        &mut self,
        ids: &[S],
        setting: &str,
        plugboard: Permutation,
    ) -> EnigmaResult<()> {
        let mut staged = self.resolve_slots(ids)?;
        if let Some(first) = staged.first().filter(|r| !r.reflects()) {
            return Err(EnigmaError::ReflectorRequired(first.name().to_string()));
        }
        self.apply_setting(&mut staged, setting)?;
        self.check_alphabet(&plugboard)?;

        self.slots = staged;
        self.plugboard = plugboard;
        tracing::debug!(
            rotors = %self.slots.iter().map(Rotor::name).collect::<Vec<_>>().join(" "),
            setting,
            "machine configured"
        );
        Ok(())
    }

    /// Convert the symbol index `c`, stepping the rotors first.
    ///
    /// Assumes the machine is configured; see [`Machine::is_ready`].
    pub fn convert(&mut self, c: usize) -> usize {
        self.advance_rotors();

        let plugged = self.plugboard.permute(c as i64);
        let reflected = self.apply_rotors(plugged);
        let out = self.plugboard.permute(reflected as i64);

        if self.verbose {
            tracing::info!(
                "[{}] {} -> {} -> {}",
                self.settings(),
                self.symbol(c),
                self.symbol(plugged),
                self.symbol(out)
            );
        }
        out
    }

    /// Convert every non-whitespace symbol of `msg` in order.
    ///
    /// Rotor state carries over from one symbol to the next and across calls.
    pub fn convert_str(&mut self, msg: &str) -> EnigmaResult<String> {
        if !self.is_ready() {
            return Err(EnigmaError::NotConfigured(
                "rotors must be inserted with a reflector in slot 0".to_string(),
            ));
        }
        let indices = strip_whitespace(msg)
            .chars()
            .map(|c| self.alphabet.index_of(c))
            .collect::<EnigmaResult<Vec<_>>>()?;

        let mut out = String::with_capacity(indices.len());
        for c in indices {
            let converted = self.convert(c);
            out.push(self.alphabet.symbol_at(converted)?);
        }
        Ok(out)
    }

    fn resolve_slots<S: AsRef<str>>(&self, ids: &[S]) -> EnigmaResult<Vec<Rotor>> {
        if ids.len() != self.num_rotors {
            return Err(EnigmaError::SlotCountMismatch {
                expected: self.num_rotors,
                actual: ids.len(),
            });
        }

        let mut slots: Vec<Rotor> = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            if slots.iter().any(|r| r.name() == id) {
                return Err(EnigmaError::DuplicateRotor(id.to_string()));
            }
            let rotor = self
                .pool
                .iter()
                .find(|r| r.name() == id)
                .ok_or_else(|| EnigmaError::RotorNotFound(id.to_string()))?;
            slots.push(rotor.clone());
        }

        let moving = slots.iter().filter(|r| r.rotates()).count();
        if moving != self.num_pawls {
            return Err(EnigmaError::PawlMismatch {
                pawls: self.num_pawls,
                moving,
            });
        }
        Ok(slots)
    }

    fn apply_setting(&self, slots: &mut [Rotor], setting: &str) -> EnigmaResult<()> {
        let expected = self.num_rotors - 1;
        let actual = setting.chars().count();
        if actual != expected {
            return Err(EnigmaError::SettingLength { expected, actual });
        }
        for (rotor, c) in slots.iter_mut().skip(1).zip(setting.chars()) {
            rotor.set_symbol(c)?;
        }
        Ok(())
    }

    fn check_alphabet(&self, perm: &Permutation) -> EnigmaResult<()> {
        if perm.alphabet() != &self.alphabet {
            return Err(EnigmaError::invalid_config(
                "plugboard is wired over a different alphabet",
            ));
        }
        Ok(())
    }

    fn advance_rotors(&mut self) {
        let Some(fastest) = self.slots.len().checked_sub(1) else {
            return;
        };

        let mut step = vec![false; self.slots.len()];
        step[fastest] = true;
        for i in 1..fastest {
            step[i] = self.slots[i].rotates() && self.slots[i + 1].at_notch();
        }

        for (rotor, step) in self.slots.iter_mut().zip(step).skip(1) {
            if step {
                rotor.advance();
            }
        }
    }

    fn apply_rotors(&self, c: usize) -> usize {
        let forward = self
            .slots
            .iter()
            .rev()
            .fold(c, |c, rotor| rotor.convert_forward(c));
        self.slots
            .iter()
            .skip(1)
            .fold(forward, |c, rotor| rotor.convert_backward(c))
    }

    fn symbol(&self, i: usize) -> char {
        self.alphabet.symbol_at(i).unwrap_or('?')
    }
}
