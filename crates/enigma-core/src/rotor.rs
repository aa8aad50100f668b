//! Rotors: a fixed wiring plus a rotational offset.
//!
//! A rotor's wiring is a [`Permutation`] expressed in the rotor's own frame.
//! When the rotor sits at `setting = s`, a signal entering contact `p` of the
//! machine frame meets wiring contact `p + s`, and the output contact is
//! shifted back by `-s`:
//!
//! ```text
//! convert_forward(p)  = wrap(permute(wrap(p + s)) - s)
//! convert_backward(p) = wrap(invert (wrap(p + s)) - s)
//! ```
//!
//! Three kinds of rotor exist, see [`RotorKind`].

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::errors::{EnigmaError, EnigmaResult};
use crate::permutation::Permutation;

/// Capability variant of a rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Advances under a pawl; `notches` are indices of the positions at which
    /// it lets its left neighbor advance.
    Moving { notches: Vec<usize> },
    /// Never advances, has no notches.
    Fixed,
    /// Never advances and is pinned at position 0.
    Reflecting,
}

impl RotorKind {
    /// Single-letter tag used in configuration text.
    pub fn tag(&self) -> char {
        match self {
            Self::Moving { .. } => 'M',
            Self::Fixed => 'N',
            Self::Reflecting => 'R',
        }
    }
}

/// A named rotor with its current setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    kind: RotorKind,
    setting: usize,
}

impl Rotor {
    /// A moving rotor whose notches are the symbols of `notches`.
    pub fn moving(name: impl Into<String>, permutation: Permutation, notches: &str) -> EnigmaResult<Self> {
        let name = name.into();
        let alphabet = permutation.alphabet();
        let mut indices = Vec::with_capacity(notches.len());
        for c in notches.chars() {
            let i = alphabet.index_of(c).map_err(|_| EnigmaError::InvalidNotch {
                rotor: name.clone(),
                reason: format!("'{c}' is not in the alphabet"),
            })?;
            if !indices.contains(&i) {
                indices.push(i);
            }
        }
        Ok(Self::with_kind(name, permutation, RotorKind::Moving { notches: indices }))
    }

    /// A rotor that never moves.
    pub fn fixed(name: impl Into<String>, permutation: Permutation) -> Self {
        Self::with_kind(name.into(), permutation, RotorKind::Fixed)
    }

    /// A reflector. Real reflectors pair every contact with another; a wiring
    /// with explicit fixed points still builds, with a warning.
    pub fn reflector(name: impl Into<String>, permutation: Permutation) -> Self {
        let name = name.into();
        if !permutation.derangement() {
            tracing::warn!(rotor = %name, "reflector wiring maps a symbol to itself");
        }
        Self::with_kind(name, permutation, RotorKind::Reflecting)
    }

    fn with_kind(name: String, permutation: Permutation, kind: RotorKind) -> Self {
        Self {
            name,
            permutation,
            kind,
            setting: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        self.permutation.alphabet()
    }

    /// Size of the alphabet this rotor permutes.
    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    /// True iff the rotor advances under a pawl.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// True iff the rotor is a reflector.
    pub fn reflects(&self) -> bool {
        matches!(self.kind, RotorKind::Reflecting)
    }

    /// Notch symbols in configuration order; `None` for rotors without notches.
    pub fn notches(&self) -> Option<String> {
        match &self.kind {
            RotorKind::Moving { notches } => Some(
                notches
                    .iter()
                    .filter_map(|&i| self.alphabet().symbol_at(i).ok())
                    .collect(),
            ),
            RotorKind::Fixed | RotorKind::Reflecting => None,
        }
    }

    /// Current setting.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Set the rotor to `position`.
    pub fn set(&mut self, position: usize) -> EnigmaResult<()> {
        if self.reflects() && position != 0 {
            return Err(EnigmaError::ReflectorPosition(self.name.clone()));
        }
        if position >= self.size() {
            return Err(EnigmaError::PositionOutOfRange {
                rotor: self.name.clone(),
                position,
            });
        }
        self.setting = position;
        Ok(())
    }

    /// Set the rotor to the position of `symbol`.
    pub fn set_symbol(&mut self, symbol: char) -> EnigmaResult<()> {
        let position = self.alphabet().index_of(symbol)?;
        self.set(position)
    }

    /// True iff a moving rotor sits at one of its notches.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => notches.contains(&self.setting),
            RotorKind::Fixed | RotorKind::Reflecting => false,
        }
    }

    /// Advance a moving rotor by one position. No-op for other kinds.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = (self.setting + 1) % self.size();
        }
    }

    /// Pass a signal entering at contact `p` from right to left.
    pub fn convert_forward(&self, p: usize) -> usize {
        let s = self.setting as i64;
        let out = self.permutation.permute(p as i64 + s);
        self.permutation.wrap(out as i64 - s)
    }

    /// Pass a signal entering at contact `e` from left to right.
    pub fn convert_backward(&self, e: usize) -> usize {
        let s = self.setting as i64;
        let out = self.permutation.invert(e as i64 + s);
        self.permutation.wrap(out as i64 - s)
    }
}
