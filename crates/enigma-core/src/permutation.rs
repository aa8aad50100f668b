//! Cycle-notation permutations over an alphabet.
//!
//! A specification such as `"(AELTPHQXRU) (BKNW) (S)"` lists disjoint cycles;
//! `(c0c1...cm)` maps `c0 -> c1 -> ... -> cm -> c0`. Symbols that appear in no
//! cycle map to themselves without being registered, which matters for
//! [`Permutation::derangement`]: only registered symbols are inspected.
//!
//! Mappings are stored as index tables, one slot per alphabet symbol, `None`
//! where a symbol was never mentioned.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::errors::{EnigmaError, EnigmaResult};

/// A bijection over the indices of an [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Arc<Alphabet>,
    forward: Vec<Option<usize>>,
    inverse: Vec<Option<usize>>,
}

impl Permutation {
    /// Parse `cycles` as cycle notation over `alphabet`.
    ///
    /// Whitespace anywhere is ignored. Empty groups `()` contribute nothing.
    pub fn parse(cycles: &str, alphabet: Arc<Alphabet>) -> EnigmaResult<Self> {
        let size = alphabet.size();
        let mut perm = Self {
            alphabet,
            forward: vec![None; size],
            inverse: vec![None; size],
        };

        let mut group: Option<Vec<usize>> = None;
        for c in cycles.chars().filter(|c| !c.is_whitespace()) {
            match c {
                '(' => {
                    if group.is_some() {
                        return Err(EnigmaError::malformed_cycle(format!(
                            "nested '(' in {cycles:?}"
                        )));
                    }
                    group = Some(Vec::new());
                }
                ')' => match group.take() {
                    Some(members) => perm.add_cycle(&members)?,
                    None => {
                        return Err(EnigmaError::malformed_cycle(format!(
                            "unmatched ')' in {cycles:?}"
                        )))
                    }
                },
                c => match group.as_mut() {
                    Some(members) => members.push(perm.alphabet.index_of(c)?),
                    None => {
                        return Err(EnigmaError::malformed_cycle(format!(
                            "'{c}' outside parentheses in {cycles:?}"
                        )))
                    }
                },
            }
        }
        if group.is_some() {
            return Err(EnigmaError::malformed_cycle(format!(
                "unclosed '(' in {cycles:?}"
            )));
        }

        Ok(perm)
    }

    /// The identity permutation: nothing registered, everything fixed.
    pub fn identity(alphabet: Arc<Alphabet>) -> Self {
        let size = alphabet.size();
        Self {
            alphabet,
            forward: vec![None; size],
            inverse: vec![None; size],
        }
    }

    fn add_cycle(&mut self, members: &[usize]) -> EnigmaResult<()> {
        for (i, &curr) in members.iter().enumerate() {
            let next = members[(i + 1) % members.len()];
            if self.forward[curr].is_some() {
                return Err(EnigmaError::malformed_cycle(format!(
                    "'{}' appears in more than one position",
                    self.alphabet.symbol_at(curr)?
                )));
            }
            self.forward[curr] = Some(next);
            self.inverse[next] = Some(curr);
        }
        Ok(())
    }

    /// Size of the underlying alphabet.
    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// `p` modulo the alphabet size, in `[0, size)` for negative `p` too.
    pub fn wrap(&self, p: i64) -> usize {
        // Alphabet sizes are bounded by the number of distinct chars, far below i64::MAX.
        let n = self.size() as i64;
        p.rem_euclid(n) as usize
    }

    /// Apply the permutation to the index `p` (wrapped into range first).
    pub fn permute(&self, p: i64) -> usize {
        let p = self.wrap(p);
        self.forward[p].unwrap_or(p)
    }

    /// Apply the inverse permutation to the index `c` (wrapped into range first).
    pub fn invert(&self, c: i64) -> usize {
        let c = self.wrap(c);
        self.inverse[c].unwrap_or(c)
    }

    /// Symbol-level [`Permutation::permute`].
    pub fn permute_symbol(&self, p: char) -> EnigmaResult<char> {
        let i = self.alphabet.index_of(p)?;
        self.alphabet.symbol_at(self.permute(i as i64))
    }

    /// Symbol-level [`Permutation::invert`].
    pub fn invert_symbol(&self, c: char) -> EnigmaResult<char> {
        let i = self.alphabet.index_of(c)?;
        self.alphabet.symbol_at(self.invert(i as i64))
    }

    /// True iff no explicitly cycled symbol maps to itself.
    ///
    /// Symbols absent from every cycle are implicit fixed points but are not
    /// considered here.
    pub fn derangement(&self) -> bool {
        self.forward
            .iter()
            .enumerate()
            .all(|(i, image)| *image != Some(i))
    }
}
