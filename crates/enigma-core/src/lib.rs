//! enigma-core
//!
//! Core primitives for the rotor-machine simulator:
//! - ordered alphabets with index mapping
//! - cycle-notation permutations
//! - moving, fixed and reflecting rotors
//! - the machine: notch/pawl stepping and the plugboard/rotor signal path
//! - in-memory parsing of configuration text and setup lines
//!
//! The crate performs no file or environment I/O. Callers read text and hand
//! it in.
//!
//! ```
//! use enigma_core::prelude::*;
//!
//! let mut machine = load_machine("ABCD 2 1  R1 R (AB) (CD)  M1 MA (ABCD)").unwrap();
//! set_up(&mut machine, "* R1 M1 A").unwrap();
//! assert_eq!(machine.convert_str("AAAA").unwrap(), "DDDD");
//! ```

pub mod alphabet;
pub mod config;
pub mod errors;
pub mod machine;
pub mod permutation;
pub mod rotor;
pub mod setup;
pub mod text;

pub use crate::errors::{EnigmaError, EnigmaResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::alphabet::Alphabet;
    pub use crate::config::{load_machine, parse_config, MachineConfig, RotorSpec};
    pub use crate::machine::Machine;
    pub use crate::permutation::Permutation;
    pub use crate::rotor::{Rotor, RotorKind};
    pub use crate::setup::{is_setup_line, parse_setup_line, set_up, SetupLine};
    pub use crate::text::{group, strip_whitespace, GROUP_SIZE};
    pub use crate::{EnigmaError, EnigmaResult};
}
