//! # hc11-core
//!
//! Machine model for a Motorola 68HC11-family microcontroller: the register
//! file with its aliased D accumulator, 64 KiB of byte-addressed memory,
//! the memory-mapped port layer, the static instruction catalogue and the
//! fetch-decode-execute engine that drives it all.
//!
//! The assembler front end lives in the sibling `hc11-asm` crate; this
//! crate only consumes a loaded memory image.
//!
//! ```no_run
//! use hc11_core::{Engine, Machine};
//!
//! let mut machine = Machine::new();
//! // ... load a program image into machine.memory ...
//! let engine = Engine::new();
//! engine.run(&mut machine)?;
//! # Ok::<(), hc11_core::ExecError>(())
//! ```

pub mod engine;
pub mod error;
pub mod instructions;
pub mod machine;
pub mod ports;
pub mod status;

pub use crate::engine::{Engine, Step};
pub use crate::error::{ExecError, ExecResult};
pub use crate::instructions::{AddressingMode, Instruction, lookup_by_name};
pub use crate::machine::{Label, LabelKind, MAX_LABELS, Machine, Port};
pub use crate::status::Ccr;
