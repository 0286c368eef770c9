//! # hc11-asm
//!
//! Two-pass assembler for the 68HC11 subset modelled by `hc11-core`.
//! Pass 1 assigns every symbol its final address; pass 2 encodes
//! instruction bytes directly into a [`hc11_core::Machine`], leaving the
//! machine ready to run.
//!
//! ```no_run
//! use hc11_asm::Assembler;
//! use hc11_core::Machine;
//! use std::path::Path;
//!
//! let mut machine = Machine::new();
//! let mut assembler = Assembler::new();
//! assembler.assemble_file(Path::new("f.asm"), &mut machine)?;
//! # Ok::<(), hc11_asm::AsmError>(())
//! ```

pub mod assembler;
pub mod error;
pub mod lexer;
pub mod operand;
pub mod symbols;

pub use crate::assembler::Assembler;
pub use crate::error::{AsmError, AsmResult};
pub use crate::lexer::MAX_LINE_LEN;
