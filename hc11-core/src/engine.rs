//! The fetch-decode-execute engine.
//!
//! The dispatch table is derived from the descriptor slice when the engine
//! is constructed, so there is no global mutable state; two engines can
//! drive two machines independently.

use crate::error::{ExecError, ExecResult};
use crate::instructions::{AddressingMode, ExecFn, INSTRUCTIONS};
use crate::machine::Machine;

/// Outcome of a single [`Engine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	/// An instruction was executed and the program continues.
	Executed,
	/// The byte at PC is the 0x00 end-of-program sentinel.
	Halted,
}

/// PC-driven executor over a loaded [`Machine`].
pub struct Engine {
	dispatch: [Option<(ExecFn, AddressingMode)>; 256],
}

impl Engine {
	/// Build the dispatch table from the instruction catalogue.
	#[must_use]
	pub fn new() -> Self {
		let mut dispatch = [None; 256];
		for inst in INSTRUCTIONS {
			for &(mode, opcode) in inst.modes {
				debug_assert!(
					dispatch[usize::from(opcode)].is_none(),
					"opcode {opcode:#04x} is double-mapped"
				);
				dispatch[usize::from(opcode)] = Some((inst.exec, mode));
			}
		}
		Self {
			dispatch,
		}
	}

	/// Execute the instruction at PC, or report the halt sentinel.
	///
	/// # Errors
	/// [`ExecError::BadOpcode`] when the byte at PC has no dispatch entry;
	/// port errors surface from the executed instruction.
	pub fn step(&self, m: &mut Machine) -> ExecResult<Step> {
		let pc = m.pc;
		let opcode = m.memory[pc as usize];
		if opcode == 0x00 {
			return Ok(Step::Halted);
		}
		m.pc = pc.wrapping_add(1);
		let Some((exec, mode)) = self.dispatch[usize::from(opcode)] else {
			return Err(ExecError::BadOpcode {
				pc,
				opcode,
			});
		};
		log::trace!("executing {opcode:#04x} at {pc:#06x}");
		exec(m, mode)?;
		Ok(Step::Executed)
	}

	/// Run until the byte at PC is the 0x00 sentinel.
	///
	/// # Errors
	/// Propagates the first fatal error from [`Engine::step`].
	pub fn run(&self, m: &mut Machine) -> ExecResult<()> {
		while self.step(m)? == Step::Executed {}
		Ok(())
	}
}

impl Default for Engine {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::status::Ccr;

	fn load(program: &[u8], origin: u16) -> Machine {
		let mut m = Machine::new();
		m.memory[origin as usize..origin as usize + program.len()].copy_from_slice(program);
		m.pc = origin;
		m
	}

	#[test]
	fn every_catalogued_opcode_dispatches() {
		let engine = Engine::new();
		for inst in INSTRUCTIONS {
			for &(_, opcode) in inst.modes {
				assert!(
					engine.dispatch[usize::from(opcode)].is_some(),
					"{} ({opcode:#04x}) has no dispatch entry",
					inst.name()
				);
			}
		}
	}

	#[test]
	fn halts_on_the_zero_sentinel() {
		let engine = Engine::new();
		// ldaa #$10, then the implicit end of program.
		let mut m = load(&[0x86, 0x10, 0x00], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0x10);
		assert_eq!(m.pc, 0xC002);
	}

	#[test]
	fn unmapped_opcodes_are_fatal() {
		let engine = Engine::new();
		// 0xFF is not a catalogued opcode.
		let mut m = load(&[0xFF], 0x0100);
		let err = engine.run(&mut m).unwrap_err();
		assert!(matches!(err, ExecError::BadOpcode { pc: 0x0100, opcode: 0xFF }));
	}

	#[test]
	fn aba_adds_the_accumulators() {
		let engine = Engine::new();
		// ldaa #$10 / ldab #$20 / aba
		let mut m = load(&[0x86, 0x10, 0xC6, 0x20, 0x1B], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0x30);
		assert_eq!(m.b, 0x20);
		assert_eq!(m.d(), 0x3020);
		assert!(!m.ccr.contains(Ccr::ZERO));
		assert!(!m.ccr.contains(Ccr::NEGATIVE));
		assert!(!m.ccr.contains(Ccr::OVERFLOW));
		assert!(!m.ccr.contains(Ccr::CARRY));
	}

	#[test]
	fn direct_and_extended_loads_read_memory() {
		let engine = Engine::new();
		// ldaa $10 (direct) / ldab $1234 (extended)
		let mut m = load(&[0x96, 0x10, 0xF6, 0x12, 0x34], 0xC000);
		m.memory[0x0010] = 0x42;
		m.memory[0x1234] = 0x99;
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0x42);
		assert_eq!(m.b, 0x99);
	}

	#[test]
	fn taken_branch_lands_relative_to_the_advanced_pc() {
		let engine = Engine::new();
		// bra +2 over two nops into a ldaa #$55.
		let mut m = load(&[0x20, 0x02, 0x01, 0x01, 0x86, 0x55], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0x55);
	}

	#[test]
	fn branch_not_taken_falls_through() {
		let engine = Engine::new();
		// sec / bcc +2 (not taken) / ldaa #$01
		let mut m = load(&[0x0D, 0x24, 0x02, 0x86, 0x01], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0x01);
	}

	#[test]
	fn backward_branch_loops() {
		let engine = Engine::new();
		// ldaa #$00 / inca / cmpa #$03 / bne -5
		let mut m = load(&[0x86, 0x00, 0x4C, 0x81, 0x03, 0x26, 0xFB], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0x03);
		assert!(m.ccr.contains(Ccr::ZERO));
		assert_eq!(m.pc, 0xC007);
	}

	#[test]
	fn jsr_rts_round_trip_restores_sp() {
		let engine = Engine::new();
		let mut m = load(
			&[
				0x8E, 0x00, 0xFF, // lds #$00FF
				0xBD, 0xC0, 0x09, // jsr $C009
				0x20, 0x04, // bra done
				0x01, // padding nop
				0x86, 0x42, // sub: ldaa #$42
				0x39, // rts
				0x01, // done: nop
			],
			0xC000,
		);
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0x42);
		assert_eq!(m.sp, 0x00FF);
		assert_eq!(m.pc, 0xC00D);
	}

	#[test]
	fn bsr_pushes_the_return_address() {
		let engine = Engine::new();
		// lds #$00FF / bsr +2 / bra +1 / rts — the subroutine returns to
		// the bra, which skips one byte to the sentinel.
		let mut m = load(&[0x8E, 0x00, 0xFF, 0x8D, 0x02, 0x20, 0x01, 0x39, 0x00], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.sp, 0x00FF);
		assert_eq!(m.pc, 0xC008);
	}

	#[test]
	fn jmp_is_absolute() {
		let engine = Engine::new();
		// jmp $C005 / (skipped ldaa #$01) / ldab #$02
		let mut m = load(&[0x7E, 0xC0, 0x05, 0x86, 0x01, 0xC6, 0x02], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0x00);
		assert_eq!(m.b, 0x02);
	}

	#[test]
	fn sixteen_bit_immediate_loads() {
		let engine = Engine::new();
		// ldd #$1234 / addd #$0001
		let mut m = load(&[0xCC, 0x12, 0x34, 0xC3, 0x00, 0x01], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.d(), 0x1235);
		assert_eq!(m.a, 0x12);
		assert_eq!(m.b, 0x35);
	}

	#[test]
	fn subd_borrows_across_the_pair() {
		let engine = Engine::new();
		// ldd #$0100 / subd #$0001
		let mut m = load(&[0xCC, 0x01, 0x00, 0x83, 0x00, 0x01], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.d(), 0x00FF);
		assert!(!m.ccr.contains(Ccr::CARRY));
	}

	#[test]
	fn mul_widens_into_d() {
		let engine = Engine::new();
		// ldaa #$20 / ldab #$80 / mul
		let mut m = load(&[0x86, 0x20, 0xC6, 0x80, 0x3D], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.d(), 0x1000);
		assert!(!m.ccr.contains(Ccr::CARRY));
	}

	#[test]
	fn push_pull_round_trip() {
		let engine = Engine::new();
		// lds #$00FF / ldaa #$AA / psha / clra / pula
		let mut m = load(&[0x8E, 0x00, 0xFF, 0x86, 0xAA, 0x36, 0x4F, 0x32], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.a, 0xAA);
		assert_eq!(m.sp, 0x00FF);
	}

	#[test]
	fn pshx_pulx_preserve_x() {
		let engine = Engine::new();
		// lds #$00FF / pshx / pulx
		let mut m = load(&[0x8E, 0x00, 0xFF, 0x3C, 0x38], 0xC000);
		m.x = 0xBEEF;
		engine.run(&mut m).unwrap();
		assert_eq!(m.x, 0xBEEF);
		assert_eq!(m.sp, 0x00FF);
	}

	#[test]
	fn des_and_ins_move_the_stack_pointer() {
		let engine = Engine::new();
		// lds #$0080 / des / des / ins
		let mut m = load(&[0x8E, 0x00, 0x80, 0x34, 0x34, 0x31], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.sp, 0x007F);
	}

	#[test]
	fn tap_and_tpa_move_the_whole_status_byte() {
		let engine = Engine::new();
		// ldaa #$FF / tap / tpa
		let mut m = load(&[0x86, 0xFF, 0x06, 0x07], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.ccr.to_byte(), 0xFF);
		assert_eq!(m.a, 0xFF);
	}

	#[test]
	fn memory_shift_goes_through_the_port_aware_path() {
		let engine = Engine::new();
		// asl $0040
		let mut m = load(&[0x78, 0x00, 0x40], 0xC000);
		m.memory[0x0040] = 0x81;
		engine.run(&mut m).unwrap();
		assert_eq!(m.memory[0x0040], 0x02);
		assert!(m.ccr.contains(Ccr::CARRY));
	}

	#[test]
	fn store_to_portb_latches_the_pins() {
		let engine = Engine::new();
		// ldaa #$FF / staa $1004
		let mut m = load(&[0x86, 0xFF, 0xB7, 0x10, 0x04], 0xC000);
		engine.run(&mut m).unwrap();
		assert_eq!(m.ports[crate::machine::Port::B.index()], 0xFF);
		assert_eq!(m.memory[0x1004], 0x00);
	}

	#[test]
	fn access_to_portf_stops_the_engine() {
		let engine = Engine::new();
		// ldaa $1005 (extended read of PORTF)
		let mut m = load(&[0xB6, 0x10, 0x05], 0xC000);
		let err = engine.run(&mut m).unwrap_err();
		assert!(matches!(err, ExecError::PortNotImplemented { port: "PORTF", .. }));
	}
}
