//! The static descriptor table.
//!
//! One entry per mnemonic family; aliases live in the same entry so both
//! names resolve to the identical descriptor. Opcode bytes follow the
//! 68HC11 encoding; no two entries may claim the same byte, and 0x00 is
//! reserved as the end-of-program sentinel.

use super::AddressingMode::{Direct, Extended, Immediate, Inherent, Relative};
use super::exec;
use super::{AddressingMode, ExecFn, Instruction};

const fn inst(
	names: &'static [&'static str],
	modes: &'static [(AddressingMode, u8)],
	exec: ExecFn,
) -> Instruction {
	Instruction {
		names,
		modes,
		exec,
		imm16: false,
	}
}

/// Descriptor whose immediate operand is two bytes wide.
const fn inst16(
	names: &'static [&'static str],
	modes: &'static [(AddressingMode, u8)],
	exec: ExecFn,
) -> Instruction {
	Instruction {
		names,
		modes,
		exec,
		imm16: true,
	}
}

#[rustfmt::skip]
pub static INSTRUCTIONS: &[Instruction] = &[
	// Loads and stores
	inst(&["ldaa", "lda"], &[(Immediate, 0x86), (Direct, 0x96), (Extended, 0xB6)], exec::ldaa),
	inst(&["ldab", "ldb"], &[(Immediate, 0xC6), (Direct, 0xD6), (Extended, 0xF6)], exec::ldab),
	inst16(&["ldd"], &[(Immediate, 0xCC), (Direct, 0xDC), (Extended, 0xFC)], exec::ldd),
	inst16(&["lds"], &[(Immediate, 0x8E), (Direct, 0x9E), (Extended, 0xBE)], exec::lds),
	inst(&["staa", "sta"], &[(Direct, 0x97), (Extended, 0xB7)], exec::staa),
	inst(&["stab", "stb"], &[(Direct, 0xD7), (Extended, 0xF7)], exec::stab),
	inst(&["std"], &[(Direct, 0xDD), (Extended, 0xFD)], exec::std),
	inst(&["sts"], &[(Direct, 0x9F), (Extended, 0xBF)], exec::sts),

	// Arithmetic
	inst(&["aba"], &[(Inherent, 0x1B)], exec::aba),
	inst(&["adca"], &[(Immediate, 0x89), (Direct, 0x99), (Extended, 0xB9)], exec::adca),
	inst(&["adcb"], &[(Immediate, 0xC9), (Direct, 0xD9), (Extended, 0xF9)], exec::adcb),
	inst(&["adda"], &[(Immediate, 0x8B), (Direct, 0x9B), (Extended, 0xBB)], exec::adda),
	inst(&["addb"], &[(Immediate, 0xCB), (Direct, 0xDB), (Extended, 0xFB)], exec::addb),
	inst16(&["addd"], &[(Immediate, 0xC3), (Direct, 0xD3), (Extended, 0xF3)], exec::addd),
	inst(&["suba"], &[(Immediate, 0x80), (Direct, 0x90), (Extended, 0xB0)], exec::suba),
	inst(&["subb"], &[(Immediate, 0xC0), (Direct, 0xD0), (Extended, 0xF0)], exec::subb),
	inst16(&["subd"], &[(Immediate, 0x83), (Direct, 0x93), (Extended, 0xB3)], exec::subd),
	inst(&["sba"], &[(Inherent, 0x10)], exec::sba),
	inst(&["nega"], &[(Inherent, 0x40)], exec::nega),
	inst(&["negb"], &[(Inherent, 0x50)], exec::negb),
	inst(&["neg"], &[(Extended, 0x70)], exec::neg),
	inst(&["inca"], &[(Inherent, 0x4C)], exec::inca),
	inst(&["incb"], &[(Inherent, 0x5C)], exec::incb),
	inst(&["inc"], &[(Extended, 0x7C)], exec::inc),
	inst(&["deca"], &[(Inherent, 0x4A)], exec::deca),
	inst(&["decb"], &[(Inherent, 0x5A)], exec::decb),
	inst(&["dec"], &[(Extended, 0x7A)], exec::dec),
	inst(&["mul"], &[(Inherent, 0x3D)], exec::mul),

	// Logical
	inst(&["anda"], &[(Immediate, 0x84), (Direct, 0x94), (Extended, 0xB4)], exec::anda),
	inst(&["andb"], &[(Immediate, 0xC4), (Direct, 0xD4), (Extended, 0xF4)], exec::andb),
	inst(&["oraa", "ora"], &[(Immediate, 0x8A), (Direct, 0x9A), (Extended, 0xBA)], exec::oraa),
	inst(&["orab", "orb"], &[(Immediate, 0xCA), (Direct, 0xDA), (Extended, 0xFA)], exec::orab),
	inst(&["eora"], &[(Immediate, 0x88), (Direct, 0x98), (Extended, 0xB8)], exec::eora),
	inst(&["eorb"], &[(Immediate, 0xC8), (Direct, 0xD8), (Extended, 0xF8)], exec::eorb),
	inst(&["coma"], &[(Inherent, 0x43)], exec::coma),
	inst(&["comb"], &[(Inherent, 0x53)], exec::comb),
	inst(&["com"], &[(Extended, 0x73)], exec::com),
	inst(&["clra"], &[(Inherent, 0x4F)], exec::clra),
	inst(&["clrb"], &[(Inherent, 0x5F)], exec::clrb),
	inst(&["clr"], &[(Extended, 0x7F)], exec::clr),

	// Shifts and rotates
	inst(&["asla", "lsla"], &[(Inherent, 0x48)], exec::asla),
	inst(&["aslb", "lslb"], &[(Inherent, 0x58)], exec::aslb),
	inst(&["asld", "lsld"], &[(Inherent, 0x05)], exec::asld),
	inst(&["asl", "lsl"], &[(Extended, 0x78)], exec::asl),
	inst(&["asra"], &[(Inherent, 0x47)], exec::asra),
	inst(&["asrb"], &[(Inherent, 0x57)], exec::asrb),
	inst(&["asr"], &[(Extended, 0x77)], exec::asr),
	inst(&["lsra"], &[(Inherent, 0x44)], exec::lsra),
	inst(&["lsrb"], &[(Inherent, 0x54)], exec::lsrb),
	inst(&["lsrd"], &[(Inherent, 0x04)], exec::lsrd),
	inst(&["lsr"], &[(Extended, 0x74)], exec::lsr),
	inst(&["rola"], &[(Inherent, 0x49)], exec::rola),
	inst(&["rolb"], &[(Inherent, 0x59)], exec::rolb),
	inst(&["rol"], &[(Extended, 0x79)], exec::rol),
	inst(&["rora"], &[(Inherent, 0x46)], exec::rora),
	inst(&["rorb"], &[(Inherent, 0x56)], exec::rorb),
	inst(&["ror"], &[(Extended, 0x76)], exec::ror),

	// Compare and test
	inst(&["cmpa"], &[(Immediate, 0x81), (Direct, 0x91), (Extended, 0xB1)], exec::cmpa),
	inst(&["cmpb"], &[(Immediate, 0xC1), (Direct, 0xD1), (Extended, 0xE1)], exec::cmpb),
	inst(&["cba"], &[(Inherent, 0x11)], exec::cba),
	inst(&["tsta"], &[(Inherent, 0x4D)], exec::tsta),
	inst(&["tstb"], &[(Inherent, 0x5D)], exec::tstb),
	inst(&["tst"], &[(Extended, 0x7D)], exec::tst),

	// Transfers
	inst(&["tab"], &[(Inherent, 0x16)], exec::tab),
	inst(&["tba"], &[(Inherent, 0x17)], exec::tba),
	inst(&["tap"], &[(Inherent, 0x06)], exec::tap),
	inst(&["tpa"], &[(Inherent, 0x07)], exec::tpa),

	// Branches
	inst(&["bra"], &[(Relative, 0x20)], exec::bra),
	inst(&["brn"], &[(Relative, 0x21)], exec::brn),
	inst(&["bhi"], &[(Relative, 0x22)], exec::bhi),
	inst(&["bls"], &[(Relative, 0x23)], exec::bls),
	inst(&["bcc", "bhs"], &[(Relative, 0x24)], exec::bcc),
	inst(&["bcs", "blo"], &[(Relative, 0x25)], exec::bcs),
	inst(&["bne"], &[(Relative, 0x26)], exec::bne),
	inst(&["beq"], &[(Relative, 0x27)], exec::beq),
	inst(&["bvc"], &[(Relative, 0x28)], exec::bvc),
	inst(&["bvs"], &[(Relative, 0x29)], exec::bvs),
	inst(&["bpl"], &[(Relative, 0x2A)], exec::bpl),
	inst(&["bmi"], &[(Relative, 0x2B)], exec::bmi),
	inst(&["bge"], &[(Relative, 0x2C)], exec::bge),
	inst(&["blt"], &[(Relative, 0x2D)], exec::blt),
	inst(&["bgt"], &[(Relative, 0x2E)], exec::bgt),
	inst(&["ble"], &[(Relative, 0x2F)], exec::ble),

	// Subroutines and jumps
	inst(&["bsr"], &[(Relative, 0x8D)], exec::bsr),
	inst(&["jsr"], &[(Direct, 0x9D), (Extended, 0xBD)], exec::jsr),
	inst(&["rts"], &[(Inherent, 0x39)], exec::rts),
	inst(&["jmp"], &[(Extended, 0x7E)], exec::jmp),
	inst(&["nop"], &[(Inherent, 0x01)], exec::nop),

	// Stack
	inst(&["psha"], &[(Inherent, 0x36)], exec::psha),
	inst(&["pshb"], &[(Inherent, 0x37)], exec::pshb),
	inst(&["pshx"], &[(Inherent, 0x3C)], exec::pshx),
	inst(&["pula"], &[(Inherent, 0x32)], exec::pula),
	inst(&["pulb"], &[(Inherent, 0x33)], exec::pulb),
	inst(&["pulx"], &[(Inherent, 0x38)], exec::pulx),
	inst(&["des"], &[(Inherent, 0x34)], exec::des),
	inst(&["ins"], &[(Inherent, 0x31)], exec::ins),

	// Flag manipulation
	inst(&["clv"], &[(Inherent, 0x0A)], exec::clv),
	inst(&["sev"], &[(Inherent, 0x0B)], exec::sev),
	inst(&["clc"], &[(Inherent, 0x0C)], exec::clc),
	inst(&["sec"], &[(Inherent, 0x0D)], exec::sec),
	inst(&["cli"], &[(Inherent, 0x0E)], exec::cli),
	inst(&["sei"], &[(Inherent, 0x0F)], exec::sei),
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opcodes_are_unique_and_never_the_sentinel() {
		let mut seen: [Option<&'static str>; 256] = [None; 256];
		for inst in INSTRUCTIONS {
			for &(_, opcode) in inst.modes {
				assert_ne!(opcode, 0x00, "{} claims the halt sentinel", inst.name());
				assert!(
					seen[usize::from(opcode)].is_none(),
					"{:#04x} claimed by both {} and {}",
					opcode,
					seen[usize::from(opcode)].unwrap(),
					inst.name()
				);
				seen[usize::from(opcode)] = Some(inst.name());
			}
		}
	}

	#[test]
	fn every_entry_has_at_most_one_alias() {
		for inst in INSTRUCTIONS {
			assert!(!inst.names.is_empty());
			assert!(inst.names.len() <= 2, "{} has too many names", inst.name());
		}
	}

	#[test]
	fn branches_are_relative_only() {
		for name in ["bra", "brn", "beq", "bne", "bge", "ble", "bsr"] {
			let inst = super::super::lookup_by_name(name).unwrap();
			assert!(inst.is_relative());
			assert_eq!(inst.modes.len(), 1);
		}
	}

	#[test]
	fn sixteen_bit_immediates_are_flagged() {
		for name in ["ldd", "lds", "addd", "subd"] {
			assert!(super::super::lookup_by_name(name).unwrap().imm16, "{name}");
		}
		for name in ["ldaa", "cmpa", "cmpb", "adda"] {
			assert!(!super::super::lookup_by_name(name).unwrap().imm16, "{name}");
		}
	}
}
