//! Behavioural properties of the execution engine, driven with raw byte
//! programs so they hold independently of the assembler front end.

use hc11_core::{Ccr, Engine, Machine, Step};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn load(program: &[u8], origin: u16) -> Machine {
	let mut m = Machine::new();
	m.memory[origin as usize..origin as usize + program.len()].copy_from_slice(program);
	m.pc = origin;
	m
}

#[test]
fn lda_zero_sets_z_and_clears_n() {
	let engine = Engine::new();
	let mut m = load(&[0x86, 0x00], 0xC000);
	engine.run(&mut m).unwrap();
	assert!(m.ccr.contains(Ccr::ZERO));
	assert!(!m.ccr.contains(Ccr::NEGATIVE));
	assert!(!m.ccr.contains(Ccr::OVERFLOW));
}

#[test]
fn d_view_agrees_with_the_halves_after_every_step() {
	let engine = Engine::new();
	// A mix of 8- and 16-bit operations on the accumulator pair.
	let mut m = load(
		&[
			0x86, 0x12, // ldaa #$12
			0xC6, 0x34, // ldab #$34
			0xCC, 0xBE, 0xEF, // ldd #$BEEF
			0x1B, // aba
			0x05, // asld
			0x3D, // mul
			0x17, // tba
		],
		0xC000,
	);
	while engine.step(&mut m).unwrap() == Step::Executed {
		assert_eq!(m.d(), u16::from(m.a) << 8 | u16::from(m.b));
	}
}

#[test]
fn cmpa_beq_branches_exactly_on_equality() {
	let engine = Engine::new();
	for value in [0x00u8, 0x41, 0x42, 0x43, 0xFF] {
		// ldaa #value / cmpa #$42 / beq +2 / ldab #$01 / (skip target) nop
		let mut m = load(&[0x86, value, 0x81, 0x42, 0x27, 0x02, 0xC6, 0x01, 0x01], 0xC000);
		engine.run(&mut m).unwrap();
		let taken = m.b == 0x00;
		assert_eq!(taken, value == 0x42, "value {value:#04x}");
	}
}

#[test]
fn compare_leaves_the_accumulator_alone() {
	let engine = Engine::new();
	let mut m = load(&[0x86, 0x42, 0x81, 0x10], 0xC000);
	engine.run(&mut m).unwrap();
	assert_eq!(m.a, 0x42);
	assert!(!m.ccr.contains(Ccr::ZERO));
	assert!(!m.ccr.contains(Ccr::CARRY));
}

#[test]
fn signed_branches_follow_n_xor_v() {
	let engine = Engine::new();
	// ldaa #$50 / cmpa #$F0 / bge +2: the unsigned borrow sets C, but as
	// signed values 0x50 >= -16, so the signed branch is taken.
	let mut m = load(&[0x86, 0x50, 0x81, 0xF0, 0x2C, 0x02, 0xC6, 0x01, 0x01], 0xC000);
	engine.run(&mut m).unwrap();
	assert_eq!(m.b, 0x00, "bge must be taken when N xor V is clear");
}

#[test]
fn bhi_requires_carry_and_zero_clear() {
	let engine = Engine::new();
	// suba #$01 with A=0 borrows, so bhi falls through.
	let mut m = load(&[0x86, 0x00, 0x80, 0x01, 0x22, 0x02, 0xC6, 0x01, 0x01], 0xC000);
	engine.run(&mut m).unwrap();
	assert_eq!(m.b, 0x01);
}

#[test]
fn stack_discipline_survives_nested_calls() {
	let engine = Engine::new();
	let mut m = load(
		&[
			0x8E, 0x00, 0xFF, // lds #$00FF
			0xBD, 0xC0, 0x09, // jsr outer
			0x20, 0x09, // bra done
			0x01, // pad
			0xBD, 0xC0, 0x0E, // outer: jsr inner
			0x4C, // inca
			0x39, // rts
			0x86, 0x41, // inner: ldaa #$41
			0x39, // rts
			0x01, // done: nop
		],
		0xC000,
	);
	engine.run(&mut m).unwrap();
	assert_eq!(m.a, 0x42);
	assert_eq!(m.sp, 0x00FF, "nested returns must fully unwind the stack");
}

#[test]
fn halt_leaves_pc_on_the_sentinel() {
	let engine = Engine::new();
	let mut m = load(&[0x01, 0x01], 0x0200);
	engine.run(&mut m).unwrap();
	assert_eq!(m.pc, 0x0202);
	assert_eq!(engine.step(&mut m).unwrap(), Step::Halted);
}

proptest! {
	#[test]
	fn bra_adds_the_sign_extended_displacement(disp in any::<i8>()) {
		let engine = Engine::new();
		let origin = 0x4000u16;
		let mut m = Machine::new();
		m.memory[origin as usize] = 0x20;
		m.memory[origin as usize + 1] = disp as u8;
		m.pc = origin;
		engine.step(&mut m).unwrap();
		prop_assert_eq!(m.pc, origin.wrapping_add(2).wrapping_add_signed(i16::from(disp)));
	}

	#[test]
	fn immediate_load_then_store_round_trips(value in any::<u8>(), addr in 0x2000u16..0x8000) {
		let engine = Engine::new();
		// ldaa #value / staa addr (extended)
		let mut m = load(
			&[0x86, value, 0xB7, (addr >> 8) as u8, (addr & 0xFF) as u8],
			0xC000,
		);
		engine.run(&mut m).unwrap();
		prop_assert_eq!(m.memory[addr as usize], value);
		prop_assert_eq!(m.ccr.contains(Ccr::ZERO), value == 0);
		prop_assert_eq!(m.ccr.contains(Ccr::NEGATIVE), value & 0x80 != 0);
	}
}
