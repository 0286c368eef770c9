//! Execution procedures, one per mnemonic family.
//!
//! Each procedure receives the machine with PC already past the opcode
//! byte and consumes its own operand bytes. Flag computation widens to a
//! signed intermediate so carry and overflow fall out of range checks.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use super::AddressingMode;
use crate::error::ExecResult;
use crate::machine::Machine;
use crate::status::Ccr;

/// Fetch an 8-bit operand value for a read-class instruction.
fn operand8(m: &mut Machine, mode: AddressingMode) -> ExecResult<u8> {
	match mode {
		AddressingMode::Immediate => Ok(m.fetch8()),
		AddressingMode::Direct => {
			let addr = u16::from(m.fetch8());
			m.load8(addr)
		}
		AddressingMode::Extended => {
			let addr = m.fetch16();
			m.load8(addr)
		}
		AddressingMode::Inherent | AddressingMode::Relative => {
			unreachable!("8-bit operand fetch in {mode} mode")
		}
	}
}

/// Fetch a 16-bit operand value for a read-class instruction.
fn operand16(m: &mut Machine, mode: AddressingMode) -> ExecResult<u16> {
	match mode {
		AddressingMode::Immediate => Ok(m.fetch16()),
		AddressingMode::Direct => {
			let addr = u16::from(m.fetch8());
			m.load16(addr)
		}
		AddressingMode::Extended => {
			let addr = m.fetch16();
			m.load16(addr)
		}
		AddressingMode::Inherent | AddressingMode::Relative => {
			unreachable!("16-bit operand fetch in {mode} mode")
		}
	}
}

/// Consume the operand bytes of a store, jump or read-modify-write target.
fn effective_address(m: &mut Machine, mode: AddressingMode) -> u16 {
	match mode {
		AddressingMode::Direct => u16::from(m.fetch8()),
		AddressingMode::Extended => m.fetch16(),
		_ => unreachable!("effective address in {mode} mode"),
	}
}

/// 8-bit addition with H, N, Z, V, C.
fn add8(m: &mut Machine, lhs: u8, rhs: u8, carry_in: u8) -> u8 {
	let wide = i16::from(lhs) + i16::from(rhs) + i16::from(carry_in);
	let signed = i16::from(lhs as i8) + i16::from(rhs as i8) + i16::from(carry_in);
	let result = wide as u8;
	m.ccr.set(Ccr::HALF_CARRY, (lhs & 0x0F) + (rhs & 0x0F) + carry_in > 0x0F);
	m.ccr.set(Ccr::CARRY, wide > 0xFF);
	m.ccr.set(Ccr::OVERFLOW, !(-128..=127).contains(&signed));
	m.ccr.update_nz8(result);
	result
}

/// 8-bit subtraction with N, Z, V, C; also the compare core.
fn sub8(m: &mut Machine, lhs: u8, rhs: u8) -> u8 {
	let wide = i16::from(lhs) - i16::from(rhs);
	let signed = i16::from(lhs as i8) - i16::from(rhs as i8);
	let result = wide as u8;
	m.ccr.set(Ccr::CARRY, wide < 0);
	m.ccr.set(Ccr::OVERFLOW, !(-128..=127).contains(&signed));
	m.ccr.update_nz8(result);
	result
}

/// 16-bit addition with N, Z, V, C.
fn add16(m: &mut Machine, lhs: u16, rhs: u16) -> u16 {
	let wide = i32::from(lhs) + i32::from(rhs);
	let signed = i32::from(lhs as i16) + i32::from(rhs as i16);
	let result = wide as u16;
	m.ccr.set(Ccr::CARRY, wide > 0xFFFF);
	m.ccr.set(Ccr::OVERFLOW, !(-32768..=32767).contains(&signed));
	m.ccr.update_nz16(result);
	result
}

/// 16-bit subtraction with N, Z, V, C.
fn sub16(m: &mut Machine, lhs: u16, rhs: u16) -> u16 {
	let wide = i32::from(lhs) - i32::from(rhs);
	let signed = i32::from(lhs as i16) - i32::from(rhs as i16);
	let result = wide as u16;
	m.ccr.set(Ccr::CARRY, wide < 0);
	m.ccr.set(Ccr::OVERFLOW, !(-32768..=32767).contains(&signed));
	m.ccr.update_nz16(result);
	result
}

/// N and Z from the value, V cleared: loads, stores and transfers.
fn load_flags8(m: &mut Machine, value: u8) {
	m.ccr.update_nz8(value);
	m.ccr.remove(Ccr::OVERFLOW);
}

fn load_flags16(m: &mut Machine, value: u16) {
	m.ccr.update_nz16(value);
	m.ccr.remove(Ccr::OVERFLOW);
}

/// Common tail of the 8-bit shifts: C from the ejected bit, V = N xor C.
fn shift_flags8(m: &mut Machine, result: u8, carry: bool) -> u8 {
	m.ccr.set(Ccr::CARRY, carry);
	m.ccr.update_nz8(result);
	let negative = m.ccr.contains(Ccr::NEGATIVE);
	m.ccr.set(Ccr::OVERFLOW, negative ^ carry);
	result
}

fn shift_flags16(m: &mut Machine, result: u16, carry: bool) -> u16 {
	m.ccr.set(Ccr::CARRY, carry);
	m.ccr.update_nz16(result);
	let negative = m.ccr.contains(Ccr::NEGATIVE);
	m.ccr.set(Ccr::OVERFLOW, negative ^ carry);
	result
}

/// Read-modify-write through the port-aware memory path.
fn modify(m: &mut Machine, mode: AddressingMode, op: fn(&mut Machine, u8) -> u8) -> ExecResult<()> {
	let addr = effective_address(m, mode);
	let value = m.load8(addr)?;
	let result = op(m, value);
	m.store8(addr, result)
}

// Single-operation cores shared between the accumulator and memory forms.

fn neg8(m: &mut Machine, value: u8) -> u8 {
	let result = value.wrapping_neg();
	m.ccr.update_nz8(result);
	m.ccr.set(Ccr::OVERFLOW, value == 0x80);
	m.ccr.set(Ccr::CARRY, value != 0);
	result
}

fn inc8(m: &mut Machine, value: u8) -> u8 {
	let result = value.wrapping_add(1);
	m.ccr.update_nz8(result);
	m.ccr.set(Ccr::OVERFLOW, value == 0x7F);
	result
}

fn dec8(m: &mut Machine, value: u8) -> u8 {
	let result = value.wrapping_sub(1);
	m.ccr.update_nz8(result);
	m.ccr.set(Ccr::OVERFLOW, value == 0x80);
	result
}

fn com8(m: &mut Machine, value: u8) -> u8 {
	let result = !value;
	m.ccr.update_nz8(result);
	m.ccr.remove(Ccr::OVERFLOW);
	m.ccr.insert(Ccr::CARRY);
	result
}

fn clr8(m: &mut Machine, _value: u8) -> u8 {
	// S, X, H and I survive; the arithmetic flags take their cleared shape.
	m.ccr.remove(Ccr::NEGATIVE | Ccr::OVERFLOW | Ccr::CARRY);
	m.ccr.insert(Ccr::ZERO);
	0
}

fn tst_flags8(m: &mut Machine, value: u8) {
	m.ccr.update_nz8(value);
	m.ccr.remove(Ccr::OVERFLOW | Ccr::CARRY);
}

fn asl8(m: &mut Machine, value: u8) -> u8 {
	shift_flags8(m, value << 1, value & 0x80 != 0)
}

fn asr8(m: &mut Machine, value: u8) -> u8 {
	shift_flags8(m, (value >> 1) | (value & 0x80), value & 0x01 != 0)
}

fn lsr8(m: &mut Machine, value: u8) -> u8 {
	shift_flags8(m, value >> 1, value & 0x01 != 0)
}

fn rol8(m: &mut Machine, value: u8) -> u8 {
	let carry_in = m.ccr.carry_in();
	shift_flags8(m, (value << 1) | carry_in, value & 0x80 != 0)
}

fn ror8(m: &mut Machine, value: u8) -> u8 {
	let carry_in = m.ccr.carry_in();
	shift_flags8(m, (value >> 1) | (carry_in << 7), value & 0x01 != 0)
}

// Loads and stores.

pub(super) fn ldaa(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.a = value;
	load_flags8(m, value);
	Ok(())
}

pub(super) fn ldab(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.b = value;
	load_flags8(m, value);
	Ok(())
}

pub(super) fn ldd(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand16(m, mode)?;
	m.set_d(value);
	load_flags16(m, value);
	Ok(())
}

pub(super) fn lds(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand16(m, mode)?;
	m.sp = value;
	load_flags16(m, value);
	Ok(())
}

pub(super) fn staa(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let addr = effective_address(m, mode);
	m.store8(addr, m.a)?;
	load_flags8(m, m.a);
	Ok(())
}

pub(super) fn stab(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let addr = effective_address(m, mode);
	m.store8(addr, m.b)?;
	load_flags8(m, m.b);
	Ok(())
}

pub(super) fn std(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let addr = effective_address(m, mode);
	let value = m.d();
	m.store16(addr, value)?;
	load_flags16(m, value);
	Ok(())
}

pub(super) fn sts(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let addr = effective_address(m, mode);
	let value = m.sp;
	m.store16(addr, value)?;
	load_flags16(m, value);
	Ok(())
}

// Arithmetic.

pub(super) fn aba(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = add8(m, m.a, m.b, 0);
	Ok(())
}

pub(super) fn adca(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	let carry = m.ccr.carry_in();
	m.a = add8(m, m.a, value, carry);
	Ok(())
}

pub(super) fn adcb(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	let carry = m.ccr.carry_in();
	m.b = add8(m, m.b, value, carry);
	Ok(())
}

pub(super) fn adda(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.a = add8(m, m.a, value, 0);
	Ok(())
}

pub(super) fn addb(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.b = add8(m, m.b, value, 0);
	Ok(())
}

pub(super) fn addd(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand16(m, mode)?;
	let result = add16(m, m.d(), value);
	m.set_d(result);
	Ok(())
}

pub(super) fn suba(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.a = sub8(m, m.a, value);
	Ok(())
}

pub(super) fn subb(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.b = sub8(m, m.b, value);
	Ok(())
}

pub(super) fn subd(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand16(m, mode)?;
	let result = sub16(m, m.d(), value);
	m.set_d(result);
	Ok(())
}

pub(super) fn sba(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = sub8(m, m.a, m.b);
	Ok(())
}

pub(super) fn nega(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = neg8(m, m.a);
	Ok(())
}

pub(super) fn negb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = neg8(m, m.b);
	Ok(())
}

pub(super) fn neg(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, neg8)
}

pub(super) fn inca(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = inc8(m, m.a);
	Ok(())
}

pub(super) fn incb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = inc8(m, m.b);
	Ok(())
}

pub(super) fn inc(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, inc8)
}

pub(super) fn deca(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = dec8(m, m.a);
	Ok(())
}

pub(super) fn decb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = dec8(m, m.b);
	Ok(())
}

pub(super) fn dec(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, dec8)
}

pub(super) fn mul(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let product = u16::from(m.a) * u16::from(m.b);
	m.set_d(product);
	// C is the rounding bit: bit 7 of the low result byte.
	m.ccr.set(Ccr::CARRY, product & 0x80 != 0);
	Ok(())
}

// Logical.

pub(super) fn anda(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.a &= value;
	load_flags8(m, m.a);
	Ok(())
}

pub(super) fn andb(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.b &= value;
	load_flags8(m, m.b);
	Ok(())
}

pub(super) fn oraa(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.a |= value;
	load_flags8(m, m.a);
	Ok(())
}

pub(super) fn orab(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.b |= value;
	load_flags8(m, m.b);
	Ok(())
}

pub(super) fn eora(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.a ^= value;
	load_flags8(m, m.a);
	Ok(())
}

pub(super) fn eorb(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	m.b ^= value;
	load_flags8(m, m.b);
	Ok(())
}

pub(super) fn coma(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = com8(m, m.a);
	Ok(())
}

pub(super) fn comb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = com8(m, m.b);
	Ok(())
}

pub(super) fn com(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, com8)
}

pub(super) fn clra(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = clr8(m, 0);
	Ok(())
}

pub(super) fn clrb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = clr8(m, 0);
	Ok(())
}

pub(super) fn clr(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, clr8)
}

// Shifts and rotates.

pub(super) fn asla(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = asl8(m, m.a);
	Ok(())
}

pub(super) fn aslb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = asl8(m, m.b);
	Ok(())
}

pub(super) fn asld(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let value = m.d();
	let result = shift_flags16(m, value << 1, value & 0x8000 != 0);
	m.set_d(result);
	Ok(())
}

pub(super) fn asl(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, asl8)
}

pub(super) fn asra(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = asr8(m, m.a);
	Ok(())
}

pub(super) fn asrb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = asr8(m, m.b);
	Ok(())
}

pub(super) fn asr(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, asr8)
}

pub(super) fn lsra(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = lsr8(m, m.a);
	Ok(())
}

pub(super) fn lsrb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = lsr8(m, m.b);
	Ok(())
}

pub(super) fn lsrd(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let value = m.d();
	let result = shift_flags16(m, value >> 1, value & 0x0001 != 0);
	m.set_d(result);
	Ok(())
}

pub(super) fn lsr(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, lsr8)
}

pub(super) fn rola(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = rol8(m, m.a);
	Ok(())
}

pub(super) fn rolb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = rol8(m, m.b);
	Ok(())
}

pub(super) fn rol(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, rol8)
}

pub(super) fn rora(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = ror8(m, m.a);
	Ok(())
}

pub(super) fn rorb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = ror8(m, m.b);
	Ok(())
}

pub(super) fn ror(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	modify(m, mode, ror8)
}

// Compare and test.

pub(super) fn cmpa(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	sub8(m, m.a, value);
	Ok(())
}

pub(super) fn cmpb(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let value = operand8(m, mode)?;
	sub8(m, m.b, value);
	Ok(())
}

pub(super) fn cba(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	sub8(m, m.a, m.b);
	Ok(())
}

pub(super) fn tsta(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let value = m.a;
	tst_flags8(m, value);
	Ok(())
}

pub(super) fn tstb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let value = m.b;
	tst_flags8(m, value);
	Ok(())
}

pub(super) fn tst(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let addr = effective_address(m, mode);
	let value = m.load8(addr)?;
	tst_flags8(m, value);
	Ok(())
}

// Transfers.

pub(super) fn tab(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = m.a;
	load_flags8(m, m.b);
	Ok(())
}

pub(super) fn tba(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = m.b;
	load_flags8(m, m.a);
	Ok(())
}

pub(super) fn tap(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.ccr = Ccr::from_byte(m.a);
	Ok(())
}

pub(super) fn tpa(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = m.ccr.to_byte();
	Ok(())
}

// Branches. The displacement byte is consumed either way; a taken branch
// adds it, sign-extended, to the already advanced PC.

fn branch(m: &mut Machine, taken: bool) {
	let displacement = m.fetch8() as i8;
	if taken {
		m.pc = m.pc.wrapping_add_signed(i16::from(displacement));
	}
}

pub(super) fn bra(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	branch(m, true);
	Ok(())
}

pub(super) fn brn(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	branch(m, false);
	Ok(())
}

pub(super) fn bcc(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = !m.ccr.contains(Ccr::CARRY);
	branch(m, taken);
	Ok(())
}

pub(super) fn bcs(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = m.ccr.contains(Ccr::CARRY);
	branch(m, taken);
	Ok(())
}

pub(super) fn bne(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = !m.ccr.contains(Ccr::ZERO);
	branch(m, taken);
	Ok(())
}

pub(super) fn beq(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = m.ccr.contains(Ccr::ZERO);
	branch(m, taken);
	Ok(())
}

pub(super) fn bvc(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = !m.ccr.contains(Ccr::OVERFLOW);
	branch(m, taken);
	Ok(())
}

pub(super) fn bvs(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = m.ccr.contains(Ccr::OVERFLOW);
	branch(m, taken);
	Ok(())
}

pub(super) fn bpl(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = !m.ccr.contains(Ccr::NEGATIVE);
	branch(m, taken);
	Ok(())
}

pub(super) fn bmi(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = m.ccr.contains(Ccr::NEGATIVE);
	branch(m, taken);
	Ok(())
}

pub(super) fn bge(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = m.ccr.contains(Ccr::NEGATIVE) == m.ccr.contains(Ccr::OVERFLOW);
	branch(m, taken);
	Ok(())
}

pub(super) fn blt(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = m.ccr.contains(Ccr::NEGATIVE) != m.ccr.contains(Ccr::OVERFLOW);
	branch(m, taken);
	Ok(())
}

pub(super) fn bgt(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = !m.ccr.contains(Ccr::ZERO)
		&& m.ccr.contains(Ccr::NEGATIVE) == m.ccr.contains(Ccr::OVERFLOW);
	branch(m, taken);
	Ok(())
}

pub(super) fn ble(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = m.ccr.contains(Ccr::ZERO)
		|| m.ccr.contains(Ccr::NEGATIVE) != m.ccr.contains(Ccr::OVERFLOW);
	branch(m, taken);
	Ok(())
}

pub(super) fn bhi(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = !m.ccr.contains(Ccr::CARRY) && !m.ccr.contains(Ccr::ZERO);
	branch(m, taken);
	Ok(())
}

pub(super) fn bls(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let taken = m.ccr.contains(Ccr::CARRY) || m.ccr.contains(Ccr::ZERO);
	branch(m, taken);
	Ok(())
}

// Subroutines and jumps. The pushed return address is the instruction
// after the call, which is where PC points once the operand is consumed.

pub(super) fn bsr(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	let displacement = m.fetch8() as i8;
	m.push16(m.pc);
	m.pc = m.pc.wrapping_add_signed(i16::from(displacement));
	Ok(())
}

pub(super) fn jsr(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	let target = effective_address(m, mode);
	m.push16(m.pc);
	m.pc = target;
	Ok(())
}

pub(super) fn rts(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.pc = m.pop16();
	Ok(())
}

pub(super) fn jmp(m: &mut Machine, mode: AddressingMode) -> ExecResult<()> {
	m.pc = effective_address(m, mode);
	Ok(())
}

pub(super) fn nop(_m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	Ok(())
}

// Stack.

pub(super) fn psha(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.push8(m.a);
	Ok(())
}

pub(super) fn pshb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.push8(m.b);
	Ok(())
}

pub(super) fn pshx(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.push16(m.x);
	Ok(())
}

pub(super) fn pula(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.a = m.pop8();
	Ok(())
}

pub(super) fn pulb(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.b = m.pop8();
	Ok(())
}

pub(super) fn pulx(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.x = m.pop16();
	Ok(())
}

pub(super) fn des(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.sp = m.sp.wrapping_sub(1);
	Ok(())
}

pub(super) fn ins(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.sp = m.sp.wrapping_add(1);
	Ok(())
}

// Flag manipulation.

pub(super) fn clv(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.ccr.remove(Ccr::OVERFLOW);
	Ok(())
}

pub(super) fn sev(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.ccr.insert(Ccr::OVERFLOW);
	Ok(())
}

pub(super) fn clc(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.ccr.remove(Ccr::CARRY);
	Ok(())
}

pub(super) fn sec(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.ccr.insert(Ccr::CARRY);
	Ok(())
}

pub(super) fn cli(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.ccr.remove(Ccr::IRQ_MASK);
	Ok(())
}

pub(super) fn sei(m: &mut Machine, _mode: AddressingMode) -> ExecResult<()> {
	m.ccr.insert(Ccr::IRQ_MASK);
	Ok(())
}
