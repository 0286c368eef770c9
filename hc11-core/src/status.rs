//! The condition-code register.

use bitflags::bitflags;

bitflags! {
	/// The 8-bit condition-code register of the 68HC11.
	///
	/// Bit layout:
	/// 7 6 5 4 3 2 1 0
	/// S X H I N Z V C
	///
	/// Arithmetic and logical operations update the low four flags; the
	/// interrupt masks and the stop-disable bit are only touched by the
	/// dedicated flag instructions and by `TAP`.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Ccr: u8 {
		/// Carry / borrow (C)
		/// Set when an addition carries out of bit 7 or a subtraction
		/// needs a borrow.
		const CARRY = 0b0000_0001;

		/// Two's-complement overflow (V)
		const OVERFLOW = 0b0000_0010;

		/// Zero (Z)
		const ZERO = 0b0000_0100;

		/// Negative (N): sign bit of the last result.
		const NEGATIVE = 0b0000_1000;

		/// IRQ interrupt mask (I)
		const IRQ_MASK = 0b0001_0000;

		/// Half carry (H): carry out of bit 3 during 8-bit additions.
		const HALF_CARRY = 0b0010_0000;

		/// XIRQ interrupt mask (X)
		const XIRQ_MASK = 0b0100_0000;

		/// Stop disable (S)
		const STOP_DISABLE = 0b1000_0000;
	}
}

impl Ccr {
	/// Set or clear N and Z from an 8-bit result.
	pub fn update_nz8(&mut self, value: u8) {
		self.set(Self::NEGATIVE, value & 0x80 != 0);
		self.set(Self::ZERO, value == 0);
	}

	/// Set or clear N and Z from a 16-bit result.
	pub fn update_nz16(&mut self, value: u16) {
		self.set(Self::NEGATIVE, value & 0x8000 != 0);
		self.set(Self::ZERO, value == 0);
	}

	/// The carry bit as 0 or 1, for add-with-carry and rotates.
	#[must_use]
	pub fn carry_in(self) -> u8 {
		u8::from(self.contains(Self::CARRY))
	}

	/// The whole register as a byte (`TPA`).
	#[must_use]
	pub fn to_byte(self) -> u8 {
		self.bits()
	}

	/// Replace the whole register from a byte (`TAP`).
	#[must_use]
	pub fn from_byte(byte: u8) -> Self {
		Self::from_bits_retain(byte)
	}
}

impl Default for Ccr {
	fn default() -> Self {
		Self::empty()
	}
}
