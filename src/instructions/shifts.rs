//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! In accumulator mode the target is A, otherwise the memory cell at the
//! resolved address. Carry receives the bit shifted out; rotates feed the
//! previous carry into the vacated bit. N and Z follow the new value.

use super::modify;
use crate::addressing::{AddressingMode, Operand};
use crate::{MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand: Operand) {
    let result = modify(cpu, mode, operand, |cpu, value| {
        cpu.flag_c = (value & 0x80) != 0;
        value << 1
    });
    cpu.update_nz(result);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0 (so N always ends up clear).
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand: Operand) {
    let result = modify(cpu, mode, operand, |cpu, value| {
        cpu.flag_c = (value & 0x01) != 0;
        value >> 1
    });
    cpu.update_nz(result);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Bit 7 goes to carry, the old carry enters bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand: Operand) {
    let result = modify(cpu, mode, operand, |cpu, value| {
        let carry_in = cpu.flag_c as u8;
        cpu.flag_c = (value & 0x80) != 0;
        (value << 1) | carry_in
    });
    cpu.update_nz(result);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Bit 0 goes to carry, the old carry enters bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, operand: Operand) {
    let result = modify(cpu, mode, operand, |cpu, value| {
        let carry_in = cpu.flag_c as u8;
        cpu.flag_c = (value & 0x01) != 0;
        (value >> 1) | (carry_in << 7)
    });
    cpu.update_nz(result);
}
