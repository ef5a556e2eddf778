//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry (overflow detection only)
//! - AND, ORA, EOR: Bitwise logic against the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! Decimal mode is stored but never applied: ADC stays binary and leaves
//! carry alone when D is set, SBC does nothing at all when D is set.

use crate::addressing::{AddressingMode, Operand};
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Computes `A + M + C` as a 9-bit sum and commits the low eight bits to the
/// accumulator.
///
/// # Flag Behavior
///
/// - Overflow (V): Set if the sum exceeds 0xFF
/// - Negative (N): Bit 7 of the sum
/// - Carry (C): Set if the sum exceeds 0xFF; untouched in decimal mode
/// - Zero (Z): Not affected
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let value = cpu.operand_value(operand);
    let carry_in = cpu.flag_c as u16;

    let result16 = cpu.a as u16 + value as u16 + carry_in;

    cpu.flag_v = result16 > 0xFF;
    cpu.flag_n = (result16 & 0x80) != 0;
    if !cpu.flag_d {
        cpu.flag_c = result16 > 0xFF;
    }

    cpu.a = result16 as u8;
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes the signed difference `A - M - (1 - C)` and sets Overflow when it
/// falls outside -128..=127. The accumulator, N, Z and C are left unchanged,
/// and nothing happens at all while the Decimal flag is set.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    if cpu.flag_d {
        return;
    }

    let value = cpu.operand_value(operand);
    let borrow = if cpu.flag_c { 0 } else { 1 };
    let difference = cpu.a as i16 - value as i16 - borrow;

    cpu.flag_v = !(-128..=127).contains(&difference);
}

/// Executes the AND (Logical AND) instruction.
///
/// `A = A & M`; sets N and Z from the result.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let result = cpu.a & cpu.operand_value(operand);
    cpu.a = result;
    cpu.update_nz(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// `A = A | M`; sets N and Z from the result.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let result = cpu.a | cpu.operand_value(operand);
    cpu.a = result;
    cpu.update_nz(result);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// `A = A ^ M`; sets N and Z from the result.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let result = cpu.a ^ cpu.operand_value(operand);
    cpu.a = result;
    cpu.update_nz(result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// ANDs the accumulator with memory without storing the result.
///
/// # Flag Behavior
///
/// - Negative (N): Bit 7 of `A & M`
/// - Zero (Z): Set if `A & M` is zero
/// - Overflow (V): Bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let value = cpu.operand_value(operand);
    let result = cpu.a & value;

    cpu.update_nz(result);
    cpu.flag_v = (value & 0x40) != 0;
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let register = cpu.a;
    compare(cpu, register, operand);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let register = cpu.x;
    compare(cpu, register, operand);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let register = cpu.y;
    compare(cpu, register, operand);
}

/// Shared compare logic: N and Z come from `register - M` (mod 256), C is set
/// when `register >= M` as unsigned bytes.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.update_nz(register.wrapping_sub(value));
    cpu.flag_c = register >= value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_adc_decimal_mode_keeps_carry() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_flag_d(true);
        cpu.set_flag_c(false);
        cpu.set_a(0xF0);

        execute_adc(&mut cpu, AddressingMode::Immediate, Operand::Immediate(0x20));

        assert_eq!(cpu.a(), 0x10);
        assert!(!cpu.flag_c());
        assert!(cpu.flag_v());
    }

    #[test]
    fn test_sbc_decimal_mode_is_inert() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_flag_d(true);
        cpu.set_flag_v(false);
        cpu.set_a(0x00);

        execute_sbc(&mut cpu, AddressingMode::Immediate, Operand::Immediate(0xFF));

        assert!(!cpu.flag_v());
        assert_eq!(cpu.a(), 0x00);
    }

    #[test]
    fn test_compare_sets_carry_on_equal() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_x(0x40);

        execute_cpx(&mut cpu, AddressingMode::Immediate, Operand::Immediate(0x40));

        assert!(cpu.flag_c());
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());
    }
}
