//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing and touch nothing but their flag.

use crate::addressing::{AddressingMode, Operand};
use crate::{MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0000, 0x18); // CLC
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag_c(true);
/// cpu.step();
///
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x0001);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.flag_c = false;
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.flag_d = false;
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.flag_i = false;
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.flag_v = false;
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.flag_c = true;
}

/// Executes the SED (Set Decimal Flag) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.flag_d = true;
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.flag_i = true;
}
