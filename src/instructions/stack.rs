//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! Push writes to 0x0100 + SP then decrements SP; pull increments SP then reads.
//! SP wraps within the page in both directions.

use crate::addressing::{AddressingMode, Operand};
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
/// cpu.step();
///
/// assert_eq!(cpu.read_memory(0x01FF), 0x42);
/// assert_eq!(cpu.sp(), 0xFE);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    let value = cpu.a;
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The status byte is pushed exactly as [`CPU::status`] reports it.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    let status = cpu.status();
    cpu.push(status);
}

/// Executes the PLA (Pull Accumulator) instruction. Sets N and Z.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.update_nz(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All seven flags are replaced from the pulled byte.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    let status = cpu.pull();
    cpu.set_status(status);
}
