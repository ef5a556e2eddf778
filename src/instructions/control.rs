//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - BRK: Force interrupt
//! - NOP: No operation
//!
//! Return addresses are pushed high byte first. JSR pushes the address of the
//! instruction after itself (no -1 adjustment), so RTS restores it verbatim.

use crate::addressing::{AddressingMode, Operand};
use crate::cpu::BRK_VECTOR;
use crate::registers::Status;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Sets PC to the resolved address. Works for both absolute (0x4C) and
/// indirect (0x6C); the indirect pointer has already been followed by the
/// resolver. No flags affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    if let Some(target) = operand.address() {
        cpu.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the current PC (already past the 3-byte JSR), high byte then low
/// byte, and jumps to the target.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let return_address = cpu.pc;
    push_word(cpu, return_address);

    if let Some(target) = operand.address() {
        cpu.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the low byte then the high byte and loads PC.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    let return_address = pull_word(cpu);
    cpu.pc = return_address;
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte first, then PC (low, high).
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    let status = cpu.pull();
    cpu.set_status(status);
    let return_address = pull_word(cpu);
    cpu.pc = return_address;
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// 1. Push PC high byte, then PC low byte (PC already points past the BRK)
/// 2. Push the status byte with B set in the pushed copy only
/// 3. Load PC from the vector at $FFFE (low) / $FFFF (high)
///
/// The live B and I flags are not modified.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    let return_address = cpu.pc;
    push_word(cpu, return_address);

    let status = cpu.status() | Status::BREAK.bits();
    cpu.push(status);

    cpu.pc = cpu.memory.read_word(BRK_VECTOR);
}

/// Executes the NOP (No Operation) instruction.
///
/// Also runs in place of every opcode missing from the table.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {}

fn push_word<M: MemoryBus>(cpu: &mut CPU<M>, value: u16) {
    cpu.push((value >> 8) as u8);
    cpu.push((value & 0xFF) as u8);
}

fn pull_word<M: MemoryBus>(cpu: &mut CPU<M>) -> u16 {
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    (hi << 8) | lo
}
