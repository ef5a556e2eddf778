//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register

use crate::addressing::{AddressingMode, Operand};
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory (or an immediate literal) into the accumulator.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.a = value;
    cpu.update_nz(value);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, targeting X.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.x = value;
    cpu.update_nz(value);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, targeting Y.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.y = value;
    cpu.update_nz(value);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the accumulator at the effective address. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let value = cpu.a;
    store(cpu, operand, value);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let value = cpu.x;
    store(cpu, operand, value);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let value = cpu.y;
    store(cpu, operand, value);
}

fn store<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, value: u8) {
    // Stores only ever decode with an address-producing mode.
    if let Some(addr) = operand.address() {
        cpu.memory.write(addr, value);
    }
}
