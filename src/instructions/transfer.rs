//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer except TXS sets N and Z from the copied value.

use crate::addressing::{AddressingMode, Operand};
use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.x = cpu.a;
    cpu.update_nz(cpu.x);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.y = cpu.a;
    cpu.update_nz(cpu.y);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.a = cpu.x;
    cpu.update_nz(cpu.a);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.a = cpu.y;
    cpu.update_nz(cpu.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.x = cpu.sp;
    cpu.update_nz(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, no flags are affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, _operand: Operand) {
    cpu.sp = cpu.x;
}
