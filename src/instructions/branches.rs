//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Carry clear / set
//! - BEQ / BNE: Zero set / clear
//! - BMI / BPL: Negative set / clear
//! - BVC / BVS: Overflow clear / set
//!
//! All branches use relative addressing. The resolver has already added the
//! signed offset to the post-fetch PC, so a taken branch simply loads the
//! resolved address into PC. No flags are affected.

use crate::addressing::{AddressingMode, Operand};
use crate::{MemoryBus, CPU};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool, operand: Operand) {
    if let (true, Some(target)) = (condition, operand.address()) {
        cpu.pc = target;
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0x90, 0x05]); // BCC +5
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_pc(0x8000);
/// cpu.step();
///
/// assert_eq!(cpu.pc(), 0x8007);
/// ```
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let condition = !cpu.flag_c;
    branch_if(cpu, condition, operand);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let condition = cpu.flag_c;
    branch_if(cpu, condition, operand);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let condition = cpu.flag_z;
    branch_if(cpu, condition, operand);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let condition = !cpu.flag_z;
    branch_if(cpu, condition, operand);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let condition = cpu.flag_n;
    branch_if(cpu, condition, operand);
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let condition = !cpu.flag_n;
    branch_if(cpu, condition, operand);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let condition = !cpu.flag_v;
    branch_if(cpu, condition, operand);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode, operand: Operand) {
    let condition = cpu.flag_v;
    branch_if(cpu, condition, operand);
}
