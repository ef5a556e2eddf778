//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, then runs a few
//! instructions. Stepping has no error path, so any panic is a bug.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    /// Packed NV-BDIZC byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions)
    instruction_bytes: [u8; 8],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// BRK vector
    brk_vector: u16,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.write(0xFFFE, input.memory.brk_vector as u8);
    memory.write(0xFFFF, (input.memory.brk_vector >> 8) as u8);
    // Last so a PC near a fixed region still sees the fuzzed instructions
    memory.load(input.cpu_state.pc, &input.memory.instruction_bytes);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_status(input.cpu_state.status);

    cpu.run((input.steps % 8) as usize + 1);

    // Bit 5 is never materialized
    assert_eq!(cpu.status() & 0x20, 0);
});
