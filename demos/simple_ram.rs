//! Simple RAM example
//!
//! Demonstrates basic CPU initialization and execution with FlatMemory.
//!
//! This example shows:
//! - Creating a 64KB flat memory instance
//! - Loading a small program at 0x0000
//! - Stepping the CPU and inspecting state after each instruction
//!
//! Install any `log` backend to see the trace record the core emits per
//! instruction.

use emu6502::{decode, FlagName, FlatMemory, MemoryBus, CPU};

fn print_state(cpu: &CPU<FlatMemory>) {
    let flags: String = FlagName::ALL
        .iter()
        .map(|flag| {
            if cpu.flag(*flag) {
                flag.letter().to_ascii_uppercase()
            } else {
                '-'
            }
        })
        .collect();

    println!(
        "  PC: 0x{:04X}  A: 0x{:02X}  X: 0x{:02X}  Y: 0x{:02X}  SP: 0x{:02X}  P: 0x{:02X} [{}]",
        cpu.pc(),
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.status(),
        flags
    );
}

fn main() {
    println!("6502 CPU Emulator Core - Simple RAM Example");
    println!("===========================================\n");

    let mut memory = FlatMemory::new();

    // LDA #$05; STA $10; LDA $10; INX; .byte $02 (undocumented)
    let program = [0xA9, 0x05, 0x85, 0x10, 0xA5, 0x10, 0xE8, 0x02];
    memory.load(0x0000, &program);

    println!("Loaded {} bytes at 0x0000\n", program.len());

    let mut cpu = CPU::new(memory);

    println!("CPU Initial State:");
    print_state(&cpu);
    println!();

    for step in 1..=5 {
        let pc_before = cpu.pc();
        let opcode = cpu.read_memory(pc_before);
        let metadata = decode(opcode);

        cpu.step();

        println!(
            "Step {}: 0x{:04X}  {:02X}  {} {:?} ({} bytes)",
            step,
            pc_before,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            metadata.size_bytes()
        );
        print_state(&cpu);
    }

    println!("\nMemory at 0x0010: 0x{:02X}", cpu.read_memory(0x0010));
    println!("\nExample complete!");
}
