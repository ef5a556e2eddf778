//! Fetch-decode-execute loop tests
//!
//! Covers PC advancement, unknown opcode handling, and a short program run
//! end to end.

use emu6502::{FlatMemory, MemoryBus, CPU};

#[test]
fn test_load_store_load_program() {
    let mut cpu = CPU::new(FlatMemory::new());
    // LDA #$05; STA $10; LDA $10
    cpu.memory_mut()
        .load(0x0000, &[0xA9, 0x05, 0x85, 0x10, 0xA5, 0x10]);

    cpu.step();
    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.pc(), 0x0002);

    cpu.step();
    assert_eq!(cpu.read_memory(0x0010), 0x05);
    assert_eq!(cpu.pc(), 0x0004);

    cpu.step();
    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.pc(), 0x0006);
}

#[test]
fn test_pc_advances_by_instruction_size() {
    let cases: [(&[u8], u16); 5] = [
        (&[0xEA], 1),             // NOP implied
        (&[0x0A], 1),             // ASL A
        (&[0xA9, 0x01], 2),       // LDA #
        (&[0xAD, 0x00, 0x20], 3), // LDA abs
        (&[0x6C, 0x00, 0x20], 3), // JMP (ind) reads a 16-bit pointer
    ];

    for (bytes, size) in cases.iter() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_pc(0x0400);
        cpu.write_memory(0x2000, 0x00);
        cpu.write_memory(0x2001, 0x04);
        cpu.memory_mut().load(0x0400, bytes);

        cpu.step();

        let expected = if bytes[0] == 0x6C { 0x0400 } else { 0x0400 + size };
        assert_eq!(cpu.pc(), expected, "opcode 0x{:02X}", bytes[0]);
    }
}

#[test]
fn test_unknown_opcodes_run_as_one_byte_nop() {
    for opcode in [0x02u8, 0x03, 0x1A, 0x80, 0xFF] {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_pc(0x0300);
        cpu.set_a(0x12);
        cpu.write_memory(0x0300, opcode);
        cpu.write_memory(0x0301, 0xA9);

        cpu.step();

        assert_eq!(cpu.pc(), 0x0301, "opcode 0x{:02X}", opcode);
        assert_eq!(cpu.a(), 0x12);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.status(), 0x04);
    }
}

#[test]
fn test_operand_fetch_wraps_at_top_of_memory() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0xFFFF);
    cpu.write_memory(0xFFFF, 0xA9); // LDA #
    cpu.write_memory(0x0000, 0x3C);

    cpu.step();

    assert_eq!(cpu.a(), 0x3C);
    assert_eq!(cpu.pc(), 0x0001);
}

#[test]
fn test_run_counts_instructions() {
    let mut cpu = CPU::new(FlatMemory::new());
    // INX x4
    cpu.memory_mut().load(0x0000, &[0xE8, 0xE8, 0xE8, 0xE8]);

    cpu.run(3);

    assert_eq!(cpu.x(), 3);
    assert_eq!(cpu.pc(), 0x0003);
}

#[test]
fn test_counting_loop() {
    let mut cpu = CPU::new(FlatMemory::new());
    // LDX #$03; loop: DEX; BNE loop; STX $20
    cpu.memory_mut()
        .load(0x0000, &[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0x86, 0x20]);
    cpu.write_memory(0x0020, 0xEE);

    // LDX, then 3 x (DEX, BNE), then STX
    cpu.run(1 + 3 * 2 + 1);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.read_memory(0x0020), 0x00);
    assert_eq!(cpu.pc(), 0x0007);
}

#[test]
fn test_subroutine_program() {
    let mut cpu = CPU::new(FlatMemory::new());
    // main: JSR sub; STA $30
    cpu.memory_mut().load(0x0000, &[0x20, 0x00, 0x10, 0x85, 0x30]);
    // sub: LDA #$99; RTS
    cpu.memory_mut().load(0x1000, &[0xA9, 0x99, 0x60]);

    cpu.run(4);

    assert_eq!(cpu.read_memory(0x0030), 0x99);
    assert_eq!(cpu.pc(), 0x0005);
    assert_eq!(cpu.sp(), 0xFF);
}
