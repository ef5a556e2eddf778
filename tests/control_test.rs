//! Tests for JMP, JSR/RTS, RTI, BRK and NOP.

use emu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x8000);
    cpu
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x34, 0x12]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.write_memory(0x0200, 0x00);
    cpu.write_memory(0x0201, 0x90);
    cpu.memory_mut().load(0x8000, &[0x6C, 0x00, 0x02]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn test_jmp_indirect_page_boundary_reads_next_page() {
    let mut cpu = setup_cpu();
    cpu.write_memory(0x02FF, 0x00);
    cpu.write_memory(0x0300, 0x40);
    cpu.write_memory(0x0200, 0x50);
    cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, 0x02]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x4000);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_next_instruction_address() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.read_memory(0x01FF), 0x80, "High byte pushed first");
    assert_eq!(cpu.read_memory(0x01FE), 0x03, "Low byte pushed second");
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    cpu.memory_mut().load(0x9000, &[0x60]); // RTS

    cpu.step();
    cpu.step();

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_jsr_does_not_read_target() {
    let mut cpu = setup_cpu();
    cpu.write_memory(0x9000, 0xEA);
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.status(), 0x04);
}

// ========== RTI ==========

#[test]
fn test_rti_restores_status_then_pc() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFC);
    cpu.write_memory(0x01FD, 0xC3); // status
    cpu.write_memory(0x01FE, 0x34); // PC low
    cpu.write_memory(0x01FF, 0x12); // PC high
    cpu.memory_mut().load(0x8000, &[0x40]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.status(), 0xC3);
}

// ========== BRK ==========

#[test]
fn test_brk_pushes_and_vectors() {
    let mut cpu = setup_cpu();
    cpu.write_memory(0xFFFE, 0x00);
    cpu.write_memory(0xFFFF, 0xA0);
    cpu.memory_mut().load(0x8000, &[0x00]);

    cpu.step();

    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.read_memory(0x01FF), 0x80);
    assert_eq!(cpu.read_memory(0x01FE), 0x01);
    // I from power-on plus B in the pushed copy
    assert_eq!(cpu.read_memory(0x01FD), 0x14);
    assert!(!cpu.flag_b(), "Live B flag is unchanged");
}

#[test]
fn test_brk_does_not_set_interrupt_disable() {
    let mut cpu = setup_cpu();
    cpu.set_flag_i(false);
    cpu.memory_mut().load(0x8000, &[0x00]);

    cpu.step();

    assert!(!cpu.flag_i());
    assert_eq!(cpu.read_memory(0x01FD), 0x10);
}

#[test]
fn test_brk_then_rti_returns_past_brk() {
    let mut cpu = setup_cpu();
    cpu.set_flag_c(true);
    cpu.write_memory(0xFFFE, 0x00);
    cpu.write_memory(0xFFFF, 0xA0);
    cpu.memory_mut().load(0x8000, &[0x00]);
    cpu.memory_mut().load(0xA000, &[0x40]);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_c());
    assert!(cpu.flag_b(), "RTI restores the pushed B bit");
}

// ========== NOP ==========

#[test]
fn test_nop_only_advances_pc() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x12);
    cpu.set_status(0x81);
    cpu.memory_mut().load(0x8000, &[0xEA]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.status(), 0x81);
    assert_eq!(cpu.sp(), 0xFF);
}
