//! Tests for the conditional branch instructions.
//!
//! The offset is a signed byte added to the PC of the following instruction.

use emu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x8000);
    cpu
}

fn run_branch(opcode: u8, offset: u8, configure: impl FnOnce(&mut CPU<FlatMemory>)) -> u16 {
    let mut cpu = setup_cpu();
    configure(&mut cpu);
    cpu.memory_mut().load(0x8000, &[opcode, offset]);
    cpu.step();
    cpu.pc()
}

#[test]
fn test_bcc_taken_forward() {
    assert_eq!(run_branch(0x90, 0x05, |cpu| cpu.set_flag_c(false)), 0x8007);
}

#[test]
fn test_bcc_not_taken() {
    assert_eq!(run_branch(0x90, 0x05, |cpu| cpu.set_flag_c(true)), 0x8002);
}

#[test]
fn test_bcs_taken_backward() {
    // -4 from $8002
    assert_eq!(run_branch(0xB0, 0xFC, |cpu| cpu.set_flag_c(true)), 0x7FFE);
}

#[test]
fn test_bcs_taken_minus_five() {
    assert_eq!(run_branch(0xB0, 0xFB, |cpu| cpu.set_flag_c(true)), 0x7FFD);
}

#[test]
fn test_beq_taken() {
    assert_eq!(run_branch(0xF0, 0x10, |cpu| cpu.set_flag_z(true)), 0x8012);
}

#[test]
fn test_beq_not_taken() {
    assert_eq!(run_branch(0xF0, 0x10, |cpu| cpu.set_flag_z(false)), 0x8002);
}

#[test]
fn test_bne_taken() {
    assert_eq!(run_branch(0xD0, 0x02, |cpu| cpu.set_flag_z(false)), 0x8004);
}

#[test]
fn test_bmi_taken() {
    assert_eq!(run_branch(0x30, 0x7F, |cpu| cpu.set_flag_n(true)), 0x8081);
}

#[test]
fn test_bpl_taken_max_backward() {
    assert_eq!(run_branch(0x10, 0x80, |cpu| cpu.set_flag_n(false)), 0x7F82);
}

#[test]
fn test_bvc_taken() {
    assert_eq!(run_branch(0x50, 0x01, |cpu| cpu.set_flag_v(false)), 0x8003);
}

#[test]
fn test_bvs_taken() {
    assert_eq!(run_branch(0x70, 0x01, |cpu| cpu.set_flag_v(true)), 0x8003);
}

#[test]
fn test_bvs_not_taken() {
    assert_eq!(run_branch(0x70, 0x01, |cpu| cpu.set_flag_v(false)), 0x8002);
}

#[test]
fn test_branch_wraps_address_space() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0xFFFC);
    cpu.set_flag_z(true);
    cpu.memory_mut().load(0xFFFC, &[0xF0, 0x05]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x0003);
}

#[test]
fn test_branch_leaves_flags() {
    let mut cpu = setup_cpu();
    cpu.set_status(0xC3);
    cpu.memory_mut().load(0x8000, &[0x30, 0x02]);

    cpu.step();

    assert_eq!(cpu.status(), 0xC3);
}
