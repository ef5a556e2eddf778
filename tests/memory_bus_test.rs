//! Memory bus trait tests
//!
//! Verifies FlatMemory and the provided MemoryBus helpers.

use emu6502::{FlatMemory, MemoryBus, CPU};

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for addr in [0x0000, 0x1234, 0x8000, 0xFFFF].iter() {
        assert_eq!(
            memory.read(*addr),
            0x00,
            "Memory at 0x{:04X} should be initialized to 0",
            addr
        );
    }
}

#[test]
fn test_flat_memory_read_write_round_trip() {
    let mut memory = FlatMemory::new();

    let test_data = [
        (0x0000, 0x01),
        (0x00FF, 0xFF),
        (0x0100, 0x7F),
        (0x1234, 0x42),
        (0x8000, 0xAB),
        (0xFFFF, 0xCD),
    ];

    for &(addr, value) in &test_data {
        memory.write(addr, value);
        assert_eq!(
            memory.read(addr),
            value,
            "Memory at 0x{:04X} should contain 0x{:02X}",
            addr,
            value
        );
    }
}

#[test]
fn test_wide_addresses_truncate_to_sixteen_bits() {
    let mut memory = FlatMemory::new();

    // A caller holding a 32-bit address normalizes by truncation
    let wide_addr: u32 = 0x1_2345;
    memory.write(wide_addr as u16, 0x5A);

    assert_eq!(memory.read(0x2345), 0x5A);
}

#[test]
fn test_wide_values_truncate_to_eight_bits() {
    let mut memory = FlatMemory::new();

    let wide_value: u16 = 0x1FF;
    memory.write(0x0200, wide_value as u8);

    assert_eq!(memory.read(0x0200), 0xFF);
}

#[test]
fn test_read_word_little_endian() {
    let mut memory = FlatMemory::new();
    memory.write(0x3000, 0xCD);
    memory.write(0x3001, 0xAB);

    assert_eq!(memory.read_word(0x3000), 0xABCD);
}

#[test]
fn test_read_word_crosses_page_without_quirk() {
    let mut memory = FlatMemory::new();
    memory.write(0x10FF, 0x34);
    memory.write(0x1100, 0x12);
    memory.write(0x1000, 0xEE);

    assert_eq!(memory.read_word(0x10FF), 0x1234);
}

#[test]
fn test_cpu_peek_poke() {
    let mut cpu = CPU::new(FlatMemory::new());

    cpu.write_memory(0xC000, 0x77);

    assert_eq!(cpu.read_memory(0xC000), 0x77);
    assert_eq!(cpu.memory().read(0xC000), 0x77);
}
