//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from its
//! backing store, and `FlatMemory`, the uniform 64KB RAM the emulator runs on.
//!
//! ## Wraparound
//!
//! Addresses are `u16` and values are `u8`, so every access is already taken
//! modulo 65536 and every stored value modulo 256. Callers holding wider
//! integers normalize by truncating (`addr as u16`, `value as u8`). There is
//! no bus error: reads and writes always succeed.

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use emu6502::MemoryBus;
///
/// struct MirroredRam {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram[(addr & 0x07FF) as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.ram[(addr & 0x07FF) as usize] = value;
///     }
/// }
///
/// let mut mem = MirroredRam { ram: [0; 0x0800] };
/// mem.write(0x0801, 0x99);
/// assert_eq!(mem.read(0x0001), 0x99);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The high-byte address wraps from 0xFFFF to 0x0000. No page-boundary
    /// quirk is applied.
    ///
    /// ```
    /// use emu6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0010, 0x34);
    /// mem.write(0x0011, 0x12);
    /// assert_eq!(mem.read_word(0x0010), 0x1234);
    /// ```
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    fn load(&mut self, start: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            self.write(start.wrapping_add(offset as u16), byte);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses map to a single zero-initialized RAM array. There is
/// no ROM, no mirroring, and no memory-mapped I/O.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0000, &[0xA9, 0x05]); // LDA #$05
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
/// assert_eq!(cpu.a(), 0x05);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("FlatMemory")
            .field("nonzero_bytes", &used)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_read_word_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0xCD);
        mem.write(0x0000, 0xAB);

        assert_eq!(mem.read_word(0xFFFF), 0xABCD);
    }

    #[test]
    fn test_load_wraps_past_end() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[1, 2, 3, 4]);

        assert_eq!(mem.read(0xFFFE), 1);
        assert_eq!(mem.read(0xFFFF), 2);
        assert_eq!(mem.read(0x0000), 3);
        assert_eq!(mem.read(0x0001), 4);
    }
}
