//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns an instruction's raw operand into an
//! [`Operand`]: an effective address, a literal, or nothing at all.
//!
//! ## Divergences from silicon
//!
//! The resolver is deliberately simple and keeps a few quirks of this model:
//!
//! - Zero page,X / zero page,Y do not wrap inside page zero: `$FF,X` with
//!   X=1 addresses `$0100`.
//! - Indexed indirect `($zp,X)` reads its pointer from `zp + X` and
//!   `zp + X + 1` without a page-zero wrap.
//! - Indirect `($xxxx)` reads the high pointer byte from `xxxx + 1` even
//!   when that crosses a page.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, may leave the zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, may leave the zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to the PC after the branch)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from there, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from 0x40, add Y, load from result)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction length in bytes, opcode included (1-3).
    pub const fn instruction_size(self) -> u8 {
        1 + self.operand_bytes()
    }

    /// Resolves a raw operand against the current CPU state.
    ///
    /// `raw` is the operand as read from the instruction stream (one byte
    /// zero-extended, or a little-endian word). For [`AddressingMode::Relative`]
    /// the CPU's program counter must already point past the branch
    /// instruction.
    ///
    /// Resolution only reads registers and memory; it never mutates state.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{AddressingMode, Operand, CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_x(0x10);
    /// cpu.set_pc(0x8002);
    ///
    /// assert_eq!(AddressingMode::AbsoluteX.resolve(&cpu, 0x1234), Operand::Address(0x1244));
    /// assert_eq!(AddressingMode::Immediate.resolve(&cpu, 0x42), Operand::Immediate(0x42));
    /// assert_eq!(AddressingMode::Relative.resolve(&cpu, 0xFB), Operand::Address(0x7FFD));
    /// assert_eq!(AddressingMode::Implicit.resolve(&cpu, 0), Operand::None);
    /// ```
    pub fn resolve<M: MemoryBus>(self, cpu: &CPU<M>, raw: u16) -> Operand {
        match self {
            AddressingMode::Accumulator | AddressingMode::Implicit => Operand::None,
            AddressingMode::Immediate => Operand::Immediate(raw as u8),
            AddressingMode::Absolute => Operand::Address(raw),
            AddressingMode::AbsoluteX => Operand::Address(raw.wrapping_add(cpu.x() as u16)),
            AddressingMode::AbsoluteY => Operand::Address(raw.wrapping_add(cpu.y() as u16)),
            AddressingMode::Indirect => Operand::Address(cpu.memory().read_word(raw)),
            AddressingMode::IndirectX => {
                let pointer = raw.wrapping_add(cpu.x() as u16);
                Operand::Address(cpu.memory().read_word(pointer))
            }
            AddressingMode::IndirectY => {
                let base = cpu.memory().read_word(raw);
                Operand::Address(base.wrapping_add(cpu.y() as u16))
            }
            AddressingMode::Relative => {
                // Bit 7 of the offset byte selects the sign: 0x80..=0xFF is value - 256.
                let offset = raw as u8 as i8;
                Operand::Address(cpu.pc().wrapping_add_signed(offset as i16))
            }
            AddressingMode::ZeroPage => Operand::Address(raw & 0x00FF),
            AddressingMode::ZeroPageX => Operand::Address(raw.wrapping_add(cpu.x() as u16)),
            AddressingMode::ZeroPageY => Operand::Address(raw.wrapping_add(cpu.y() as u16)),
        }
    }
}

/// Result of resolving an instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Accumulator or implicit mode: there is nothing to dereference.
    None,

    /// Literal value taken straight from the instruction stream.
    Immediate(u8),

    /// Effective address to read from or write to.
    Address(u16),
}

impl Operand {
    /// The effective address, if this operand names one.
    pub fn address(self) -> Option<u16> {
        match self {
            Operand::Address(addr) => Some(addr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        CPU::new(FlatMemory::new())
    }

    #[test]
    fn test_instruction_sizes() {
        assert_eq!(AddressingMode::Implicit.instruction_size(), 1);
        assert_eq!(AddressingMode::Accumulator.instruction_size(), 1);
        assert_eq!(AddressingMode::Immediate.instruction_size(), 2);
        assert_eq!(AddressingMode::Relative.instruction_size(), 2);
        assert_eq!(AddressingMode::IndirectX.instruction_size(), 2);
        assert_eq!(AddressingMode::IndirectY.instruction_size(), 2);
        assert_eq!(AddressingMode::Absolute.instruction_size(), 3);
        assert_eq!(AddressingMode::Indirect.instruction_size(), 3);
    }

    #[test]
    fn test_zero_page_x_leaves_page_zero() {
        let mut cpu = setup_cpu();
        cpu.set_x(0x01);

        assert_eq!(
            AddressingMode::ZeroPageX.resolve(&cpu, 0xFF),
            Operand::Address(0x0100)
        );
    }

    #[test]
    fn test_indexed_indirect_pointer_does_not_wrap() {
        let mut cpu = setup_cpu();
        cpu.set_x(0x01);
        cpu.write_memory(0x0100, 0x34);
        cpu.write_memory(0x0101, 0x12);

        assert_eq!(
            AddressingMode::IndirectX.resolve(&cpu, 0xFF),
            Operand::Address(0x1234)
        );
    }

    #[test]
    fn test_indirect_indexed_adds_y_after_dereference() {
        let mut cpu = setup_cpu();
        cpu.set_y(0x10);
        cpu.write_memory(0x0040, 0xF8);
        cpu.write_memory(0x0041, 0x20);

        assert_eq!(
            AddressingMode::IndirectY.resolve(&cpu, 0x40),
            Operand::Address(0x2108)
        );
    }

    #[test]
    fn test_relative_offsets() {
        let mut cpu = setup_cpu();
        cpu.set_pc(0x8002);

        assert_eq!(AddressingMode::Relative.resolve(&cpu, 0x05), Operand::Address(0x8007));
        assert_eq!(AddressingMode::Relative.resolve(&cpu, 0x80), Operand::Address(0x7F82));
        assert_eq!(AddressingMode::Relative.resolve(&cpu, 0x7F), Operand::Address(0x8081));
    }

    #[test]
    fn test_resolve_does_not_mutate() {
        let mut cpu = setup_cpu();
        cpu.set_x(0x05);
        cpu.write_memory(0x0045, 0x77);
        let before = (cpu.a(), cpu.x(), cpu.y(), cpu.sp(), cpu.pc(), cpu.status());

        let _ = AddressingMode::IndirectX.resolve(&cpu, 0x40);

        assert_eq!(before, (cpu.a(), cpu.x(), cpu.y(), cpu.sp(), cpu.pc(), cpu.status()));
        assert_eq!(cpu.read_memory(0x0045), 0x77);
    }
}
