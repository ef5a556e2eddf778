//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute driver.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Memory**: any [`MemoryBus`], usually [`FlatMemory`](crate::FlatMemory)
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `run()`: Execute a fixed number of instructions
//!
//! Execution is instruction-level; no cycle counts are modelled. Nothing in a
//! step can fail: arithmetic wraps and unknown opcodes run as NOP.

use crate::addressing::Operand;
use crate::instructions;
use crate::opcodes::{self, OPCODE_TABLE};
use crate::registers::{FlagName, RegisterName, Status};
use crate::MemoryBus;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Location of the little-endian vector BRK jumps through.
pub const BRK_VECTOR: u16 = 0xFFFE;

/// 6502 CPU state and execution context.
///
/// The CPU struct owns every piece of machine state: registers, flags and
/// memory. Each instance is independent; run several emulators by creating
/// several `CPU` values.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0000, &[0xA9, 0x05, 0x85, 0x10, 0xA5, 0x10]);
///
/// let mut cpu = CPU::new(memory);
/// cpu.run(3);
///
/// assert_eq!(cpu.a(), 0x05);
/// assert_eq!(cpu.read_memory(0x0010), 0x05);
/// assert_eq!(cpu.pc(), 0x0006);
/// ```
#[derive(Debug, Clone)]
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag
    pub(crate) flag_n: bool,

    /// Overflow flag
    pub(crate) flag_v: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag (stored, but arithmetic stays binary)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag
    pub(crate) flag_z: bool,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU in the power-on state, taking ownership of `memory`.
    ///
    /// - A, X, Y are zero
    /// - SP is 0xFF
    /// - PC is 0x0000
    /// - Interrupt Disable is set, every other flag is clear
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.pc(), 0x0000);
    /// assert_eq!(cpu.sp(), 0xFF);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            memory,
        }
    }

    /// Executes one instruction.
    ///
    /// 1. Fetch the opcode byte at PC
    /// 2. Decode it via the opcode table (unknown opcodes become a 1-byte NOP)
    /// 3. Read the 0-2 operand bytes that follow, little-endian
    /// 4. Advance PC past the whole instruction
    /// 5. Resolve the operand through the addressing mode
    /// 6. Run the instruction's semantic function
    ///
    /// PC is advanced before resolution so relative branches are computed from
    /// the address of the next instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.step();
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn step(&mut self) {
        let opcode_addr = self.pc;
        let opcode = self.memory.read(opcode_addr);

        let metadata = match OPCODE_TABLE[opcode as usize] {
            Some(metadata) => metadata,
            None => {
                log::warn!(
                    "Unknown opcode: {:#04X} at PC: {:#06X}, executing NOP",
                    opcode,
                    opcode_addr
                );
                opcodes::NOP_SUBSTITUTE
            }
        };

        let raw = match metadata.addressing_mode.operand_bytes() {
            0 => 0,
            1 => self.memory.read(opcode_addr.wrapping_add(1)) as u16,
            _ => self.memory.read_word(opcode_addr.wrapping_add(1)),
        };

        self.pc = opcode_addr.wrapping_add(metadata.size_bytes() as u16);

        let operand = metadata.addressing_mode.resolve(self, raw);

        log::trace!(
            "{:04X}  {} {:?} {:?}",
            opcode_addr,
            metadata.mnemonic,
            metadata.addressing_mode,
            operand
        );

        instructions::execute(self, metadata.mnemonic, metadata.addressing_mode, operand);
    }

    /// Executes `count` instructions back to back.
    pub fn run(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    // ========== Stack ==========

    /// Pushes a byte: write to 0x0100 + SP, then decrement SP (wrapping).
    pub fn push(&mut self, value: u8) {
        self.memory.write(STACK_PAGE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increment SP (wrapping), then read 0x0100 + SP.
    pub fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE + self.sp as u16)
    }

    /// Reads the value an instruction operates on.
    ///
    /// Immediate operands are used as-is, addresses are dereferenced, and
    /// `Operand::None` yields the accumulator.
    pub(crate) fn operand_value(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.memory.read(addr),
            Operand::None => self.a,
        }
    }

    // ========== Memory ==========

    /// Reads a byte of memory without side effects on CPU state.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte of memory.
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns any register by name, widened to `u16`.
    pub fn register(&self, name: RegisterName) -> u16 {
        match name {
            RegisterName::A => self.a as u16,
            RegisterName::X => self.x as u16,
            RegisterName::Y => self.y as u16,
            RegisterName::SP => self.sp as u16,
            RegisterName::PC => self.pc,
        }
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets any register by name, reducing `value` modulo the register width.
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, RegisterName};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_register(RegisterName::X, 0x1AB);
    /// assert_eq!(cpu.x(), 0xAB);
    /// ```
    pub fn set_register(&mut self, name: RegisterName, value: u16) {
        let value = name.normalize(value);
        match name {
            RegisterName::A => self.a = value as u8,
            RegisterName::X => self.x = value as u8,
            RegisterName::Y => self.y = value as u8,
            RegisterName::SP => self.sp = value as u8,
            RegisterName::PC => self.pc = value,
        }
    }

    // ========== Status ==========

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 0)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), 0b0000_0100); // only I set at power-on
    /// ```
    pub fn status(&self) -> u8 {
        let mut status = Status::empty();
        status.set(Status::NEGATIVE, self.flag_n);
        status.set(Status::OVERFLOW, self.flag_v);
        status.set(Status::BREAK, self.flag_b);
        status.set(Status::DECIMAL, self.flag_d);
        status.set(Status::INTERRUPT_DISABLE, self.flag_i);
        status.set(Status::ZERO, self.flag_z);
        status.set(Status::CARRY, self.flag_c);
        status.bits()
    }

    /// Fans a packed status byte out into the seven flags. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        let status = Status::from_bits_truncate(value);
        self.flag_n = status.contains(Status::NEGATIVE);
        self.flag_v = status.contains(Status::OVERFLOW);
        self.flag_b = status.contains(Status::BREAK);
        self.flag_d = status.contains(Status::DECIMAL);
        self.flag_i = status.contains(Status::INTERRUPT_DISABLE);
        self.flag_z = status.contains(Status::ZERO);
        self.flag_c = status.contains(Status::CARRY);
    }

    /// Sets N and Z from `value` (N = bit 7, Z = value is zero).
    pub(crate) fn update_nz(&mut self, value: u8) {
        self.flag_n = (value & 0x80) != 0;
        self.flag_z = value == 0;
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Returns any flag by name.
    pub fn flag(&self, name: FlagName) -> bool {
        match name {
            FlagName::N => self.flag_n,
            FlagName::V => self.flag_v,
            FlagName::B => self.flag_b,
            FlagName::D => self.flag_d,
            FlagName::I => self.flag_i,
            FlagName::Z => self.flag_z,
            FlagName::C => self.flag_c,
        }
    }

    // ========== Status Flag Setters ==========

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets any flag by name.
    pub fn set_flag(&mut self, name: FlagName, value: bool) {
        match name {
            FlagName::N => self.flag_n = value,
            FlagName::V => self.flag_v = value,
            FlagName::B => self.flag_b = value,
            FlagName::D => self.flag_d = value,
            FlagName::I => self.flag_i = value,
            FlagName::Z => self.flag_z = value,
            FlagName::C => self.flag_c = value,
        }
    }
}

impl<M: MemoryBus + Default> CPU<M> {
    /// Rebuilds the whole machine in its power-on state, memory included.
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_a(0x42);
    /// cpu.write_memory(0x0200, 0x99);
    ///
    /// cpu.reset();
    /// assert_eq!(cpu.a(), 0x00);
    /// assert_eq!(cpu.read_memory(0x0200), 0x00);
    /// ```
    pub fn reset(&mut self) {
        *self = Self::new(M::default());
    }
}

impl<M: MemoryBus + Default> Default for CPU<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}
