//! # 6502 CPU Emulator Core
//!
//! An instruction-level MOS 6502 emulator: fixed 256-entry opcode space,
//! 13 addressing modes, 8-bit A/X/Y/SP, 16-bit PC, a stack confined to page
//! one, and a flat 64KB memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! // LDA #$05; STA $10; LDA $10
//! memory.load(0x0000, &[0xA9, 0x05, 0x85, 0x10, 0xA5, 0x10]);
//!
//! let mut cpu = CPU::new(memory);
//! for _ in 0..3 {
//!     cpu.step();
//! }
//!
//! assert_eq!(cpu.a(), 0x05);
//! assert_eq!(cpu.read_memory(0x0010), 0x05);
//! assert_eq!(cpu.pc(), 0x0006);
//! ```
//!
//! ## Architecture
//!
//! - **Memory**: the CPU reaches memory only through the `MemoryBus` trait
//! - **Table-driven decode**: opcode byte → (mnemonic, addressing mode), with
//!   instruction length derived from the mode
//! - **Pure resolution**: addressing modes turn raw operands into an
//!   [`Operand`] without mutating state
//! - **Nothing fails**: arithmetic wraps, unknown opcodes run as NOP, and
//!   `step()` has no error path
//!
//! Cycle timing, decimal arithmetic, undocumented opcodes and interrupt lines
//! are not modelled.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and FlatMemory
//! - `registers` - Status bit layout and register/flag selectors
//! - `opcodes` - Opcode table
//! - `addressing` - Addressing modes and operand resolution
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: a `warn` record whenever an
//! unknown opcode is replaced by NOP and a `trace` record per instruction.
//! Install any logger in the embedding application to see them.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{BRK_VECTOR, CPU, STACK_PAGE};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{FlagName, ParseNameError, RegisterName, Status};
