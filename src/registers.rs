//! # Register and Flag Selectors
//!
//! The CPU stores its registers as plain `u8`/`u16` fields and its seven flags
//! as independent `bool`s. This module provides:
//!
//! - [`Status`]: bit positions of the packed status byte
//! - [`RegisterName`] / [`FlagName`]: runtime selectors used by debuggers and
//!   the JS surface to address a register or flag by name
//! - [`ParseNameError`]: returned when a selector name is not recognized

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

bitflags! {
    /// Bit layout of the packed status byte (NV-BDIZC).
    ///
    /// | Bit | Mask | Flag |
    /// |-----|------|------|
    /// | 7   | 0x80 | N    |
    /// | 6   | 0x40 | V    |
    /// | 5   | 0x20 | (unused, always 0) |
    /// | 4   | 0x10 | B    |
    /// | 3   | 0x08 | D    |
    /// | 2   | 0x04 | I    |
    /// | 1   | 0x02 | Z    |
    /// | 0   | 0x01 | C    |
    ///
    /// Bit 5 has no constant; `from_bits_truncate` drops it.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// Selects one of the five programmer-visible registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterName {
    /// Accumulator
    A,
    /// X index register
    X,
    /// Y index register
    Y,
    /// Stack pointer
    SP,
    /// Program counter
    PC,
}

impl RegisterName {
    /// All registers in display order.
    pub const ALL: [RegisterName; 5] = [
        RegisterName::A,
        RegisterName::X,
        RegisterName::Y,
        RegisterName::SP,
        RegisterName::PC,
    ];

    /// Width of the register in bits (8 or 16).
    pub fn width_bits(self) -> u32 {
        match self {
            RegisterName::PC => 16,
            _ => 8,
        }
    }

    /// Reduces `value` modulo the register width.
    pub fn normalize(self, value: u16) -> u16 {
        match self.width_bits() {
            8 => value & 0x00FF,
            _ => value,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegisterName::A => "a",
            RegisterName::X => "x",
            RegisterName::Y => "y",
            RegisterName::SP => "sp",
            RegisterName::PC => "pc",
        }
    }
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegisterName {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "acc" => Ok(RegisterName::A),
            "x" => Ok(RegisterName::X),
            "y" => Ok(RegisterName::Y),
            "sp" | "s" => Ok(RegisterName::SP),
            "pc" => Ok(RegisterName::PC),
            _ => Err(ParseNameError::UnknownRegister(s.to_string())),
        }
    }
}

/// Selects one of the seven processor flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagName {
    N,
    V,
    B,
    D,
    I,
    Z,
    C,
}

impl FlagName {
    /// All flags, most significant status bit first.
    pub const ALL: [FlagName; 7] = [
        FlagName::N,
        FlagName::V,
        FlagName::B,
        FlagName::D,
        FlagName::I,
        FlagName::Z,
        FlagName::C,
    ];

    /// The status-byte bit this flag occupies.
    pub fn mask(self) -> Status {
        match self {
            FlagName::N => Status::NEGATIVE,
            FlagName::V => Status::OVERFLOW,
            FlagName::B => Status::BREAK,
            FlagName::D => Status::DECIMAL,
            FlagName::I => Status::INTERRUPT_DISABLE,
            FlagName::Z => Status::ZERO,
            FlagName::C => Status::CARRY,
        }
    }

    pub fn letter(self) -> char {
        match self {
            FlagName::N => 'n',
            FlagName::V => 'v',
            FlagName::B => 'b',
            FlagName::D => 'd',
            FlagName::I => 'i',
            FlagName::Z => 'z',
            FlagName::C => 'c',
        }
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for FlagName {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let flag = match (chars.next().map(|c| c.to_ascii_lowercase()), chars.next()) {
            (Some('n'), None) => FlagName::N,
            (Some('v'), None) => FlagName::V,
            (Some('b'), None) => FlagName::B,
            (Some('d'), None) => FlagName::D,
            (Some('i'), None) => FlagName::I,
            (Some('z'), None) => FlagName::Z,
            (Some('c'), None) => FlagName::C,
            _ => return Err(ParseNameError::UnknownFlag(s.to_string())),
        };
        Ok(flag)
    }
}

/// Errors produced when a register or flag name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNameError {
    /// Name does not match any register.
    UnknownRegister(String),

    /// Name does not match any flag.
    UnknownFlag(String),
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseNameError::UnknownRegister(name) => {
                write!(f, "unknown register '{}' (expected a, x, y, sp or pc)", name)
            }
            ParseNameError::UnknownFlag(name) => {
                write!(f, "unknown flag '{}' (expected one of nvbdizc)", name)
            }
        }
    }
}

impl std::error::Error for ParseNameError {}
