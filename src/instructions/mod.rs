//! # 6502 Instruction Implementations
//!
//! This module contains the semantic functions of all 56 documented 6502
//! instructions, organized by category. Every function has the same shape:
//!
//! ```text
//! fn(cpu: &mut CPU<M>, mode: AddressingMode, operand: Operand)
//! ```
//!
//! The operand has already been resolved and PC already points at the next
//! instruction when a semantic function runs.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic, logic and compare (ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY)
//! - **branches**: Conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::{AddressingMode, Operand};
use crate::opcodes::Mnemonic;
use crate::{MemoryBus, CPU};

/// Runs the semantic function for `mnemonic`.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    operand: Operand,
) {
    let handler: fn(&mut CPU<M>, AddressingMode, Operand) = match mnemonic {
        Mnemonic::Lda => load_store::execute_lda,
        Mnemonic::Ldx => load_store::execute_ldx,
        Mnemonic::Ldy => load_store::execute_ldy,
        Mnemonic::Sta => load_store::execute_sta,
        Mnemonic::Stx => load_store::execute_stx,
        Mnemonic::Sty => load_store::execute_sty,

        Mnemonic::Adc => alu::execute_adc,
        Mnemonic::Sbc => alu::execute_sbc,
        Mnemonic::And => alu::execute_and,
        Mnemonic::Ora => alu::execute_ora,
        Mnemonic::Eor => alu::execute_eor,
        Mnemonic::Bit => alu::execute_bit,
        Mnemonic::Cmp => alu::execute_cmp,
        Mnemonic::Cpx => alu::execute_cpx,
        Mnemonic::Cpy => alu::execute_cpy,

        Mnemonic::Asl => shifts::execute_asl,
        Mnemonic::Lsr => shifts::execute_lsr,
        Mnemonic::Rol => shifts::execute_rol,
        Mnemonic::Ror => shifts::execute_ror,

        Mnemonic::Inc => inc_dec::execute_inc,
        Mnemonic::Dec => inc_dec::execute_dec,
        Mnemonic::Inx => inc_dec::execute_inx,
        Mnemonic::Iny => inc_dec::execute_iny,
        Mnemonic::Dex => inc_dec::execute_dex,
        Mnemonic::Dey => inc_dec::execute_dey,

        Mnemonic::Bcc => branches::execute_bcc,
        Mnemonic::Bcs => branches::execute_bcs,
        Mnemonic::Beq => branches::execute_beq,
        Mnemonic::Bne => branches::execute_bne,
        Mnemonic::Bmi => branches::execute_bmi,
        Mnemonic::Bpl => branches::execute_bpl,
        Mnemonic::Bvc => branches::execute_bvc,
        Mnemonic::Bvs => branches::execute_bvs,

        Mnemonic::Jmp => control::execute_jmp,
        Mnemonic::Jsr => control::execute_jsr,
        Mnemonic::Rts => control::execute_rts,
        Mnemonic::Rti => control::execute_rti,
        Mnemonic::Brk => control::execute_brk,
        Mnemonic::Nop => control::execute_nop,

        Mnemonic::Pha => stack::execute_pha,
        Mnemonic::Php => stack::execute_php,
        Mnemonic::Pla => stack::execute_pla,
        Mnemonic::Plp => stack::execute_plp,

        Mnemonic::Tax => transfer::execute_tax,
        Mnemonic::Tay => transfer::execute_tay,
        Mnemonic::Txa => transfer::execute_txa,
        Mnemonic::Tya => transfer::execute_tya,
        Mnemonic::Tsx => transfer::execute_tsx,
        Mnemonic::Txs => transfer::execute_txs,

        Mnemonic::Clc => flags::execute_clc,
        Mnemonic::Cld => flags::execute_cld,
        Mnemonic::Cli => flags::execute_cli,
        Mnemonic::Clv => flags::execute_clv,
        Mnemonic::Sec => flags::execute_sec,
        Mnemonic::Sed => flags::execute_sed,
        Mnemonic::Sei => flags::execute_sei,
    };

    handler(cpu, mode, operand);
}

/// Reads, transforms, and writes back the target of a read-modify-write
/// instruction: the accumulator in accumulator mode, otherwise the memory
/// cell at the operand address. Returns the new value.
pub(crate) fn modify<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    operand: Operand,
    f: impl FnOnce(&mut CPU<M>, u8) -> u8,
) -> u8 {
    match (mode, operand.address()) {
        (AddressingMode::Accumulator, _) | (_, None) => {
            let value = cpu.a;
            let result = f(cpu, value);
            cpu.a = result;
            result
        }
        (_, Some(addr)) => {
            let value = cpu.memory.read(addr);
            let result = f(cpu, value);
            cpu.memory.write(addr, result);
            result
        }
    }
}
