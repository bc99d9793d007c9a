//! x86-64 opcode rows and operand templates.
//!
//! Two hand-authored tables drive the decoder. `OP_LOOKUP` (one 256-entry
//! array per prefix class, with separate arrays for the `0F` page) maps an
//! opcode to its mnemonic, keyed on ModR/M.reg for `/digit` rows.
//! `OPERAND_LOOKUP` maps `(prefix class, mnemonic, opcode)` to the operand
//! template that says how to materialize each operand slot. Keeping the two
//! keyed separately lets a mnemonic reachable through several opcodes carry
//! different operand layouts without duplicating rows.

use super::prefix::PrefixClass;
use super::prefix::PrefixClass as P;
use lindis_core::Mnemonic;
use lindis_core::Mnemonic as M;
use lindis_core::Width::{self, W16, W32, W64, W8};

use self::OpEnc as E;
use self::OperandKind::{Al, Ax, Eax, Imm16, Imm32, Imm64, Imm8, Moff, One, Rax, Reg, Rm};

/// Operand encoding form. ModR/M presence is a function of this tag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpEnc {
    /// Immediate (and fixed accumulator/moff) operands only.
    I,
    /// Relative displacement immediate (jumps/calls).
    D,
    /// ModR/M r/m operand, reg field is an opcode extension.
    M,
    /// Register embedded in the opcode byte.
    O,
    /// No operands.
    NP,
    /// ModR/M r/m operand plus immediate.
    MI,
    /// ModR/M r/m operand plus the literal shift-by-one operand.
    M1,
    /// ModR/M: r/m, reg.
    MR,
    /// ModR/M: reg, r/m.
    RM,
    /// ModR/M: reg, r/m, immediate.
    RMI,
    /// Opcode-embedded register plus immediate.
    OI,
}

impl OpEnc {
    /// Returns true if this encoding carries a ModR/M byte.
    pub fn has_modrm(&self) -> bool {
        matches!(self, Self::M | Self::MI | Self::M1 | Self::MR | Self::RM | Self::RMI)
    }
}

/// Operand slot kinds a template can materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// The literal "one" of the shift-by-one rows.
    One,
    Imm8,
    Imm16,
    Imm32,
    Imm64,
    /// ModR/M.reg (or the residual opcode-embedded index when no ModR/M).
    Reg,
    /// ModR/M r/m: register-direct or memory effective address.
    Rm,
    /// Implicit accumulator, by width.
    Al,
    Ax,
    Eax,
    Rax,
    /// Absolute memory-offset immediate (4 bytes, or 8 under REXW).
    Moff,
}

/// Opcode table row: the mnemonic, possibly subdivided by ModR/M.reg.
#[derive(Debug, Clone, Copy)]
pub struct OpRow {
    /// Wildcard mnemonic, used when the opcode does not subdivide or no
    /// ModR/M byte is available.
    pub default: Option<Mnemonic>,
    /// `/digit` mnemonics, keyed by ModR/M.reg.
    pub by_reg: [Option<Mnemonic>; 8],
}

impl OpRow {
    /// A row whose mnemonic does not depend on ModR/M.reg.
    pub const fn uniform(mnemonic: Mnemonic) -> Self {
        Self {
            default: Some(mnemonic),
            by_reg: [None; 8],
        }
    }

    /// A `/digit` row.
    pub const fn digits(by_reg: [Option<Mnemonic>; 8]) -> Self {
        Self {
            default: None,
            by_reg,
        }
    }

    /// Resolve the mnemonic for a peeked ModR/M.reg field (raw 3-bit value),
    /// falling back to the wildcard entry.
    pub fn resolve(&self, reg: Option<u8>) -> Option<Mnemonic> {
        match reg {
            Some(r) => self.by_reg[(r & 0x7) as usize].or(self.default),
            None => self.default,
        }
    }
}

/// Returns true when `byte`, seen as the first opcode byte, opens a
/// two-byte opcode.
pub fn requires_second_opcode_byte(byte: u8) -> bool {
    byte == 0x0F
}

const fn row(mnemonic: Mnemonic) -> Option<OpRow> {
    Some(OpRow::uniform(mnemonic))
}

const GROUP1: OpRow = OpRow::digits([
    Some(M::Add),
    Some(M::Or),
    Some(M::Adc),
    Some(M::Sbb),
    Some(M::And),
    Some(M::Sub),
    Some(M::Xor),
    Some(M::Cmp),
]);

const GROUP2: OpRow = OpRow::digits([
    Some(M::Rol),
    Some(M::Ror),
    Some(M::Rcl),
    Some(M::Rcr),
    Some(M::Shl),
    Some(M::Shr),
    Some(M::Sal),
    Some(M::Sar),
]);

const GROUP3: OpRow = OpRow::digits([
    Some(M::Test),
    Some(M::Test),
    Some(M::Not),
    Some(M::Neg),
    Some(M::Mul),
    Some(M::Imul),
    Some(M::Div),
    Some(M::Idiv),
]);

const GROUP4: OpRow = OpRow::digits([
    Some(M::Inc),
    Some(M::Dec),
    None,
    None,
    None,
    None,
    None,
    None,
]);

// Digits 3, 5 and 7 (far call/jmp, reserved) are outside the subset.
const GROUP5: OpRow = OpRow::digits([
    Some(M::Inc),
    Some(M::Dec),
    Some(M::Call),
    None,
    Some(M::Jmp),
    None,
    Some(M::Push),
    None,
]);

const MOV_DIGIT0: OpRow = OpRow::digits([Some(M::Mov), None, None, None, None, None, None, None]);
const POP_DIGIT0: OpRow = OpRow::digits([Some(M::Pop), None, None, None, None, None, None, None]);

const EMPTY: Option<OpRow> = None;

/// One-byte opcode rows, NONE class.
pub static OPCODE_TABLE: [Option<OpRow>; 256] = {
    let mut t = [EMPTY; 256];

    // ALU families: r/m8,r8 / r/m,r / r8,r/m8 / r,r/m / AL,imm8 / acc,imm
    t[0x00] = row(M::Add);
    t[0x01] = row(M::Add);
    t[0x02] = row(M::Add);
    t[0x03] = row(M::Add);
    t[0x04] = row(M::Add);
    t[0x05] = row(M::Add);
    t[0x08] = row(M::Or);
    t[0x09] = row(M::Or);
    t[0x0A] = row(M::Or);
    t[0x0B] = row(M::Or);
    t[0x0C] = row(M::Or);
    t[0x0D] = row(M::Or);
    t[0x10] = row(M::Adc);
    t[0x11] = row(M::Adc);
    t[0x12] = row(M::Adc);
    t[0x13] = row(M::Adc);
    t[0x14] = row(M::Adc);
    t[0x15] = row(M::Adc);
    t[0x18] = row(M::Sbb);
    t[0x19] = row(M::Sbb);
    t[0x1A] = row(M::Sbb);
    t[0x1B] = row(M::Sbb);
    t[0x1C] = row(M::Sbb);
    t[0x1D] = row(M::Sbb);
    t[0x20] = row(M::And);
    t[0x21] = row(M::And);
    t[0x22] = row(M::And);
    t[0x23] = row(M::And);
    t[0x24] = row(M::And);
    t[0x25] = row(M::And);
    t[0x28] = row(M::Sub);
    t[0x29] = row(M::Sub);
    t[0x2A] = row(M::Sub);
    t[0x2B] = row(M::Sub);
    t[0x2C] = row(M::Sub);
    t[0x2D] = row(M::Sub);
    t[0x30] = row(M::Xor);
    t[0x31] = row(M::Xor);
    t[0x32] = row(M::Xor);
    t[0x33] = row(M::Xor);
    t[0x34] = row(M::Xor);
    t[0x35] = row(M::Xor);
    t[0x38] = row(M::Cmp);
    t[0x39] = row(M::Cmp);
    t[0x3A] = row(M::Cmp);
    t[0x3B] = row(M::Cmp);
    t[0x3C] = row(M::Cmp);
    t[0x3D] = row(M::Cmp);

    // PUSH/POP r64
    t[0x50] = row(M::Push);
    t[0x51] = row(M::Push);
    t[0x52] = row(M::Push);
    t[0x53] = row(M::Push);
    t[0x54] = row(M::Push);
    t[0x55] = row(M::Push);
    t[0x56] = row(M::Push);
    t[0x57] = row(M::Push);
    t[0x58] = row(M::Pop);
    t[0x59] = row(M::Pop);
    t[0x5A] = row(M::Pop);
    t[0x5B] = row(M::Pop);
    t[0x5C] = row(M::Pop);
    t[0x5D] = row(M::Pop);
    t[0x5E] = row(M::Pop);
    t[0x5F] = row(M::Pop);

    t[0x68] = row(M::Push);
    t[0x69] = row(M::Imul);
    t[0x6A] = row(M::Push);
    t[0x6B] = row(M::Imul);
    t[0x6C] = row(M::Insb);
    t[0x6D] = row(M::Insd);
    t[0x6E] = row(M::Outsb);
    t[0x6F] = row(M::Outsd);

    // Jcc rel8
    t[0x70] = row(M::Jo);
    t[0x71] = row(M::Jno);
    t[0x72] = row(M::Jb);
    t[0x73] = row(M::Jae);
    t[0x74] = row(M::Jz);
    t[0x75] = row(M::Jnz);
    t[0x76] = row(M::Jbe);
    t[0x77] = row(M::Ja);
    t[0x78] = row(M::Js);
    t[0x79] = row(M::Jns);
    t[0x7A] = row(M::Jp);
    t[0x7B] = row(M::Jnp);
    t[0x7C] = row(M::Jl);
    t[0x7D] = row(M::Jge);
    t[0x7E] = row(M::Jle);
    t[0x7F] = row(M::Jg);

    t[0x80] = Some(GROUP1);
    t[0x81] = Some(GROUP1);
    t[0x83] = Some(GROUP1);

    t[0x84] = row(M::Test);
    t[0x85] = row(M::Test);
    t[0x86] = row(M::Xchg);
    t[0x87] = row(M::Xchg);
    t[0x88] = row(M::Mov);
    t[0x89] = row(M::Mov);
    t[0x8A] = row(M::Mov);
    t[0x8B] = row(M::Mov);
    t[0x8D] = row(M::Lea);
    t[0x8F] = Some(POP_DIGIT0);

    t[0x90] = row(M::Nop);
    t[0x91] = row(M::Xchg);
    t[0x92] = row(M::Xchg);
    t[0x93] = row(M::Xchg);
    t[0x94] = row(M::Xchg);
    t[0x95] = row(M::Xchg);
    t[0x96] = row(M::Xchg);
    t[0x97] = row(M::Xchg);
    t[0x98] = row(M::Cwde);
    t[0x99] = row(M::Cdq);

    // MOV absolute-offset forms
    t[0xA0] = row(M::Mov);
    t[0xA1] = row(M::Mov);
    t[0xA2] = row(M::Mov);
    t[0xA3] = row(M::Mov);

    t[0xA4] = row(M::Movsb);
    t[0xA5] = row(M::Movsd);
    t[0xA6] = row(M::Cmpsb);
    t[0xA7] = row(M::Cmpsd);
    t[0xA8] = row(M::Test);
    t[0xA9] = row(M::Test);
    t[0xAA] = row(M::Stosb);
    t[0xAB] = row(M::Stosd);
    t[0xAC] = row(M::Lodsb);
    t[0xAD] = row(M::Lodsd);
    t[0xAE] = row(M::Scasb);
    t[0xAF] = row(M::Scasd);

    // MOV r, imm
    t[0xB0] = row(M::Mov);
    t[0xB1] = row(M::Mov);
    t[0xB2] = row(M::Mov);
    t[0xB3] = row(M::Mov);
    t[0xB4] = row(M::Mov);
    t[0xB5] = row(M::Mov);
    t[0xB6] = row(M::Mov);
    t[0xB7] = row(M::Mov);
    t[0xB8] = row(M::Mov);
    t[0xB9] = row(M::Mov);
    t[0xBA] = row(M::Mov);
    t[0xBB] = row(M::Mov);
    t[0xBC] = row(M::Mov);
    t[0xBD] = row(M::Mov);
    t[0xBE] = row(M::Mov);
    t[0xBF] = row(M::Mov);

    t[0xC0] = Some(GROUP2);
    t[0xC1] = Some(GROUP2);
    t[0xC2] = row(M::Ret);
    t[0xC3] = row(M::Ret);
    t[0xC6] = Some(MOV_DIGIT0);
    t[0xC7] = Some(MOV_DIGIT0);
    t[0xC8] = row(M::Enter);
    t[0xC9] = row(M::Leave);
    t[0xCD] = row(M::Int21);

    t[0xD0] = Some(GROUP2);
    t[0xD1] = Some(GROUP2);

    t[0xE2] = row(M::Loop);
    t[0xE3] = row(M::Jecxz);
    t[0xE4] = row(M::In);
    t[0xE5] = row(M::In);
    t[0xE6] = row(M::Out);
    t[0xE7] = row(M::Out);
    t[0xE8] = row(M::Call);
    t[0xE9] = row(M::Jmp);
    t[0xEB] = row(M::Jmp);

    t[0xF6] = Some(GROUP3);
    t[0xF7] = Some(GROUP3);
    t[0xF8] = row(M::Clc);
    t[0xF9] = row(M::Stc);
    t[0xFC] = row(M::Cld);
    t[0xFD] = row(M::Std);
    t[0xFE] = Some(GROUP4);
    t[0xFF] = Some(GROUP5);

    t
};

/// One-byte opcode rows, P66 class (16-bit operand forms).
pub static OPCODE_TABLE_66: [Option<OpRow>; 256] = {
    let mut t = [EMPTY; 256];

    t[0x01] = row(M::Add);
    t[0x03] = row(M::Add);
    t[0x05] = row(M::Add);
    t[0x09] = row(M::Or);
    t[0x0B] = row(M::Or);
    t[0x0D] = row(M::Or);
    t[0x11] = row(M::Adc);
    t[0x13] = row(M::Adc);
    t[0x15] = row(M::Adc);
    t[0x19] = row(M::Sbb);
    t[0x1B] = row(M::Sbb);
    t[0x1D] = row(M::Sbb);
    t[0x21] = row(M::And);
    t[0x23] = row(M::And);
    t[0x25] = row(M::And);
    t[0x29] = row(M::Sub);
    t[0x2B] = row(M::Sub);
    t[0x2D] = row(M::Sub);
    t[0x31] = row(M::Xor);
    t[0x33] = row(M::Xor);
    t[0x35] = row(M::Xor);
    t[0x39] = row(M::Cmp);
    t[0x3B] = row(M::Cmp);
    t[0x3D] = row(M::Cmp);

    t[0x6D] = row(M::Insw);
    t[0x6F] = row(M::Outsw);

    t[0x81] = Some(GROUP1);
    t[0x83] = Some(GROUP1);
    t[0x85] = row(M::Test);
    t[0x87] = row(M::Xchg);
    t[0x89] = row(M::Mov);
    t[0x8B] = row(M::Mov);

    t[0x91] = row(M::Xchg);
    t[0x92] = row(M::Xchg);
    t[0x93] = row(M::Xchg);
    t[0x94] = row(M::Xchg);
    t[0x95] = row(M::Xchg);
    t[0x96] = row(M::Xchg);
    t[0x97] = row(M::Xchg);
    t[0x98] = row(M::Cbw);
    t[0x99] = row(M::Cwd);

    t[0xA1] = row(M::Mov);
    t[0xA3] = row(M::Mov);
    t[0xA5] = row(M::Movsw);
    t[0xA7] = row(M::Cmpsw);
    t[0xA9] = row(M::Test);
    t[0xAB] = row(M::Stosw);
    t[0xAD] = row(M::Lodsw);
    t[0xAF] = row(M::Scasw);

    t[0xB8] = row(M::Mov);
    t[0xB9] = row(M::Mov);
    t[0xBA] = row(M::Mov);
    t[0xBB] = row(M::Mov);
    t[0xBC] = row(M::Mov);
    t[0xBD] = row(M::Mov);
    t[0xBE] = row(M::Mov);
    t[0xBF] = row(M::Mov);

    t[0xC0] = Some(GROUP2);
    t[0xC1] = Some(GROUP2);
    t[0xC7] = Some(MOV_DIGIT0);

    t[0xD0] = Some(GROUP2);
    t[0xD1] = Some(GROUP2);

    t[0xF7] = Some(GROUP3);

    t
};

/// One-byte opcode rows, REXW class (64-bit operand forms).
pub static OPCODE_TABLE_REXW: [Option<OpRow>; 256] = {
    let mut t = [EMPTY; 256];

    t[0x01] = row(M::Add);
    t[0x03] = row(M::Add);
    t[0x05] = row(M::Add);
    t[0x09] = row(M::Or);
    t[0x0B] = row(M::Or);
    t[0x0D] = row(M::Or);
    t[0x11] = row(M::Adc);
    t[0x13] = row(M::Adc);
    t[0x15] = row(M::Adc);
    t[0x19] = row(M::Sbb);
    t[0x1B] = row(M::Sbb);
    t[0x1D] = row(M::Sbb);
    t[0x21] = row(M::And);
    t[0x23] = row(M::And);
    t[0x25] = row(M::And);
    t[0x29] = row(M::Sub);
    t[0x2B] = row(M::Sub);
    t[0x2D] = row(M::Sub);
    t[0x31] = row(M::Xor);
    t[0x33] = row(M::Xor);
    t[0x35] = row(M::Xor);
    t[0x39] = row(M::Cmp);
    t[0x3B] = row(M::Cmp);
    t[0x3D] = row(M::Cmp);

    t[0x69] = row(M::Imul);
    t[0x6B] = row(M::Imul);

    t[0x81] = Some(GROUP1);
    t[0x83] = Some(GROUP1);
    t[0x85] = row(M::Test);
    t[0x87] = row(M::Xchg);
    t[0x89] = row(M::Mov);
    t[0x8B] = row(M::Mov);
    t[0x8D] = row(M::Lea);

    t[0x91] = row(M::Xchg);
    t[0x92] = row(M::Xchg);
    t[0x93] = row(M::Xchg);
    t[0x94] = row(M::Xchg);
    t[0x95] = row(M::Xchg);
    t[0x96] = row(M::Xchg);
    t[0x97] = row(M::Xchg);

    t[0xA1] = row(M::Mov);
    t[0xA3] = row(M::Mov);

    t[0xB8] = row(M::Mov);
    t[0xB9] = row(M::Mov);
    t[0xBA] = row(M::Mov);
    t[0xBB] = row(M::Mov);
    t[0xBC] = row(M::Mov);
    t[0xBD] = row(M::Mov);
    t[0xBE] = row(M::Mov);
    t[0xBF] = row(M::Mov);

    t[0xC1] = Some(GROUP2);
    t[0xC7] = Some(MOV_DIGIT0);
    t[0xD1] = Some(GROUP2);
    t[0xF7] = Some(GROUP3);
    t[0xFF] = Some(GROUP5);

    t
};

/// Two-byte (`0F`-page) opcode rows, NONE class.
pub static OPCODE_TABLE_0F: [Option<OpRow>; 256] = {
    let mut t = [EMPTY; 256];

    t[0x0B] = row(M::Ud2);

    // Jcc rel32
    t[0x80] = row(M::Jo);
    t[0x81] = row(M::Jno);
    t[0x82] = row(M::Jb);
    t[0x83] = row(M::Jae);
    t[0x84] = row(M::Jz);
    t[0x85] = row(M::Jnz);
    t[0x86] = row(M::Jbe);
    t[0x87] = row(M::Ja);
    t[0x88] = row(M::Js);
    t[0x89] = row(M::Jns);
    t[0x8A] = row(M::Jp);
    t[0x8B] = row(M::Jnp);
    t[0x8C] = row(M::Jl);
    t[0x8D] = row(M::Jge);
    t[0x8E] = row(M::Jle);
    t[0x8F] = row(M::Jg);

    t[0xA2] = row(M::Cpuid);
    t[0xAF] = row(M::Imul);

    t
};

/// Two-byte opcode rows, P66 class.
pub static OPCODE_TABLE_0F_66: [Option<OpRow>; 256] = {
    let mut t = [EMPTY; 256];
    t[0xAF] = row(M::Imul);
    t
};

/// Two-byte opcode rows, REXW class.
pub static OPCODE_TABLE_0F_REXW: [Option<OpRow>; 256] = {
    let mut t = [EMPTY; 256];
    t[0xAF] = row(M::Imul);
    t
};

/// Look up the opcode row for a prefix class. Two-byte opcodes carry the
/// `0F` escape in their high byte.
pub fn opcode_row(class: PrefixClass, opcode: u16) -> Option<&'static OpRow> {
    let idx = (opcode & 0xFF) as usize;
    let table = if opcode > 0xFF {
        match class {
            P::None => &OPCODE_TABLE_0F,
            P::P66 => &OPCODE_TABLE_0F_66,
            P::RexW => &OPCODE_TABLE_0F_REXW,
            // No REX-specialized rows exist; REX-class lookups resolve
            // through the REXW -> REX -> NONE fallback chain.
            P::Rex => return None,
        }
    } else {
        match class {
            P::None => &OPCODE_TABLE,
            P::P66 => &OPCODE_TABLE_66,
            P::RexW => &OPCODE_TABLE_REXW,
            P::Rex => return None,
        }
    };
    table[idx].as_ref()
}

/// How the operand slots of one `(prefix class, mnemonic, opcode)` triple
/// are filled.
#[derive(Debug, Clone, Copy)]
pub struct OperandTemplate {
    /// Encoding form; decides ModR/M presence.
    pub enc: OpEnc,
    /// Opcode-embedded register indices for the O/OI forms.
    pub residual: &'static [u8],
    /// Operand kinds in rendered order.
    pub operands: &'static [OperandKind],
    /// Register width materialized for `Reg`/`Rm` slots.
    pub width: Width,
}

const fn t(
    enc: OpEnc,
    residual: &'static [u8],
    operands: &'static [OperandKind],
    width: Width,
) -> OperandTemplate {
    OperandTemplate {
        enc,
        residual,
        operands,
        width,
    }
}

/// Operand templates, keyed by `(prefix class, mnemonic, opcode)`.
pub static OPERAND_LOOKUP: &[(PrefixClass, Mnemonic, u16, OperandTemplate)] = &[
    // ---- NONE: ALU families -------------------------------------------
    (P::None, M::Add, 0x00, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Add, 0x01, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Add, 0x02, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::Add, 0x03, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Add, 0x04, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::Add, 0x05, t(E::I, &[], &[Eax, Imm32], W32)),
    (P::None, M::Or, 0x08, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Or, 0x09, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Or, 0x0A, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::Or, 0x0B, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Or, 0x0C, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::Or, 0x0D, t(E::I, &[], &[Eax, Imm32], W32)),
    (P::None, M::Adc, 0x10, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Adc, 0x11, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Adc, 0x12, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::Adc, 0x13, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Adc, 0x14, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::Adc, 0x15, t(E::I, &[], &[Eax, Imm32], W32)),
    (P::None, M::Sbb, 0x18, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Sbb, 0x19, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Sbb, 0x1A, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::Sbb, 0x1B, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Sbb, 0x1C, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::Sbb, 0x1D, t(E::I, &[], &[Eax, Imm32], W32)),
    (P::None, M::And, 0x20, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::And, 0x21, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::And, 0x22, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::And, 0x23, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::And, 0x24, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::And, 0x25, t(E::I, &[], &[Eax, Imm32], W32)),
    (P::None, M::Sub, 0x28, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Sub, 0x29, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Sub, 0x2A, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::Sub, 0x2B, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Sub, 0x2C, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::Sub, 0x2D, t(E::I, &[], &[Eax, Imm32], W32)),
    (P::None, M::Xor, 0x30, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Xor, 0x31, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Xor, 0x32, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::Xor, 0x33, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Xor, 0x34, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::Xor, 0x35, t(E::I, &[], &[Eax, Imm32], W32)),
    (P::None, M::Cmp, 0x38, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Cmp, 0x39, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Cmp, 0x3A, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::Cmp, 0x3B, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Cmp, 0x3C, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::Cmp, 0x3D, t(E::I, &[], &[Eax, Imm32], W32)),
    // ---- NONE: PUSH/POP r64 -------------------------------------------
    (P::None, M::Push, 0x50, t(E::O, &[0], &[Reg], W64)),
    (P::None, M::Push, 0x51, t(E::O, &[1], &[Reg], W64)),
    (P::None, M::Push, 0x52, t(E::O, &[2], &[Reg], W64)),
    (P::None, M::Push, 0x53, t(E::O, &[3], &[Reg], W64)),
    (P::None, M::Push, 0x54, t(E::O, &[4], &[Reg], W64)),
    (P::None, M::Push, 0x55, t(E::O, &[5], &[Reg], W64)),
    (P::None, M::Push, 0x56, t(E::O, &[6], &[Reg], W64)),
    (P::None, M::Push, 0x57, t(E::O, &[7], &[Reg], W64)),
    (P::None, M::Pop, 0x58, t(E::O, &[0], &[Reg], W64)),
    (P::None, M::Pop, 0x59, t(E::O, &[1], &[Reg], W64)),
    (P::None, M::Pop, 0x5A, t(E::O, &[2], &[Reg], W64)),
    (P::None, M::Pop, 0x5B, t(E::O, &[3], &[Reg], W64)),
    (P::None, M::Pop, 0x5C, t(E::O, &[4], &[Reg], W64)),
    (P::None, M::Pop, 0x5D, t(E::O, &[5], &[Reg], W64)),
    (P::None, M::Pop, 0x5E, t(E::O, &[6], &[Reg], W64)),
    (P::None, M::Pop, 0x5F, t(E::O, &[7], &[Reg], W64)),
    (P::None, M::Push, 0x68, t(E::I, &[], &[Imm32], W64)),
    (P::None, M::Push, 0x6A, t(E::I, &[], &[Imm8], W64)),
    // ---- NONE: IMUL with immediate ------------------------------------
    (P::None, M::Imul, 0x69, t(E::RMI, &[], &[Reg, Rm, Imm32], W32)),
    (P::None, M::Imul, 0x6B, t(E::RMI, &[], &[Reg, Rm, Imm8], W32)),
    // ---- NONE: string I/O ---------------------------------------------
    (P::None, M::Insb, 0x6C, t(E::NP, &[], &[], W8)),
    (P::None, M::Insd, 0x6D, t(E::NP, &[], &[], W32)),
    (P::None, M::Outsb, 0x6E, t(E::NP, &[], &[], W8)),
    (P::None, M::Outsd, 0x6F, t(E::NP, &[], &[], W32)),
    // ---- NONE: Jcc rel8 -----------------------------------------------
    (P::None, M::Jo, 0x70, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jno, 0x71, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jb, 0x72, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jae, 0x73, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jz, 0x74, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jnz, 0x75, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jbe, 0x76, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Ja, 0x77, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Js, 0x78, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jns, 0x79, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jp, 0x7A, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jnp, 0x7B, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jl, 0x7C, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jge, 0x7D, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jle, 0x7E, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jg, 0x7F, t(E::D, &[], &[Imm8], W32)),
    // ---- NONE: group 1 ------------------------------------------------
    (P::None, M::Add, 0x80, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Or, 0x80, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Adc, 0x80, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Sbb, 0x80, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::And, 0x80, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Sub, 0x80, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Xor, 0x80, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Cmp, 0x80, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Add, 0x81, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Or, 0x81, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Adc, 0x81, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Sbb, 0x81, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::And, 0x81, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Sub, 0x81, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Xor, 0x81, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Cmp, 0x81, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Add, 0x83, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Or, 0x83, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Adc, 0x83, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Sbb, 0x83, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::And, 0x83, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Sub, 0x83, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Xor, 0x83, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Cmp, 0x83, t(E::MI, &[], &[Rm, Imm8], W32)),
    // ---- NONE: TEST/XCHG/MOV/LEA r/m forms ----------------------------
    (P::None, M::Test, 0x84, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Test, 0x85, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Xchg, 0x86, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Xchg, 0x87, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Mov, 0x88, t(E::MR, &[], &[Rm, Reg], W8)),
    (P::None, M::Mov, 0x89, t(E::MR, &[], &[Rm, Reg], W32)),
    (P::None, M::Mov, 0x8A, t(E::RM, &[], &[Reg, Rm], W8)),
    (P::None, M::Mov, 0x8B, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Lea, 0x8D, t(E::RM, &[], &[Reg, Rm], W32)),
    (P::None, M::Pop, 0x8F, t(E::M, &[], &[Rm], W64)),
    // ---- NONE: NOP, accumulator XCHG, widenings -----------------------
    (P::None, M::Nop, 0x90, t(E::NP, &[], &[], W32)),
    (P::None, M::Xchg, 0x91, t(E::O, &[1], &[Reg, Eax], W32)),
    (P::None, M::Xchg, 0x92, t(E::O, &[2], &[Reg, Eax], W32)),
    (P::None, M::Xchg, 0x93, t(E::O, &[3], &[Reg, Eax], W32)),
    (P::None, M::Xchg, 0x94, t(E::O, &[4], &[Reg, Eax], W32)),
    (P::None, M::Xchg, 0x95, t(E::O, &[5], &[Reg, Eax], W32)),
    (P::None, M::Xchg, 0x96, t(E::O, &[6], &[Reg, Eax], W32)),
    (P::None, M::Xchg, 0x97, t(E::O, &[7], &[Reg, Eax], W32)),
    (P::None, M::Cwde, 0x98, t(E::NP, &[], &[], W32)),
    (P::None, M::Cdq, 0x99, t(E::NP, &[], &[], W32)),
    // ---- NONE: MOV moff -----------------------------------------------
    (P::None, M::Mov, 0xA0, t(E::I, &[], &[Al, Moff], W8)),
    (P::None, M::Mov, 0xA1, t(E::I, &[], &[Eax, Moff], W32)),
    (P::None, M::Mov, 0xA2, t(E::I, &[], &[Moff, Al], W8)),
    (P::None, M::Mov, 0xA3, t(E::I, &[], &[Moff, Eax], W32)),
    // ---- NONE: string family ------------------------------------------
    (P::None, M::Movsb, 0xA4, t(E::NP, &[], &[], W8)),
    (P::None, M::Movsd, 0xA5, t(E::NP, &[], &[], W32)),
    (P::None, M::Cmpsb, 0xA6, t(E::NP, &[], &[], W8)),
    (P::None, M::Cmpsd, 0xA7, t(E::NP, &[], &[], W32)),
    (P::None, M::Test, 0xA8, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::Test, 0xA9, t(E::I, &[], &[Eax, Imm32], W32)),
    (P::None, M::Stosb, 0xAA, t(E::NP, &[], &[], W8)),
    (P::None, M::Stosd, 0xAB, t(E::NP, &[], &[], W32)),
    (P::None, M::Lodsb, 0xAC, t(E::NP, &[], &[], W8)),
    (P::None, M::Lodsd, 0xAD, t(E::NP, &[], &[], W32)),
    (P::None, M::Scasb, 0xAE, t(E::NP, &[], &[], W8)),
    (P::None, M::Scasd, 0xAF, t(E::NP, &[], &[], W32)),
    // ---- NONE: MOV r, imm ---------------------------------------------
    (P::None, M::Mov, 0xB0, t(E::OI, &[0], &[Reg, Imm8], W8)),
    (P::None, M::Mov, 0xB1, t(E::OI, &[1], &[Reg, Imm8], W8)),
    (P::None, M::Mov, 0xB2, t(E::OI, &[2], &[Reg, Imm8], W8)),
    (P::None, M::Mov, 0xB3, t(E::OI, &[3], &[Reg, Imm8], W8)),
    (P::None, M::Mov, 0xB4, t(E::OI, &[4], &[Reg, Imm8], W8)),
    (P::None, M::Mov, 0xB5, t(E::OI, &[5], &[Reg, Imm8], W8)),
    (P::None, M::Mov, 0xB6, t(E::OI, &[6], &[Reg, Imm8], W8)),
    (P::None, M::Mov, 0xB7, t(E::OI, &[7], &[Reg, Imm8], W8)),
    (P::None, M::Mov, 0xB8, t(E::OI, &[0], &[Reg, Imm32], W32)),
    (P::None, M::Mov, 0xB9, t(E::OI, &[1], &[Reg, Imm32], W32)),
    (P::None, M::Mov, 0xBA, t(E::OI, &[2], &[Reg, Imm32], W32)),
    (P::None, M::Mov, 0xBB, t(E::OI, &[3], &[Reg, Imm32], W32)),
    (P::None, M::Mov, 0xBC, t(E::OI, &[4], &[Reg, Imm32], W32)),
    (P::None, M::Mov, 0xBD, t(E::OI, &[5], &[Reg, Imm32], W32)),
    (P::None, M::Mov, 0xBE, t(E::OI, &[6], &[Reg, Imm32], W32)),
    (P::None, M::Mov, 0xBF, t(E::OI, &[7], &[Reg, Imm32], W32)),
    // ---- NONE: shifts/rotates -----------------------------------------
    (P::None, M::Rol, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Ror, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Rcl, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Rcr, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Shl, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Shr, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Sal, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Sar, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Rol, 0xC1, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Ror, 0xC1, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Rcl, 0xC1, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Rcr, 0xC1, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Shl, 0xC1, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Shr, 0xC1, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Sal, 0xC1, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Sar, 0xC1, t(E::MI, &[], &[Rm, Imm8], W32)),
    (P::None, M::Rol, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::None, M::Ror, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::None, M::Rcl, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::None, M::Rcr, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::None, M::Shl, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::None, M::Shr, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::None, M::Sal, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::None, M::Sar, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::None, M::Rol, 0xD1, t(E::M1, &[], &[Rm, One], W32)),
    (P::None, M::Ror, 0xD1, t(E::M1, &[], &[Rm, One], W32)),
    (P::None, M::Rcl, 0xD1, t(E::M1, &[], &[Rm, One], W32)),
    (P::None, M::Rcr, 0xD1, t(E::M1, &[], &[Rm, One], W32)),
    (P::None, M::Shl, 0xD1, t(E::M1, &[], &[Rm, One], W32)),
    (P::None, M::Shr, 0xD1, t(E::M1, &[], &[Rm, One], W32)),
    (P::None, M::Sal, 0xD1, t(E::M1, &[], &[Rm, One], W32)),
    (P::None, M::Sar, 0xD1, t(E::M1, &[], &[Rm, One], W32)),
    // ---- NONE: RET/MOV imm/ENTER/LEAVE/INT ----------------------------
    (P::None, M::Ret, 0xC2, t(E::I, &[], &[Imm16], W32)),
    (P::None, M::Ret, 0xC3, t(E::NP, &[], &[], W32)),
    (P::None, M::Mov, 0xC6, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Mov, 0xC7, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Enter, 0xC8, t(E::I, &[], &[Imm16, Imm8], W32)),
    (P::None, M::Leave, 0xC9, t(E::NP, &[], &[], W32)),
    (P::None, M::Int21, 0xCD, t(E::I, &[], &[Imm8], W32)),
    // ---- NONE: loops, ports, branches ---------------------------------
    (P::None, M::Loop, 0xE2, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::Jecxz, 0xE3, t(E::D, &[], &[Imm8], W32)),
    (P::None, M::In, 0xE4, t(E::I, &[], &[Al, Imm8], W8)),
    (P::None, M::In, 0xE5, t(E::I, &[], &[Eax, Imm8], W32)),
    (P::None, M::Out, 0xE6, t(E::I, &[], &[Imm8, Al], W8)),
    (P::None, M::Out, 0xE7, t(E::I, &[], &[Imm8, Eax], W32)),
    (P::None, M::Call, 0xE8, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jmp, 0xE9, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jmp, 0xEB, t(E::D, &[], &[Imm8], W32)),
    // ---- NONE: group 3 ------------------------------------------------
    (P::None, M::Test, 0xF6, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::None, M::Not, 0xF6, t(E::M, &[], &[Rm], W8)),
    (P::None, M::Neg, 0xF6, t(E::M, &[], &[Rm], W8)),
    (P::None, M::Mul, 0xF6, t(E::M, &[], &[Rm], W8)),
    (P::None, M::Imul, 0xF6, t(E::M, &[], &[Rm], W8)),
    (P::None, M::Div, 0xF6, t(E::M, &[], &[Rm], W8)),
    (P::None, M::Idiv, 0xF6, t(E::M, &[], &[Rm], W8)),
    (P::None, M::Test, 0xF7, t(E::MI, &[], &[Rm, Imm32], W32)),
    (P::None, M::Not, 0xF7, t(E::M, &[], &[Rm], W32)),
    (P::None, M::Neg, 0xF7, t(E::M, &[], &[Rm], W32)),
    (P::None, M::Mul, 0xF7, t(E::M, &[], &[Rm], W32)),
    (P::None, M::Imul, 0xF7, t(E::M, &[], &[Rm], W32)),
    (P::None, M::Div, 0xF7, t(E::M, &[], &[Rm], W32)),
    (P::None, M::Idiv, 0xF7, t(E::M, &[], &[Rm], W32)),
    // ---- NONE: flag ops, group 4/5 ------------------------------------
    (P::None, M::Clc, 0xF8, t(E::NP, &[], &[], W32)),
    (P::None, M::Stc, 0xF9, t(E::NP, &[], &[], W32)),
    (P::None, M::Cld, 0xFC, t(E::NP, &[], &[], W32)),
    (P::None, M::Std, 0xFD, t(E::NP, &[], &[], W32)),
    (P::None, M::Inc, 0xFE, t(E::M, &[], &[Rm], W8)),
    (P::None, M::Dec, 0xFE, t(E::M, &[], &[Rm], W8)),
    (P::None, M::Inc, 0xFF, t(E::M, &[], &[Rm], W32)),
    (P::None, M::Dec, 0xFF, t(E::M, &[], &[Rm], W32)),
    (P::None, M::Call, 0xFF, t(E::M, &[], &[Rm], W64)),
    (P::None, M::Jmp, 0xFF, t(E::M, &[], &[Rm], W64)),
    (P::None, M::Push, 0xFF, t(E::M, &[], &[Rm], W64)),
    // ---- NONE: 0F page ------------------------------------------------
    (P::None, M::Ud2, 0x0F0B, t(E::NP, &[], &[], W32)),
    (P::None, M::Jo, 0x0F80, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jno, 0x0F81, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jb, 0x0F82, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jae, 0x0F83, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jz, 0x0F84, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jnz, 0x0F85, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jbe, 0x0F86, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Ja, 0x0F87, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Js, 0x0F88, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jns, 0x0F89, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jp, 0x0F8A, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jnp, 0x0F8B, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jl, 0x0F8C, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jge, 0x0F8D, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jle, 0x0F8E, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Jg, 0x0F8F, t(E::D, &[], &[Imm32], W32)),
    (P::None, M::Cpuid, 0x0FA2, t(E::NP, &[], &[], W32)),
    (P::None, M::Imul, 0x0FAF, t(E::RM, &[], &[Reg, Rm], W32)),
    // ---- P66: ALU families --------------------------------------------
    (P::P66, M::Add, 0x01, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Add, 0x03, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::Add, 0x05, t(E::I, &[], &[Ax, Imm16], W16)),
    (P::P66, M::Or, 0x09, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Or, 0x0B, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::Or, 0x0D, t(E::I, &[], &[Ax, Imm16], W16)),
    (P::P66, M::Adc, 0x11, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Adc, 0x13, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::Adc, 0x15, t(E::I, &[], &[Ax, Imm16], W16)),
    (P::P66, M::Sbb, 0x19, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Sbb, 0x1B, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::Sbb, 0x1D, t(E::I, &[], &[Ax, Imm16], W16)),
    (P::P66, M::And, 0x21, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::And, 0x23, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::And, 0x25, t(E::I, &[], &[Ax, Imm16], W16)),
    (P::P66, M::Sub, 0x29, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Sub, 0x2B, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::Sub, 0x2D, t(E::I, &[], &[Ax, Imm16], W16)),
    (P::P66, M::Xor, 0x31, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Xor, 0x33, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::Xor, 0x35, t(E::I, &[], &[Ax, Imm16], W16)),
    (P::P66, M::Cmp, 0x39, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Cmp, 0x3B, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::Cmp, 0x3D, t(E::I, &[], &[Ax, Imm16], W16)),
    // ---- P66: string I/O, groups, MOV ---------------------------------
    (P::P66, M::Insw, 0x6D, t(E::NP, &[], &[], W16)),
    (P::P66, M::Outsw, 0x6F, t(E::NP, &[], &[], W16)),
    (P::P66, M::Add, 0x81, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Or, 0x81, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Adc, 0x81, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Sbb, 0x81, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::And, 0x81, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Sub, 0x81, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Xor, 0x81, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Cmp, 0x81, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Add, 0x83, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Or, 0x83, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Adc, 0x83, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Sbb, 0x83, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::And, 0x83, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Sub, 0x83, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Xor, 0x83, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Cmp, 0x83, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Test, 0x85, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Xchg, 0x87, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Mov, 0x89, t(E::MR, &[], &[Rm, Reg], W16)),
    (P::P66, M::Mov, 0x8B, t(E::RM, &[], &[Reg, Rm], W16)),
    (P::P66, M::Xchg, 0x91, t(E::O, &[1], &[Reg, Ax], W16)),
    (P::P66, M::Xchg, 0x92, t(E::O, &[2], &[Reg, Ax], W16)),
    (P::P66, M::Xchg, 0x93, t(E::O, &[3], &[Reg, Ax], W16)),
    (P::P66, M::Xchg, 0x94, t(E::O, &[4], &[Reg, Ax], W16)),
    (P::P66, M::Xchg, 0x95, t(E::O, &[5], &[Reg, Ax], W16)),
    (P::P66, M::Xchg, 0x96, t(E::O, &[6], &[Reg, Ax], W16)),
    (P::P66, M::Xchg, 0x97, t(E::O, &[7], &[Reg, Ax], W16)),
    (P::P66, M::Cbw, 0x98, t(E::NP, &[], &[], W16)),
    (P::P66, M::Cwd, 0x99, t(E::NP, &[], &[], W16)),
    (P::P66, M::Mov, 0xA1, t(E::I, &[], &[Ax, Moff], W16)),
    (P::P66, M::Mov, 0xA3, t(E::I, &[], &[Moff, Ax], W16)),
    (P::P66, M::Movsw, 0xA5, t(E::NP, &[], &[], W16)),
    (P::P66, M::Cmpsw, 0xA7, t(E::NP, &[], &[], W16)),
    (P::P66, M::Test, 0xA9, t(E::I, &[], &[Ax, Imm16], W16)),
    (P::P66, M::Stosw, 0xAB, t(E::NP, &[], &[], W16)),
    (P::P66, M::Lodsw, 0xAD, t(E::NP, &[], &[], W16)),
    (P::P66, M::Scasw, 0xAF, t(E::NP, &[], &[], W16)),
    (P::P66, M::Mov, 0xB8, t(E::OI, &[0], &[Reg, Imm16], W16)),
    (P::P66, M::Mov, 0xB9, t(E::OI, &[1], &[Reg, Imm16], W16)),
    (P::P66, M::Mov, 0xBA, t(E::OI, &[2], &[Reg, Imm16], W16)),
    (P::P66, M::Mov, 0xBB, t(E::OI, &[3], &[Reg, Imm16], W16)),
    (P::P66, M::Mov, 0xBC, t(E::OI, &[4], &[Reg, Imm16], W16)),
    (P::P66, M::Mov, 0xBD, t(E::OI, &[5], &[Reg, Imm16], W16)),
    (P::P66, M::Mov, 0xBE, t(E::OI, &[6], &[Reg, Imm16], W16)),
    (P::P66, M::Mov, 0xBF, t(E::OI, &[7], &[Reg, Imm16], W16)),
    // 8-bit shift forms keep their width under the operand-size override.
    (P::P66, M::Rol, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::P66, M::Ror, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::P66, M::Rcl, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::P66, M::Rcr, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::P66, M::Shl, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::P66, M::Shr, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::P66, M::Sal, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::P66, M::Sar, 0xC0, t(E::MI, &[], &[Rm, Imm8], W8)),
    (P::P66, M::Rol, 0xC1, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Ror, 0xC1, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Rcl, 0xC1, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Rcr, 0xC1, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Shl, 0xC1, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Shr, 0xC1, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Sal, 0xC1, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Sar, 0xC1, t(E::MI, &[], &[Rm, Imm8], W16)),
    (P::P66, M::Mov, 0xC7, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Rol, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::P66, M::Ror, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::P66, M::Rcl, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::P66, M::Rcr, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::P66, M::Shl, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::P66, M::Shr, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::P66, M::Sal, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::P66, M::Sar, 0xD0, t(E::M1, &[], &[Rm, One], W8)),
    (P::P66, M::Rol, 0xD1, t(E::M1, &[], &[Rm, One], W16)),
    (P::P66, M::Ror, 0xD1, t(E::M1, &[], &[Rm, One], W16)),
    (P::P66, M::Rcl, 0xD1, t(E::M1, &[], &[Rm, One], W16)),
    (P::P66, M::Rcr, 0xD1, t(E::M1, &[], &[Rm, One], W16)),
    (P::P66, M::Shl, 0xD1, t(E::M1, &[], &[Rm, One], W16)),
    (P::P66, M::Shr, 0xD1, t(E::M1, &[], &[Rm, One], W16)),
    (P::P66, M::Sal, 0xD1, t(E::M1, &[], &[Rm, One], W16)),
    (P::P66, M::Sar, 0xD1, t(E::M1, &[], &[Rm, One], W16)),
    (P::P66, M::Test, 0xF7, t(E::MI, &[], &[Rm, Imm16], W16)),
    (P::P66, M::Not, 0xF7, t(E::M, &[], &[Rm], W16)),
    (P::P66, M::Neg, 0xF7, t(E::M, &[], &[Rm], W16)),
    (P::P66, M::Mul, 0xF7, t(E::M, &[], &[Rm], W16)),
    (P::P66, M::Imul, 0xF7, t(E::M, &[], &[Rm], W16)),
    (P::P66, M::Div, 0xF7, t(E::M, &[], &[Rm], W16)),
    (P::P66, M::Idiv, 0xF7, t(E::M, &[], &[Rm], W16)),
    (P::P66, M::Imul, 0x0FAF, t(E::RM, &[], &[Reg, Rm], W16)),
    // ---- REXW: ALU families -------------------------------------------
    (P::RexW, M::Add, 0x01, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Add, 0x03, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Add, 0x05, t(E::I, &[], &[Rax, Imm32], W64)),
    (P::RexW, M::Or, 0x09, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Or, 0x0B, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Or, 0x0D, t(E::I, &[], &[Rax, Imm32], W64)),
    (P::RexW, M::Adc, 0x11, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Adc, 0x13, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Adc, 0x15, t(E::I, &[], &[Rax, Imm32], W64)),
    (P::RexW, M::Sbb, 0x19, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Sbb, 0x1B, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Sbb, 0x1D, t(E::I, &[], &[Rax, Imm32], W64)),
    (P::RexW, M::And, 0x21, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::And, 0x23, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::And, 0x25, t(E::I, &[], &[Rax, Imm32], W64)),
    (P::RexW, M::Sub, 0x29, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Sub, 0x2B, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Sub, 0x2D, t(E::I, &[], &[Rax, Imm32], W64)),
    (P::RexW, M::Xor, 0x31, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Xor, 0x33, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Xor, 0x35, t(E::I, &[], &[Rax, Imm32], W64)),
    (P::RexW, M::Cmp, 0x39, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Cmp, 0x3B, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Cmp, 0x3D, t(E::I, &[], &[Rax, Imm32], W64)),
    // ---- REXW: IMUL, groups, MOV, LEA ---------------------------------
    (P::RexW, M::Imul, 0x69, t(E::RMI, &[], &[Reg, Rm, Imm32], W64)),
    (P::RexW, M::Imul, 0x6B, t(E::RMI, &[], &[Reg, Rm, Imm8], W64)),
    (P::RexW, M::Add, 0x81, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Or, 0x81, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Adc, 0x81, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Sbb, 0x81, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::And, 0x81, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Sub, 0x81, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Xor, 0x81, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Cmp, 0x81, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Add, 0x83, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Or, 0x83, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Adc, 0x83, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Sbb, 0x83, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::And, 0x83, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Sub, 0x83, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Xor, 0x83, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Cmp, 0x83, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Test, 0x85, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Xchg, 0x87, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Mov, 0x89, t(E::MR, &[], &[Rm, Reg], W64)),
    (P::RexW, M::Mov, 0x8B, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Lea, 0x8D, t(E::RM, &[], &[Reg, Rm], W64)),
    (P::RexW, M::Xchg, 0x91, t(E::O, &[1], &[Reg, Rax], W64)),
    (P::RexW, M::Xchg, 0x92, t(E::O, &[2], &[Reg, Rax], W64)),
    (P::RexW, M::Xchg, 0x93, t(E::O, &[3], &[Reg, Rax], W64)),
    (P::RexW, M::Xchg, 0x94, t(E::O, &[4], &[Reg, Rax], W64)),
    (P::RexW, M::Xchg, 0x95, t(E::O, &[5], &[Reg, Rax], W64)),
    (P::RexW, M::Xchg, 0x96, t(E::O, &[6], &[Reg, Rax], W64)),
    (P::RexW, M::Xchg, 0x97, t(E::O, &[7], &[Reg, Rax], W64)),
    (P::RexW, M::Mov, 0xA1, t(E::I, &[], &[Rax, Moff], W64)),
    (P::RexW, M::Mov, 0xA3, t(E::I, &[], &[Moff, Rax], W64)),
    (P::RexW, M::Mov, 0xB8, t(E::OI, &[0], &[Reg, Imm64], W64)),
    (P::RexW, M::Mov, 0xB9, t(E::OI, &[1], &[Reg, Imm64], W64)),
    (P::RexW, M::Mov, 0xBA, t(E::OI, &[2], &[Reg, Imm64], W64)),
    (P::RexW, M::Mov, 0xBB, t(E::OI, &[3], &[Reg, Imm64], W64)),
    (P::RexW, M::Mov, 0xBC, t(E::OI, &[4], &[Reg, Imm64], W64)),
    (P::RexW, M::Mov, 0xBD, t(E::OI, &[5], &[Reg, Imm64], W64)),
    (P::RexW, M::Mov, 0xBE, t(E::OI, &[6], &[Reg, Imm64], W64)),
    (P::RexW, M::Mov, 0xBF, t(E::OI, &[7], &[Reg, Imm64], W64)),
    (P::RexW, M::Rol, 0xC1, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Ror, 0xC1, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Rcl, 0xC1, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Rcr, 0xC1, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Shl, 0xC1, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Shr, 0xC1, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Sal, 0xC1, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Sar, 0xC1, t(E::MI, &[], &[Rm, Imm8], W64)),
    (P::RexW, M::Mov, 0xC7, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Rol, 0xD1, t(E::M1, &[], &[Rm, One], W64)),
    (P::RexW, M::Ror, 0xD1, t(E::M1, &[], &[Rm, One], W64)),
    (P::RexW, M::Rcl, 0xD1, t(E::M1, &[], &[Rm, One], W64)),
    (P::RexW, M::Rcr, 0xD1, t(E::M1, &[], &[Rm, One], W64)),
    (P::RexW, M::Shl, 0xD1, t(E::M1, &[], &[Rm, One], W64)),
    (P::RexW, M::Shr, 0xD1, t(E::M1, &[], &[Rm, One], W64)),
    (P::RexW, M::Sal, 0xD1, t(E::M1, &[], &[Rm, One], W64)),
    (P::RexW, M::Sar, 0xD1, t(E::M1, &[], &[Rm, One], W64)),
    (P::RexW, M::Test, 0xF7, t(E::MI, &[], &[Rm, Imm32], W64)),
    (P::RexW, M::Not, 0xF7, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Neg, 0xF7, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Mul, 0xF7, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Imul, 0xF7, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Div, 0xF7, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Idiv, 0xF7, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Inc, 0xFF, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Dec, 0xFF, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Call, 0xFF, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Jmp, 0xFF, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Push, 0xFF, t(E::M, &[], &[Rm], W64)),
    (P::RexW, M::Imul, 0x0FAF, t(E::RM, &[], &[Reg, Rm], W64)),
];

/// Look up the operand template for a resolved mnemonic.
pub fn operand_template(
    class: PrefixClass,
    mnemonic: Mnemonic,
    opcode: u16,
) -> Option<&'static OperandTemplate> {
    OPERAND_LOOKUP
        .iter()
        .find(|(p, m, o, _)| *p == class && *m == mnemonic && *o == opcode)
        .map(|(_, _, _, template)| template)
}
