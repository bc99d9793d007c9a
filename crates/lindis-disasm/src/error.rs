//! Decoding error types.

use crate::x86_64::prefix::PrefixClass;
use lindis_core::Mnemonic;
use thiserror::Error;

/// Pipeline stage at which the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prefix,
    Rex,
    Opcode,
    ModRm,
    Sib,
    Displacement,
    Immediate,
}

impl Stage {
    /// Returns the stage name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Rex => "rex",
            Self::Opcode => "opcode",
            Self::ModRm => "modrm",
            Self::Sib => "sib",
            Self::Displacement => "displacement",
            Self::Immediate => "immediate",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for instruction decoding.
///
/// The decoder never retries: each error carries the full lookup context so
/// a sweep driver can emit a placeholder byte and resynchronize.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer ran out mid-instruction.
    #[error("unexpected end of input at offset {offset:#x} while reading {stage}")]
    UnexpectedEnd { offset: usize, stage: Stage },

    /// No opcode row for this prefix class and opcode, after the
    /// REXW -> REX -> NONE fallback chain.
    #[error("unknown opcode {opcode:#04x} under prefix class {prefix}")]
    UnknownOpcode { prefix: PrefixClass, opcode: u16 },

    /// An opcode row resolved to a mnemonic with no operand template.
    #[error("no operand form for ({prefix}, {mnemonic}, {opcode:#04x})")]
    UnknownOperandForm {
        prefix: PrefixClass,
        mnemonic: Mnemonic,
        opcode: u16,
    },

    /// Syntactically decodable, but outside the supported subset.
    #[error("unsupported encoding: {reason}")]
    Unsupported { reason: &'static str },
}

impl DecodeError {
    /// Creates a new UnexpectedEnd error.
    pub fn unexpected_end(offset: usize, stage: Stage) -> Self {
        Self::UnexpectedEnd { offset, stage }
    }

    /// Creates a new UnknownOpcode error.
    pub fn unknown_opcode(prefix: PrefixClass, opcode: u16) -> Self {
        Self::UnknownOpcode { prefix, opcode }
    }

    /// Creates a new UnknownOperandForm error.
    pub fn unknown_operand_form(prefix: PrefixClass, mnemonic: Mnemonic, opcode: u16) -> Self {
        Self::UnknownOperandForm {
            prefix,
            mnemonic,
            opcode,
        }
    }
}
