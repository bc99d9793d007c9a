//! Decoded-instruction record.

use crate::{Mnemonic, Operand};

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Byte offset of the first instruction byte within the decoded buffer.
    pub offset: usize,
    /// Encoded size in bytes.
    pub size: usize,
    /// Resolved mnemonic.
    pub mnemonic: Mnemonic,
    /// Materialized operands, in rendered order.
    pub operands: Vec<Operand>,
}

impl Instruction {
    /// Creates a new instruction.
    pub fn new(offset: usize, size: usize, mnemonic: Mnemonic, operands: Vec<Operand>) -> Self {
        Self {
            offset,
            size,
            mnemonic,
            operands,
        }
    }

    /// Returns the offset one past the last instruction byte.
    pub fn end_offset(&self) -> usize {
        self.offset + self.size
    }

    /// Renders the instruction text, e.g. `MOV  eax 0x11223344`.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic)?;
        for (i, op) in self.operands.iter().enumerate() {
            if i == 0 {
                write!(f, "  {}", op)?;
            } else {
                write!(f, " {}", op)?;
            }
        }
        Ok(())
    }
}
