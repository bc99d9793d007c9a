//! Disassembler traits.

use crate::DecodeError;
use lindis_core::Instruction;

/// Result of decoding a single instruction.
#[derive(Debug, Clone)]
pub struct DecodedInstruction {
    /// The decoded instruction.
    pub instruction: Instruction,
    /// Number of bytes consumed.
    pub size: usize,
}

/// Trait for single-instruction decoders.
pub trait Disassembler {
    /// Decode one instruction from `bytes` starting at `offset`.
    ///
    /// Decoding reads only the bytes of the instruction itself: the reported
    /// size is exactly the number of bytes consumed from `offset`.
    fn decode_instruction(
        &self,
        bytes: &[u8],
        offset: usize,
    ) -> Result<DecodedInstruction, DecodeError>;

    /// Returns the minimum instruction size for this architecture.
    fn min_instruction_size(&self) -> usize;

    /// Returns the maximum instruction size for this architecture.
    fn max_instruction_size(&self) -> usize;

    /// Returns whether instructions are fixed-width.
    fn is_fixed_width(&self) -> bool;

    /// Disassemble a block of code into instructions.
    ///
    /// On a decode error the failing offset is reported and the sweep
    /// resynchronizes one byte later, so every byte of the block is covered.
    fn disassemble_block(
        &self,
        bytes: &[u8],
        start: usize,
    ) -> Vec<Result<Instruction, DecodeError>> {
        let mut instructions = Vec::new();
        let mut offset = start;

        while offset < bytes.len() {
            match self.decode_instruction(bytes, offset) {
                Ok(decoded) => {
                    offset += decoded.size;
                    instructions.push(Ok(decoded.instruction));
                }
                Err(e) => {
                    offset += 1;
                    instructions.push(Err(e));
                }
            }
        }

        instructions
    }
}
