//! x86-64 instruction decoder.
//!
//! A table-driven decoder for the 64-bit instruction grammar:
//! - legacy prefixes (LOCK/REP family, operand-size override)
//! - REX prefix for 64-bit operands and extended registers
//! - 1- and 2-byte opcodes, including `/digit` opcode extensions
//! - ModR/M and SIB byte decoding with 8/32-bit displacements
//!
//! VEX/EVEX encodings, segment overrides and the address-size override are
//! outside the supported subset.

mod decoder;
mod modrm;
mod opcodes;
pub(crate) mod prefix;

pub use decoder::X86_64Disassembler;
pub use prefix::PrefixClass;
