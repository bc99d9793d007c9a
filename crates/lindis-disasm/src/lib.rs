//! # lindis-disasm
//!
//! Single-instruction decoders for lindis.
//!
//! The decoder is a pure function over `(buffer, offset)`: it consumes the
//! encoded bytes of exactly one instruction and returns its length, mnemonic
//! and rendered operand text. A linear-sweep driver is provided on the
//! [`Disassembler`] trait; everything above that (object loading, symbol
//! resolution, control-flow reconstruction) lives outside this crate.

pub mod error;
pub mod traits;
pub mod x86_64;

pub use error::{DecodeError, Stage};
pub use traits::{DecodedInstruction, Disassembler};
pub use x86_64::X86_64Disassembler;
