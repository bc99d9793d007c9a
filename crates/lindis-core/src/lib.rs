//! # lindis-core
//!
//! Core abstractions for the lindis disassembler. This crate defines the
//! instruction model shared by decoder backends: mnemonics, registers,
//! operands, and the decoded-instruction record with its textual rendering.

pub mod instruction;
pub mod mnemonic;
pub mod operand;
pub mod register;

pub use instruction::Instruction;
pub use mnemonic::Mnemonic;
pub use operand::{Displacement, EffectiveAddress, Immediate, Operand};
pub use register::{Register, Width};
