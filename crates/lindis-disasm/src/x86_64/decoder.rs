//! x86-64 instruction decoder.

use super::modrm::{memory_operand, ModRm, Sib};
use super::opcodes::{self, OperandKind, OperandTemplate};
use super::prefix::{PrefixClass, Prefixes};
use crate::error::{DecodeError, Stage};
use crate::traits::{DecodedInstruction, Disassembler};
use lindis_core::{Displacement, Instruction, Mnemonic, Operand, Register, Width};

/// x86-64 instruction decoder.
#[derive(Debug, Default)]
pub struct X86_64Disassembler;

impl X86_64Disassembler {
    /// Creates a new x86-64 disassembler.
    pub fn new() -> Self {
        Self
    }
}

/// Per-instruction decode state: the input, a cursor, and the fields each
/// pipeline stage fills in. Constructed fresh for every call.
struct DecodeState<'a> {
    bytes: &'a [u8],
    cursor: usize,
    prefixes: Prefixes,
    class: PrefixClass,
    opcode: u16,
    modrm: Option<ModRm>,
    sib: Option<Sib>,
    disp: Option<Displacement>,
}

impl<'a> DecodeState<'a> {
    fn new(bytes: &'a [u8], offset: usize) -> Self {
        Self {
            bytes,
            cursor: offset,
            prefixes: Prefixes::default(),
            class: PrefixClass::None,
            opcode: 0,
            modrm: None,
            sib: None,
            disp: None,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    fn take(&mut self, stage: Stage) -> Result<u8, DecodeError> {
        let byte = self
            .peek()
            .ok_or_else(|| DecodeError::unexpected_end(self.cursor, stage))?;
        self.cursor += 1;
        Ok(byte)
    }

    /// Consume `size` bytes as a little-endian value.
    fn take_le(&mut self, size: usize, stage: Stage) -> Result<u64, DecodeError> {
        if self.bytes.len().saturating_sub(self.cursor) < size {
            return Err(DecodeError::unexpected_end(self.cursor, stage));
        }
        let mut value = 0u64;
        for i in 0..size {
            value |= (self.bytes[self.cursor + i] as u64) << (8 * i);
        }
        self.cursor += size;
        Ok(value)
    }

    /// Consume the LOCK/REP-family prefix (recorded, never rendered) and the
    /// operand-size override.
    fn scan_prefixes(&mut self) -> Result<(), DecodeError> {
        if self.peek().is_none() {
            return Err(DecodeError::unexpected_end(self.cursor, Stage::Prefix));
        }
        let (prefixes, consumed) = Prefixes::parse(&self.bytes[self.cursor..]);
        self.prefixes = prefixes;
        self.cursor += consumed;
        self.class = self.prefixes.class();
        Ok(())
    }

    /// Consume an optional REX byte; W promotes the class to REXW, any other
    /// REX to REX, overriding an earlier P66.
    fn scan_rex(&mut self) {
        let consumed = self.prefixes.scan_rex(&self.bytes[self.cursor..]);
        self.cursor += consumed;
        self.class = self.prefixes.class();
    }

    /// Consume the opcode byte(s) and resolve mnemonic and operand template.
    ///
    /// Table rows under-specialized on the prefix class are tolerated by the
    /// REXW -> REX -> NONE downgrade chain; the class the row is found under
    /// keys the operand-template lookup. `/digit` rows peek the ModR/M byte
    /// without consuming it.
    fn resolve_opcode(&mut self) -> Result<(Mnemonic, &'static OperandTemplate), DecodeError> {
        let first = self.take(Stage::Opcode)?;
        self.opcode = if opcodes::requires_second_opcode_byte(first) {
            ((first as u16) << 8) | self.take(Stage::Opcode)? as u16
        } else {
            first as u16
        };

        let scanned = self.class;
        let row = loop {
            if let Some(row) = opcodes::opcode_row(self.class, self.opcode) {
                break row;
            }
            self.class = match self.class {
                PrefixClass::RexW => PrefixClass::Rex,
                PrefixClass::Rex => PrefixClass::None,
                _ => return Err(DecodeError::unknown_opcode(scanned, self.opcode)),
            };
        };

        let reg = self.peek().map(|byte| (byte >> 3) & 0x7);
        let mnemonic = match row.resolve(reg) {
            Some(mnemonic) => mnemonic,
            // A /digit row cannot be resolved without its ModR/M byte.
            None if reg.is_none() => {
                return Err(DecodeError::unexpected_end(self.cursor, Stage::ModRm))
            }
            None => return Err(DecodeError::unknown_opcode(self.class, self.opcode)),
        };

        let template = opcodes::operand_template(self.class, mnemonic, self.opcode).ok_or(
            DecodeError::UnknownOperandForm {
                prefix: self.class,
                mnemonic,
                opcode: self.opcode,
            },
        )?;
        Ok((mnemonic, template))
    }

    fn read_modrm(&mut self, template: &OperandTemplate) -> Result<(), DecodeError> {
        if template.enc.has_modrm() {
            let byte = self.take(Stage::ModRm)?;
            self.modrm = Some(ModRm::parse(byte, self.prefixes.rex));
        }
        Ok(())
    }

    fn read_sib(&mut self) -> Result<(), DecodeError> {
        if let Some(modrm) = self.modrm {
            if modrm.needs_sib() {
                let byte = self.take(Stage::Sib)?;
                self.sib = Some(Sib::parse(byte, self.prefixes.rex));
            }
        }
        Ok(())
    }

    fn read_displacement(&mut self) -> Result<(), DecodeError> {
        let Some(modrm) = self.modrm else {
            return Ok(());
        };
        let (disp8, disp32) = match self.sib {
            Some(sib) => (modrm.has_disp8(), sib.has_disp32(modrm.mod_)),
            None => (modrm.has_disp8(), modrm.has_disp32()),
        };
        if disp8 {
            self.disp = Some(Displacement::Disp8(self.take(Stage::Displacement)?));
        } else if disp32 {
            let raw = self.take_le(4, Stage::Displacement)? as u32;
            self.disp = Some(Displacement::Disp32(raw));
        }
        Ok(())
    }

    /// Walk the template's operand list in declaration order, consuming
    /// immediate bytes as they are materialized.
    fn materialize_operands(
        &mut self,
        template: &OperandTemplate,
    ) -> Result<Vec<Operand>, DecodeError> {
        let mut operands = Vec::with_capacity(template.operands.len());
        for kind in template.operands {
            let operand = match kind {
                OperandKind::One => Operand::One,
                OperandKind::Al => Operand::Register(Register::new(0, Width::W8)),
                OperandKind::Ax => Operand::Register(Register::new(0, Width::W16)),
                OperandKind::Eax => Operand::Register(Register::new(0, Width::W32)),
                OperandKind::Rax => Operand::Register(Register::new(0, Width::W64)),
                OperandKind::Reg => self.reg_operand(template)?,
                OperandKind::Rm => self.rm_operand(template)?,
                OperandKind::Imm8 => self.immediate(1)?,
                OperandKind::Imm16 => self.immediate(2)?,
                OperandKind::Imm32 => self.immediate(4)?,
                OperandKind::Imm64 => self.immediate(8)?,
                OperandKind::Moff => {
                    let size = if template.width == Width::W64 { 8 } else { 4 };
                    self.immediate(size)?
                }
            };
            operands.push(operand);
        }
        Ok(operands)
    }

    fn reg_operand(&self, template: &OperandTemplate) -> Result<Operand, DecodeError> {
        if let Some(modrm) = self.modrm {
            return Ok(Operand::Register(Register::new(modrm.reg, template.width)));
        }
        // Opcode-embedded register: the index is baked into the table and
        // not extended by REX.B.
        let id = template
            .residual
            .first()
            .copied()
            .ok_or(DecodeError::Unsupported {
                reason: "register slot with neither ModR/M nor an embedded index",
            })?;
        Ok(Operand::Register(Register::new(id, template.width)))
    }

    fn rm_operand(&self, template: &OperandTemplate) -> Result<Operand, DecodeError> {
        let modrm = self.modrm.ok_or(DecodeError::Unsupported {
            reason: "r/m slot in an encoding without ModR/M",
        })?;
        if modrm.is_register() {
            return Ok(Operand::Register(Register::new(modrm.rm, template.width)));
        }
        Ok(memory_operand(modrm, self.sib, self.disp))
    }

    fn immediate(&mut self, size: usize) -> Result<Operand, DecodeError> {
        let value = self.take_le(size, Stage::Immediate)?;
        Ok(Operand::imm(value, size as u8))
    }
}

impl Disassembler for X86_64Disassembler {
    fn decode_instruction(
        &self,
        bytes: &[u8],
        offset: usize,
    ) -> Result<DecodedInstruction, DecodeError> {
        let mut state = DecodeState::new(bytes, offset);
        state.scan_prefixes()?;
        state.scan_rex();
        let (mnemonic, template) = state.resolve_opcode()?;
        state.read_modrm(template)?;
        state.read_sib()?;
        state.read_displacement()?;
        let operands = state.materialize_operands(template)?;

        let size = state.cursor - offset;
        Ok(DecodedInstruction {
            instruction: Instruction::new(offset, size, mnemonic, operands),
            size,
        })
    }

    fn min_instruction_size(&self) -> usize {
        1
    }

    fn max_instruction_size(&self) -> usize {
        15
    }

    fn is_fixed_width(&self) -> bool {
        false
    }
}
