//! ModR/M and SIB byte decoding.

use super::prefix::Rex;
use lindis_core::{Displacement, EffectiveAddress, Operand, Register, Width};

/// Decoded ModR/M byte.
#[derive(Debug, Clone, Copy)]
pub struct ModRm {
    /// Mod field (2 bits)
    pub mod_: u8,
    /// Reg field (3 bits, extended by REX.R)
    pub reg: u8,
    /// R/M field (3 bits, extended by REX.B)
    pub rm: u8,
}

impl ModRm {
    /// Parse a ModR/M byte with REX extension.
    pub fn parse(byte: u8, rex: Option<Rex>) -> Self {
        let rex = rex.unwrap_or_default();
        Self {
            mod_: (byte >> 6) & 0x3,
            reg: ((byte >> 3) & 0x7) | ((rex.r as u8) << 3),
            rm: (byte & 0x7) | ((rex.b as u8) << 3),
        }
    }

    /// Returns true if this ModR/M encodes a register operand (mod=11).
    pub fn is_register(&self) -> bool {
        self.mod_ == 0b11
    }

    /// Returns true if this ModR/M requires a SIB byte.
    pub fn needs_sib(&self) -> bool {
        self.mod_ != 0b11 && (self.rm & 0x7) == 0x4
    }

    /// Returns true for the base-less `mod=00, rm=101` form, whose 32-bit
    /// displacement renders bare.
    pub fn is_disp_only(&self) -> bool {
        self.mod_ == 0b00 && (self.rm & 0x7) == 0x5
    }

    /// Returns true if an 8-bit displacement follows.
    pub fn has_disp8(&self) -> bool {
        self.mod_ == 0b01
    }

    /// Returns true if a 32-bit displacement follows (no SIB).
    pub fn has_disp32(&self) -> bool {
        self.mod_ == 0b10 || self.is_disp_only()
    }
}

/// Decoded SIB byte.
#[derive(Debug, Clone, Copy)]
pub struct Sib {
    /// Scale (2 bits) - actual scale is 1 << scale
    pub scale: u8,
    /// Index register (3 bits, extended by REX.X)
    pub index: u8,
    /// Base register (3 bits, extended by REX.B)
    pub base: u8,
}

impl Sib {
    /// Parse a SIB byte with REX extension.
    pub fn parse(byte: u8, rex: Option<Rex>) -> Self {
        let rex = rex.unwrap_or_default();
        Self {
            scale: (byte >> 6) & 0x3,
            index: ((byte >> 3) & 0x7) | ((rex.x as u8) << 3),
            base: (byte & 0x7) | ((rex.b as u8) << 3),
        }
    }

    /// Returns the actual scale factor (1, 2, 4, or 8).
    pub fn scale_factor(&self) -> u8 {
        1 << self.scale
    }

    /// The index register, unless suppressed. Index 100 without REX.X means
    /// no index; with REX.X it selects r12.
    pub fn index_register(&self) -> Option<Register> {
        if self.index == 0x4 {
            None
        } else {
            Some(Register::new(self.index, Width::W64))
        }
    }

    /// The base register, unless suppressed (`base=101` with `mod=00`, where
    /// a bare 32-bit displacement stands in for it).
    pub fn base_register(&self, mod_: u8) -> Option<Register> {
        if (self.base & 0x7) == 0x5 && mod_ == 0b00 {
            None
        } else {
            Some(Register::new(self.base, Width::W64))
        }
    }

    /// Returns true if a 32-bit displacement follows this SIB byte.
    pub fn has_disp32(&self, mod_: u8) -> bool {
        mod_ == 0b10 || (mod_ == 0b00 && (self.base & 0x7) == 0x5)
    }
}

/// Build the memory operand for a ModR/M r/m slot that does not encode a
/// register. Displacements have already been read from the stream.
pub fn memory_operand(modrm: ModRm, sib: Option<Sib>, disp: Option<Displacement>) -> Operand {
    if let Some(sib) = sib {
        let base = sib.base_register(modrm.mod_);
        let index = sib.index_register();
        if base.is_none() && index.is_none() {
            return Operand::Absolute(disp.unwrap_or(Displacement::Disp32(0)));
        }
        return Operand::Memory(EffectiveAddress {
            base,
            index,
            scale: sib.scale_factor(),
            disp,
            disp_leading: true,
        });
    }

    if modrm.is_disp_only() {
        return Operand::Absolute(disp.unwrap_or(Displacement::Disp32(0)));
    }

    Operand::Memory(EffectiveAddress {
        base: Some(Register::new(modrm.rm, Width::W64)),
        index: None,
        scale: 1,
        disp,
        disp_leading: false,
    })
}
