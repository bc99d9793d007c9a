//! Instruction operand types and their textual rendering.

use crate::Register;

/// An instruction operand, already materialized into displayable form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Register operand.
    Register(Register),
    /// Immediate value.
    Immediate(Immediate),
    /// Memory reference with at least one register component.
    Memory(EffectiveAddress),
    /// Bare displacement with no base or index register. Covers the
    /// ModR/M `mod=00, rm=101` form (rendered as the raw 32-bit value)
    /// and the SIB no-base no-index form.
    Absolute(Displacement),
    /// The literal shift-by-one operand of the `D0`/`D1` rows.
    One,
}

impl Operand {
    /// Creates a register operand.
    pub fn reg(reg: Register) -> Self {
        Self::Register(reg)
    }

    /// Creates an immediate operand from `size` little-endian bytes.
    pub fn imm(value: u64, size: u8) -> Self {
        Self::Immediate(Immediate { value, size })
    }

    /// Returns true if this is a memory or bare-displacement operand.
    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Memory(_) | Self::Absolute(_))
    }
}

/// Immediate value operand.
///
/// The value is assembled little-endian from the instruction stream and
/// rendered as `0x` followed by two hex digits per encoded byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Immediate {
    /// Zero-extended value.
    pub value: u64,
    /// Encoded size in bytes (1, 2, 4 or 8).
    pub size: u8,
}

/// Address displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Displacement {
    /// 8-bit displacement, rendered as unsigned decimal.
    Disp8(u8),
    /// 32-bit displacement, rendered as `0x` + 8 hex digits.
    Disp32(u32),
}

/// A decoded `[base + index * scale + disp]` memory reference.
///
/// SIB-built addresses set `disp_leading`: their displacement renders before
/// the base register, while plain ModR/M addresses render it after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveAddress {
    /// Base register, always 64-bit.
    pub base: Option<Register>,
    /// Index register, always 64-bit. Never present without SIB.
    pub index: Option<Register>,
    /// Scale factor (1, 2, 4 or 8) applied to the index.
    pub scale: u8,
    /// Displacement, if the addressing mode carries one.
    pub disp: Option<Displacement>,
    /// Displacement position in the rendered form.
    pub disp_leading: bool,
}

impl std::fmt::Display for Immediate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Width includes the 0x prefix, hence 2 + two digits per byte.
        write!(f, "{:#0width$x}", self.value, width = 2 + 2 * self.size as usize)
    }
}

impl std::fmt::Display for Displacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disp8(d) => write!(f, "{}", d),
            Self::Disp32(d) => write!(f, "{:#010x}", d),
        }
    }
}

impl std::fmt::Display for EffectiveAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        let mut sep = |f: &mut std::fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                write!(f, " + ")
            }
        };

        if self.disp_leading {
            if let Some(disp) = &self.disp {
                sep(f)?;
                write!(f, "{}", disp)?;
            }
        }
        if let Some(base) = &self.base {
            sep(f)?;
            write!(f, "{}", base)?;
        }
        if let Some(index) = &self.index {
            sep(f)?;
            write!(f, "{} * {}", index, self.scale)?;
        }
        if !self.disp_leading {
            if let Some(disp) = &self.disp {
                sep(f)?;
                write!(f, "{}", disp)?;
            }
        }

        write!(f, "]")
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register(reg) => write!(f, "{}", reg),
            Self::Immediate(imm) => write!(f, "{}", imm),
            Self::Memory(mem) => write!(f, "{}", mem),
            Self::Absolute(disp) => write!(f, "{}", disp),
            Self::One => f.write_str("one"),
        }
    }
}
