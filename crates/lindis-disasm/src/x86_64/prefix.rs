//! x86-64 prefix parsing.

#![allow(dead_code)]

/// Prefix class of a decoded instruction.
///
/// Exactly one value holds per instruction and forms part of every encoding
/// table key. REX promotion overrides an earlier `P66`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixClass {
    /// No size-changing prefix.
    None,
    /// Operand-size override (0x66).
    P66,
    /// REX prefix without W.
    Rex,
    /// REX prefix with W set.
    RexW,
}

impl PrefixClass {
    /// Returns the class name used in table diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::P66 => "P66",
            Self::Rex => "REX",
            Self::RexW => "REXW",
        }
    }
}

impl std::fmt::Display for PrefixClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// REX prefix fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rex {
    /// REX.W - 64-bit operand size
    pub w: bool,
    /// REX.R - extends ModR/M reg field
    pub r: bool,
    /// REX.X - extends SIB index field
    pub x: bool,
    /// REX.B - extends ModR/M r/m and SIB base
    pub b: bool,
}

impl Rex {
    /// Returns true if `byte` is a REX prefix (high nibble 0100).
    pub fn is_rex(byte: u8) -> bool {
        byte >> 4 == 0x4
    }

    /// Parse a REX byte.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            w: byte & 0x08 != 0,
            r: byte & 0x04 != 0,
            x: byte & 0x02 != 0,
            b: byte & 0x01 != 0,
        }
    }
}

/// Legacy prefixes recorded ahead of the opcode.
///
/// The LOCK/REP family is consumed and recorded but never changes the
/// prefix class or the rendered text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefixes {
    /// LOCK prefix (0xF0)
    pub lock: bool,
    /// REPNE/REPNZ prefix (0xF2)
    pub repne: bool,
    /// REP/REPE/REPZ prefix (0xF3)
    pub rep: bool,
    /// Operand size override (0x66)
    pub operand_size: bool,
    /// REX prefix
    pub rex: Option<Rex>,
}

impl Prefixes {
    /// Parse legacy prefixes from the start of an instruction: at most one
    /// of the LOCK/REP family, then at most one operand-size override.
    /// Returns the prefixes and the number of bytes consumed.
    pub fn parse(bytes: &[u8]) -> (Self, usize) {
        let mut prefixes = Self::default();
        let mut offset = 0;

        match bytes.first() {
            Some(0xF0) => {
                prefixes.lock = true;
                offset += 1;
            }
            Some(0xF2) => {
                prefixes.repne = true;
                offset += 1;
            }
            Some(0xF3) => {
                prefixes.rep = true;
                offset += 1;
            }
            _ => {}
        }

        if bytes.get(offset) == Some(&0x66) {
            prefixes.operand_size = true;
            offset += 1;
        }

        (prefixes, offset)
    }

    /// Scan an optional REX byte. Returns the number of bytes consumed
    /// (0 or 1). REX must be the last prefix before the opcode.
    pub fn scan_rex(&mut self, bytes: &[u8]) -> usize {
        match bytes.first() {
            Some(&b) if Rex::is_rex(b) => {
                self.rex = Some(Rex::from_byte(b));
                1
            }
            _ => 0,
        }
    }

    /// The prefix class implied by the scanned prefixes.
    pub fn class(&self) -> PrefixClass {
        match self.rex {
            Some(rex) if rex.w => PrefixClass::RexW,
            Some(_) => PrefixClass::Rex,
            None if self.operand_size => PrefixClass::P66,
            None => PrefixClass::None,
        }
    }
}
