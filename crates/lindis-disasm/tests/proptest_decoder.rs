//! Property-based tests for the x86-64 decoder.
//!
//! These verify invariants that should hold for all inputs:
//! - Decoding never panics on arbitrary bytes
//! - Decoded instruction size is within valid bounds
//! - The reported size equals the bytes consumed (no hidden lookahead)
//! - Deterministic decoding (same input -> same output)
//! - The sweep driver covers every byte exactly once

use proptest::prelude::*;

use lindis_disasm::traits::Disassembler;
use lindis_disasm::x86_64::X86_64Disassembler;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding arbitrary bytes should never panic.
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let disasm = X86_64Disassembler::new();
        // Errors are fine; panics are not.
        let _ = disasm.decode_instruction(&bytes, 0);
    }

    /// Successfully decoded instructions have valid size.
    #[test]
    fn decoded_size_is_valid(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let disasm = X86_64Disassembler::new();
        if let Ok(decoded) = disasm.decode_instruction(&bytes, 0) {
            prop_assert!(decoded.size >= 1, "instruction size must be at least 1");
            prop_assert!(decoded.size <= 15, "instruction size must be at most 15");
            prop_assert!(decoded.size <= bytes.len(), "instruction size cannot exceed input length");
            prop_assert_eq!(decoded.size, decoded.instruction.size);
        }
    }

    /// The decode depends only on the consumed byte range: appending
    /// trailing bytes never changes the result.
    #[test]
    fn decode_ignores_bytes_past_the_instruction(
        bytes in prop::collection::vec(any::<u8>(), 1..24),
        tail in prop::collection::vec(any::<u8>(), 0..8)
    ) {
        let disasm = X86_64Disassembler::new();
        if let Ok(decoded) = disasm.decode_instruction(&bytes, 0) {
            if decoded.size == bytes.len() {
                let mut padded = bytes.clone();
                padded.extend_from_slice(&tail);
                let repadded = disasm.decode_instruction(&padded, 0);
                // A complete instruction must decode identically with any tail.
                match repadded {
                    Ok(second) => {
                        prop_assert_eq!(decoded.size, second.size);
                        prop_assert_eq!(decoded.instruction.mnemonic, second.instruction.mnemonic);
                        prop_assert_eq!(decoded.instruction.text(), second.instruction.text());
                    }
                    Err(e) => prop_assert!(false, "padded decode failed: {e}"),
                }
            }
        }
    }

    /// Decoding is deterministic: same input always produces same output.
    #[test]
    fn decode_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let disasm = X86_64Disassembler::new();
        let result1 = disasm.decode_instruction(&bytes, 0);
        let result2 = disasm.decode_instruction(&bytes, 0);

        match (&result1, &result2) {
            (Ok(d1), Ok(d2)) => {
                prop_assert_eq!(d1.size, d2.size, "sizes should match");
                prop_assert_eq!(d1.instruction.mnemonic, d2.instruction.mnemonic);
                prop_assert_eq!(d1.instruction.text(), d2.instruction.text());
            }
            (Err(e1), Err(e2)) => prop_assert_eq!(e1, e2, "errors should match"),
            _ => prop_assert!(false, "decode results should be consistent: {result1:?} vs {result2:?}"),
        }
    }

    /// Decoding at an offset matches decoding the tail slice.
    #[test]
    fn offset_decoding_matches_slice_decoding(
        prefix_junk in prop::collection::vec(any::<u8>(), 0..8),
        bytes in prop::collection::vec(any::<u8>(), 1..24)
    ) {
        let disasm = X86_64Disassembler::new();
        let mut buffer = prefix_junk.clone();
        buffer.extend_from_slice(&bytes);

        let at_offset = disasm.decode_instruction(&buffer, prefix_junk.len());
        let at_zero = disasm.decode_instruction(&bytes, 0);

        match (at_offset, at_zero) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.size, b.size);
                prop_assert_eq!(a.instruction.text(), b.instruction.text());
                prop_assert_eq!(a.instruction.offset, prefix_junk.len());
            }
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "inconsistent results: {a:?} vs {b:?}"),
        }
    }

    /// Sequential decoding covers all bytes (no gaps or overlaps).
    #[test]
    fn sequential_decode_covers_all_bytes(bytes in prop::collection::vec(any::<u8>(), 16..128)) {
        let disasm = X86_64Disassembler::new();
        let mut offset = 0;
        let mut covered = vec![false; bytes.len()];
        let mut iterations = 0;
        let max_iterations = bytes.len() + 1;

        while offset < bytes.len() && iterations < max_iterations {
            iterations += 1;

            match disasm.decode_instruction(&bytes, offset) {
                Ok(decoded) => {
                    prop_assert!(decoded.size > 0, "decoded size must be positive");
                    let end = (offset + decoded.size).min(bytes.len());
                    for (i, covered_byte) in covered[offset..end].iter_mut().enumerate() {
                        prop_assert!(!*covered_byte, "byte {} covered twice", offset + i);
                        *covered_byte = true;
                    }
                    offset += decoded.size;
                }
                Err(_) => {
                    covered[offset] = true;
                    offset += 1;
                }
            }
        }

        for (i, &c) in covered.iter().enumerate() {
            prop_assert!(c, "byte {} was not covered", i);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// REX prefix handling: any REX byte before any opcode should not crash.
    #[test]
    fn rex_prefix_handling(
        rex in 0x40u8..=0x4F,
        opcode in any::<u8>(),
        modrm in any::<u8>()
    ) {
        let disasm = X86_64Disassembler::new();
        let bytes = [rex, opcode, modrm, 0, 0, 0, 0, 0, 0, 0];
        let _ = disasm.decode_instruction(&bytes, 0);
    }

    /// ModR/M and SIB truth tables: register-direct forms never read
    /// displacement bytes, so `op r/m, r` with mod=11 is always 2 bytes
    /// (plus prefixes).
    #[test]
    fn register_direct_alu_is_two_bytes(reg_bits in 0u8..64) {
        let disasm = X86_64Disassembler::new();
        let modrm = 0xC0 | reg_bits;
        let decoded = disasm.decode_instruction(&[0x01, modrm], 0).unwrap();
        prop_assert_eq!(decoded.size, 2);
    }

    /// SIB presence: mod!=11 with rm=100 always consumes a SIB byte.
    #[test]
    fn sib_follows_rm100(mod_ in 0u8..3, reg in 0u8..8, sib in any::<u8>()) {
        let disasm = X86_64Disassembler::new();
        let modrm = (mod_ << 6) | (reg << 3) | 0x4;
        // Enough trailing bytes for any displacement the form may need.
        let bytes = [0x01, modrm, sib, 0, 0, 0, 0, 0];
        let decoded = disasm.decode_instruction(&bytes, 0).unwrap();
        let disp_len = match mod_ {
            0 => {
                if (sib & 0x7) == 0x5 {
                    4
                } else {
                    0
                }
            }
            1 => 1,
            _ => 4,
        };
        prop_assert_eq!(decoded.size, 3 + disp_len);
    }
}
