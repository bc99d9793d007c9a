#![no_main]

use libfuzzer_sys::fuzz_target;
use lindis_disasm::traits::Disassembler;
use lindis_disasm::x86_64::X86_64Disassembler;

fuzz_target!(|data: &[u8]| {
    let disasm = X86_64Disassembler::new();

    // Decoding must never panic; errors are fine.
    if let Ok(decoded) = disasm.decode_instruction(data, 0) {
        assert!(decoded.size >= 1 && decoded.size <= 15);
        assert!(decoded.size <= data.len());
        // Rendering must be total for any decoded form.
        let _ = decoded.instruction.text();
    }

    // The sweep driver must terminate and cover every byte.
    if data.len() >= 16 {
        let results = disasm.disassemble_block(data, 0);
        let covered: usize = results
            .iter()
            .map(|r| r.as_ref().map(|i| i.size).unwrap_or(1))
            .sum();
        assert_eq!(covered, data.len());
    }
});
