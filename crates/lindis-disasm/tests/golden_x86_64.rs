//! Byte-for-byte conformance tests for the x86-64 decoder.
//!
//! Each case pins the exact `(length, text)` pair, including spacing, casing
//! and hex width. These strings are load-bearing: the rendered form is the
//! comparison format downstream tests and drivers rely on.

use lindis_disasm::{Disassembler, X86_64Disassembler};

fn check(bytes: &[u8], length: usize, text: &str) {
    let disasm = X86_64Disassembler::new();
    let decoded = disasm
        .decode_instruction(bytes, 0)
        .unwrap_or_else(|e| panic!("decode failed for {:02x?}: {e}", bytes));
    assert_eq!(decoded.size, length, "length mismatch for {:02x?}", bytes);
    assert_eq!(
        decoded.instruction.text(),
        text,
        "text mismatch for {:02x?}",
        bytes
    );
}

#[test]
fn single_byte_instructions() {
    check(&[0x90], 1, "NOP");
    check(&[0xC3], 1, "RET");
    check(&[0xC9], 1, "LEAVE");
    check(&[0xF8], 1, "CLC");
    check(&[0xF9], 1, "STC");
    check(&[0xFC], 1, "CLD");
    check(&[0xFD], 1, "STD");
    check(&[0x98], 1, "CWDE");
    check(&[0x99], 1, "CDQ");
}

#[test]
fn mov_immediate_widths() {
    check(&[0xB8, 0x44, 0x33, 0x22, 0x11], 5, "MOV  eax 0x11223344");
    check(&[0xB9, 0x44, 0x33, 0x22, 0x11], 5, "MOV  ecx 0x11223344");
    check(&[0xB0, 0x11], 2, "MOV  al 0x11");
    check(&[0x66, 0xB8, 0x22, 0x11], 4, "MOV  ax 0x1122");
    check(
        &[0x48, 0xB8, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
        10,
        "MOV  rax 0x1122334455667788",
    );
}

#[test]
fn accumulator_immediate_forms() {
    check(&[0x05, 0x44, 0x33, 0x22, 0x11], 5, "ADD  eax 0x11223344");
    check(&[0x2D, 0x44, 0x33, 0x22, 0x11], 5, "SUB  eax 0x11223344");
    check(&[0x04, 0x7F], 2, "ADD  al 0x7f");
    check(&[0xA8, 0x01], 2, "TEST  al 0x01");
}

#[test]
fn add_addressing_forms() {
    check(&[0x01, 0xC1], 2, "ADD  ecx eax");
    check(
        &[0x01, 0x04, 0x25, 0x00, 0x00, 0x00, 0x00],
        7,
        "ADD  0x00000000 eax",
    );
    check(&[0x01, 0x00], 2, "ADD  [rax] eax");
    check(&[0x01, 0x04, 0x00], 3, "ADD  [rax + rax * 1] eax");
    check(&[0x01, 0x44, 0x00, 0x01], 4, "ADD  [1 + rax + rax * 1] eax");
    check(
        &[0x01, 0x84, 0x00, 0x00, 0x80, 0x00, 0x00],
        7,
        "ADD  [0x00008000 + rax + rax * 1] eax",
    );
}

#[test]
fn modrm_reg_field_walk() {
    check(&[0x01, 0x00], 2, "ADD  [rax] eax");
    check(&[0x01, 0x08], 2, "ADD  [rax] ecx");
    check(&[0x01, 0x10], 2, "ADD  [rax] edx");
    check(&[0x01, 0x18], 2, "ADD  [rax] ebx");
    check(&[0x01, 0x20], 2, "ADD  [rax] esp");
    check(&[0x01, 0x28], 2, "ADD  [rax] ebp");
    check(&[0x01, 0x30], 2, "ADD  [rax] esi");
    check(&[0x01, 0x38], 2, "ADD  [rax] edi");
}

#[test]
fn modrm_register_direct_walk() {
    check(&[0x01, 0xC0], 2, "ADD  eax eax");
    check(&[0x01, 0xC1], 2, "ADD  ecx eax");
    check(&[0x01, 0xC2], 2, "ADD  edx eax");
    check(&[0x01, 0xC3], 2, "ADD  ebx eax");
    check(&[0x01, 0xC4], 2, "ADD  esp eax");
    check(&[0x01, 0xC5], 2, "ADD  ebp eax");
    check(&[0x01, 0xC6], 2, "ADD  esi eax");
    check(&[0x01, 0xC7], 2, "ADD  edi eax");
    check(&[0x03, 0xC0], 2, "ADD  eax eax");
}

#[test]
fn mov_displacement_forms() {
    check(&[0x8B, 0x08], 2, "MOV  ecx [rax]");
    check(&[0x8B, 0x48, 0x01], 3, "MOV  ecx [rax + 1]");
    check(
        &[0x8B, 0x88, 0x00, 0x01, 0x00, 0x00],
        6,
        "MOV  ecx [rax + 0x00000100]",
    );
}

#[test]
fn rbp_base_forms() {
    check(&[0x8B, 0x4D, 0x00], 3, "MOV  ecx [rbp + 0]");
    check(&[0x8B, 0x4D, 0x01], 3, "MOV  ecx [rbp + 1]");
    check(
        &[0x8B, 0x8D, 0x00, 0x01, 0x00, 0x00],
        6,
        "MOV  ecx [rbp + 0x00000100]",
    );
    check(
        &[0x8B, 0x0C, 0x25, 0x00, 0x00, 0x08, 0x00],
        7,
        "MOV  ecx 0x00080000",
    );
}

#[test]
fn sib_scale_forms() {
    check(&[0x8B, 0x14, 0x08], 3, "MOV  edx [rax + rcx * 1]");
    check(&[0x8B, 0x54, 0x08, 0x01], 4, "MOV  edx [1 + rax + rcx * 1]");
    check(&[0x8B, 0x14, 0x48], 3, "MOV  edx [rax + rcx * 2]");
    check(&[0x8B, 0x14, 0x88], 3, "MOV  edx [rax + rcx * 4]");
    check(&[0x8B, 0x14, 0xC8], 3, "MOV  edx [rax + rcx * 8]");
    check(&[0x8B, 0x14, 0x24], 3, "MOV  edx [rsp]");
}

#[test]
fn group1_digit_dispatch() {
    check(&[0x83, 0xC0, 0x01], 3, "ADD  eax 0x01");
    check(&[0x83, 0xC8, 0x01], 3, "OR  eax 0x01");
    check(&[0x83, 0xD0, 0x01], 3, "ADC  eax 0x01");
    check(&[0x83, 0xD8, 0x01], 3, "SBB  eax 0x01");
    check(&[0x83, 0xE0, 0x01], 3, "AND  eax 0x01");
    check(&[0x83, 0xE8, 0x01], 3, "SUB  eax 0x01");
    check(&[0x83, 0xF0, 0x01], 3, "XOR  eax 0x01");
    check(&[0x83, 0xF8, 0x01], 3, "CMP  eax 0x01");
    check(
        &[0x81, 0xC0, 0x44, 0x33, 0x22, 0x11],
        6,
        "ADD  eax 0x11223344",
    );
}

#[test]
fn rex_prefix_forms() {
    check(&[0x48, 0x83, 0xC0, 0x01], 4, "ADD  rax 0x01");
    check(&[0x48, 0x01, 0xC1], 3, "ADD  rcx rax");
    check(&[0x44, 0x01, 0x04, 0x91], 4, "ADD  [rcx + rdx * 4] r8d");
    check(&[0x42, 0x01, 0x04, 0x91], 4, "ADD  [rcx + r10 * 4] eax");
    check(&[0x41, 0x01, 0x04, 0x91], 4, "ADD  [r9 + rdx * 4] eax");
    check(&[0x48, 0x8B, 0x08], 3, "MOV  rcx [rax]");
    check(&[0x48, 0x8D, 0x48, 0x08], 4, "LEA  rcx [rax + 8]");
}

#[test]
fn shift_and_rotate_forms() {
    check(&[0xC1, 0xE0, 0x04], 3, "SHL  eax 0x04");
    check(&[0xC1, 0xE8, 0x04], 3, "SHR  eax 0x04");
    check(&[0xC1, 0xF8, 0x04], 3, "SAR  eax 0x04");
    check(&[0xC0, 0xC1, 0x02], 3, "ROL  cl 0x02");
    check(&[0xD1, 0xE0], 2, "SHL  eax one");
    check(&[0xD0, 0xE8], 2, "SHR  al one");
    check(&[0x48, 0xD1, 0xF8], 3, "SAR  rax one");
    check(&[0x66, 0xD1, 0xE0], 3, "SHL  ax one");
    check(&[0x66, 0xD0, 0xE8], 3, "SHR  al one");
    check(&[0x66, 0xC1, 0xE0, 0x04], 4, "SHL  ax 0x04");
    check(&[0x66, 0xC0, 0xC1, 0x02], 4, "ROL  cl 0x02");
}

#[test]
fn group3_forms() {
    check(&[0xF7, 0xD0], 2, "NOT  eax");
    check(&[0xF7, 0xD8], 2, "NEG  eax");
    check(&[0xF7, 0xE1], 2, "MUL  ecx");
    check(&[0xF7, 0xF9], 2, "IDIV  ecx");
    check(&[0xF7, 0xC0, 0x01, 0x00, 0x00, 0x00], 6, "TEST  eax 0x00000001");
    check(&[0xF6, 0xC0, 0x01], 3, "TEST  al 0x01");
    check(&[0x48, 0xF7, 0xD8], 3, "NEG  rax");
}

#[test]
fn inc_dec_group_forms() {
    check(&[0xFF, 0xC0], 2, "INC  eax");
    check(&[0xFF, 0xC8], 2, "DEC  eax");
    check(&[0xFE, 0xC0], 2, "INC  al");
    check(&[0x48, 0xFF, 0xC0], 3, "INC  rax");
}

#[test]
fn push_pop_forms() {
    check(&[0x50], 1, "PUSH  rax");
    check(&[0x55], 1, "PUSH  rbp");
    check(&[0x58], 1, "POP  rax");
    check(&[0x5D], 1, "POP  rbp");
    check(&[0x68, 0x44, 0x33, 0x22, 0x11], 5, "PUSH  0x11223344");
    check(&[0x6A, 0x10], 2, "PUSH  0x10");
    check(&[0xFF, 0x30], 2, "PUSH  [rax]");
    check(&[0x8F, 0xC0], 2, "POP  rax");
}

#[test]
fn branch_forms() {
    check(&[0xEB, 0x05], 2, "JMP  0x05");
    check(&[0xE9, 0x00, 0x01, 0x00, 0x00], 5, "JMP  0x00000100");
    check(&[0xE8, 0x00, 0x01, 0x00, 0x00], 5, "CALL  0x00000100");
    check(&[0x74, 0x10], 2, "JZ  0x10");
    check(&[0x75, 0x10], 2, "JNZ  0x10");
    check(&[0x7F, 0x02], 2, "JG  0x02");
    check(&[0x0F, 0x84, 0x10, 0x00, 0x00, 0x00], 6, "JZ  0x00000010");
    check(&[0x0F, 0x85, 0x10, 0x00, 0x00, 0x00], 6, "JNZ  0x00000010");
    check(&[0xE2, 0xFE], 2, "LOOP  0xfe");
    check(&[0xE3, 0x08], 2, "JECXZ  0x08");
    check(&[0xFF, 0xE0], 2, "JMP  rax");
    check(&[0xC2, 0x08, 0x00], 3, "RET  0x0008");
}

#[test]
fn wide_and_narrow_alu_forms() {
    check(&[0x66, 0x01, 0xC1], 3, "ADD  cx ax");
    check(&[0x66, 0x83, 0xC0, 0x01], 4, "ADD  ax 0x01");
    check(&[0x66, 0x05, 0x22, 0x11], 4, "ADD  ax 0x1122");
    check(&[0x00, 0xC1], 2, "ADD  cl al");
    check(&[0x02, 0xC1], 2, "ADD  al cl");
    check(&[0x30, 0xC0], 2, "XOR  al al");
}

#[test]
fn mov_between_register_and_memory() {
    check(&[0x88, 0x08], 2, "MOV  [rax] cl");
    check(&[0x89, 0x08], 2, "MOV  [rax] ecx");
    check(&[0x8A, 0x08], 2, "MOV  cl [rax]");
    check(&[0xC6, 0x00, 0x7F], 3, "MOV  [rax] 0x7f");
    check(
        &[0xC7, 0x00, 0x44, 0x33, 0x22, 0x11],
        6,
        "MOV  [rax] 0x11223344",
    );
    check(
        &[0x48, 0xC7, 0xC0, 0x44, 0x33, 0x22, 0x11],
        7,
        "MOV  rax 0x11223344",
    );
}

#[test]
fn moff_forms() {
    check(&[0xA0, 0x44, 0x33, 0x22, 0x11], 5, "MOV  al 0x11223344");
    check(&[0xA1, 0x44, 0x33, 0x22, 0x11], 5, "MOV  eax 0x11223344");
    check(&[0xA3, 0x44, 0x33, 0x22, 0x11], 5, "MOV  0x11223344 eax");
    check(
        &[0x48, 0xA1, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
        10,
        "MOV  rax 0x1122334455667788",
    );
}

#[test]
fn imul_forms() {
    check(&[0x0F, 0xAF, 0xC1], 3, "IMUL  eax ecx");
    check(&[0x48, 0x0F, 0xAF, 0xC1], 4, "IMUL  rax rcx");
    check(&[0x6B, 0xC1, 0x10], 3, "IMUL  eax ecx 0x10");
    check(
        &[0x69, 0xC1, 0x44, 0x33, 0x22, 0x11],
        6,
        "IMUL  eax ecx 0x11223344",
    );
}

#[test]
fn xchg_and_test_forms() {
    check(&[0x91], 1, "XCHG  ecx eax");
    check(&[0x66, 0x91], 2, "XCHG  cx ax");
    check(&[0x48, 0x91], 2, "XCHG  rcx rax");
    check(&[0x87, 0xC8], 2, "XCHG  eax ecx");
    check(&[0x85, 0xC0], 2, "TEST  eax eax");
    check(&[0x84, 0xC0], 2, "TEST  al al");
}

#[test]
fn string_family_forms() {
    check(&[0xA4], 1, "MOVSB");
    check(&[0xA5], 1, "MOVSD");
    check(&[0x66, 0xA5], 2, "MOVSW");
    check(&[0xAA], 1, "STOSB");
    check(&[0xAB], 1, "STOSD");
    check(&[0x66, 0xAB], 2, "STOSW");
    check(&[0xAC], 1, "LODSB");
    check(&[0xAE], 1, "SCASB");
    check(&[0xA6], 1, "CMPSB");
    check(&[0x6C], 1, "INSB");
    check(&[0x6E], 1, "OUTSB");
    check(&[0x66, 0x6D], 2, "INSW");
}

#[test]
fn misc_forms() {
    check(&[0x0F, 0x0B], 2, "UD2");
    check(&[0x0F, 0xA2], 2, "CPUID");
    check(&[0xC8, 0x20, 0x00, 0x01], 4, "ENTER  0x0020 0x01");
    check(&[0xCD, 0x21], 2, "INT21  0x21");
    check(&[0xE4, 0x60], 2, "IN  al 0x60");
    check(&[0xE6, 0x60], 2, "OUT  0x60 al");
    check(&[0x66, 0x98], 2, "CBW");
    check(&[0x66, 0x99], 2, "CWD");
}

#[test]
fn rep_and_lock_prefixes_decode_but_do_not_render() {
    check(&[0xF3, 0xA4], 2, "MOVSB");
    check(&[0xF2, 0xA6], 2, "CMPSB");
    check(&[0xF0, 0x01, 0x08], 3, "ADD  [rax] ecx");
}

#[test]
fn decoding_is_idempotent() {
    let disasm = X86_64Disassembler::new();
    let bytes = [0x48, 0x83, 0xC0, 0x01];
    let first = disasm.decode_instruction(&bytes, 0).unwrap();
    let second = disasm.decode_instruction(&bytes, 0).unwrap();
    assert_eq!(first.instruction, second.instruction);
    assert_eq!(first.size, second.size);
}

#[test]
fn decoder_never_reads_past_the_reported_length() {
    // Same instruction with and without trailing garbage.
    let disasm = X86_64Disassembler::new();
    let clean = disasm.decode_instruction(&[0x01, 0xC1], 0).unwrap();
    let padded = disasm
        .decode_instruction(&[0x01, 0xC1, 0xFF, 0xFF, 0xFF], 0)
        .unwrap();
    assert_eq!(clean.size, padded.size);
    assert_eq!(clean.instruction.text(), padded.instruction.text());
}
