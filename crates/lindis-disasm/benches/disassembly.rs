//! Benchmarks for decode and sweep performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lindis_disasm::{Disassembler, X86_64Disassembler};

/// Sample x86-64 code: a small function with a realistic mix of moves,
/// arithmetic, memory operands and control flow.
const X86_64_CODE: &[u8] = &[
    0x55, // push rbp
    0x48, 0x89, 0xE5, // mov rbp, rsp
    0x48, 0x83, 0xE8, 0x20, // sub rax, 0x20
    0x48, 0x89, 0x45, 0xF8, // mov [rbp-8], rax
    0x48, 0x8B, 0x45, 0xF8, // mov rax, [rbp-8]
    0x48, 0x83, 0xC0, 0x01, // add rax, 1
    0x48, 0x39, 0xC8, // cmp rax, rcx
    0x7E, 0x07, // jle +7
    0xB8, 0x01, 0x00, 0x00, 0x00, // mov eax, 1
    0xEB, 0x05, // jmp +5
    0xB8, 0x00, 0x00, 0x00, 0x00, // mov eax, 0
    0x48, 0x83, 0xC0, 0x20, // add rax, 0x20
    0x5D, // pop rbp
    0xC3, // ret
];

/// Larger code block for throughput testing (repeated pattern).
fn generate_large_block(size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        let to_copy = remaining.min(X86_64_CODE.len());
        result.extend_from_slice(&X86_64_CODE[..to_copy]);
    }
    result
}

fn bench_x86_64_disassembly(c: &mut Criterion) {
    let disasm = X86_64Disassembler::new();

    let mut group = c.benchmark_group("x86_64_disassembly");

    group.bench_function("single_instruction", |b| {
        b.iter(|| {
            let _ = disasm.decode_instruction(black_box(&X86_64_CODE[1..4]), 0);
        })
    });

    group.bench_function("small_function", |b| {
        b.iter(|| {
            let _ = disasm.disassemble_block(black_box(X86_64_CODE), 0);
        })
    });

    for size in [1024, 4096, 16384, 65536] {
        let code = generate_large_block(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("throughput", size), &code, |b, code| {
            b.iter(|| {
                let _ = disasm.disassemble_block(black_box(code), 0);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_x86_64_disassembly);
criterion_main!(benches);
