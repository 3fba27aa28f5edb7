#[macro_use]
extern crate criterion;

use criterion::Criterion;

use i8080_core::machine::Machine;

fn exec_tight_loop(c: &mut Criterion) {
    let mut m = Machine::new();
    let code: [u8; 6] = [
        0x21, 0xFF, 0xFF, // LXI H,0xffff
        0x2B,             // DCX H
        0xC3, 0x03, 0x00, // JMP 0x0003
    ];
    m.memory[0..code.len()].copy_from_slice(&code);

    c.bench_function("step through a tight JMP loop", |b| b.iter(|| m.step()));
}

fn load_several_kb_of_hex(c: &mut Criterion) {
    // Checksum is ignored by the loader, so a fixed placeholder is fine here.
    let mut text = String::new();
    for row in 0..256u16 {
        let addr = row * 16;
        let bytes: Vec<u8> = (0..16).map(|i| ((addr as u32 + i as u32) & 0xFF) as u8).collect();
        text.push_str(&format!(
            ":10{:04X}00{}00\n",
            addr,
            bytes.iter().map(|b| format!("{:02X}", b)).collect::<String>(),
        ));
    }
    text.push_str(":00000001FF\n");

    c.bench_function("load a several-KiB hex image", |b| {
        b.iter(|| {
            let mut m = Machine::new();
            m.load_hex_str(&text).unwrap();
        })
    });
}

criterion_group!(benches, exec_tight_loop, load_several_kb_of_hex);
criterion_main!(benches);
