use super::{Cpu, Reg16, Reg8};

#[test]
fn register_pairs_are_big_endian() {
    let mut cpu = Cpu::new();
    cpu.set_r8(Reg8::B, 0x12);
    cpu.set_r8(Reg8::C, 0x34);
    assert_eq!(0x1234, cpu.bc());
}

#[test]
fn psw_round_trips_a_and_flags() {
    let mut cpu = Cpu::new();
    cpu.a = 0x5A;
    cpu.flags.carry = true;
    cpu.flags.zero = true;

    let psw = cpu.get_r16(Reg16::PSW);
    let mut restored = Cpu::new();
    restored.set_r16(Reg16::PSW, psw);

    assert_eq!(cpu.a, restored.a);
    assert_eq!(cpu.flags, restored.flags);
}

#[test]
fn reset_clears_all_state() {
    let mut cpu = Cpu::new();
    cpu.a = 0xFF;
    cpu.pc = 0x1234;
    cpu.halted = true;
    cpu.reset();
    assert_eq!(Cpu::new(), cpu);
}
