use super::Reg8;

/// An 8-bit opcode operand: either a register or `memory[HL]`. The 8080
/// encodes both the same way (the "M" slot, code 6) so every group that
/// reads or writes a register byte shares this decode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand8 {
    Reg(Reg8),
    Mem,
}

pub fn decode_r8(code: u8) -> Operand8 {
    match code & 0x07 {
        0 => Operand8::Reg(Reg8::B),
        1 => Operand8::Reg(Reg8::C),
        2 => Operand8::Reg(Reg8::D),
        3 => Operand8::Reg(Reg8::E),
        4 => Operand8::Reg(Reg8::H),
        5 => Operand8::Reg(Reg8::L),
        6 => Operand8::Mem,
        7 => Operand8::Reg(Reg8::A),
        _ => unreachable!(),
    }
}

/// A 16-bit register pair as encoded in LXI/DAD/INX/DCX/STAX/LDAX (2-bit
/// field, SP in slot 3). PUSH/POP use the same 2-bit field but with PSW
/// in slot 3 instead of SP; that substitution is handled at the call site
/// since it only ever applies to those four opcodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegPair {
    BC,
    DE,
    HL,
    SP,
}

pub fn decode_rp(code: u8) -> RegPair {
    match code & 0x03 {
        0 => RegPair::BC,
        1 => RegPair::DE,
        2 => RegPair::HL,
        3 => RegPair::SP,
        _ => unreachable!(),
    }
}
