use crate::cpu::{decode_r8, decode_rp, Operand8, RegPair};

fn r8_name(op: Operand8) -> &'static str {
    match op {
        Operand8::Reg(r) => r.as_str(),
        Operand8::Mem => "M",
    }
}

fn rp_name(rp: RegPair) -> &'static str {
    match rp {
        RegPair::BC => "B",
        RegPair::DE => "D",
        RegPair::HL => "H",
        RegPair::SP => "SP",
    }
}

const ALU_MNEMONIC: [&str; 8] = ["ADD", "ADC", "SUB", "SBB", "ANA", "XRA", "ORA", "CMP"];
const ALU_IMM_MNEMONIC: [&str; 8] = ["ADI", "ACI", "SUI", "SBI", "ANI", "XRI", "ORI", "CPI"];
const CC_NAME: [&str; 8] = ["NZ", "Z", "NC", "C", "PO", "PE", "P", "M"];

/// Renders a single instruction at `addr` as text, and returns the
/// address of the instruction that follows it. Used by the monitor's
/// single-step and trace output; the engine itself never calls this.
pub fn disasm_at(memory: &[u8; 0x10000], addr: u16) -> (String, u16) {
    let op = memory[addr as usize];
    let b1 = memory[addr.wrapping_add(1) as usize];
    let b2 = memory[addr.wrapping_add(2) as usize];
    let imm16 = u16::from_le_bytes([b1, b2]);

    let (text, len): (String, u16) = match op {
        0x00 => ("NOP".into(), 1),
        0x07 => ("RLC".into(), 1),
        0x0F => ("RRC".into(), 1),
        0x10 => ("ARHL".into(), 1),
        0x17 => ("RAL".into(), 1),
        0x1F => ("RAR".into(), 1),
        0x22 => (format!("SHLD {:04X}", imm16), 3),
        0x27 => ("DAA".into(), 1),
        0x2A => (format!("LHLD {:04X}", imm16), 3),
        0x2F => ("CMA".into(), 1),
        0x32 => (format!("STA {:04X}", imm16), 3),
        0x37 => ("STC".into(), 1),
        0x3A => (format!("LDA {:04X}", imm16), 3),
        0x3F => ("CMC".into(), 1),
        0x76 => ("HLT".into(), 1),
        0xC3 => (format!("JMP {:04X}", imm16), 3),
        0xC9 => ("RET".into(), 1),
        0xCD => (format!("CALL {:04X}", imm16), 3),
        0xD3 => (format!("OUT {:02X}", b1), 2),
        0xDB => (format!("IN {:02X}", b1), 2),
        0xE3 => ("XTHL".into(), 1),
        0xE9 => ("PCHL".into(), 1),
        0xEB => ("XCHG".into(), 1),
        0xF3 => ("DI".into(), 1),
        0xF9 => ("SPHL".into(), 1),
        0xFB => ("EI".into(), 1),
        0x02 => ("STAX B".into(), 1),
        0x12 => ("STAX D".into(), 1),
        0x0A => ("LDAX B".into(), 1),
        0x1A => ("LDAX D".into(), 1),
        _ if op & 0xCF == 0x01 => (format!("LXI {},{:04X}", rp_name(decode_rp(op >> 4)), imm16), 3),
        _ if op & 0xCF == 0x03 => (format!("INX {}", rp_name(decode_rp(op >> 4))), 1),
        _ if op & 0xC7 == 0x04 => (format!("INR {}", r8_name(decode_r8(op >> 3))), 1),
        _ if op & 0xC7 == 0x05 => (format!("DCR {}", r8_name(decode_r8(op >> 3))), 1),
        _ if op & 0xC7 == 0x06 => (format!("MVI {},{:02X}", r8_name(decode_r8(op >> 3)), b1), 2),
        _ if op & 0xCF == 0x09 => (format!("DAD {}", rp_name(decode_rp(op >> 4))), 1),
        _ if op & 0xCF == 0x0B => (format!("DCX {}", rp_name(decode_rp(op >> 4))), 1),
        _ if op >= 0x40 && op <= 0x7F => (
            format!("MOV {},{}", r8_name(decode_r8(op >> 3)), r8_name(decode_r8(op))),
            1,
        ),
        _ if op >= 0x80 && op <= 0xBF => {
            (format!("{} {}", ALU_MNEMONIC[((op >> 3) & 7) as usize], r8_name(decode_r8(op))), 1)
        }
        _ if op & 0xC7 == 0xC0 => (format!("RET {}", CC_NAME[((op >> 3) & 7) as usize]), 1),
        _ if op & 0xCF == 0xC1 => (format!("POP {}", push_pop_name(op)), 1),
        _ if op & 0xC7 == 0xC2 => (format!("JMP {} {:04X}", CC_NAME[((op >> 3) & 7) as usize], imm16), 3),
        _ if op & 0xC7 == 0xC4 => (format!("CALL {} {:04X}", CC_NAME[((op >> 3) & 7) as usize], imm16), 3),
        _ if op & 0xCF == 0xC5 => (format!("PUSH {}", push_pop_name(op)), 1),
        _ if op & 0xC7 == 0xC6 => (format!("{} {:02X}", ALU_IMM_MNEMONIC[((op >> 3) & 7) as usize], b1), 2),
        _ if op & 0xC7 == 0xC7 => (format!("RST {}", (op >> 3) & 7), 1),
        _ => (format!("DB {:02X}", op), 1),
    };

    (text, addr.wrapping_add(len))
}

fn push_pop_name(op: u8) -> &'static str {
    match (op >> 4) & 3 {
        0 => "B",
        1 => "D",
        2 => "H",
        3 => "PSW",
        _ => unreachable!(),
    }
}

#[cfg(test)]
#[path = "./disasm_test.rs"]
mod disasm_test;
