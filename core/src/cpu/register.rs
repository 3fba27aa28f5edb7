/// Named 8-bit registers, used by the monitor's `R` command and by
/// disassembly text. `M` refers to the byte at `memory[HL]` and is only
/// valid as a MOV/arithmetic operand, never as a monitor register target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

impl Reg8 {
    pub fn as_str(self) -> &'static str {
        match self {
            Reg8::A => "A",
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
        }
    }

    pub fn from_str(s: &str) -> Option<Reg8> {
        match s.to_ascii_uppercase().as_ref() {
            "A" => Some(Reg8::A),
            "B" => Some(Reg8::B),
            "C" => Some(Reg8::C),
            "D" => Some(Reg8::D),
            "E" => Some(Reg8::E),
            "H" => Some(Reg8::H),
            "L" => Some(Reg8::L),
            _ => None,
        }
    }
}

/// Named 16-bit registers and register pairs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
    PC,
    PSW,
}

impl Reg16 {
    pub fn as_str(self) -> &'static str {
        match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
            Reg16::PC => "PC",
            Reg16::PSW => "PSW",
        }
    }

    pub fn from_str(s: &str) -> Option<Reg16> {
        match s.to_ascii_uppercase().as_ref() {
            "BC" => Some(Reg16::BC),
            "DE" => Some(Reg16::DE),
            "HL" => Some(Reg16::HL),
            "SP" => Some(Reg16::SP),
            "PC" => Some(Reg16::PC),
            "PSW" => Some(Reg16::PSW),
            _ => None,
        }
    }
}
