#[cfg(test)]
#[path = "./flag_test.rs"]
mod flag_test;

/// The 8080's status flags, plus two flags this machine's firmware adds on
/// top of the documented set: K (set on 16-bit wrap in INX/DCX) and V
/// (carried through PUSH/POP PSW, never written by an opcode).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Flags {
    pub sign: bool,
    pub zero: bool,
    pub parity: bool,
    pub carry: bool,
    pub aux_carry: bool,
    pub k: bool,
    pub v: bool,
}

const FLAG_PF: u16 = 0x01;

static PARITY_LOOKUP: [u16; 256] = [
    FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF,
    0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0,
    0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0,
    FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF,
    0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0,
    FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF,
    FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF,
    0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0,
    0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0,
    FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF,
    FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF,
    0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0,
    FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF,
    0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0,
    0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0,
    FLAG_PF, 0, 0, FLAG_PF, 0, FLAG_PF, FLAG_PF, 0, 0, FLAG_PF, FLAG_PF, 0, FLAG_PF, 0, 0, FLAG_PF,
];

impl Flags {
    pub fn new() -> Self {
        Flags::default()
    }

    /// Rebuilds a `Flags` from a packed PSW low byte (the layout pushed by
    /// `PUSH PSW`): bit7=S, bit6=Z, bit5=K, bit4=AC, bit3=0, bit2=P, bit1=V, bit0=CY.
    pub fn from_psw_byte(b: u8) -> Self {
        Flags {
            sign: b & 0x80 != 0,
            zero: b & 0x40 != 0,
            k: b & 0x20 != 0,
            aux_carry: b & 0x10 != 0,
            parity: b & 0x04 != 0,
            v: b & 0x02 != 0,
            carry: b & 0x01 != 0,
        }
    }

    /// Packs the flags into the PSW low byte layout described in `from_psw_byte`.
    pub fn psw_byte(&self) -> u8 {
        let mut b = 0u8;
        if self.sign {
            b |= 0x80;
        }
        if self.zero {
            b |= 0x40;
        }
        if self.k {
            b |= 0x20;
        }
        if self.aux_carry {
            b |= 0x10;
        }
        if self.parity {
            b |= 0x04;
        }
        if self.v {
            b |= 0x02;
        }
        if self.carry {
            b |= 0x01;
        }
        b
    }

    /// Sets sign, zero and parity from an 8-bit ALU result. Every
    /// flag-affecting 8-bit opcode ends by calling this.
    pub fn set_szp_u8(&mut self, res: u8) {
        self.sign = res & 0x80 != 0;
        self.zero = res == 0;
        self.parity = PARITY_LOOKUP[res as usize] != 0;
    }

    /// Carry out of bit 7 for an 8-bit add. `sum` is the unbounded
    /// (not yet truncated) sum of the two operands plus any carry-in.
    pub fn set_carry_add_u8(&mut self, sum: u16) {
        self.carry = sum & 0x100 != 0;
    }

    /// Carry (borrow) for an 8-bit subtract. `diff` is the operands'
    /// signed difference before truncation.
    pub fn set_carry_sub_u8(&mut self, diff: i16) {
        self.carry = diff < 0;
    }

    /// Auxiliary carry out of bit 3 for an 8-bit add.
    pub fn set_aux_carry_add_u8(&mut self, a: u8, b: u8, carry_in: u8) {
        self.aux_carry = (a & 0x0F) + (b & 0x0F) + carry_in > 0x0F;
    }

    /// Auxiliary carry (borrow) out of bit 3 for an 8-bit subtract.
    pub fn set_aux_carry_sub_u8(&mut self, a: u8, b: u8, carry_in: u8) {
        self.aux_carry = (a & 0x0F) as i16 - (b & 0x0F) as i16 - (carry_in as i16) < 0;
    }

    /// 16-bit wrap indicator used by INX/DCX; not a documented 8080 flag.
    pub fn set_k(&mut self, wrapped: bool) {
        self.k = wrapped;
    }

    /// Carry out of bit 15, used by DAD.
    pub fn set_carry_u16(&mut self, sum: u32) {
        self.carry = sum & 0x1_0000 != 0;
    }
}
