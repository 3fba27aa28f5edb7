use super::Flags;

#[test]
fn can_pack_unpack_psw_byte() {
    let mut flags = Flags::new();
    flags.sign = true;
    flags.zero = true;
    flags.k = true;
    flags.aux_carry = true;
    flags.parity = true;
    flags.v = true;
    flags.carry = true;
    assert_eq!(0xF7, flags.psw_byte());

    let restored = Flags::from_psw_byte(0xF7);
    assert_eq!(flags, restored);
}

#[test]
fn psw_bit3_is_always_clear() {
    let flags = Flags::from_psw_byte(0xFF);
    assert_eq!(0xF7, flags.psw_byte());
}

#[test]
fn szp_detects_zero_and_parity() {
    let mut flags = Flags::new();
    flags.set_szp_u8(0x00);
    assert!(flags.zero);
    assert!(!flags.sign);
    assert!(flags.parity);

    flags.set_szp_u8(0x80);
    assert!(!flags.zero);
    assert!(flags.sign);
    assert!(!flags.parity);
}

#[test]
fn carry_detects_8bit_overflow() {
    let mut flags = Flags::new();
    flags.set_carry_add_u8(0xFF_u16 + 0x01_u16);
    assert!(flags.carry);

    flags.set_carry_add_u8(0x10_u16 + 0x01_u16);
    assert!(!flags.carry);
}

#[test]
fn aux_carry_detects_nibble_overflow() {
    let mut flags = Flags::new();
    flags.set_aux_carry_add_u8(0x0F, 0x01, 0);
    assert!(flags.aux_carry);

    flags.set_aux_carry_add_u8(0x01, 0x01, 0);
    assert!(!flags.aux_carry);
}

#[test]
fn aux_carry_detects_nibble_borrow() {
    let mut flags = Flags::new();
    flags.set_aux_carry_sub_u8(0x00, 0x01, 0);
    assert!(flags.aux_carry);

    flags.set_aux_carry_sub_u8(0x0F, 0x01, 0);
    assert!(!flags.aux_carry);
}
