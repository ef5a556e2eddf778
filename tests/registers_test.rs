//! Register and flag access by name.

use emu6502::{FlagName, FlatMemory, ParseNameError, RegisterName, CPU};

#[test]
fn test_register_names_parse() {
    assert_eq!("a".parse::<RegisterName>(), Ok(RegisterName::A));
    assert_eq!("X".parse::<RegisterName>(), Ok(RegisterName::X));
    assert_eq!("sp".parse::<RegisterName>(), Ok(RegisterName::SP));
    assert_eq!("PC".parse::<RegisterName>(), Ok(RegisterName::PC));
    assert_eq!(
        "q".parse::<RegisterName>(),
        Err(ParseNameError::UnknownRegister("q".to_string()))
    );
}

#[test]
fn test_flag_names_parse() {
    assert_eq!("n".parse::<FlagName>(), Ok(FlagName::N));
    assert_eq!("C".parse::<FlagName>(), Ok(FlagName::C));
    assert!("carry".parse::<FlagName>().is_err());
}

#[test]
fn test_set_register_wraps_to_width() {
    let mut cpu = CPU::new(FlatMemory::new());

    cpu.set_register(RegisterName::A, 0x1FF);
    cpu.set_register(RegisterName::SP, 0x100);
    cpu.set_register(RegisterName::PC, 0xBEEF);

    assert_eq!(cpu.a(), 0xFF);
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.pc(), 0xBEEF);
    assert_eq!(cpu.register(RegisterName::A), 0xFF);
}

#[test]
fn test_flags_by_name_round_trip_through_status() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_status(0x00);

    cpu.set_flag(FlagName::N, true);
    cpu.set_flag(FlagName::B, true);
    cpu.set_flag(FlagName::I, true);
    cpu.set_flag(FlagName::C, true);

    assert_eq!(cpu.status(), 0b1001_0101);
    for flag in FlagName::ALL {
        let expected = matches!(flag, FlagName::N | FlagName::B | FlagName::I | FlagName::C);
        assert_eq!(cpu.flag(flag), expected, "flag {}", flag);
    }
}
