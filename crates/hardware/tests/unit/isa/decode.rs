//! # Instruction Decode Tests
//!
//! Verifies that `decode()` maps every opcode to the right `Instruction`,
//! fetches the right number of operand bytes, and rejects everything else.

use ls8_core::Ls8Error;
use ls8_core::isa::decode::{decode, is_known};
use ls8_core::isa::instruction::{Instruction, InstructionBits};
use ls8_core::isa::opcodes;
use ls8_core::soc::Memory;
use rstest::rstest;

fn mem_with(bytes: &[u8]) -> Memory {
    let mut mem = Memory::new();
    mem.load(bytes).unwrap();
    mem
}

#[rstest]
#[case(&[opcodes::HLT], Instruction::Halt)]
#[case(&[opcodes::LDI, 3, 200], Instruction::LoadImmediate { reg: 3, value: 200 })]
#[case(&[opcodes::PRN, 6], Instruction::Print { reg: 6 })]
#[case(&[opcodes::MUL, 1, 2], Instruction::Multiply { reg_a: 1, reg_b: 2 })]
#[case(&[opcodes::PUSH, 4], Instruction::Push { reg: 4 })]
#[case(&[opcodes::POP, 5], Instruction::Pop { reg: 5 })]
fn test_decode_each_opcode(#[case] bytes: &[u8], #[case] want: Instruction) {
    let inst = decode(&mem_with(bytes), 0).unwrap();
    assert_eq!(inst, want);
    assert_eq!(inst.width(), bytes.len());
    assert_eq!(inst.encode(), bytes);
}

#[test]
fn test_decode_at_nonzero_pc() {
    let mem = mem_with(&[0, 0, opcodes::PRN, 2]);
    assert_eq!(decode(&mem, 2).unwrap(), Instruction::Print { reg: 2 });
}

#[rstest]
#[case(0b0000_0000)]
#[case(0b1111_1111)]
#[case(0b0101_0000)]
#[case(0b1010_0000)]
fn test_decode_unknown_opcode(#[case] opcode: u8) {
    let mem = mem_with(&[0, opcode]);
    assert!(!is_known(opcode));
    match decode(&mem, 1) {
        Err(Ls8Error::UnknownOpcode { opcode: got, pc }) => {
            assert_eq!(got, opcode);
            assert_eq!(pc, 1);
        }
        other => panic!("expected UnknownOpcode, got {other:?}"),
    }
}

#[test]
fn test_decode_pc_out_of_range() {
    let mem = Memory::new();
    assert!(matches!(
        decode(&mem, 256),
        Err(Ls8Error::AddressOutOfRange { addr: 256 })
    ));
}

#[test]
fn test_decode_truncated_operand() {
    let mut mem = Memory::new();
    mem.write(0xFE, opcodes::MUL).unwrap();
    mem.write(0xFF, 1).unwrap();
    assert!(matches!(
        decode(&mem, 0xFE),
        Err(Ls8Error::AddressOutOfRange { addr: 0x100 })
    ));
}

#[test]
fn test_opcode_bits_operand_count() {
    assert_eq!(opcodes::HLT.operand_count(), 0);
    assert_eq!(opcodes::PRN.operand_count(), 1);
    assert_eq!(opcodes::PUSH.operand_count(), 1);
    assert_eq!(opcodes::POP.operand_count(), 1);
    assert_eq!(opcodes::LDI.operand_count(), 2);
    assert_eq!(opcodes::MUL.operand_count(), 2);
}

#[test]
fn test_opcode_bits_flags() {
    assert!(opcodes::MUL.is_alu());
    assert!(!opcodes::LDI.is_alu());
    for op in [
        opcodes::HLT,
        opcodes::LDI,
        opcodes::PRN,
        opcodes::MUL,
        opcodes::PUSH,
        opcodes::POP,
    ] {
        assert!(!op.sets_pc());
        assert!(is_known(op));
    }
    assert_eq!(opcodes::MUL.identifier(), 0b0010);
    assert_eq!(opcodes::PRN.identifier(), 0b0111);
}
