//! # Instruction Set Properties
//!
//! Property tests over the full register and value ranges.

use ls8_core::Ls8Error;
use ls8_core::isa::Instruction::{Halt, LoadImmediate, Multiply, Pop, Print, Push};
use ls8_core::sim::loader::parse_program;
use proptest::prelude::*;

use crate::common::harness::TestContext;

proptest! {
    #[test]
    fn ldi_then_prn_prints_value(reg in 0u8..8, value in any::<u8>()) {
        let mut ctx = TestContext::new().load_program(&[
            LoadImmediate { reg, value },
            Print { reg },
            Halt,
        ]);
        ctx.run().unwrap();
        prop_assert_eq!(ctx.output(), format!("{value}\n"));
    }

    #[test]
    fn mul_wraps_modulo_256(a in any::<u8>(), b in any::<u8>()) {
        let mut ctx = TestContext::new().load_program(&[
            LoadImmediate { reg: 0, value: a },
            LoadImmediate { reg: 1, value: b },
            Multiply { reg_a: 0, reg_b: 1 },
            Halt,
        ]);
        ctx.run().unwrap();
        prop_assert_eq!(u32::from(ctx.reg(0)), (u32::from(a) * u32::from(b)) % 256);
    }

    #[test]
    fn push_pop_restores_value_and_sp(
        src in 0u8..7,
        dst in 0u8..7,
        value in any::<u8>(),
        sp in 9u8..=255,
    ) {
        prop_assume!(src != dst);
        let mut ctx = TestContext::new().load_program(&[
            LoadImmediate { reg: src, value },
            Push { reg: src },
            Pop { reg: dst },
            Halt,
        ]);
        ctx.cpu.regs.set_sp(sp);
        ctx.run().unwrap();
        prop_assert_eq!(ctx.reg(dst), value);
        prop_assert_eq!(ctx.cpu.sp(), sp);
    }

    #[test]
    fn halt_preserves_registers_and_memory(values in proptest::array::uniform7(any::<u8>())) {
        let mut program: Vec<_> = values
            .iter()
            .zip(0u8..)
            .map(|(&value, reg)| LoadImmediate { reg, value })
            .collect();
        program.push(Halt);
        let mut ctx = TestContext::new().load_program(&program);
        for _ in 0..values.len() {
            let _ = ctx.cpu.step(&mut ctx.out).unwrap();
        }
        let regs = ctx.cpu.regs.clone();
        let ram = ctx.cpu.ram.clone();
        ctx.run().unwrap();
        prop_assert_eq!(ctx.cpu.regs.clone(), regs);
        prop_assert_eq!(ctx.cpu.ram.clone(), ram);
        prop_assert!(ctx.output().is_empty());
    }

    #[test]
    fn unknown_opcode_stops_with_prior_output(reg in 0u8..8, value in any::<u8>(), opcode in any::<u8>()) {
        prop_assume!(!ls8_core::isa::decode::is_known(opcode));
        let mut ctx = TestContext::new().load_program(&[
            LoadImmediate { reg, value },
            Print { reg },
        ]);
        ctx.cpu.ram.write(5, opcode).unwrap();
        let is_unknown_at_5 = matches!(
            ctx.run(),
            Err(Ls8Error::UnknownOpcode { pc: 5, .. })
        );
        prop_assert!(is_unknown_at_5);
        prop_assert_eq!(ctx.output(), format!("{value}\n"));
    }

    #[test]
    fn comments_do_not_change_image(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let bare: String = bytes.iter().map(|b| format!("{b:08b}\n")).collect();
        let commented: String = bytes
            .iter()
            .enumerate()
            .map(|(i, b)| format!("# line {i}\n\n{b:08b} # byte {i}\n"))
            .collect();
        prop_assert_eq!(parse_program(&bare), bytes.clone());
        prop_assert_eq!(parse_program(&commented), bytes);
    }
}
