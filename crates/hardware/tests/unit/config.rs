//! # Configuration Tests
//!
//! Defaults and JSON deserialization of `Config`.

use std::io::Write;

use ls8_core::common::STACK_TOP;
use ls8_core::config::{Config, CpuConfig, GeneralConfig};
use ls8_core::{Cpu, Ls8Error};
use pretty_assertions::assert_eq;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.cpu.stack_pointer_init, STACK_TOP);
    assert!(!config.cpu.halt_resets_pc);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "cpu": { "halt_resets_pc": true } }"#).unwrap();
    assert_eq!(
        config.cpu,
        CpuConfig {
            stack_pointer_init: STACK_TOP,
            halt_resets_pc: true,
        }
    );
    assert_eq!(config.general, GeneralConfig::default());
}

#[test]
fn test_json_deserialization_with_tracing() {
    let config = Config::from_json(r#"{ "general": { "trace_instructions": true } }"#).unwrap();
    assert!(config.general.trace_instructions);
    assert!(Cpu::new(&config).trace);
}

#[test]
fn test_stack_pointer_init_applies_to_cpu() {
    let config = Config::from_json(r#"{ "cpu": { "stack_pointer_init": 128 } }"#).unwrap();
    let cpu = Cpu::new(&config);
    assert_eq!(cpu.sp(), 128);
    assert_eq!(cpu.regs.read(7).unwrap(), 128);
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = Config::from_json(r#"{ "cpu": { "stack_top": 1 } }"#).unwrap_err();
    assert!(matches!(err, Ls8Error::Config(_)));
}

#[test]
fn test_out_of_range_stack_pointer_is_rejected() {
    assert!(Config::from_json(r#"{ "cpu": { "stack_pointer_init": 256 } }"#).is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "cpu": { "stack_pointer_init": 0, "halt_resets_pc": true } }"#)
        .unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.cpu.stack_pointer_init, 0);
    assert!(config.cpu.halt_resets_pc);
}

#[test]
fn test_from_missing_file() {
    assert!(matches!(
        Config::from_file("/nonexistent/ls8-config.json"),
        Err(Ls8Error::Io { .. })
    ));
}
