// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use pvital_cli_common::CommandName;
use pvital_version::{FixedRuntime, HostRuntime, VersionInfo};
use rstest::rstest;

use super::{Command, Opt};

#[rstest]
fn test_opt_definition_is_valid() {
    Opt::command().debug_assert();
}

#[rstest]
#[case(&["pvital-pkg"], 0, false)]
#[case(&["pvital-pkg", "hello"], 0, true)]
#[case(&["pvital-pkg", "-v"], 1, false)]
#[case(&["pvital-pkg", "-vvv"], 3, false)]
#[case(&["pvital-pkg", "hello", "--verbose"], 1, true)]
fn test_opt_accepts(#[case] args: &[&str], #[case] verbose: u8, #[case] explicit: bool) {
    let opt = Opt::try_parse_from(args).expect("arguments should be accepted");
    assert_eq!(opt.verbose, verbose);
    assert_eq!(matches!(opt.cmd, Some(Command::Hello(_))), explicit);
    assert_eq!(opt.command_name(), "hello");
}

#[rstest]
#[case(&["pvital-pkg", "--bogus"], ErrorKind::UnknownArgument)]
#[case(&["pvital-pkg", "-x"], ErrorKind::UnknownArgument)]
#[case(&["pvital-pkg", "goodbye"], ErrorKind::InvalidSubcommand)]
#[case(&["pvital-pkg", "hello", "extra"], ErrorKind::UnknownArgument)]
fn test_opt_rejects(#[case] args: &[&str], #[case] kind: ErrorKind) {
    let err = Opt::try_parse_from(args).expect_err("arguments should be rejected");
    assert_eq!(err.kind(), kind);
    assert_ne!(err.exit_code(), 0);
}

#[rstest]
#[case(&["pvital-pkg", "--help"], ErrorKind::DisplayHelp)]
#[case(&["pvital-pkg", "-h"], ErrorKind::DisplayHelp)]
#[case(&["pvital-pkg", "--version"], ErrorKind::DisplayVersion)]
#[case(&["pvital-pkg", "-V"], ErrorKind::DisplayVersion)]
fn test_opt_informational_flags(#[case] args: &[&str], #[case] kind: ErrorKind) {
    let err = Opt::try_parse_from(args).expect_err("clap reports these as early exits");
    assert_eq!(err.kind(), kind);
    assert_eq!(err.exit_code(), 0);
}

#[rstest]
fn test_help_names_program_and_hides_hello() {
    let help = Opt::command().render_help().to_string();
    assert!(help.contains("pvital-pkg"), "{help}");
    assert!(!help.contains("hello"), "{help}");
}

#[rstest]
#[case(&["pvital-pkg"])]
#[case(&["pvital-pkg", "hello"])]
fn test_run_with_fixed_runtime(#[case] args: &[&str]) {
    let mut opt = Opt::try_parse_from(args).unwrap();
    let code = opt
        .run_with(FixedRuntime::new("Rust", VersionInfo::new(1, 2, 3)))
        .expect("greeting should be reported");
    assert_eq!(code, 0);
}

#[rstest]
fn test_run_with_unavailable_runtime() {
    let mut opt = Opt::try_parse_from(["pvital-pkg"]).unwrap();
    let result = opt.run_with(HostRuntime::with_rustc_output(None));
    assert!(result.is_err());
}
