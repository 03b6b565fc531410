// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand};
use miette::Result;
use pvital_cli_common::{CommandName, Run, VERSION};
use pvital_cmd_hello::cmd_hello::CmdHello;
use pvital_version::{HostRuntime, VersionSource};

#[cfg(test)]
#[path = "./bin_utils_test.rs"]
mod bin_utils_test;

/// Greet the world and report the version of the Rust runtime in use.
///
/// Running without any arguments prints the greeting on a single line.
#[derive(Debug, Parser)]
#[command(
    name = "pvital-pkg",
    version = VERSION,
    about,
    long_about,
    disable_help_subcommand = true
)]
pub struct Opt {
    /// Make output more verbose, can be specified more than once
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(hide = true)]
    Hello(CmdHello),
}

impl Opt {
    /// Run the parsed command against the given runtime source.
    pub fn run_with<S: VersionSource>(&mut self, source: S) -> Result<i32> {
        match &mut self.cmd {
            Some(Command::Hello(cmd)) => cmd.run(source),
            None => CmdHello::default().run(source),
        }
    }
}

impl Run for Opt {
    fn run(&mut self) -> Result<i32> {
        self.run_with(HostRuntime::new())
    }
}

impl CommandName for Opt {
    fn command_name(&self) -> &str {
        match &self.cmd {
            Some(Command::Hello(_)) | None => "hello",
        }
    }
}
