// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use clap::Args;
use miette::Result;
use pvital_version::VersionSource;

use crate::Error;

#[cfg(test)]
#[path = "./cmd_hello_test.rs"]
mod cmd_hello_test;

/// Say hello and report the runtime in use
#[derive(Debug, Clone, Default, Args)]
pub struct CmdHello {}

impl CmdHello {
    pub fn run<S: VersionSource>(&mut self, source: S) -> Result<i32> {
        let greeter = Greeter::new(source);
        greeter.report(&mut std::io::stdout().lock())?;
        Ok(0)
    }
}

/// Builds the greeting line from a runtime version source.
#[derive(Debug)]
pub struct Greeter<S> {
    source: S,
}

impl<S: VersionSource> Greeter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The full greeting, without a trailing newline.
    pub fn greeting(&self) -> crate::Result<String> {
        let runtime = self.source.runtime()?;
        Ok(format!("Hello, World! You are using {runtime}!"))
    }

    /// Write the greeting as a single line.
    pub fn report<W: Write>(&self, out: &mut W) -> crate::Result<()> {
        let greeting = self.greeting()?;
        tracing::trace!(%greeting, "reporting runtime");
        writeln!(out, "{greeting}")
            .and_then(|_| out.flush())
            .map_err(Error::Output)
    }
}
