// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing_subscriber::prelude::*;

#[cfg(test)]
#[path = "./args_test.rs"]
mod args_test;

/// The log filter directives for the given verbosity.
///
/// Only the command line decides what gets logged, so a quiet run
/// never writes to stderr.
pub fn log_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "pvital=info,warn",
        2 => "pvital=debug,info",
        3 => "pvital=trace,debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
pub fn configure_logging(verbosity: u8) -> Result<()> {
    let env_filter = tracing_subscriber::filter::EnvFilter::new(log_directives(verbosity));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(verbosity > 2);

    let sub = tracing_subscriber::registry().with(fmt_layer.with_filter(env_filter));
    tracing::subscriber::set_global_default(sub)
        .into_diagnostic()
        .wrap_err("Failed to set default logger")
}

/// Trait all pvital cli command parsers must implement to provide the
/// name of the command that has been parsed.
pub trait CommandName {
    fn command_name(&self) -> &str;
}

/// Trait all pvital cli commands must implement to be runnable.
pub trait Run {
    fn run(&mut self) -> Result<i32>;
}

#[macro_export]
macro_rules! main {
    ($cmd:ident) => {
        fn main() {
            // because this function exits right away it does not
            // properly handle destruction of data, so we put the actual
            // logic into a separate function/scope
            std::process::exit(main2())
        }
        fn main2() -> i32 {
            let mut opt = $cmd::parse();
            $crate::configure!(opt);

            let result = $crate::Run::run(&mut opt);

            $crate::handle_result!(result)
        }
    };
}

#[macro_export]
macro_rules! configure {
    ($opt:ident) => {{
        if let Err(err) = $crate::configure_logging($opt.verbose) {
            eprintln!("{err:?}");
            return 1;
        }
        $crate::__private::tracing::debug!(
            command = $crate::CommandName::command_name(&$opt),
            version = $crate::VERSION,
            "starting"
        );
    }};
}

#[macro_export]
macro_rules! handle_result {
    ($result:ident) => {{
        match $result {
            Err(err) => {
                $crate::__private::tracing::error!("{err:?}");
                1
            }
            Ok(code) => code,
        }
    }};
}
