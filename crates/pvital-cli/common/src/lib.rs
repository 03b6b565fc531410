// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

//! Common macros and argument structures for the pvital command line

mod args;

pub use args::{CommandName, Run, configure_logging, log_directives};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
