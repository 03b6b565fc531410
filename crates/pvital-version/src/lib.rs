// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

//! Runtime version information and the sources it is queried from.

mod error;
pub mod parsing;
mod source;
mod version;

pub use error::{Error, InvalidVersionError, Result};
pub use source::{FixedRuntime, HostRuntime, RUST_RUNTIME_NAME, Runtime, VersionSource};
pub use version::{VersionInfo, parse_version};
