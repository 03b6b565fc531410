// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use crate::{Error, Result, VersionInfo};

#[cfg(test)]
#[path = "./source_test.rs"]
mod source_test;

/// Display name of the runtime that executes this program.
pub const RUST_RUNTIME_NAME: &str = "Rust";

/// A named language runtime and its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    pub name: String,
    pub version: VersionInfo,
}

impl Runtime {
    pub fn new<S: Into<String>>(name: S, version: VersionInfo) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Something that can report which runtime is executing this program.
pub trait VersionSource {
    fn runtime(&self) -> Result<Runtime>;
}

impl<T> VersionSource for &T
where
    T: VersionSource + ?Sized,
{
    fn runtime(&self) -> Result<Runtime> {
        (**self).runtime()
    }
}

/// The runtime of the running process.
///
/// The compiler version is recorded by the build script, so this
/// reports the toolchain that produced the current executable.
#[derive(Debug, Clone, Copy)]
pub struct HostRuntime {
    rustc_output: Option<&'static str>,
}

impl Default for HostRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRuntime {
    pub fn new() -> Self {
        Self::with_rustc_output(option_env!("PVITAL_RUSTC_VERSION"))
    }

    /// Use the given `rustc --version` line instead of the recorded one.
    pub fn with_rustc_output(rustc_output: Option<&'static str>) -> Self {
        Self { rustc_output }
    }
}

impl VersionSource for HostRuntime {
    fn runtime(&self) -> Result<Runtime> {
        let Some(output) = self.rustc_output else {
            return Err(Error::RuntimeUnavailable(RUST_RUNTIME_NAME));
        };
        let version = VersionInfo::from_rustc_output(output)?;
        tracing::debug!(%version, rustc = output, "queried host runtime");
        Ok(Runtime::new(RUST_RUNTIME_NAME, version))
    }
}

/// A source that always reports the same runtime.
#[derive(Debug, Clone)]
pub struct FixedRuntime(Runtime);

impl FixedRuntime {
    pub fn new<S: Into<String>>(name: S, version: VersionInfo) -> Self {
        Self(Runtime::new(name, version))
    }
}

impl VersionSource for FixedRuntime {
    fn runtime(&self) -> Result<Runtime> {
        Ok(self.0.clone())
    }
}
