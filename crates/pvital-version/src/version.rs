// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;
use std::str::FromStr;

use nom::combinator::all_consuming;

use crate::{InvalidVersionError, Result};

#[cfg(test)]
#[path = "./version_test.rs"]
mod version_test;

/// The version of a language runtime.
///
/// Holds the major, minor and patch numbers along with the optional
/// pre-release and build tags. Values are immutable once built.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct VersionInfo {
    major: u32,
    minor: u32,
    patch: u32,
    pre: Option<String>,
    build: Option<String>,
}

impl VersionInfo {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
            build: None,
        }
    }

    /// Replace the pre-release tag of this version.
    pub fn with_pre<S: Into<String>>(mut self, pre: S) -> Self {
        self.pre = Some(pre.into());
        self
    }

    /// Replace the build tag of this version.
    pub fn with_build<S: Into<String>>(mut self, build: S) -> Self {
        self.build = Some(build.into());
        self
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// The `MAJOR.MINOR.PATCH` portion of this version, without tags.
    pub fn base(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Extract the version from the output of `rustc --version`.
    ///
    /// The line looks like `rustc 1.90.0 (1159e78c4 2025-09-14)`, and
    /// the second word is the version itself.
    pub fn from_rustc_output<S: AsRef<str>>(output: S) -> Result<Self> {
        let output = output.as_ref().trim();
        let mut words = output.split_whitespace();
        match (words.next(), words.next()) {
            (Some("rustc"), Some(version)) => parse_version(version),
            _ => Err(InvalidVersionError::new_error(format!(
                "expected the output of 'rustc --version', got '{output}'"
            ))),
        }
    }
}

impl FromStr for VersionInfo {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.base())?;
        if let Some(pre) = &self.pre {
            f.write_char('-')?;
            f.write_str(pre)?;
        }
        if let Some(build) = &self.build {
            f.write_char('+')?;
            f.write_str(build)?;
        }
        Ok(())
    }
}

/// Parse a string as a version specifier.
pub fn parse_version<S: AsRef<str>>(version: S) -> Result<VersionInfo> {
    let version = version.as_ref();
    all_consuming(crate::parsing::version_info::<nom::error::VerboseError<&str>>)(version)
        .map(|(_, v)| v)
        .map_err(|err| {
            let reason = match err {
                nom::Err::Error(e) | nom::Err::Failure(e) => {
                    match e.errors.iter().find_map(|(_, kind)| match kind {
                        nom::error::VerboseErrorKind::Context(ctx) => Some(*ctx),
                        _ => None,
                    }) {
                        Some(ctx) => format!("bad {ctx}"),
                        None => "unexpected trailing characters".to_string(),
                    }
                }
                nom::Err::Incomplete(_) => "incomplete input".to_string(),
            };
            InvalidVersionError::new_error(format!(
                "expected MAJOR.MINOR.PATCH[-PRE][+BUILD], {reason} in '{version}'"
            ))
        })
}
