// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use miette::Diagnostic;
use thiserror::Error;

/// Denotes that an invalid version number was given.
#[derive(Debug, Error)]
#[error("Invalid version: {message}")]
pub struct InvalidVersionError {
    pub message: String,
}

impl InvalidVersionError {
    pub fn new_error(msg: String) -> Error {
        Error::InvalidVersion(Self { message: msg })
    }
}

#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(code(pvital::invalid_version))]
    InvalidVersion(#[from] InvalidVersionError),

    #[error("The {0} runtime version was not recorded when this program was built")]
    #[diagnostic(
        code(pvital::runtime_unavailable),
        help("rebuild with a working `rustc` on the PATH, or with RUSTC set")
    )]
    RuntimeUnavailable(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
