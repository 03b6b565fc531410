// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use miette::Diagnostic;
use thiserror::Error;

#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Version(#[from] pvital_version::Error),

    #[error("Failed to write the greeting to standard output")]
    #[diagnostic(code(pvital::output))]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
