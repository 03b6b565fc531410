// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

pub mod cmd_hello;
mod error;

pub use error::{Error, Result};
