// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use pvital_cli_common as cli;
use pvital_cli_main::bin_utils::Opt;

cli::main!(Opt);
