// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use std::process::Command;

/// Name of the compile-time variable holding the `rustc --version` line.
const RUSTC_VERSION_VAR: &str = "PVITAL_RUSTC_VERSION";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    // cargo always provides RUSTC to build scripts, but fall back to
    // the PATH lookup when the script is driven by something else
    let rustc = std::env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());
    let output = match Command::new(&rustc).arg("--version").output() {
        Ok(output) => output,
        Err(err) => {
            println!(
                "cargo:warning=could not run {} --version: {err}",
                rustc.to_string_lossy()
            );
            return Ok(());
        }
    };

    if !output.status.success() {
        println!(
            "cargo:warning={} --version exited with {}",
            rustc.to_string_lossy(),
            output.status
        );
        return Ok(());
    }

    let line = String::from_utf8(output.stdout)?;
    println!("cargo:rustc-env={RUSTC_VERSION_VAR}={}", line.trim());
    Ok(())
}
