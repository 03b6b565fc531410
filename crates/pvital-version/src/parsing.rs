// Copyright (c) Contributors to the pvital-pkg project.
// SPDX-License-Identifier: Apache-2.0

use nom::IResult;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt, verify};
use nom::error::{ContextError, FromExternalError, ParseError, context};
use nom::sequence::{preceded, tuple};

use crate::VersionInfo;

/// Parse a single numeric version component.
///
/// Leading zeros are not allowed, so every component has exactly one
/// textual form.
fn number<'a, E>(input: &'a str) -> IResult<&'a str, u32, E>
where
    E: ParseError<&'a str> + FromExternalError<&'a str, std::num::ParseIntError>,
{
    map_res(
        verify(digit1, |n: &str| n == "0" || !n.starts_with('0')),
        |n: &str| n.parse::<u32>(),
    )(input)
}

/// Parse the text of a pre-release or build tag.
///
/// A tag is a non-empty run of ascii alphanumerics, `.` and `-`.
///
/// Examples:
/// - `"nightly"`
/// - `"beta.2"`
pub fn tag_text<'a, E>(input: &'a str) -> IResult<&'a str, &'a str, E>
where
    E: ParseError<&'a str>,
{
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '.' || c == '-')(input)
}

/// Parse a version string into a [`VersionInfo`].
///
/// A version is three dot-separated numbers followed by an optional
/// `-` pre-release tag and an optional `+` build tag.
///
/// Examples:
/// - `"1.90.0"`
/// - `"1.92.0-nightly"`
/// - `"1.80.1-beta.3+local"`
pub fn version_info<'a, E>(input: &'a str) -> IResult<&'a str, VersionInfo, E>
where
    E: ParseError<&'a str>
        + ContextError<&'a str>
        + FromExternalError<&'a str, std::num::ParseIntError>,
{
    map(
        tuple((
            context("major", number),
            context("minor", preceded(char('.'), number)),
            context("patch", preceded(char('.'), number)),
            context("pre-release tag", opt(preceded(char('-'), tag_text))),
            context("build tag", opt(preceded(char('+'), tag_text))),
        )),
        |(major, minor, patch, pre, build)| {
            let mut version = VersionInfo::new(major, minor, patch);
            if let Some(pre) = pre {
                version = version.with_pre(pre);
            }
            if let Some(build) = build {
                version = version.with_build(build);
            }
            version
        },
    )(input)
}
