// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::errors::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Formats a code point in standard `U+XXXX` notation.
///
/// Zero-padded to four digits, uppercase, no padding beyond four:
/// `to_std_hex(0x41)` is `"U+0041"`, `to_std_hex(0x1F993)` is `"U+1F993"`.
pub fn to_std_hex(cp: u32) -> String {
    format!("U+{:04X}", cp)
}

/// Parses standard `U+XXXX` notation (case-insensitive prefix) into a code
/// point.
///
/// Rejects input without the prefix, with non-hex digits, or above
/// [`MAX_CODEPOINT`].
pub fn parse_std_hex(input: &str) -> Result<u32, CatalogError> {
    let digits = input.strip_prefix("U+").or_else(|| input.strip_prefix("u+")).ok_or_else(|| {
        CatalogError::InvalidQuery { input: input.to_string(), reason: "expected a `U+` prefix" }
    })?;
    if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CatalogError::InvalidQuery {
            input: input.to_string(),
            reason: "expected 1 to 6 hex digits after `U+`",
        });
    }
    let cp = u32::from_str_radix(digits, 16).map_err(|_| CatalogError::InvalidQuery {
        input: input.to_string(),
        reason: "expected 1 to 6 hex digits after `U+`",
    })?;
    if cp > MAX_CODEPOINT {
        return Err(CatalogError::InvalidQuery {
            input: input.to_string(),
            reason: "code point above U+10FFFF",
        });
    }
    Ok(cp)
}

/// Parses one bare hex code point field from a UCD line.
pub(crate) fn parse_hex_scalar(token: &str) -> Result<u32, CatalogError> {
    let invalid = || CatalogError::InvalidHex { token: token.to_string() };
    if token.is_empty() || token.len() > 6 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let cp = u32::from_str_radix(token, 16).map_err(|_| invalid())?;
    if cp > MAX_CODEPOINT {
        return Err(invalid());
    }
    Ok(cp)
}

/// An inclusive range of code points, `begin..=end` with `begin <= end`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CodepointRange {
    begin: u32,
    end: u32,
}

impl CodepointRange {
    /// Creates an inclusive range.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end`. Use [`CodepointRange::from_str`] for
    /// untrusted input.
    pub const fn new(begin: u32, end: u32) -> Self {
        assert!(begin <= end);
        Self { begin, end }
    }

    pub fn begin(&self) -> u32 {
        self.begin
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of code points in the range.
    pub fn len(&self) -> u32 {
        self.end - self.begin + 1
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.begin <= cp && cp <= self.end
    }

    /// True if `other` lies entirely within `self`.
    ///
    /// Partial overlap does not count; assigned-count accounting relies on
    /// full containment.
    pub fn contains_range(&self, other: &CodepointRange) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", to_std_hex(self.begin), to_std_hex(self.end))
    }
}

impl FromStr for CodepointRange {
    type Err = CatalogError;

    /// Parses the UCD `XXXX..YYYY` range form (both sides hex).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidRange { token: s.to_string() };
        let (begin, end) = s.split_once("..").ok_or_else(invalid)?;
        let begin = parse_hex_scalar(begin.trim()).map_err(|_| invalid())?;
        let end = parse_hex_scalar(end.trim()).map_err(|_| invalid())?;
        if begin > end {
            return Err(invalid());
        }
        Ok(Self { begin, end })
    }
}
