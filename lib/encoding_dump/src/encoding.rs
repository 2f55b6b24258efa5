// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {std::fmt, std::str::FromStr, thiserror::Error};

/// Error returned when an encoding name is not one of the five known forms.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unrecognized encoding {:?}; expected utf8, utf16be, utf16le, utf32be or utf32le", _0)]
pub struct UnknownEncoding(pub String);

/// A Unicode encoding form together with its byte order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Encoding {
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
}

impl Encoding {
    /// Every encoding, in the order full dump reports print them.
    pub const ALL: [Encoding; 5] = [
        Encoding::Utf8,
        Encoding::Utf16Be,
        Encoding::Utf16Le,
        Encoding::Utf32Be,
        Encoding::Utf32Le,
    ];

    /// The lowercase name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Utf16Be => "utf16be",
            Encoding::Utf16Le => "utf16le",
            Encoding::Utf32Be => "utf32be",
            Encoding::Utf32Le => "utf32le",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf32Be => "UTF-32BE",
            Encoding::Utf32Le => "UTF-32LE",
        };
        f.write_str(label)
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "utf8" => Ok(Encoding::Utf8),
            "utf16be" => Ok(Encoding::Utf16Be),
            "utf16le" => Ok(Encoding::Utf16Le),
            "utf32be" => Ok(Encoding::Utf32Be),
            "utf32le" => Ok(Encoding::Utf32Le),
            _ => Err(UnknownEncoding(input.to_string())),
        }
    }
}
