// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {crate::encoding::Encoding, std::fmt};

/// Hex dump of `text` in `encoding`: one lowercase hex group per code unit,
/// groups separated by spaces.
///
/// UTF-8 code units are bytes, UTF-16 units are four hex digits in the
/// requested byte order, UTF-32 units are eight.
pub fn hex_units(text: &str, encoding: Encoding) -> String {
    let groups: Vec<String> = match encoding {
        Encoding::Utf8 => text.bytes().map(|byte| format!("{:02x}", byte)).collect(),
        Encoding::Utf16Be => text.encode_utf16().map(|unit| format!("{:04x}", unit)).collect(),
        Encoding::Utf16Le => {
            text.encode_utf16().map(|unit| format!("{:04x}", unit.swap_bytes())).collect()
        }
        Encoding::Utf32Be => text.chars().map(|c| format!("{:08x}", c as u32)).collect(),
        Encoding::Utf32Le => {
            text.chars().map(|c| format!("{:08x}", (c as u32).swap_bytes())).collect()
        }
    };
    groups.join(" ")
}

/// Hex dumps of one text in every encoding, computed eagerly.
///
/// `Display` renders the five `LABEL: dump` report lines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hexdump {
    utf8: String,
    utf16be: String,
    utf16le: String,
    utf32be: String,
    utf32le: String,
}

impl Hexdump {
    pub fn new(text: &str) -> Self {
        Self {
            utf8: hex_units(text, Encoding::Utf8),
            utf16be: hex_units(text, Encoding::Utf16Be),
            utf16le: hex_units(text, Encoding::Utf16Le),
            utf32be: hex_units(text, Encoding::Utf32Be),
            utf32le: hex_units(text, Encoding::Utf32Le),
        }
    }

    /// The dump in one encoding.
    pub fn encoded(&self, encoding: Encoding) -> &str {
        match encoding {
            Encoding::Utf8 => &self.utf8,
            Encoding::Utf16Be => &self.utf16be,
            Encoding::Utf16Le => &self.utf16le,
            Encoding::Utf32Be => &self.utf32be,
            Encoding::Utf32Le => &self.utf32le,
        }
    }
}

impl fmt::Display for Hexdump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, encoding) in Encoding::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", encoding, self.encoded(*encoding))?;
        }
        Ok(())
    }
}
