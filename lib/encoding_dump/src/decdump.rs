// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {crate::encoding::Encoding, std::fmt};

/// Decimal dump of `text` in `encoding`: every byte as a three-digit value,
/// bytes packed per code unit in `|...|` groups.
///
/// UTF-8 code units are single bytes and stay ungrouped.
pub fn dec_units(text: &str, encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => {
            text.bytes().map(|byte| format!("{:03}", byte)).collect::<Vec<_>>().join(" ")
        }
        Encoding::Utf16Be => units16(text, u16::to_be_bytes),
        Encoding::Utf16Le => units16(text, u16::to_le_bytes),
        Encoding::Utf32Be => units32(text, u32::to_be_bytes),
        Encoding::Utf32Le => units32(text, u32::to_le_bytes),
    }
}

fn units16(text: &str, to_bytes: fn(u16) -> [u8; 2]) -> String {
    text.encode_utf16()
        .map(|unit| {
            let [hi, lo] = to_bytes(unit);
            format!("|{:03} {:03}|", hi, lo)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn units32(text: &str, to_bytes: fn(u32) -> [u8; 4]) -> String {
    text.chars()
        .map(|scalar| {
            let [a, b, c, d] = to_bytes(scalar as u32);
            format!("|{:03} {:03} {:03} {:03}|", a, b, c, d)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decimal dumps of one text in every encoding, computed eagerly.
///
/// `Display` renders the five `LABEL: dump` report lines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Decdump {
    utf8: String,
    utf16be: String,
    utf16le: String,
    utf32be: String,
    utf32le: String,
}

impl Decdump {
    pub fn new(text: &str) -> Self {
        Self {
            utf8: dec_units(text, Encoding::Utf8),
            utf16be: dec_units(text, Encoding::Utf16Be),
            utf16le: dec_units(text, Encoding::Utf16Le),
            utf32be: dec_units(text, Encoding::Utf32Be),
            utf32le: dec_units(text, Encoding::Utf32Le),
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

impl fmt::Display for Decdump {
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
