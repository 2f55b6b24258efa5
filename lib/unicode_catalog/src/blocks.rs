// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::codepoint::{parse_std_hex, CodepointRange};
use crate::errors::CatalogError;
use crate::ucd::{BlockEntry, RangeTable};
use std::str::FromStr;
use unicase::UniCase;

/// A Unicode block, optionally enriched with its assigned-character count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub range: CodepointRange,
    pub name: String,
    /// Assigned code points per `DerivedName.txt`; `None` unless the
    /// lookup asked for counts.
    pub char_count: Option<u32>,
}

impl Block {
    /// Capacity of the block, assigned or not.
    pub fn range_size(&self) -> u32 {
        self.range.len()
    }
}

/// A block lookup query, already disambiguated.
///
/// [`BlockQuery::from_str`] applies the CLI-boundary reading of a raw
/// string; library callers can construct variants directly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BlockQuery {
    /// A code point, as given by a decimal integer.
    Codepoint(u32),
    /// A single character.
    Char(char),
    /// A code point, as given in `U+XXXX` notation.
    StdHex(u32),
    /// A block name, matched case-insensitively.
    Name(String),
}

impl BlockQuery {
    fn codepoint(&self) -> Option<u32> {
        match self {
            BlockQuery::Codepoint(cp) | BlockQuery::StdHex(cp) => Some(*cp),
            BlockQuery::Char(c) => Some(*c as u32),
            BlockQuery::Name(_) => None,
        }
    }

    fn matches(&self, entry: &BlockEntry) -> bool {
        match self {
            BlockQuery::Name(name) => {
                UniCase::new(name.as_str()) == UniCase::new(entry.name.as_str())
            }
            _ => {
                // codepoint() is Some for every non-name variant.
                self.codepoint().map_or(false, |cp| entry.range.contains(cp))
            }
        }
    }
}

impl FromStr for BlockQuery {
    type Err = CatalogError;

    /// Reads a raw query string, trying in order: all-decimal-digits code
    /// point, single character, `U+` notation, block name.
    ///
    /// The order matters: `"7"` is the code point 7, not the character
    /// `'7'`, and `"u"` is a character, not a truncated `U+` prefix. A
    /// string of several characters that is not `U+` notation is a name
    /// query, including multi-code-point graphemes such as flag emoji,
    /// which therefore find no block.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let cp = s.parse::<u32>().map_err(|_| CatalogError::InvalidQuery {
                input: s.to_string(),
                reason: "decimal code point too large",
            })?;
            return Ok(BlockQuery::Codepoint(cp));
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(BlockQuery::Char(c));
        }
        if s.starts_with("U+") || s.starts_with("u+") {
            return Ok(BlockQuery::StdHex(parse_std_hex(s)?));
        }
        Ok(BlockQuery::Name(s.to_string()))
    }
}

/// Block lookups over a [`RangeTable`] snapshot.
pub struct BlockIndex {
    table: RangeTable,
}

impl BlockIndex {
    /// Index over the snapshot shipped with this crate.
    pub fn new() -> Self {
        Self { table: RangeTable::new() }
    }

    /// Index over the given snapshot reader.
    pub fn with_table(table: RangeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RangeTable {
        &self.table
    }

    /// All blocks in file order.
    ///
    /// With `with_count`, each block costs one extra `DerivedName.txt`
    /// scan; over a full block list that is hundreds of scans.
    pub fn list(&self, with_count: bool) -> Result<Vec<Block>, CatalogError> {
        let mut blocks = Vec::new();
        for entry in self.table.entries()? {
            blocks.push(self.enrich(entry?, with_count)?);
        }
        Ok(blocks)
    }

    /// The first block in file order matching `query`, or `Ok(None)` when
    /// nothing matches.
    pub fn find(
        &self,
        query: &BlockQuery,
        with_count: bool,
    ) -> Result<Option<Block>, CatalogError> {
        for entry in self.table.entries()? {
            let entry = entry?;
            if query.matches(&entry) {
                return Ok(Some(self.enrich(entry, with_count)?));
            }
        }
        Ok(None)
    }

    fn enrich(&self, entry: BlockEntry, with_count: bool) -> Result<Block, CatalogError> {
        let char_count =
            if with_count { Some(self.table.count_assigned(&entry.range)?) } else { None };
        Ok(Block { range: entry.range, name: entry.name, char_count })
    }
}
