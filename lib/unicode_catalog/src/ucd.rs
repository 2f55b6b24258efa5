// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::codepoint::{parse_hex_scalar, CodepointRange};
use crate::errors::CatalogError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Default `Blocks.txt` snapshot shipped with this crate.
pub const UCD_BLOCKS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/Blocks.txt");

/// Default `DerivedName.txt` snapshot shipped with this crate.
pub const UCD_DERIVED_NAME: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/DerivedName.txt");

lazy_static! {
    // UCD headers look like `# Blocks-16.0.0.txt`.
    static ref VERSION_RE: Regex = Regex::new(r"-(\d+\.\d+\.\d+)\.txt").unwrap();
}

/// One data line of `Blocks.txt`: an inclusive code point range and the
/// block name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockEntry {
    pub range: CodepointRange,
    pub name: String,
}

/// Streaming reader over the local UCD snapshot files.
///
/// Holds only the snapshot paths. Construction performs no I/O and nothing
/// is cached: every operation re-opens the file it reads, so swapping the
/// snapshot on disk takes effect on the next call.
#[derive(Clone, Debug)]
pub struct RangeTable {
    blocks: PathBuf,
    derived_name: PathBuf,
}

impl RangeTable {
    /// Reader over the snapshot shipped in this crate's `data/` directory.
    pub fn new() -> Self {
        Self::with_paths(UCD_BLOCKS, UCD_DERIVED_NAME)
    }

    /// Reader over an arbitrary snapshot on disk.
    pub fn with_paths(blocks: impl Into<PathBuf>, derived_name: impl Into<PathBuf>) -> Self {
        Self { blocks: blocks.into(), derived_name: derived_name.into() }
    }

    /// Path of the `Blocks.txt` snapshot this reader opens.
    pub fn blocks_path(&self) -> &Path {
        &self.blocks
    }

    /// The snapshot's Unicode version, taken from the `# Blocks-N.N.N.txt`
    /// header line.
    pub fn version(&self) -> Result<String, CatalogError> {
        let mut lines = open_lines(&self.blocks)?;
        let first = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };
        match VERSION_RE.captures(&first) {
            Some(caps) => Ok(caps[1].to_string()),
            None => Err(CatalogError::VersionNotFound { line: first }),
        }
    }

    /// Streams the block table in file order.
    ///
    /// The file is read one line at a time; dropping the iterator early
    /// closes it without reading the rest.
    pub fn entries(&self) -> Result<BlockEntries, CatalogError> {
        Ok(BlockEntries { lines: open_lines(&self.blocks)? })
    }

    /// Counts the code points of `range` that `DerivedName.txt` assigns a
    /// name.
    ///
    /// A derived-name range entry counts only when fully contained in
    /// `range`; partial overlap contributes nothing. The snapshot is
    /// sorted ascending, so reading stops at the first entry starting past
    /// `range.end()`.
    pub fn count_assigned(&self, range: &CodepointRange) -> Result<u32, CatalogError> {
        let mut count: u32 = 0;
        for line in open_lines(&self.derived_name)? {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (field, _) = line
                .split_once(';')
                .ok_or_else(|| CatalogError::MissingSeparator { line: line.to_string() })?;
            let field = field.trim();
            if field.contains("..") {
                let entry: CodepointRange = field.parse()?;
                if entry.begin() > range.end() {
                    break;
                }
                if range.contains_range(&entry) {
                    count += entry.len();
                }
            } else {
                let cp = parse_hex_scalar(field)?;
                if cp > range.end() {
                    break;
                }
                if range.contains(cp) {
                    count += 1;
                }
            }
        }
        Ok(count)
    }
}

/// Lazy iterator over `Blocks.txt` data lines, skipping comments and
/// blanks.
#[derive(Debug)]
pub struct BlockEntries {
    lines: Lines<BufReader<File>>,
}

impl Iterator for BlockEntries {
    type Item = Result<BlockEntry, CatalogError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return Some(parse_block_line(line));
        }
    }
}

fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>, CatalogError> {
    Ok(BufReader::new(File::open(path)?).lines())
}

fn parse_block_line(line: &str) -> Result<BlockEntry, CatalogError> {
    let (field, name) = line
        .split_once(';')
        .ok_or_else(|| CatalogError::MissingSeparator { line: line.to_string() })?;
    let range = field.trim().parse()?;
    Ok(BlockEntry { range, name: name.trim().to_string() })
}
