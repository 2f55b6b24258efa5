// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::blocks::{Block, BlockIndex};
use crate::codepoint::CodepointRange;
use crate::errors::CatalogError;
use std::str::FromStr;
use unicase::UniCase;

/// Number of Unicode planes.
pub const PLANE_COUNT: u8 = 17;

// Casing is significant: a plane's abbreviation is the concatenation of
// the uppercase letters of its name, so plane 14 abbreviates to SSP (the
// "purpose" is lowercase) and planes 15 and 16 to PUA.
const PLANE_NAMES: [&str; PLANE_COUNT as usize] = [
    "Basic Multilingual Plane",
    "Supplementary Multilingual Plane",
    "Supplementary Ideographic Plane",
    "Tertiary Ideographic Plane",
    "unassigned",
    "unassigned",
    "unassigned",
    "unassigned",
    "unassigned",
    "unassigned",
    "unassigned",
    "unassigned",
    "unassigned",
    "unassigned",
    "Supplementary Special-purpose Plane",
    "supplementary Private Use Area planes",
    "supplementary Private Use Area planes",
];

/// Concatenation of the uppercase letters of `name`, in order.
///
/// `"Basic Multilingual Plane"` becomes `"BMP"`; a name with no uppercase
/// letters becomes the empty string.
pub fn abbreviate(name: &str) -> String {
    name.chars().filter(|c| c.is_uppercase()).collect()
}

/// One of the 17 Unicode planes, with the blocks it fully contains.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Plane {
    pub index: u8,
    pub name: &'static str,
    pub range: CodepointRange,
    /// Blocks whose range lies entirely inside the plane. Unassigned
    /// planes legitimately have none.
    pub blocks: Vec<Block>,
}

impl Plane {
    pub fn abbreviation(&self) -> String {
        abbreviate(self.name)
    }
}

/// A plane lookup query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlaneQuery {
    /// Plane number; anything outside `0..=16` finds nothing.
    Index(u32),
    /// Plane name, matched case-insensitively.
    Name(String),
}

impl FromStr for PlaneQuery {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let index = s.parse::<u32>().map_err(|_| CatalogError::InvalidQuery {
                input: s.to_string(),
                reason: "plane index too large",
            })?;
            return Ok(PlaneQuery::Index(index));
        }
        Ok(PlaneQuery::Name(s.to_string()))
    }
}

/// Result of a plane lookup. Plane names are not unique ("unassigned"
/// covers ten planes), so a name query can hit any number of them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlaneMatch {
    NotFound,
    Single(Plane),
    Multiple(Vec<Plane>),
}

/// Plane lookups, composed over a [`BlockIndex`].
pub struct PlaneIndex {
    blocks: BlockIndex,
}

impl PlaneIndex {
    /// Index over the snapshot shipped with this crate.
    pub fn new() -> Self {
        Self { blocks: BlockIndex::new() }
    }

    /// Index composing the given block index.
    pub fn with_index(blocks: BlockIndex) -> Self {
        Self { blocks }
    }

    /// All 17 planes with their contained blocks.
    ///
    /// Every plane scans the block list afresh, so this reads the blocks
    /// snapshot 17 times; `with_count` prices in one `DerivedName.txt`
    /// scan per block on top.
    pub fn list(&self, with_count: bool) -> Result<Vec<Plane>, CatalogError> {
        (0..PLANE_COUNT).map(|index| self.plane_at(index, with_count)).collect()
    }

    /// Resolves `query` to no plane, one plane, or several.
    pub fn resolve(
        &self,
        query: &PlaneQuery,
        with_count: bool,
    ) -> Result<PlaneMatch, CatalogError> {
        match query {
            PlaneQuery::Index(index) => {
                if *index >= u32::from(PLANE_COUNT) {
                    return Ok(PlaneMatch::NotFound);
                }
                Ok(PlaneMatch::Single(self.plane_at(*index as u8, with_count)?))
            }
            PlaneQuery::Name(name) => {
                let wanted = UniCase::new(name.as_str());
                let mut hits = Vec::new();
                for (index, candidate) in PLANE_NAMES.iter().enumerate() {
                    if UniCase::new(*candidate) == wanted {
                        hits.push(self.plane_at(index as u8, with_count)?);
                    }
                }
                Ok(match hits.len() {
                    0 => PlaneMatch::NotFound,
                    1 => PlaneMatch::Single(hits.swap_remove(0)),
                    _ => PlaneMatch::Multiple(hits),
                })
            }
        }
    }

    fn plane_at(&self, index: u8, with_count: bool) -> Result<Plane, CatalogError> {
        let begin = u32::from(index) * 0x10000;
        let range = CodepointRange::new(begin, begin + 0xFFFF);
        let blocks = self
            .blocks
            .list(with_count)?
            .into_iter()
            .filter(|block| range.contains_range(&block.range))
            .collect();
        Ok(Plane { index, name: PLANE_NAMES[usize::from(index)], range, blocks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ucd::RangeTable;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;
    use tempfile::NamedTempFile;
    use test_case::test_case;

    const BLOCKS: &str = "# Blocks-16.0.0.txt\n\
                          0000..007F; Basic Latin\n\
                          FFF0..FFFF; Specials\n\
                          10000..1007F; Linear B Syllabary\n\
                          20000..2A6DF; CJK Unified Ideographs Extension B\n\
                          30000..3134F; CJK Unified Ideographs Extension G\n\
                          31350..323AF; CJK Unified Ideographs Extension H\n\
                          E0000..E007F; Tags\n\
                          F0000..FFFFF; Supplementary Private Use Area-A\n\
                          100000..10FFFF; Supplementary Private Use Area-B\n";

    const NAMES: &str = "0020; SPACE\n\
                         20000..2A6DD; CJK UNIFIED IDEOGRAPH\n";

    fn snapshot(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn index(blocks: &NamedTempFile, names: &NamedTempFile) -> PlaneIndex {
        PlaneIndex::with_index(BlockIndex::with_table(RangeTable::with_paths(
            blocks.path(),
            names.path(),
        )))
    }

    fn block_names(plane: &Plane) -> Vec<&str> {
        plane.blocks.iter().map(|block| block.name.as_str()).collect()
    }

    #[test_case("Basic Multilingual Plane", "BMP")]
    #[test_case("Supplementary Multilingual Plane", "SMP")]
    #[test_case("Supplementary Ideographic Plane", "SIP")]
    #[test_case("Tertiary Ideographic Plane", "TIP")]
    #[test_case("Supplementary Special-purpose Plane", "SSP")]
    #[test_case("supplementary Private Use Area planes", "PUA")]
    #[test_case("unassigned", "")]
    fn test_abbreviate(name: &str, expected: &str) {
        assert_eq!(abbreviate(name), expected);
    }

    #[test]
    fn test_query_from_str() {
        assert_eq!("3".parse::<PlaneQuery>().unwrap(), PlaneQuery::Index(3));
        assert_eq!("16".parse::<PlaneQuery>().unwrap(), PlaneQuery::Index(16));
        assert_eq!(
            "unassigned".parse::<PlaneQuery>().unwrap(),
            PlaneQuery::Name("unassigned".to_string())
        );
        assert_matches!(
            "99999999999999999999".parse::<PlaneQuery>(),
            Err(CatalogError::InvalidQuery { .. })
        );
    }

    #[test]
    fn test_list_assigns_blocks_to_planes() {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let planes = index(&blocks, &names).list(false).unwrap();
        assert_eq!(planes.len(), usize::from(PLANE_COUNT));
        assert_eq!(block_names(&planes[0]), vec!["Basic Latin", "Specials"]);
        assert_eq!(block_names(&planes[1]), vec!["Linear B Syllabary"]);
        assert_eq!(block_names(&planes[2]), vec!["CJK Unified Ideographs Extension B"]);
        assert_eq!(
            block_names(&planes[3]),
            vec!["CJK Unified Ideographs Extension G", "CJK Unified Ideographs Extension H"]
        );
        for unassigned in &planes[4..=13] {
            assert_eq!(unassigned.blocks, vec![]);
            assert_eq!(unassigned.name, "unassigned");
        }
        assert_eq!(block_names(&planes[14]), vec!["Tags"]);
        assert_eq!(block_names(&planes[15]), vec!["Supplementary Private Use Area-A"]);
        assert_eq!(block_names(&planes[16]), vec!["Supplementary Private Use Area-B"]);
    }

    #[test]
    fn test_plane_ranges_partition_the_code_space() {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let planes = index(&blocks, &names).list(false).unwrap();
        for (k, plane) in planes.iter().enumerate() {
            assert_eq!(plane.index, k as u8);
            assert_eq!(plane.range.begin(), k as u32 * 0x10000);
            assert_eq!(plane.range.end(), k as u32 * 0x10000 + 0xFFFF);
        }
        assert_eq!(planes[16].range.end(), crate::codepoint::MAX_CODEPOINT);
    }

    #[test]
    fn test_resolve_by_index() {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let resolved = index(&blocks, &names).resolve(&PlaneQuery::Index(3), false).unwrap();
        assert_matches!(resolved, PlaneMatch::Single(plane) => {
            assert_eq!(plane.name, "Tertiary Ideographic Plane");
            assert_eq!(plane.range, CodepointRange::new(0x30000, 0x3FFFF));
            assert_eq!(plane.blocks.len(), 2);
        });
    }

    #[test_case(17)]
    #[test_case(200)]
    fn test_resolve_index_out_of_range(out_of_range: u32) {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let resolved =
            index(&blocks, &names).resolve(&PlaneQuery::Index(out_of_range), false).unwrap();
        assert_eq!(resolved, PlaneMatch::NotFound);
    }

    #[test]
    fn test_resolve_by_name_is_case_insensitive() {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let query = PlaneQuery::Name("bAsIc mUlTiLiNgUaL pLaNe".to_string());
        let resolved = index(&blocks, &names).resolve(&query, false).unwrap();
        assert_matches!(resolved, PlaneMatch::Single(plane) => {
            assert_eq!(plane.index, 0);
        });
    }

    #[test]
    fn test_resolve_shared_name_yields_all_planes() {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let query = PlaneQuery::Name("Unassigned".to_string());
        let resolved = index(&blocks, &names).resolve(&query, false).unwrap();
        assert_matches!(resolved, PlaneMatch::Multiple(planes) => {
            let indices: Vec<u8> = planes.iter().map(|plane| plane.index).collect();
            assert_eq!(indices, (4..=13).collect::<Vec<u8>>());
            assert!(planes.iter().all(|plane| plane.blocks.is_empty()));
        });
    }

    #[test]
    fn test_resolve_unknown_name() {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let query = PlaneQuery::Name("No Such Plane".to_string());
        let resolved = index(&blocks, &names).resolve(&query, false).unwrap();
        assert_eq!(resolved, PlaneMatch::NotFound);
    }

    #[test]
    fn test_resolve_with_count_enriches_blocks() {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let resolved = index(&blocks, &names).resolve(&PlaneQuery::Index(2), true).unwrap();
        assert_matches!(resolved, PlaneMatch::Single(plane) => {
            assert_eq!(plane.blocks.len(), 1);
            assert_eq!(plane.blocks[0].char_count, Some(42718));
        });
    }

    #[test]
    fn test_abbreviation_of_resolved_plane() {
        let (blocks, names) = (snapshot(BLOCKS), snapshot(NAMES));
        let resolved = index(&blocks, &names).resolve(&PlaneQuery::Index(14), false).unwrap();
        assert_matches!(resolved, PlaneMatch::Single(plane) => {
            assert_eq!(plane.abbreviation(), "SSP");
        });
    }
}
