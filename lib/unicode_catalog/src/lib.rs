// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Local Unicode lookups over UCD snapshot files.
//!
//! Streams `Blocks.txt` to answer "which block is this code point,
//! character, or name" queries, resolves the fixed 17-plane partition,
//! and counts assigned code points from `DerivedName.txt`. Nothing is
//! cached: every operation re-reads its snapshot file, so results always
//! reflect what is on disk.

mod blocks;
mod codepoint;
mod errors;
mod planes;
mod ucd;

pub use crate::{
    blocks::{Block, BlockIndex, BlockQuery},
    codepoint::{parse_std_hex, to_std_hex, CodepointRange, MAX_CODEPOINT},
    errors::CatalogError,
    planes::{abbreviate, Plane, PlaneIndex, PlaneMatch, PlaneQuery, PLANE_COUNT},
    ucd::{BlockEntries, BlockEntry, RangeTable, UCD_BLOCKS, UCD_DERIVED_NAME},
};
