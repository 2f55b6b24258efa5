// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io;
use thiserror::Error;

/// Failures while reading a UCD snapshot or parsing a query.
///
/// "Not found" is never an error here: lookups that find nothing return
/// `Ok(None)` or [`crate::PlaneMatch::NotFound`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {}", _0)]
    Io(#[from] io::Error),

    #[error("UCD line has no `;` separator: {:?}", line)]
    MissingSeparator { line: String },

    #[error("invalid code point range {:?} in UCD line", token)]
    InvalidRange { token: String },

    #[error("invalid hex code point {:?} in UCD line", token)]
    InvalidHex { token: String },

    #[error("no Unicode version in snapshot header line {:?}", line)]
    VersionNotFound { line: String },

    #[error("unrecognized query {:?}: {}", input, reason)]
    InvalidQuery { input: String, reason: &'static str },
}
