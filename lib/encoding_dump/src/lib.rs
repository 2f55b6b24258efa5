// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Hex and decimal dumps of text in the UTF-8, UTF-16 and UTF-32 encodings.
//!
//! A dump renders each code unit of the encoded text as a group of digits:
//! hex dumps print one lowercase hex group per unit, decimal dumps print the
//! unit's bytes as three-digit values wrapped in `|...|`. Input is always a
//! Rust `&str`, so every scalar is valid and dumping cannot fail.

mod decdump;
mod encoding;
mod hexdump;

pub use crate::{
    decdump::{dec_units, Decdump},
    encoding::{Encoding, UnknownEncoding},
    hexdump::{hex_units, Hexdump},
};
