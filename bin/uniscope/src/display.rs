// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Colorized report rendering for the lookup commands.
//!
//! Field keys are painted bold, red for top level entries and magenta for
//! the block rows nested under a plane. Values stay unpainted so the column
//! padding is not thrown off by escape codes.

use {
    ansi_term::Color,
    unicode_catalog::{to_std_hex, Block, CodepointRange, Plane},
};

// Column widths of the list reports, covering the space in front of the value.
const RANGE_WIDTH: usize = 22;
const NAME_WIDTH: usize = 50;
const SIZE_WIDTH: usize = 8;

/// `U+0000 - U+007F` form used by every range field.
pub fn codepoint_range(range: &CodepointRange) -> String {
    format!("{} - {}", to_std_hex(range.begin()), to_std_hex(range.end()))
}

fn field(color: Color, key: &str, value: &str, width: usize) -> String {
    let padded = format!(" {}", value);
    format!("{}{:<width$}", color.bold().paint(key), padded, width = width)
}

fn block_columns(block: &Block, color: Color, indent: &str) -> String {
    let range_key = format!("{}Range:", indent);
    let mut out = String::new();
    out.push_str(&field(color, &range_key, &codepoint_range(&block.range), RANGE_WIDTH));
    out.push_str(&field(color, "Name:", &block.name, NAME_WIDTH));
    if let Some(count) = block.char_count {
        out.push_str(&field(color, "Range size:", &block.range_size().to_string(), SIZE_WIDTH));
        out.push_str(&field(color, "Char count:", &count.to_string(), 0));
    }
    out
}

/// Single column-aligned line for one block, count columns only when the
/// block was enriched.
pub fn block_row(block: &Block) -> String {
    block_columns(block, Color::Red, "")
}

/// Multi-line report for a block search hit, one field per line.
pub fn block_report(block: &Block) -> String {
    let mut out = String::new();
    out.push_str(&field(Color::Red, "Range:", &codepoint_range(&block.range), 0));
    out.push('\n');
    out.push_str(&field(Color::Red, "Name:", &block.name, 0));
    if let Some(count) = block.char_count {
        out.push('\n');
        out.push_str(&field(Color::Red, "Range size:", &block.range_size().to_string(), 0));
        out.push('\n');
        out.push_str(&field(Color::Red, "Char count:", &count.to_string(), 0));
    }
    out
}

/// Report for one plane: the plane line and, with `with_blocks`, its block
/// rows indented underneath followed by a blank separator line.
pub fn plane_rows(plane: &Plane, with_blocks: bool) -> String {
    let mut out = String::new();
    out.push_str(&field(Color::Red, "Range:", &codepoint_range(&plane.range), RANGE_WIDTH));
    out.push_str(&field(Color::Red, "Name:", plane.name, NAME_WIDTH));
    if with_blocks {
        out.push('\n');
        out.push_str(&field(Color::Red, "  Blocks:", "\n", 0));
        for block in &plane.blocks {
            out.push_str(&block_columns(block, Color::Purple, "    "));
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

/// Paints the `|` group separators of a decimal dump red.
pub fn paint_pipes(dump: &str) -> String {
    dump.replace('|', &Color::Red.paint("|").to_string())
}
