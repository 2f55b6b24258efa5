// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    anyhow::{Context, Result},
    encoding_dump::{Decdump, Encoding, Hexdump},
    log::debug,
    std::io::Read,
    unicode_catalog::{BlockIndex, BlockQuery, PlaneIndex, PlaneMatch, PlaneQuery, RangeTable},
};

mod args;
mod display;

use crate::args::{
    BlocksSubCommand, DumpSubCommand, PlanesSubCommand, SubCommand, UniscopeCommand,
};

fn main() -> Result<()> {
    let args: UniscopeCommand = argh::from_env();
    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };
    simplelog::SimpleLogger::init(level, simplelog::Config::default())?;
    run(args.command)
}

fn run(command: SubCommand) -> Result<()> {
    match command {
        SubCommand::Blocks(blocks) => match blocks.command {
            BlocksSubCommand::List(list) => blocks_list(list.with_count),
            BlocksSubCommand::Search(search) => blocks_search(&search.query, search.with_count),
        },
        SubCommand::Planes(planes) => match planes.command {
            PlanesSubCommand::List(list) => planes_list(list.with_blocks, list.with_count),
            PlanesSubCommand::Search(search) => {
                planes_search(&search.query, search.with_blocks, search.with_count)
            }
        },
        SubCommand::Dump(dump) => match dump.command {
            DumpSubCommand::Hex(hex) => dump_hex(hex.input.as_deref(), hex.enc),
            DumpSubCommand::Dec(dec) => dump_dec(dec.input.as_deref(), dec.enc),
        },
        SubCommand::Version(_) => version(),
    }
}

fn blocks_list(with_count: bool) -> Result<()> {
    let blocks =
        BlockIndex::new().list(with_count).context("listing blocks from the UCD snapshot")?;
    debug!("listed {} blocks", blocks.len());
    for block in &blocks {
        println!("{}", display::block_row(block));
    }
    Ok(())
}

fn blocks_search(query: &str, with_count: bool) -> Result<()> {
    let parsed: BlockQuery = query.parse()?;
    debug!("block query parsed as {:?}", parsed);
    match BlockIndex::new().find(&parsed, with_count).context("searching the UCD snapshot")? {
        Some(block) => println!("{}", display::block_report(&block)),
        None => println!("no block found with {}", query),
    }
    Ok(())
}

fn planes_list(with_blocks: bool, with_count: bool) -> Result<()> {
    let planes =
        PlaneIndex::new().list(with_count).context("listing planes from the UCD snapshot")?;
    for plane in &planes {
        print!("{}", display::plane_rows(plane, with_blocks));
    }
    Ok(())
}

fn planes_search(query: &str, with_blocks: bool, with_count: bool) -> Result<()> {
    let parsed: PlaneQuery = query.parse()?;
    debug!("plane query parsed as {:?}", parsed);
    let resolved =
        PlaneIndex::new().resolve(&parsed, with_count).context("searching the UCD snapshot")?;
    match resolved {
        PlaneMatch::NotFound => println!("no plane found with {}", query),
        PlaneMatch::Single(plane) => print!("{}", display::plane_rows(&plane, with_blocks)),
        PlaneMatch::Multiple(planes) => {
            for plane in &planes {
                print!("{}", display::plane_rows(plane, with_blocks));
            }
        }
    }
    Ok(())
}

fn dump_hex(input: Option<&str>, enc: Option<Encoding>) -> Result<()> {
    let text = read_input(input)?;
    let dump = Hexdump::new(&text);
    match enc {
        Some(encoding) => println!("{}", dump.encoded(encoding)),
        None => println!("{}", dump),
    }
    Ok(())
}

fn dump_dec(input: Option<&str>, enc: Option<Encoding>) -> Result<()> {
    let text = read_input(input)?;
    let dump = Decdump::new(&text);
    match enc {
        Some(encoding) => println!("{}", dump.encoded(encoding)),
        None => println!("{}", display::paint_pipes(&dump.to_string())),
    }
    Ok(())
}

fn version() -> Result<()> {
    let version =
        RangeTable::new().version().context("reading the Unicode version of the UCD snapshot")?;
    println!("{}", version);
    Ok(())
}

/// The literal input, or all of stdin (one trailing newline removed) when
/// the argument is omitted or `-`.
fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            debug!("reading dump input from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).context("reading stdin")?;
            Ok(chomp(buffer))
        }
    }
}

// Removes one trailing line terminator: \n, \r\n or \r.
fn chomp(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    } else if text.ends_with('\r') {
        text.pop();
    }
    text
}
