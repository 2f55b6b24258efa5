// Copyright 2026 The Uniscope Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {argh::FromArgs, encoding_dump::Encoding};

#[derive(FromArgs, PartialEq, Debug)]
/// Local Unicode lookups: blocks, planes and encoding dumps over a UCD
/// snapshot shipped with the tool.
pub struct UniscopeCommand {
    /// log debug messages instead of warnings only
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    #[argh(subcommand)]
    pub command: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum SubCommand {
    Blocks(BlocksCommand),
    Planes(PlanesCommand),
    Dump(DumpCommand),
    Version(VersionCommand),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "blocks", description = "look up Unicode blocks")]
pub struct BlocksCommand {
    #[argh(subcommand)]
    pub command: BlocksSubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum BlocksSubCommand {
    List(BlocksListCommand),
    Search(BlocksSearchCommand),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "list",
    description = "list every block of the snapshot",
    note = "Counting assigned characters rescans the names file once per block,
so --with-count can take a few seconds."
)]
pub struct BlocksListCommand {
    /// also show each block's range size and assigned character count
    #[argh(switch)]
    pub with_count: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "search",
    description = "find the block containing a code point or matching a name",
    note = "The query may be a decimal code point (65), a standardized hex code
point (U+1F4A9), a single character, or a block name (case insensitive)."
)]
pub struct BlocksSearchCommand {
    /// also show the block's range size and assigned character count
    #[argh(switch)]
    pub with_count: bool,

    #[argh(positional)]
    /// decimal or U+ code point, single character, or block name
    pub query: String,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "planes", description = "look up Unicode planes")]
pub struct PlanesCommand {
    #[argh(subcommand)]
    pub command: PlanesSubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum PlanesSubCommand {
    List(PlanesListCommand),
    Search(PlanesSearchCommand),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "list", description = "list all seventeen planes")]
pub struct PlanesListCommand {
    /// also list the blocks of each plane
    #[argh(switch)]
    pub with_blocks: bool,

    /// also show each block's range size and assigned character count
    #[argh(switch)]
    pub with_count: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "search",
    description = "find planes by index or name",
    note = "The query may be a plane index (0 to 16) or a plane name (case
insensitive). Names shared by several planes, like \"unassigned\", match
them all."
)]
pub struct PlanesSearchCommand {
    /// also list the blocks of each matching plane
    #[argh(switch)]
    pub with_blocks: bool,

    /// also show each block's range size and assigned character count
    #[argh(switch)]
    pub with_count: bool,

    #[argh(positional)]
    /// plane index or plane name
    pub query: String,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "dump",
    description = "dump text in every Unicode encoding",
    note = "The input is taken literally. It is read from stdin instead when
omitted or equal to - (write the dash after a -- separator)."
)]
pub struct DumpCommand {
    #[argh(subcommand)]
    pub command: DumpSubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum DumpSubCommand {
    Hex(DumpHexCommand),
    Dec(DumpDecCommand),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "hex",
    description = "hexadecimal dump (hexdump) in all Unicode encodings"
)]
pub struct DumpHexCommand {
    /// output only in the specified encoding (utf8, utf16be, utf16le, utf32be, utf32le)
    #[argh(option)]
    pub enc: Option<Encoding>,

    #[argh(positional)]
    /// string input, read from stdin if omitted or equal to -
    pub input: Option<String>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "dec",
    description = "decimal dump (decdump) in all Unicode encodings"
)]
pub struct DumpDecCommand {
    /// output only in the specified encoding (utf8, utf16be, utf16le, utf32be, utf32le)
    #[argh(option)]
    pub enc: Option<Encoding>,

    #[argh(positional)]
    /// string input, read from stdin if omitted or equal to -
    pub input: Option<String>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "version",
    description = "print the Unicode version of the UCD snapshot"
)]
pub struct VersionCommand {}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    const CMD_NAME: &[&str] = &["uniscope"];

    #[test]
    fn parse_blocks_list() {
        assert_eq!(
            UniscopeCommand::from_args(CMD_NAME, &["blocks", "list", "--with-count"]),
            Ok(UniscopeCommand {
                verbose: false,
                command: SubCommand::Blocks(BlocksCommand {
                    command: BlocksSubCommand::List(BlocksListCommand { with_count: true }),
                }),
            })
        );
    }

    #[test]
    fn parse_blocks_search() {
        assert_eq!(
            UniscopeCommand::from_args(CMD_NAME, &["-v", "blocks", "search", "U+1F4A9"]),
            Ok(UniscopeCommand {
                verbose: true,
                command: SubCommand::Blocks(BlocksCommand {
                    command: BlocksSubCommand::Search(BlocksSearchCommand {
                        with_count: false,
                        query: "U+1F4A9".to_string(),
                    }),
                }),
            })
        );
    }

    #[test]
    fn parse_planes_search_with_flags() {
        assert_eq!(
            UniscopeCommand::from_args(
                CMD_NAME,
                &["planes", "search", "--with-blocks", "--with-count", "unassigned"]
            ),
            Ok(UniscopeCommand {
                verbose: false,
                command: SubCommand::Planes(PlanesCommand {
                    command: PlanesSubCommand::Search(PlanesSearchCommand {
                        with_blocks: true,
                        with_count: true,
                        query: "unassigned".to_string(),
                    }),
                }),
            })
        );
    }

    #[test]
    fn parse_dump_hex_with_encoding() {
        assert_eq!(
            UniscopeCommand::from_args(CMD_NAME, &["dump", "hex", "--enc", "utf16le", "ACCEIS"]),
            Ok(UniscopeCommand {
                verbose: false,
                command: SubCommand::Dump(DumpCommand {
                    command: DumpSubCommand::Hex(DumpHexCommand {
                        enc: Some(Encoding::Utf16Le),
                        input: Some("ACCEIS".to_string()),
                    }),
                }),
            })
        );
    }

    #[test]
    fn parse_dump_dec_stdin_marker() {
        assert_eq!(
            UniscopeCommand::from_args(CMD_NAME, &["dump", "dec", "--", "-"]),
            Ok(UniscopeCommand {
                verbose: false,
                command: SubCommand::Dump(DumpCommand {
                    command: DumpSubCommand::Dec(DumpDecCommand {
                        enc: None,
                        input: Some("-".to_string()),
                    }),
                }),
            })
        );
    }

    #[test]
    fn parse_dump_without_input_reads_stdin() {
        assert_eq!(
            UniscopeCommand::from_args(CMD_NAME, &["dump", "hex"]),
            Ok(UniscopeCommand {
                verbose: false,
                command: SubCommand::Dump(DumpCommand {
                    command: DumpSubCommand::Hex(DumpHexCommand { enc: None, input: None }),
                }),
            })
        );
    }

    #[test]
    fn rejects_unknown_encoding() {
        assert!(
            UniscopeCommand::from_args(CMD_NAME, &["dump", "hex", "--enc", "utf64", "x"]).is_err()
        );
    }

    #[test]
    fn parse_version() {
        assert_eq!(
            UniscopeCommand::from_args(CMD_NAME, &["version"]),
            Ok(UniscopeCommand {
                verbose: false,
                command: SubCommand::Version(VersionCommand {}),
            })
        );
    }
}
