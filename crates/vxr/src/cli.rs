//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vxr::{VexArch, VexEndness};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "vxr")]
#[command(about = "VEX lifter front end - lifts machine code and prints the IR")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lift one block of machine code and print it with its summary
    Lift {
        /// Producer shared library
        #[arg(long, value_name = "LIB")]
        producer: PathBuf,

        /// Guest architecture
        #[arg(long, value_enum)]
        arch: ArchArg,

        /// Guest byte order
        #[arg(long, value_enum, default_value = "little")]
        endness: EndnessArg,

        /// Guest address of the first byte
        #[arg(long, value_parser = parse_u64, default_value = "0")]
        addr: u64,

        /// Instructions to lift into the block
        #[arg(long)]
        max_insns: Option<u32>,

        /// Machine code as hex bytes, e.g. e0030091
        #[arg(value_name = "HEXBYTES")]
        bytes: String,
    },
    /// Print one of the pinned catalogs
    Info {
        /// Catalog to print
        #[arg(value_enum)]
        topic: InfoTopic,
    },
}

// ============================================================================
// Argument types with conversions
// ============================================================================

/// Guest architecture argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ArchArg {
    X86,
    Amd64,
    Arm,
    Arm64,
    Ppc32,
    Ppc64,
    S390x,
    Mips32,
    Mips64,
    Tilegx,
    Riscv64,
}

impl From<ArchArg> for VexArch {
    fn from(arg: ArchArg) -> Self {
        match arg {
            ArchArg::X86 => VexArch::X86,
            ArchArg::Amd64 => VexArch::Amd64,
            ArchArg::Arm => VexArch::Arm,
            ArchArg::Arm64 => VexArch::Arm64,
            ArchArg::Ppc32 => VexArch::Ppc32,
            ArchArg::Ppc64 => VexArch::Ppc64,
            ArchArg::S390x => VexArch::S390x,
            ArchArg::Mips32 => VexArch::Mips32,
            ArchArg::Mips64 => VexArch::Mips64,
            ArchArg::Tilegx => VexArch::Tilegx,
            ArchArg::Riscv64 => VexArch::Riscv64,
        }
    }
}

/// Guest byte order argument.
#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum EndnessArg {
    #[default]
    Little,
    Big,
}

impl From<EndnessArg> for VexEndness {
    fn from(arg: EndnessArg) -> Self {
        match arg {
            EndnessArg::Little => VexEndness::Little,
            EndnessArg::Big => VexEndness::Big,
        }
    }
}

/// Catalog selector for the `info` command.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InfoTopic {
    Types,
    Ops,
    Jumpkinds,
    Archs,
}

/// Parse a decimal or 0x-prefixed hex integer.
pub fn parse_u64(s: &str) -> Result<u64, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid integer '{s}': {e}"))
}

/// Parse hex digit pairs into bytes, ignoring whitespace.
pub fn parse_hex_bytes(s: &str) -> Result<Vec<u8>, String> {
    let compact: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let compact = compact.strip_prefix("0x").unwrap_or(&compact);
    if compact.is_empty() {
        return Err("no machine code bytes given".to_string());
    }
    // Checked up front so the pair slicing below never lands inside a
    // multi-byte character.
    if let Some(bad) = compact.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex digit '{bad}' in '{s}'"));
    }
    if compact.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{s}'"));
    }
    (0..compact.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&compact[i..i + 2], 16)
                .map_err(|e| format!("invalid hex byte '{}': {e}", &compact[i..i + 2]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64_accepts_both_bases() {
        assert_eq!(parse_u64("4096").unwrap(), 4096);
        assert_eq!(parse_u64("0x1000").unwrap(), 0x1000);
        assert!(parse_u64("0x").is_err());
        assert!(parse_u64("nope").is_err());
    }

    #[test]
    fn test_parse_hex_bytes() {
        assert_eq!(parse_hex_bytes("e0030091").unwrap(), vec![0xE0, 0x03, 0x00, 0x91]);
        assert_eq!(parse_hex_bytes("0xdeadbeef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(parse_hex_bytes("e0 03 00 91").unwrap(), vec![0xE0, 0x03, 0x00, 0x91]);
    }

    #[test]
    fn test_parse_hex_bytes_rejects_bad_input() {
        assert!(parse_hex_bytes("").is_err());
        assert!(parse_hex_bytes("e00").is_err());
        assert!(parse_hex_bytes("zz").is_err());
        // Multi-byte characters must come back as errors, not as
        // slice panics at a non-boundary index.
        let err = parse_hex_bytes("\u{20ac}a").unwrap_err();
        assert!(err.contains("invalid hex digit"));
        assert!(parse_hex_bytes("e0\u{20ac}0091").is_err());
    }
}
