//! Command line interface for the `qrseq` binary.
//!
//! Kept free of library types so the build script can render a man page from
//! it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line arguments for the `qrseq` binary.
#[derive(Debug, Parser)]
#[command(
    name = "qrseq",
    version,
    about = "Split payloads into QR carrier frames and join them back"
)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands understood by the binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a payload into base64 carrier texts, one per line.
    Split {
        /// Frame size in bytes (32, 64, 128, 256, 512 or 1024). Defaults to
        /// the smallest size that fits the input.
        #[arg(short, long)]
        frame_size: Option<u16>,
        /// Read the payload from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Write carrier texts to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rebuild a payload from carrier texts given in any order.
    Join {
        /// Read carrier texts from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Write the payload to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replay a payload through randomly ordered, repeated captures.
    Simulate {
        /// Frame size in bytes. Defaults to the smallest size that fits.
        #[arg(short, long)]
        frame_size: Option<u16>,
        /// Read the payload from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Seed for the capture order.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn parses_split_options() {
        let cli = Cli::parse_from(["qrseq", "split", "--frame-size", "64", "-i", "in.bin"]);
        match cli.command {
            Command::Split {
                frame_size, input, ..
            } => {
                assert_eq!(frame_size, Some(64));
                assert_eq!(input.as_deref(), Some(std::path::Path::new("in.bin")));
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn simulate_seed_defaults_to_zero() {
        let cli = Cli::parse_from(["qrseq", "simulate"]);
        assert!(matches!(
            cli.command,
            Command::Simulate {
                seed: 0,
                frame_size: None,
                ..
            }
        ));
    }
}
