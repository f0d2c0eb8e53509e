use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(about = "Writes and dumps whole-file byte buffers")]
pub struct Opt {
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt, Debug)]
#[rustfmt::skip]
pub enum Command {
    /// Write hex-encoded bytes to a file, replacing its content
    Write {
        #[structopt(parse(from_os_str), help = "File to create or overwrite")]
        path: PathBuf,

        #[structopt(parse(try_from_str = parse_hex), help = "Bytes to write as hex (e.g. 00ff10), may be empty")]
        bytes: HexBytes,
    },

    /// Read a whole file and print it as a hex table
    Read {
        #[structopt(parse(from_os_str), help = "File to read")]
        path: PathBuf,

        #[structopt(long = "width", default_value = "16", parse(try_from_str = parse_width), help = "Bytes per table row")]
        width: NonZeroUsize,
    },
}

/// Decoded `write` argument. Wrapped so structopt treats it as one value
/// rather than a list.
#[derive(Debug, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

fn parse_hex(input: &str) -> Result<HexBytes> {
    // input should be of the form: [0-9a-fA-F]{2}*
    let digits = match input.get(..2) {
        Some("0x") | Some("0X") => &input[2..],
        _ => input,
    };
    match hex::decode(digits) {
        Ok(bytes) => Ok(HexBytes(bytes)),
        Err(err) => bail!("Invalid hex bytes '{}': {}", input, err),
    }
}

fn parse_width(input: &str) -> Result<NonZeroUsize> {
    match NonZeroUsize::new(input.parse::<usize>()?) {
        Some(width) => Ok(width),
        None => bail!("Row width must be at least 1"),
    }
}
