use std::num::NonZeroUsize;

use prettytable::{format, Table};

pub const DEFAULT_WIDTH: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(width) => width,
    None => panic!("default width is zero"),
};

/// One line of a hex dump.
#[derive(Debug, PartialEq, Eq)]
pub struct Row {
    pub offset: usize,
    pub hex: String,
    pub ascii: String,
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08x}  {}  {}", self.offset, self.hex, self.ascii)
    }
}

pub fn rows(bytes: &[u8], width: NonZeroUsize) -> Vec<Row> {
    let width = width.get();

    bytes
        .chunks(width)
        .enumerate()
        .map(|(i, chunk)| Row {
            offset: i * width,
            hex: chunk
                .iter()
                .map(|b| hex::encode([*b]))
                .collect::<Vec<_>>()
                .join(" "),
            ascii: chunk.iter().map(|&b| printable(b)).collect(),
        })
        .collect()
}

pub fn table(bytes: &[u8], width: NonZeroUsize) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Offset", "Hex", "ASCII"]);
    for r in rows(bytes, width) {
        table.add_row(row![format!("{:08x}", r.offset), r.hex, r.ascii]);
    }
    table
}

fn printable(b: u8) -> char {
    if b.is_ascii_graphic() || b == b' ' {
        b as char
    } else {
        '.'
    }
}
