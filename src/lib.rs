#[macro_use]
extern crate prettytable;

pub mod dump;
pub mod fileio;

pub use fileio::{read_file, read_file_from, write_file};
