//! I/O module
//!
//! Handles the text surfaces around the bank.
//!
//! # Components
//!
//! - `seed_format` - Seed accounts CSV (loading an account store)
//! - `command_format` - Command script line format
//! - `script_reader` - Streaming command reader with iterator interface
//! - `view_format` - Text rendition of the screen

pub mod command_format;
pub mod script_reader;
pub mod seed_format;
pub mod view_format;

pub use command_format::parse_command;
pub use script_reader::ScriptReader;
pub use seed_format::{load_accounts_csv, read_accounts_csv, SeedRecord};
pub use view_format::{write_frame, write_screen};
