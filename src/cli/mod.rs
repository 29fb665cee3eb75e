mod commands;

pub use commands::{BrowseCommand, Cli, Commands, BROWSE_HELP};
