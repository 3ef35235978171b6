// Command implementations behind the CLI subcommands

pub mod check;
pub mod current;
pub mod digest;
pub mod download;
pub mod latest;
pub mod prompt;
