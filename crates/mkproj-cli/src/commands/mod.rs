//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod create;
pub mod edit;
pub mod init;
pub mod tree;
