//! One module per subcommand. Each exposes `execute`.

pub mod completions;
pub mod config;
pub mod flow;
pub mod generate;
pub mod init;
pub mod libs;
pub mod test;
