//! CLI command implementations.

pub mod check;
pub mod gen;
pub mod init;
pub mod platforms;
