pub mod check;
mod command_result;
pub mod context;
pub mod generate;
pub mod init;

pub use command_result::*;
