// Library root: the greeting plus the config layer used by the `greet` binary.

pub mod config;
pub mod greeting;

pub use greeting::{get_greeting, GREETING};
