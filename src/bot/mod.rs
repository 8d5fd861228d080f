pub mod client;
pub mod commands;
pub mod reply;

pub use client::{respond_to, run_bot};
pub use commands::{parse, ParseError};
pub use reply::{render_parse_error, render_result};
