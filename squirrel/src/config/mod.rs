//! User configuration: the acknowledgement store and file locations.

mod acks;
mod paths;

pub use acks::{parse_duration, Config};
pub use paths::{claude_dir, default_config_path};
