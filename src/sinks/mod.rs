//! Sink helpers
//!
//! Any `std::io::Write + Send + 'static` value can be a logger sink
//! (`std::io::stdout()`, a `File`, a pipe). This module adds the two
//! the crate's own users reach for most.

pub mod file;
pub mod memory;

pub use file::open_log_file;
pub use memory::SharedBuffer;
