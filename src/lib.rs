//! Форматированный вывод в stdout, stderr и файлы в режиме дозаписи.
//!
//! ```no_run
//! printlog::print_out!("Hello {}\n", "World")?;
//! printlog::print_and_log!("file.txt", "count={}\n", 42)?;
//! # Ok::<(), printlog::PrintError>(())
//! ```

pub mod constants;
pub mod error;
pub mod logs;
pub mod print;
pub mod settings;

pub use error::{PrintError, Result};
pub use print::sink::{render, write, write_to, Destination};
pub use print::{log_to_file, notate, print, print_and_log, print_and_log_to, print_error, print_info, print_notice, print_warning};
