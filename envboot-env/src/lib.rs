//! # Envboot Env
//!
//! Concrete adapters for the `Environment` port, plus the env-file reader.
//!
//! - `ProcessEnvironment` - the real process table, for binaries whose
//!   collaborators read `std::env`
//! - `MapEnvironment` - an explicit in-memory map
//! - `EnvFile` - best-effort `KEY=VALUE` file reader

pub mod env_file;
pub mod memory;
pub mod process;

pub use env_file::{Dialect, EnvFile};
pub use memory::MapEnvironment;
pub use process::ProcessEnvironment;
