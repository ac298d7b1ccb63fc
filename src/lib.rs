//! mksecret - Print a fresh web application secret key setting.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   └── output        # Diagnostics on stderr
//! └── core/             # Core library components
//!     ├── constants     # Key length, alphabet, setting name
//!     ├── provider      # SecretProvider trait + OS-seeded implementation
//!     ├── secret        # SecretKey value (zeroized on drop)
//!     └── line          # SECRET_KEY = '...' template
//! ```

pub mod cli;
pub mod core;
pub mod error;
