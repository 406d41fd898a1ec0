//! # State Module
//!
//! State the console keeps between menu actions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐    │
//! │  │       AppConfig          │      │        ProfileState          │    │
//! │  │                          │      │                              │    │
//! │  │  data_dir                │      │  Option<StoreProfile>        │    │
//! │  │  output_dir              │      │  loaded once at startup,     │    │
//! │  │  max_retries             │      │  replaced by "Configurar"    │    │
//! │  │  (read-only)             │      │                              │    │
//! │  └──────────────────────────┘      └──────────────────────────────┘    │
//! │                                                                         │
//! │  Single-threaded: both are owned values inside `App`.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod profile;

pub use config::AppConfig;
pub use profile::ProfileState;
