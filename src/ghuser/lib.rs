//! # ghuser Architecture
//!
//! ghuser fetches one GitHub user profile and prints it. Small as it is, it is
//! split the same way a larger library-with-a-CLI would be:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves settings, prints output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lookup Layer (lookup.rs)                                   │
//! │  - Builds the request URL, decodes the Profile              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport Layer (transport/)                               │
//! │  - Abstract Transport trait                                 │
//! │  - ReqwestTransport (production), StubTransport (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//!
//! There is exactly one setting, the user to look up. It is resolved
//! explicitly in [`config::Settings::resolve`]: the `--user` flag first, then
//! the `GHUSER_USER` environment variable, then an empty default that is
//! rejected. No global command registry is involved; [`cli::Runner`] is built
//! in `main` and handed everything it needs.
//!
//! ## Error Handling
//!
//! A missing user is fatal (exit 1). Transport and decode failures are
//! reported on stderr and the run still exits 0. HTTP status codes are not
//! interpreted.
//!
//! ## Module Overview
//!
//! - [`cli`]: argument parsing, output and exit codes
//! - [`config`]: flag/environment resolution
//! - [`lookup`]: the profile lookup service
//! - [`transport`]: HTTP abstraction and implementations
//! - [`model`]: the `Profile` record
//! - [`error`]: error types

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod transport;
