//! # config_emitter
//!
//! Generates the per-user Solana CLI configs used by the aqua-dex devnet
//! test users.
//!
//! For every user id from 1 to 100 the emitter renders a fixed YAML template
//! with the id substituted into the keypair path and writes it to
//! `user_<id>.yml`.
//!
//! This crate provides:
//!
//! - [`template`] — Tera-backed config templates.
//! - [`user`] — the user config template, file naming, and typed view.
//! - [`config`] — emitter configuration and the fixed id range.
//! - [`emitter`] — the write loop.
//! - [`error`] — error types.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config_emitter::{ConfigEmitter, EmitterConfig};
//!
//! let report = ConfigEmitter::new(EmitterConfig::new()).run()?;
//! assert_eq!(report.len(), 100);
//! # Ok::<(), config_emitter::EmitError>(())
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod template;
pub mod user;

pub use config::{EmitterConfig, FIRST_UID, LAST_UID};
pub use emitter::{ConfigEmitter, EmitReport};
pub use error::{EmitError, TemplateError};
pub use template::Template;
pub use user::{UserConfig, config_file_name, render_user_config, user_template};
