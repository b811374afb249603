#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::return_self_not_must_use
)]

pub mod analysis;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod history;
pub mod templates;
pub mod workflow;

pub use config::Config;
pub use error::{CopysmithError, Result};
pub use form::FormData;
