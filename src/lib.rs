pub mod artifact;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod validator;

pub use error::{PrereleaseError, Result};
