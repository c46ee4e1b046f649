//! # SketchDeck Core
//!
//! Core types shared by every SketchDeck crate: the error taxonomy used by the
//! interaction core and the settings layer, and the default constants the
//! designer falls back to when no configuration is supplied.

pub mod constants;
pub mod error;

pub use error::{DesignerError, Error, Result};
