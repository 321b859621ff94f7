#![warn(clippy::pedantic)]
//! Writes a description resource plugin from a source object's user data.
//!
//! A [`converter::Converter`] combines [`settings::ConverterSettings`] with a
//! loaded source dump. [`converter::Converter::files`] reports the layout a run
//! produces and [`converter::Converter::create`] writes it:
//!
//! ```text
//! <directory>/
//!   <plugin>.pyp
//!   res/
//!     c4d_symbols.h
//!     description/<resource>.h
//!     description/<resource>.res
//!     strings_us/description/<resource>.str
//!     icons/<plugin name>.<ext>
//! ```

pub mod converter;
pub mod errors;
pub mod plan;
pub mod settings;
pub mod stub;

pub use converter::{Converter, CreateReport, load_source};
pub use errors::ConvertError;
pub use settings::ConverterSettings;
