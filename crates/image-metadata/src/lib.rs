#![doc = include_str!("../README.md")]
#![warn(
	clippy::all,
	clippy::pedantic,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::nursery,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms,
	clippy::expect_used,
	trivial_casts,
	trivial_numeric_casts,
	unused_allocation,
	clippy::as_conversions,
	clippy::dbg_macro
)]
#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod error;
mod generated;
mod uploaded;
pub(crate) mod utils;

pub use error::{Error, Result, ValueKind};
pub use generated::GeneratedMetadata;
pub use uploaded::UploadedMetadata;

/// Metadata attached to an image or latents record, discriminated by
/// how the artifact entered the system.
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize, specta::Type)]
#[serde(tag = "type")]
pub enum ImageMetadata {
	Generated(Box<GeneratedMetadata>),
	Uploaded(Box<UploadedMetadata>),
}
