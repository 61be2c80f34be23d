use serde_json::{Map, Value};

use crate::{
	utils::{strict_int, strict_str},
	Error, Result, ValueKind,
};

/// Limited metadata for an uploaded image or latents tensor.
///
/// Uploads did not come out of our own pipeline, so this records only
/// what the ingestion path could determine.
#[derive(Default, Clone, PartialEq, Eq, Debug, serde::Serialize, specta::Type)]
pub struct UploadedMetadata {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<i64>,
	/// Raw contents of the image's embedded text chunk, verbatim. It may
	/// have been written by us or by another application, so no shape is
	/// assumed beyond "text". Unset when the upload is neither an image
	/// nor a recognized latents container.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extra: Option<String>,
}

impl UploadedMetadata {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a record from the field mapping assembled by the upload
	/// ingestion path, with the same strictness as
	/// [`GeneratedMetadata::from_map`](crate::GeneratedMetadata::from_map):
	/// exact kinds only, `null` reads as unset, unknown keys are
	/// ignored.
	pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
		Ok(Self {
			width: strict_int(map, "width")?,
			height: strict_int(map, "height")?,
			extra: strict_str(map, "extra")?,
		})
	}

	pub fn from_value(value: &Value) -> Result<Self> {
		match value {
			Value::Object(map) => Self::from_map(map),
			_ => Err(Error::NotAnObject(ValueKind::of(value))),
		}
	}

	pub fn from_json(json: &str) -> Result<Self> {
		Self::from_value(&serde_json::from_str(json)?)
	}

	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).map_err(Into::into)
	}
}

impl<'de> serde::Deserialize<'de> for UploadedMetadata {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let map: Map<String, Value> = serde::Deserialize::deserialize(deserializer)?;
		Self::from_map(&map).map_err(serde::de::Error::custom)
	}
}
