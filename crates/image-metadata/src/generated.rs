use serde_json::{Map, Value};

use crate::{
	utils::{strict_float, strict_int, strict_str},
	Error, Result, ValueKind,
};

/// Core generation metadata for an image or latents tensor produced by
/// the graph executor.
///
/// Assembled by walking the execution graph and collecting the
/// parameters of the nearest ancestors of the output node. This is a
/// summary only; full provenance lives with the persisted session and
/// can be recovered by querying it by id.
#[derive(Default, Clone, PartialEq, Debug, serde::Serialize, specta::Type)]
pub struct GeneratedMetadata {
	/// Conditioning used to steer generation toward the desired content.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub positive_conditioning: Option<String>,
	/// Conditioning used to steer generation away from undesired content.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub negative_conditioning: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub seed: Option<i64>,
	/// Classifier-free guidance scale.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cfg_scale: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub steps: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scheduler: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,
	/// Blend strength for image-to-image and tensor-to-tensor runs.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub strength: Option<f64>,
	/// Id of the initial source image, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	/// Id of the initial source tensor, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tensor: Option<String>,
	// TODO: record the component ids here (vae/unet/clip) once the model
	// loader split lands.
	// pub vae: Option<String>,
	// pub unet: Option<String>,
	// pub clip: Option<String>,
}

impl GeneratedMetadata {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a record from the field mapping assembled by the graph
	/// walker.
	///
	/// Every known field present in the mapping must carry a value of
	/// exactly the declared kind; nothing is coerced. `null` reads as
	/// unset and unknown keys are ignored. The first offending field
	/// fails the whole call, so no partially filled record escapes.
	pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
		Ok(Self {
			positive_conditioning: strict_str(map, "positive_conditioning")?,
			negative_conditioning: strict_str(map, "negative_conditioning")?,
			width: strict_int(map, "width")?,
			height: strict_int(map, "height")?,
			seed: strict_int(map, "seed")?,
			cfg_scale: strict_float(map, "cfg_scale")?,
			steps: strict_int(map, "steps")?,
			scheduler: strict_str(map, "scheduler")?,
			model: strict_str(map, "model")?,
			strength: strict_float(map, "strength")?,
			image: strict_str(map, "image")?,
			tensor: strict_str(map, "tensor")?,
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

impl<'de> serde::Deserialize<'de> for GeneratedMetadata {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let map: Map<String, Value> = serde::Deserialize::deserialize(deserializer)?;
		Self::from_map(&map).map_err(serde::de::Error::custom)
	}
}
