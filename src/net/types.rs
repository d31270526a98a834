//! Wire shapes for the backend's JSON contract.
//!
//! Success fields are declared optional and checked by the `require_*`
//! helpers: a response that parses but lacks its success field is a
//! [`ApiError::Contract`] failure, distinct from a body that fails to parse
//! at all. Field names follow the backend exactly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

// ── Upload ──────────────────────────────────────────────────────

/// Response of every `*/upload` endpoint. Which fields a feature needs
/// varies: object removal requires both, colorization only the URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl UploadResponse {
    /// Succeed only when the server issued both an id and a display URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Contract`] naming the missing field.
    pub fn require_both(self) -> Result<(String, String), ApiError> {
        match (self.image_id, self.image_url) {
            (Some(id), Some(url)) => Ok((id, url)),
            (None, _) => Err(ApiError::Contract("upload response missing image_id".to_owned())),
            (_, None) => Err(ApiError::Contract("upload response missing image_url".to_owned())),
        }
    }

    /// Succeed when the server issued a display URL; the id is not needed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Contract`] when the URL is absent.
    pub fn require_url(self) -> Result<String, ApiError> {
        self.image_url
            .ok_or_else(|| ApiError::Contract("upload response missing image_url".to_owned()))
    }
}

// ── Object removal ──────────────────────────────────────────────

/// Body of `POST /lama/remove-object`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveObjectRequest<'a> {
    /// Opaque server-issued id of the uploaded image.
    pub image_id: &'a str,
    /// The painted mask, encoded as a PNG data URL.
    pub mask_data: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoveObjectResponse {
    #[serde(default)]
    pub processed_url: Option<String>,
}

impl RemoveObjectResponse {
    /// # Errors
    ///
    /// Returns [`ApiError::Contract`] when `processed_url` is absent.
    pub fn require_processed(self) -> Result<String, ApiError> {
        self.processed_url
            .ok_or_else(|| ApiError::Contract("removal response missing processed_url".to_owned()))
    }
}

// ── Colorization ────────────────────────────────────────────────

/// Body of `POST /colorize/colorize`. Colorization addresses the image by
/// its uploaded URL rather than by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorizeRequest<'a> {
    pub image_url: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColorizeResponse {
    #[serde(default)]
    pub processed_image_url: Option<String>,
}

impl ColorizeResponse {
    /// # Errors
    ///
    /// Returns [`ApiError::Contract`] when `processed_image_url` is absent.
    pub fn require_processed(self) -> Result<String, ApiError> {
        self.processed_image_url.ok_or_else(|| {
            ApiError::Contract("colorize response missing processed_image_url".to_owned())
        })
    }
}

// ── Super-resolution ────────────────────────────────────────────

/// Body of `POST /esrgan/enhance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhanceRequest<'a> {
    pub image_id: &'a str,
    /// Upscaling factor.
    pub scale: u32,
    /// Run the face-enhancement pass as well.
    pub face_enhance: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnhanceResponse {
    #[serde(default)]
    pub enhanced_url: Option<String>,
}

impl EnhanceResponse {
    /// # Errors
    ///
    /// Returns [`ApiError::Contract`] when `enhanced_url` is absent.
    pub fn require_enhanced(self) -> Result<String, ApiError> {
        self.enhanced_url
            .ok_or_else(|| ApiError::Contract("enhance response missing enhanced_url".to_owned()))
    }
}

// ── Face restoration ────────────────────────────────────────────

/// Body of `POST /gfpgan/restore`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestoreRequest<'a> {
    pub image_id: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RestoreResponse {
    #[serde(default)]
    pub restored_url: Option<String>,
}

impl RestoreResponse {
    /// # Errors
    ///
    /// Returns [`ApiError::Contract`] when `restored_url` is absent.
    pub fn require_restored(self) -> Result<String, ApiError> {
        self.restored_url
            .ok_or_else(|| ApiError::Contract("restore response missing restored_url".to_owned()))
    }
}

// ── Text-to-image ───────────────────────────────────────────────

/// Aspect-ratio presets offered by the image generator, mapped to the pixel
/// dimensions the backend expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AspectRatio {
    #[default]
    Square,
    Wide,
    Classic,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [Self; 4] = [Self::Square, Self::Wide, Self::Classic, Self::Portrait];

    /// Output dimensions in pixels.
    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Square => (1280, 1280),
            Self::Wide => (1280, 720),
            Self::Classic => (1280, 853),
            Self::Portrait => (1024, 1280),
        }
    }

    /// Display label, also used as the `<select>` option value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Wide => "16:9",
            Self::Classic => "3:2",
            Self::Portrait => "4:5",
        }
    }

    /// Parse a label back; unknown labels fall back to square output.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "16:9" => Self::Wide,
            "3:2" => Self::Classic,
            "4:5" => Self::Portrait,
            _ => Self::Square,
        }
    }
}

/// Body of `POST /sdxl/generate`. The tuning fields are fixed to the fast
/// four-step schedule the service runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub num_outputs: u32,
    pub scheduler: String,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
}

impl GenerateRequest {
    #[must_use]
    pub fn new(prompt: impl Into<String>, aspect: AspectRatio) -> Self {
        let (width, height) = aspect.dimensions();
        Self {
            prompt: prompt.into(),
            width,
            height,
            num_outputs: 1,
            scheduler: "K_EULER".to_owned(),
            num_inference_steps: 4,
            guidance_scale: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl GenerateResponse {
    /// # Errors
    ///
    /// Returns [`ApiError::Contract`] when `images` is absent.
    pub fn require_images(self) -> Result<Vec<String>, ApiError> {
        self.images
            .ok_or_else(|| ApiError::Contract("generate response missing images".to_owned()))
    }
}

// ── Image-to-video ──────────────────────────────────────────────

/// Body of `POST /video01/generate-video`. The image is optional; without
/// one the clip is generated from the prompt alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimateRequest<'a> {
    pub prompt: &'a str,
    pub image_url: Option<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnimateResponse {
    #[serde(default)]
    pub processed_video_url: Option<String>,
}

impl AnimateResponse {
    /// # Errors
    ///
    /// Returns [`ApiError::Contract`] when `processed_video_url` is absent.
    pub fn require_video(self) -> Result<String, ApiError> {
        self.processed_video_url.ok_or_else(|| {
            ApiError::Contract("video response missing processed_video_url".to_owned())
        })
    }
}

// ── Gallery lists ───────────────────────────────────────────────

/// `GET */images` response for features that pair an original with a
/// processed result under the `processed_url` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PairListResponse {
    #[serde(default)]
    pub images: Vec<PairEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PairEntry {
    pub original_url: String,
    /// Absent while processing has not completed.
    #[serde(default)]
    pub processed_url: Option<String>,
}

/// `GET /esrgan/images` response; processed results are keyed `enhanced_url`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnhanceListResponse {
    #[serde(default)]
    pub images: Vec<EnhanceEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnhanceEntry {
    pub original_url: String,
    #[serde(default)]
    pub enhanced_url: Option<String>,
}

/// `GET /gfpgan/list` response; processed results are keyed `restored_url`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RestoreListResponse {
    #[serde(default)]
    pub images: Vec<RestoreEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RestoreEntry {
    pub original_url: String,
    #[serde(default)]
    pub restored_url: Option<String>,
}

/// `GET /sdxl/images` response; generated images have no "original" side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeneratedListResponse {
    #[serde(default)]
    pub images: Vec<GeneratedEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedEntry {
    pub original_url: String,
}

/// `GET /video01/videos` response. Either side of a clip pair may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoEntry {
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub processed_url: Option<String>,
}
