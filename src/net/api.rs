//! REST API helpers for communicating with the image service backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors or empty lists since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Mutating calls return `Result<_, ApiError>` with the contract already
//! checked, so pages can report what failed and apply nothing on a malformed
//! body. Gallery list fetches log and degrade to an empty list instead; a
//! flaky backend never breaks the page.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{GenerateRequest, UploadResponse, VideoEntry};
use crate::state::gallery::GalleryItem;

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Transport(format!("{url} returned {}", resp.status())));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Transport(format!("{url} returned {}", resp.status())));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_only() -> ApiError {
    ApiError::Transport("not available on the server".to_owned())
}

// ── Upload ──────────────────────────────────────────────────────

/// Upload an image file as a multipart form to a feature's upload endpoint.
/// The caller checks the success fields its feature requires.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] on network failure, a non-2xx status, or
/// an undecodable body.
pub async fn upload_image(endpoint: &str, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Transport(format!("form construction failed: {e:?}")))?;
        form.append_with_blob("image", file)
            .map_err(|e| ApiError::Transport(format!("form construction failed: {e:?}")))?;
        let resp = gloo_net::http::Request::post(endpoint)
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Transport(format!("{endpoint} returned {}", resp.status())));
        }
        resp.json::<UploadResponse>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, file);
        Err(server_only())
    }
}

// ── Object removal ──────────────────────────────────────────────

/// Submit the painted mask for object removal. Returns the processed URL.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] on network failure or
/// [`ApiError::Contract`] when the response lacks `processed_url`.
pub async fn remove_object(image_id: &str, mask_data: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::RemoveObjectRequest { image_id, mask_data };
        post_json::<_, super::types::RemoveObjectResponse>("/lama/remove-object", &body)
            .await?
            .require_processed()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (image_id, mask_data);
        Err(server_only())
    }
}

/// Fetch the user's past object removals, oldest first as the server lists
/// them. Degrades to an empty gallery on failure.
pub async fn fetch_edits() -> Vec<GalleryItem> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<super::types::PairListResponse>("/lama/images").await {
            Ok(resp) => resp.images.into_iter().map(GalleryItem::from).collect(),
            Err(err) => {
                log::error!("failed to fetch edit gallery: {err}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

// ── Colorization ────────────────────────────────────────────────

/// Request colorization of an uploaded image by its URL.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] on network failure or
/// [`ApiError::Contract`] when the response lacks `processed_image_url`.
pub async fn colorize(image_url: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ColorizeRequest { image_url };
        post_json::<_, super::types::ColorizeResponse>("/colorize/colorize", &body)
            .await?
            .require_processed()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image_url;
        Err(server_only())
    }
}

/// Fetch the user's colorization history.
pub async fn fetch_colorized() -> Vec<GalleryItem> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<super::types::PairListResponse>("/colorize/images").await {
            Ok(resp) => resp.images.into_iter().map(GalleryItem::from).collect(),
            Err(err) => {
                log::error!("failed to fetch colorize gallery: {err}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

// ── Super-resolution ────────────────────────────────────────────

/// Request super-resolution of an uploaded image.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] on network failure or
/// [`ApiError::Contract`] when the response lacks `enhanced_url`.
pub async fn enhance(image_id: &str, scale: u32, face_enhance: bool) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::EnhanceRequest { image_id, scale, face_enhance };
        post_json::<_, super::types::EnhanceResponse>("/esrgan/enhance", &body)
            .await?
            .require_enhanced()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (image_id, scale, face_enhance);
        Err(server_only())
    }
}

/// Fetch the user's super-resolution history.
pub async fn fetch_enhanced() -> Vec<GalleryItem> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<super::types::EnhanceListResponse>("/esrgan/images").await {
            Ok(resp) => resp.images.into_iter().map(GalleryItem::from).collect(),
            Err(err) => {
                log::error!("failed to fetch enhance gallery: {err}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

// ── Face restoration ────────────────────────────────────────────

/// Request face restoration of an uploaded image.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] on network failure or
/// [`ApiError::Contract`] when the response lacks `restored_url`.
pub async fn restore(image_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::RestoreRequest { image_id };
        post_json::<_, super::types::RestoreResponse>("/gfpgan/restore", &body)
            .await?
            .require_restored()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image_id;
        Err(server_only())
    }
}

/// Fetch the user's restoration history.
pub async fn fetch_restored() -> Vec<GalleryItem> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<super::types::RestoreListResponse>("/gfpgan/list").await {
            Ok(resp) => resp.images.into_iter().map(GalleryItem::from).collect(),
            Err(err) => {
                log::error!("failed to fetch restore gallery: {err}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

// ── Text-to-image ───────────────────────────────────────────────

/// Request image generation from a text prompt.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] on network failure or
/// [`ApiError::Contract`] when the response lacks `images`.
pub async fn generate(request: &GenerateRequest) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<_, super::types::GenerateResponse>("/sdxl/generate", request)
            .await?
            .require_images()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(server_only())
    }
}

/// Fetch the user's generated images.
pub async fn fetch_generated() -> Vec<GalleryItem> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<super::types::GeneratedListResponse>("/sdxl/images").await {
            Ok(resp) => resp.images.into_iter().map(GalleryItem::from).collect(),
            Err(err) => {
                log::error!("failed to fetch generated gallery: {err}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

// ── Image-to-video ──────────────────────────────────────────────

/// Request video generation from a prompt, optionally seeded with an
/// uploaded image.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] on network failure or
/// [`ApiError::Contract`] when the response lacks `processed_video_url`.
pub async fn animate(prompt: &str, image_url: Option<&str>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::AnimateRequest { prompt, image_url };
        post_json::<_, super::types::AnimateResponse>("/video01/generate-video", &body)
            .await?
            .require_video()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (prompt, image_url);
        Err(server_only())
    }
}

/// Fetch the user's generated clips.
pub async fn fetch_videos() -> Vec<VideoEntry> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<super::types::VideoListResponse>("/video01/videos").await {
            Ok(resp) => resp.videos,
            Err(err) => {
                log::error!("failed to fetch video gallery: {err}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
