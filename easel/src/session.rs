//! Edit-session state: the loaded image and its server-side identifier.
//!
//! A session begins when an upload succeeds and the server hands back an
//! opaque image id. The server's stored image is the source of truth; the
//! client holds a cached, decoded copy for display. The session is replaced
//! by the next upload and its image swapped by each edit result. There is no
//! explicit teardown short of leaving the page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// A decoded image known to the canvases: its source URL and natural size.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    /// URL the image was decoded from.
    pub url: String,
    /// Natural width in pixels.
    pub width: f64,
    /// Natural height in pixels.
    pub height: f64,
}

impl ImageRef {
    #[must_use]
    pub fn new(url: impl Into<String>, width: f64, height: f64) -> Self {
        Self { url: url.into(), width, height }
    }
}

/// The client-side working state for one image between upload and download.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    remote_image_id: Option<String>,
    image: Option<ImageRef>,
}

impl EditSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from a successful upload, replacing any prior one.
    pub fn begin(&mut self, remote_image_id: impl Into<String>, image: ImageRef) {
        self.remote_image_id = Some(remote_image_id.into());
        self.image = Some(image);
    }

    /// Swap in an edit result. The remote id still refers to the originally
    /// uploaded image, so it is kept.
    pub fn replace_image(&mut self, image: ImageRef) {
        self.image = Some(image);
    }

    /// Drop all session state.
    pub fn reset(&mut self) {
        self.remote_image_id = None;
        self.image = None;
    }

    /// The server-issued identifier for the uploaded image, if any.
    #[must_use]
    pub fn remote_image_id(&self) -> Option<&str> {
        self.remote_image_id.as_deref()
    }

    /// The currently displayed image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Canvas dimensions implied by the loaded image.
    #[must_use]
    pub fn canvas_size(&self) -> Option<(f64, f64)> {
        self.image.as_ref().map(|img| (img.width, img.height))
    }
}
