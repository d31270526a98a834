//! Network-facing state for one upload-and-process session.
//!
//! Replaces the ambient "last uploaded id/url" globals of a naive frontend
//! with an explicit object owned by the page that uses it: created on
//! upload, replaced by the next upload, reset by navigation.
//!
//! RACE PROTECTION
//! ===============
//! Requests against the backend are unordered; a fast second upload can race
//! a slow first response. Every session-scoped request therefore captures
//! the session's generation number when it starts. Starting a new upload
//! bumps the generation, and a response is applied only if its captured
//! generation is still current, so stale responses are discarded instead of
//! clobbering a newer session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Remote session state: the server-issued identifier and URL of the image
/// being worked on, plus the in-flight request guard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoteSession {
    generation: u64,
    image_id: Option<String>,
    image_url: Option<String>,
    busy: bool,
}

impl RemoteSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new upload: bump the generation so in-flight responses for
    /// the previous session become stale. Returns the new generation.
    pub fn begin_upload(&mut self) -> u64 {
        self.generation += 1;
        self.busy = true;
        self.generation
    }

    /// Start a request that acts within the current session (no generation
    /// bump). Returns the generation to tag the response with.
    pub fn begin_request(&mut self) -> u64 {
        self.busy = true;
        self.generation
    }

    /// Start a submit, which requires an uploaded image. Returns the
    /// generation to tag the response with and the image id to submit, or
    /// `None` without touching any state when no upload has completed.
    pub fn begin_submit(&mut self) -> Option<(u64, String)> {
        let image_id = self.image_id.clone()?;
        self.busy = true;
        Some((self.generation, image_id))
    }

    /// Apply a finished upload. Returns `false` (leaving the session
    /// untouched) when the response is stale.
    pub fn complete_upload(
        &mut self,
        generation: u64,
        image_id: Option<&str>,
        image_url: &str,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.image_id = image_id.map(str::to_owned);
        self.image_url = Some(image_url.to_owned());
        self.busy = false;
        true
    }

    /// Apply a finished processing request by swapping in the processed
    /// URL. Returns `false` (leaving the session untouched) when stale.
    pub fn complete_submit(&mut self, generation: u64, processed_url: &str) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.image_url = Some(processed_url.to_owned());
        self.busy = false;
        true
    }

    /// A request finished without a state change (it failed). Clears the
    /// busy flag only if the request still owns the session.
    pub fn settle(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.busy = false;
        true
    }

    /// Whether a response tagged with `generation` may still be applied.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The server-issued opaque identifier of the uploaded image.
    #[must_use]
    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    /// URL of the image currently being displayed for this session.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Whether a request for this session is in flight.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy
    }
}
