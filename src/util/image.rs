//! Async decoding of remote images into `HtmlImageElement`s.

/// Decode the image at `url` into an element ready for canvas drawing.
///
/// Cross-origin loading is allowed so results served from object storage can
/// still be drawn and re-exported.
///
/// # Errors
///
/// Returns a message when the element cannot be created or the image fails
/// to decode.
pub async fn load(url: &str) -> Result<web_sys::HtmlImageElement, String> {
    #[cfg(feature = "hydrate")]
    {
        let img = web_sys::HtmlImageElement::new()
            .map_err(|e| format!("image element creation failed: {e:?}"))?;
        img.set_cross_origin(Some("anonymous"));
        img.set_src(url);
        wasm_bindgen_futures::JsFuture::from(img.decode())
            .await
            .map_err(|e| format!("image decode failed for {url}: {e:?}"))?;
        Ok(img)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on the server".to_owned())
    }
}
