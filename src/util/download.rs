//! Client-side file download via a transient anchor element.

/// Offer `data_url` to the user as a file download named `file_name`.
/// Pure client-side; no network call.
///
/// # Errors
///
/// Returns a message when no document is available or the anchor element
/// cannot be created.
pub fn save_data_url(data_url: &str, file_name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document available".to_owned())?;
        let anchor = doc
            .create_element("a")
            .map_err(|e| format!("anchor creation failed: {e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor has an unexpected type".to_owned())?;
        anchor.set_download(file_name);
        anchor.set_href(data_url);
        anchor.click();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (data_url, file_name);
        Err("not available on the server".to_owned())
    }
}
