//! File-input helpers.

/// The first file selected in a file-input change event, if any.
#[must_use]
pub fn first_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let input = ev
            .target()?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?;
        input.files()?.item(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
