//! Gallery of (original, processed) image pairs.

use leptos::prelude::*;

use crate::state::gallery::GalleryItem;

/// Renders a list of gallery items as original/processed pairs. An item
/// whose processing has not completed shows only the original side plus a
/// waiting label.
#[component]
pub fn Gallery(items: Vec<GalleryItem>, empty_label: &'static str) -> impl IntoView {
    view! {
        <div class="gallery">
            {if items.is_empty() {
                view! { <p class="gallery__empty">{empty_label}</p> }.into_any()
            } else {
                view! {
                    <div class="gallery__grid">
                        {items
                            .into_iter()
                            .map(|item| view! { <GalleryPair item/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

/// One gallery row.
#[component]
fn GalleryPair(item: GalleryItem) -> impl IntoView {
    view! {
        <div class="gallery__pair">
            <img class="gallery__img" src=item.original_url.clone() alt="Original"/>
            {match item.processed_url {
                Some(url) => {
                    view! { <img class="gallery__img" src=url alt="Processed"/> }.into_any()
                }
                None => {
                    view! { <span class="gallery__pending">"Still processing"</span> }.into_any()
                }
            }}
        </div>
    }
}
