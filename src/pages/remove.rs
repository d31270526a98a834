//! Object-removal page: the mask-painting edit session.
//!
//! Composes the upload input, brush controls, the canvas bridge, and the
//! gallery of past edits. The page owns the session and the command channel
//! into the canvas; the bridge owns the engine and the submit side effects.

use leptos::prelude::*;

use crate::components::brush_controls::BrushControls;
use crate::components::canvas_host::{CanvasHost, EditorCommand};
use crate::components::gallery::Gallery;
use crate::state::session::RemoteSession;
use crate::state::ui::UiState;

/// Object-removal workspace.
#[component]
pub fn RemovePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = RwSignal::new(RemoteSession::new());
    let command = RwSignal::new(None::<EditorCommand>);
    let edits = LocalResource::new(|| crate::net::api::fetch_edits());
    let on_processed = Callback::new(move |()| edits.refetch());

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = crate::util::files::first_file(&ev) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::UploadResponse;

            leptos::task::spawn_local(async move {
                let Some(generation) = session.try_update(RemoteSession::begin_upload) else {
                    return;
                };
                match crate::net::api::upload_image("/lama/upload", &file)
                    .await
                    .and_then(UploadResponse::require_both)
                {
                    Ok((image_id, image_url)) => {
                        let applied = session
                            .try_update(|s| {
                                s.complete_upload(generation, Some(&image_id), &image_url)
                            })
                            .unwrap_or(false);
                        // A stale response is dropped; a newer upload owns
                        // the canvases now.
                        if applied {
                            command.set(Some(EditorCommand::Load {
                                generation,
                                image_id,
                                image_url,
                            }));
                        }
                    }
                    Err(err) => {
                        log::error!("image upload failed: {err}");
                        ui.update(|u| u.notify_error("Image upload failed."));
                        session.update(|s| {
                            s.settle(generation);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (file, ui);
        }
    };

    view! {
        <div class="page remove-page">
            <header class="page__header">
                <h1>"Remove objects"</h1>
                <p class="page__hint">
                    "Upload a photo, paint over what should disappear, then remove it."
                </p>
            </header>

            <label class="upload">
                "Upload image"
                <input type="file" accept="image/*" on:change=on_file/>
            </label>

            <BrushControls session=session command=command/>
            <CanvasHost session=session command=command on_processed=on_processed/>

            <section class="page__gallery">
                <h2>"Your edits"</h2>
                <Suspense fallback=move || view! { <p>"Loading edits..."</p> }>
                    {move || {
                        edits
                            .get()
                            .map(|items| view! { <Gallery items=items empty_label="No edits yet."/> })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
