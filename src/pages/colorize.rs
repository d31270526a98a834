//! Colorization page: upload a grayscale photo, request color, compare.
//!
//! Unlike the other features, colorization addresses the image by its
//! uploaded URL; the server issues no id the client needs to keep.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::state::session::RemoteSession;
use crate::state::ui::UiState;

/// Colorization workspace.
#[component]
pub fn ColorizePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = RwSignal::new(RemoteSession::new());
    let result = RwSignal::new(None::<String>);
    let gallery = LocalResource::new(|| crate::net::api::fetch_colorized());

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
                match crate::net::api::upload_image("/colorize/upload", &file)
                    .await
                    .and_then(UploadResponse::require_url)
                {
                    Ok(image_url) => {
                        let applied = session
                            .try_update(|s| s.complete_upload(generation, None, &image_url))
                            .unwrap_or(false);
                        if applied {
                            result.set(None);
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

    let on_colorize = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(image_url) = session.with_untracked(|s| s.image_url().map(str::to_owned))
            else {
                ui.update(|u| u.notify_error("Upload an image to colorize first."));
                return;
            };
            leptos::task::spawn_local(async move {
                let Some(generation) = session.try_update(RemoteSession::begin_request) else {
                    return;
                };
                match crate::net::api::colorize(&image_url).await {
                    Ok(processed) => {
                        let current =
                            session.try_update(|s| s.settle(generation)).unwrap_or(false);
                        if current {
                            result.set(Some(processed));
                            gallery.refetch();
                        }
                    }
                    Err(err) => {
                        log::error!("colorization failed: {err}");
                        ui.update(|u| u.notify_error("Colorization failed."));
                        session.update(|s| {
                            s.settle(generation);
                        });
                    }
                }
            });
        }
    };

    let busy = move || session.get().busy();
    let colorize_label = move || if busy() { "Colorizing..." } else { "Colorize" };

    view! {
        <div class="page colorize-page">
            <header class="page__header">
                <h1>"Colorize"</h1>
                <p class="page__hint">"Bring black-and-white photos to life."</p>
            </header>

            <label class="upload">
                "Upload image"
                <input type="file" accept="image/*" on:change=on_file/>
            </label>

            <div class="preview">
                {move || {
                    session
                        .with(|s| s.image_url().map(str::to_owned))
                        .map(|url| {
                            view! {
                                <figure class="preview__panel">
                                    <img class="preview__img" src=url alt="Uploaded image"/>
                                    <figcaption>"Original"</figcaption>
                                </figure>
                            }
                        })
                }}
                {move || {
                    result
                        .get()
                        .map(|url| {
                            view! {
                                <figure class="preview__panel">
                                    <img class="preview__img" src=url alt="Colorized image"/>
                                    <figcaption>"Colorized"</figcaption>
                                </figure>
                            }
                        })
                }}
            </div>

            <button class="btn btn--primary" prop:disabled=busy on:click=on_colorize>
                {colorize_label}
            </button>

            <section class="page__gallery">
                <h2>"Your colorizations"</h2>
                <Suspense fallback=move || view! { <p>"Loading gallery..."</p> }>
                    {move || {
                        gallery
                            .get()
                            .map(|items| {
                                view! { <Gallery items=items empty_label="Nothing colorized yet."/> }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
