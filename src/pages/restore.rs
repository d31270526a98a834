//! Face-restoration page: upload a damaged portrait and repair it.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::state::session::RemoteSession;
use crate::state::ui::UiState;

/// Face-restoration workspace.
#[component]
pub fn RestorePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = RwSignal::new(RemoteSession::new());
    let result = RwSignal::new(None::<String>);
    let gallery = LocalResource::new(|| crate::net::api::fetch_restored());

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
                match crate::net::api::upload_image("/gfpgan/upload", &file)
                    .await
                    .and_then(UploadResponse::require_both)
                {
                    Ok((image_id, image_url)) => {
                        let applied = session
                            .try_update(|s| {
                                s.complete_upload(generation, Some(&image_id), &image_url)
                            })
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

    let on_restore = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some((generation, image_id)) =
                session.try_update(RemoteSession::begin_submit).flatten()
            else {
                ui.update(|u| u.notify_error("Upload a portrait to restore first."));
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::restore(&image_id).await {
                    Ok(restored) => {
                        let current =
                            session.try_update(|s| s.settle(generation)).unwrap_or(false);
                        if current {
                            result.set(Some(restored));
                            gallery.refetch();
                        }
                    }
                    Err(err) => {
                        log::error!("restoration failed: {err}");
                        ui.update(|u| u.notify_error("Restoration failed."));
                        session.update(|s| {
                            s.settle(generation);
                        });
                    }
                }
            });
        }
    };

    let busy = move || session.get().busy();
    let restore_label = move || if busy() { "Restoring..." } else { "Restore" };

    view! {
        <div class="page restore-page">
            <header class="page__header">
                <h1>"Restore faces"</h1>
                <p class="page__hint">"Repair old or damaged portraits."</p>
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
                                    <img class="preview__img" src=url alt="Restored image"/>
                                    <figcaption>"Restored"</figcaption>
                                </figure>
                            }
                        })
                }}
            </div>

            <button class="btn btn--primary" prop:disabled=busy on:click=on_restore>
                {restore_label}
            </button>

            <section class="page__gallery">
                <h2>"Your restorations"</h2>
                <Suspense fallback=move || view! { <p>"Loading gallery..."</p> }>
                    {move || {
                        gallery
                            .get()
                            .map(|items| {
                                view! { <Gallery items=items empty_label="Nothing restored yet."/> }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
