//! Super-resolution page: upload, pick a scale factor, enhance.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::state::session::RemoteSession;
use crate::state::ui::UiState;

/// Upscaling factors the backend accepts.
const SCALES: [u32; 2] = [2, 4];

/// Super-resolution workspace.
#[component]
pub fn EnhancePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = RwSignal::new(RemoteSession::new());
    let scale = RwSignal::new(4_u32);
    let face_enhance = RwSignal::new(false);
    let result = RwSignal::new(None::<String>);
    let gallery = LocalResource::new(|| crate::net::api::fetch_enhanced());

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
                match crate::net::api::upload_image("/esrgan/upload", &file)
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

    let on_enhance = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some((generation, image_id)) =
                session.try_update(RemoteSession::begin_submit).flatten()
            else {
                ui.update(|u| u.notify_error("Upload an image to enhance first."));
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::enhance(
                    &image_id,
                    scale.get_untracked(),
                    face_enhance.get_untracked(),
                )
                .await
                {
                    Ok(enhanced) => {
                        let current =
                            session.try_update(|s| s.settle(generation)).unwrap_or(false);
                        if current {
                            result.set(Some(enhanced));
                            gallery.refetch();
                        }
                    }
                    Err(err) => {
                        log::error!("enhancement failed: {err}");
                        ui.update(|u| u.notify_error("Enhancement failed."));
                        session.update(|s| {
                            s.settle(generation);
                        });
                    }
                }
            });
        }
    };

    let on_scale = move |ev| {
        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
            scale.set(value);
        }
    };

    let busy = move || session.get().busy();
    let enhance_label = move || if busy() { "Enhancing..." } else { "Enhance" };

    view! {
        <div class="page enhance-page">
            <header class="page__header">
                <h1>"Enhance"</h1>
                <p class="page__hint">"Upscale images, with an optional face pass."</p>
            </header>

            <label class="upload">
                "Upload image"
                <input type="file" accept="image/*" on:change=on_file/>
            </label>

            <div class="enhance-page__options">
                <label class="enhance-page__scale">
                    "Scale"
                    <select on:change=on_scale>
                        {SCALES
                            .into_iter()
                            .map(|factor| {
                                view! {
                                    <option
                                        value=factor
                                        prop:selected=move || scale.get() == factor
                                    >
                                        {format!("{factor}x")}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="enhance-page__face">
                    <input
                        type="checkbox"
                        prop:checked=move || face_enhance.get()
                        on:change=move |ev| face_enhance.set(event_target_checked(&ev))
                    />
                    "Enhance faces"
                </label>
            </div>

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
                                    <img class="preview__img" src=url alt="Enhanced image"/>
                                    <figcaption>"Enhanced"</figcaption>
                                </figure>
                            }
                        })
                }}
            </div>

            <button class="btn btn--primary" prop:disabled=busy on:click=on_enhance>
                {enhance_label}
            </button>

            <section class="page__gallery">
                <h2>"Your enhancements"</h2>
                <Suspense fallback=move || view! { <p>"Loading gallery..."</p> }>
                    {move || {
                        gallery
                            .get()
                            .map(|items| {
                                view! { <Gallery items=items empty_label="Nothing enhanced yet."/> }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
