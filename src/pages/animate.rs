//! Image-to-video page: an optional seed image plus a prompt produce a clip.

use leptos::prelude::*;

use crate::state::session::RemoteSession;
use crate::state::ui::UiState;

/// Video-generation workspace.
#[component]
pub fn AnimatePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = RwSignal::new(RemoteSession::new());
    let prompt = RwSignal::new(String::new());
    let clip = RwSignal::new(None::<String>);
    let videos = LocalResource::new(|| crate::net::api::fetch_videos());

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
                match crate::net::api::upload_image("/video01/upload", &file)
                    .await
                    .and_then(UploadResponse::require_url)
                {
                    Ok(image_url) => {
                        session.update(|s| {
                            s.complete_upload(generation, None, &image_url);
                        });
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
            let _ = file;
        }
    };

    let on_animate = move |_| {
        let text = prompt.get_untracked();
        if text.trim().is_empty() {
            ui.update(|u| u.notify_error("Describe the clip you want first."));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(generation) = session.try_update(RemoteSession::begin_request) else {
                    return;
                };
                let image_url = session.with_untracked(|s| s.image_url().map(str::to_owned));
                match crate::net::api::animate(text.trim(), image_url.as_deref()).await {
                    Ok(video_url) => {
                        let current =
                            session.try_update(|s| s.settle(generation)).unwrap_or(false);
                        if current {
                            clip.set(Some(video_url));
                            videos.refetch();
                        }
                    }
                    Err(err) => {
                        log::error!("video generation failed: {err}");
                        ui.update(|u| u.notify_error("Video generation failed."));
                        session.update(|s| {
                            s.settle(generation);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let busy = move || session.get().busy();
    let animate_label = move || if busy() { "Generating..." } else { "Generate clip" };

    view! {
        <div class="page animate-page">
            <header class="page__header">
                <h1>"Animate"</h1>
                <p class="page__hint">
                    "Turn a photo and a prompt into a short clip. The photo is optional."
                </p>
            </header>

            <label class="upload">
                "Seed image (optional)"
                <input type="file" accept="image/*" on:change=on_file/>
            </label>

            {move || {
                session
                    .with(|s| s.image_url().map(str::to_owned))
                    .map(|url| {
                        view! {
                            <img class="animate-page__seed" src=url alt="Seed image"/>
                        }
                    })
            }}

            <textarea
                class="animate-page__prompt"
                placeholder="Describe the clip..."
                prop:value=move || prompt.get()
                on:input=move |ev| prompt.set(event_target_value(&ev))
            ></textarea>

            <button class="btn btn--primary" prop:disabled=busy on:click=on_animate>
                {animate_label}
            </button>

            {move || {
                clip.get()
                    .map(|url| {
                        view! {
                            <video class="animate-page__clip" src=url controls=true></video>
                        }
                    })
            }}

            <section class="page__gallery">
                <h2>"Your clips"</h2>
                <Suspense fallback=move || view! { <p>"Loading clips..."</p> }>
                    {move || {
                        videos
                            .get()
                            .map(|clips| {
                                if clips.is_empty() {
                                    view! { <p class="gallery__empty">"No clips yet."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="clips">
                                            {clips
                                                .into_iter()
                                                .map(|entry| {
                                                    view! {
                                                        <div class="clips__pair">
                                                            {entry
                                                                .original_url
                                                                .map(|url| {
                                                                    view! {
                                                                        <video class="clips__video" src=url controls=true></video>
                                                                    }
                                                                })}
                                                            {entry
                                                                .processed_url
                                                                .map(|url| {
                                                                    view! {
                                                                        <video class="clips__video" src=url controls=true></video>
                                                                    }
                                                                })}
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
