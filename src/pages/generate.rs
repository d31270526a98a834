//! Text-to-image page: prompt plus aspect-ratio preset in, gallery out.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::net::types::AspectRatio;
use crate::state::ui::UiState;

/// Text-to-image workspace.
#[component]
pub fn GeneratePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let prompt = RwSignal::new(String::new());
    let aspect = RwSignal::new(AspectRatio::default());
    let busy = RwSignal::new(false);
    let gallery = LocalResource::new(|| crate::net::api::fetch_generated());

    let on_generate = move |_| {
        let text = prompt.get_untracked();
        if text.trim().is_empty() {
            ui.update(|u| u.notify_error("Describe the image you want first."));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::GenerateRequest;

            leptos::task::spawn_local(async move {
                busy.set(true);
                let request = GenerateRequest::new(text.trim(), aspect.get_untracked());
                match crate::net::api::generate(&request).await {
                    Ok(images) => {
                        log::info!("generated {} image(s)", images.len());
                        ui.update(|u| u.notify_info("Image generated."));
                        gallery.refetch();
                    }
                    Err(err) => {
                        log::error!("image generation failed: {err}");
                        ui.update(|u| u.notify_error("Image generation failed."));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let on_aspect = move |ev| {
        aspect.set(AspectRatio::from_label(&event_target_value(&ev)));
    };

    let generate_label = move || if busy.get() { "Generating..." } else { "Generate" };

    view! {
        <div class="page generate-page">
            <header class="page__header">
                <h1>"Generate"</h1>
                <p class="page__hint">"Create images from a text prompt."</p>
            </header>

            <textarea
                class="generate-page__prompt"
                placeholder="Describe the image..."
                prop:value=move || prompt.get()
                on:input=move |ev| prompt.set(event_target_value(&ev))
            ></textarea>

            <div class="generate-page__options">
                <label class="generate-page__aspect">
                    "Aspect ratio"
                    <select on:change=on_aspect>
                        {AspectRatio::ALL
                            .into_iter()
                            .map(|ratio| {
                                view! {
                                    <option
                                        value=ratio.label()
                                        prop:selected=move || aspect.get() == ratio
                                    >
                                        {ratio.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || busy.get()
                    on:click=on_generate
                >
                    {generate_label}
                </button>
            </div>

            <section class="page__gallery">
                <h2>"Your images"</h2>
                <Suspense fallback=move || view! { <p>"Loading gallery..."</p> }>
                    {move || {
                        gallery
                            .get()
                            .map(|items| {
                                view! { <Gallery items=items empty_label="Nothing generated yet."/> }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
