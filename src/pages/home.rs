//! Landing page: one card per studio feature.

use leptos::prelude::*;

/// Feature cards shown on the landing page, in display order.
const FEATURES: [(&str, &str, &str); 6] = [
    ("/remove", "Remove objects", "Paint over anything in a photo and erase it."),
    ("/colorize", "Colorize", "Bring black-and-white photos to life."),
    ("/enhance", "Enhance", "Upscale images, with an optional face pass."),
    ("/restore", "Restore faces", "Repair old or damaged portraits."),
    ("/generate", "Generate", "Create images from a text prompt."),
    ("/animate", "Animate", "Turn a photo and a prompt into a short clip."),
];

/// Landing page with links into every feature.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <header class="page__header">
                <h1>"Retouch"</h1>
                <p class="page__hint">"AI photo tools in the browser."</p>
            </header>
            <div class="home-page__cards">
                {FEATURES
                    .into_iter()
                    .map(|(href, title, blurb)| {
                        view! {
                            <a class="feature-card" href=href>
                                <h2 class="feature-card__title">{title}</h2>
                                <p class="feature-card__blurb">{blurb}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
