//! Top navigation bar with feature links and the dark-mode toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Destinations shown in the navigation bar, in display order.
const LINKS: [(&str, &str); 6] = [
    ("/remove", "Remove"),
    ("/colorize", "Colorize"),
    ("/enhance", "Enhance"),
    ("/restore", "Restore"),
    ("/generate", "Generate"),
    ("/animate", "Animate"),
];

/// Site-wide navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = crate::util::dark_mode::toggle(u.dark_mode));
    };

    let toggle_label = move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263d}" };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Retouch"</a>
            <div class="nav-bar__links">
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=href class="nav-bar__link">{label}</a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <span class="nav-bar__spacer"></span>
            <button class="btn nav-bar__dark-toggle" title="Toggle dark mode" on:click=on_toggle_dark>
                {toggle_label}
            </button>
        </nav>
    }
}
