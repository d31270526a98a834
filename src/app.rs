//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::status_bar::StatusBar;
use crate::pages::{
    animate::AnimatePage, colorize::ColorizePage, enhance::EnhancePage, generate::GeneratePage,
    home::HomePage, remove::RemovePage, restore::RestorePage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI state context and sets up client-side routing;
/// each feature page owns its session and gallery state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Apply the stored dark-mode preference once on startup.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/retouch.css"/>
        <Title text="Retouch"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("remove") view=RemovePage/>
                    <Route path=StaticSegment("colorize") view=ColorizePage/>
                    <Route path=StaticSegment("enhance") view=EnhancePage/>
                    <Route path=StaticSegment("restore") view=RestorePage/>
                    <Route path=StaticSegment("generate") view=GeneratePage/>
                    <Route path=StaticSegment("animate") view=AnimatePage/>
                </Routes>
            </main>
            <StatusBar/>
        </Router>
    }
}
