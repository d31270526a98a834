//! Tool strip for the edit-session page: brush arming, brush size, and the
//! clear / remove / download actions.

use leptos::prelude::*;

use easel::brush::Tool;
use easel::consts::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

use crate::components::canvas_host::EditorCommand;
use crate::state::session::RemoteSession;
use crate::state::ui::UiState;

/// Controls issuing [`EditorCommand`]s against the canvas bridge.
#[component]
pub fn BrushControls(
    session: RwSignal<RemoteSession>,
    command: RwSignal<Option<EditorCommand>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let brush_armed = move || ui.get().active_tool == Tool::Brush;
    let brush_class = move || {
        if brush_armed() {
            "btn brush-controls__tool brush-controls__tool--active"
        } else {
            "btn brush-controls__tool"
        }
    };

    let on_brush = move |_| ui.update(|u| u.active_tool = Tool::Brush);

    let on_size = move |ev| {
        if let Ok(size) = event_target_value(&ev).parse::<f64>() {
            ui.update(|u| u.brush_size = size);
        }
    };

    let busy = move || session.get().busy();
    let remove_label = move || if busy() { "Removing..." } else { "Remove object" };

    view! {
        <div class="brush-controls">
            <button class=brush_class on:click=on_brush title="Paint over the objects to remove">
                "Brush"
            </button>
            <label class="brush-controls__size">
                "Size"
                <input
                    type="range"
                    min=MIN_BRUSH_SIZE
                    max=MAX_BRUSH_SIZE
                    step="1"
                    prop:value=move || ui.get().brush_size
                    on:input=on_size
                />
            </label>
            <button class="btn" on:click=move |_| command.set(Some(EditorCommand::Clear))>
                "Clear"
            </button>
            <button
                class="btn btn--primary"
                prop:disabled=busy
                on:click=move |_| command.set(Some(EditorCommand::Submit))
            >
                {remove_label}
            </button>
            <button class="btn" on:click=move |_| command.set(Some(EditorCommand::Download))>
                "Download"
            </button>
        </div>
    }
}
