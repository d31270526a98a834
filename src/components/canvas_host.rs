//! Bridge component between the Leptos UI and the imperative `easel::Engine`.
//!
//! Mounts the stacked display/mask `<canvas>` pair, creates the engine once
//! both elements exist, wires pointer events into it, and executes
//! [`EditorCommand`]s queued by the toolbar: loading uploads, clearing,
//! submitting the mask for object removal, and downloading the result.
//!
//! Network side effects live here rather than in the engine: the engine owns
//! pixels and session geometry, this component owns the calls that consume
//! them and the generation checks that discard stale responses.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::session::RemoteSession;
use crate::state::ui::UiState;

/// File name used when exporting the display canvas.
const EDITED_FILE_NAME: &str = "edited_image.png";

/// Engine slot shared between effects and event handlers. Empty until the
/// canvas elements mount.
type SharedEngine = Rc<RefCell<Option<easel::engine::Engine>>>;

/// Imperative operations the toolbar and page can queue against the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Load a freshly uploaded image into the session.
    Load { generation: u64, image_id: String, image_url: String },
    /// Reset mask accumulation and repaint the original image.
    Clear,
    /// Submit the painted mask for object removal.
    Submit,
    /// Save the displayed image as a PNG file.
    Download,
}

/// Canvas host for the edit session.
#[component]
pub fn CanvasHost(
    session: RwSignal<RemoteSession>,
    command: RwSignal<Option<EditorCommand>>,
    /// Invoked exactly once per successfully applied edit result, so the
    /// page can refresh its gallery.
    on_processed: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let display_ref = NodeRef::<leptos::html::Canvas>::new();
    let mask_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    // Create the engine once both canvas elements are mounted.
    {
        let engine = engine.clone();
        Effect::new(move || {
            if engine.borrow().is_some() {
                return;
            }
            let (Some(display), Some(mask)) = (display_ref.get(), mask_ref.get()) else {
                return;
            };
            match easel::engine::Engine::new(display, mask) {
                Ok(built) => *engine.borrow_mut() = Some(built),
                Err(err) => log::error!("canvas engine init failed: {err:?}"),
            }
        });
    }

    // Keep the engine's tool state in sync with the UI signals.
    {
        let engine = engine.clone();
        Effect::new(move || {
            let u = ui.get();
            if let Some(e) = engine.borrow_mut().as_mut() {
                e.set_tool(u.active_tool);
                e.set_brush_size(u.brush_size);
            }
        });
    }

    // Execute queued editor commands.
    {
        let engine = engine.clone();
        Effect::new(move || {
            let Some(cmd) = command.get() else {
                return;
            };
            *command.write_untracked() = None;
            match cmd {
                EditorCommand::Load { generation, image_id, image_url } => {
                    run_load(&engine, session, ui, generation, image_id, image_url);
                }
                EditorCommand::Clear => run_clear(&engine),
                EditorCommand::Submit => run_submit(&engine, session, ui, on_processed),
                EditorCommand::Download => run_download(&engine, ui),
            }
        });
    }

    // Pointer wiring. Only the display canvas receives events; the mask
    // canvas stays off-screen and is written through the engine.
    let on_pointer_down = {
        let engine = engine.clone();
        move |_ev: leptos::ev::PointerEvent| {
            if let Some(e) = engine.borrow_mut().as_mut() {
                e.pointer_down();
            }
        }
    };
    let on_pointer_move = {
        let engine = engine.clone();
        move |ev: leptos::ev::PointerEvent| {
            if let Some(e) = engine.borrow_mut().as_mut() {
                let pt = easel::geom::Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                if let Err(err) = e.pointer_move(pt) {
                    log::error!("stroke painting failed: {err:?}");
                }
            }
        }
    };
    let on_pointer_up = {
        let engine = engine.clone();
        move |_ev: leptos::ev::PointerEvent| {
            if let Some(e) = engine.borrow_mut().as_mut() {
                e.pointer_up();
            }
        }
    };
    let on_pointer_leave = {
        let engine = engine.clone();
        move |_ev: leptos::ev::PointerEvent| {
            if let Some(e) = engine.borrow_mut().as_mut() {
                e.pointer_up();
            }
        }
    };

    view! {
        <div class="canvas-host">
            <canvas
                class="canvas-host__display"
                node_ref=display_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            >
                "Your browser does not support canvas."
            </canvas>
            <canvas class="canvas-host__mask" node_ref=mask_ref></canvas>
        </div>
    }
}

/// Decode an uploaded image and load it into the engine, unless the session
/// moved on while the image was decoding.
fn run_load(
    engine: &SharedEngine,
    session: RwSignal<RemoteSession>,
    ui: RwSignal<UiState>,
    generation: u64,
    image_id: String,
    image_url: String,
) {
    #[cfg(feature = "hydrate")]
    {
        let engine = engine.clone();
        leptos::task::spawn_local(async move {
            match crate::util::image::load(&image_url).await {
                Ok(img) => {
                    if !session.with_untracked(|s| s.is_current(generation)) {
                        return;
                    }
                    if let Some(e) = engine.borrow_mut().as_mut() {
                        if let Err(err) = e.load_image(&image_id, &img) {
                            log::error!("loading image into canvas failed: {err:?}");
                            ui.update(|u| u.notify_error("Could not display the uploaded image."));
                        }
                    }
                }
                Err(err) => {
                    log::error!("{err}");
                    ui.update(|u| u.notify_error("Could not load the uploaded image."));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (engine, session, ui, generation, image_id, image_url);
    }
}

/// Serialize the mask, post it with the session's image id, and swap in the
/// processed result. Applies nothing when the response is malformed or the
/// session has been superseded.
fn run_submit(
    engine: &SharedEngine,
    session: RwSignal<RemoteSession>,
    ui: RwSignal<UiState>,
    on_processed: Callback<()>,
) {
    // Submitting without an uploaded image is reported and never reaches
    // the network.
    let Some((generation, image_id)) = session.try_update(RemoteSession::begin_submit).flatten()
    else {
        ui.update(|u| u.notify_error("Upload an image before removing objects."));
        return;
    };

    // Serialize the mask before anything asynchronous happens.
    let mask_data = {
        let engine_ref = engine.borrow();
        let Some(e) = engine_ref.as_ref() else {
            session.update(|s| {
                s.settle(generation);
            });
            return;
        };
        match e.mask_data_url() {
            Ok(data) => data,
            Err(err) => {
                log::error!("mask encoding failed: {err:?}");
                ui.update(|u| u.notify_error("Could not encode the mask."));
                session.update(|s| {
                    s.settle(generation);
                });
                return;
            }
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let engine = engine.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_object(&image_id, &mask_data).await {
                Ok(processed_url) => match crate::util::image::load(&processed_url).await {
                    Ok(img) => {
                        if !session.with_untracked(|s| s.is_current(generation)) {
                            return;
                        }
                        if let Some(e) = engine.borrow_mut().as_mut() {
                            if let Err(err) = e.apply_result(&img) {
                                log::error!("applying processed image failed: {err:?}");
                            }
                        }
                        session.update(|s| {
                            s.complete_submit(generation, &processed_url);
                        });
                        on_processed.run(());
                    }
                    Err(err) => {
                        log::error!("{err}");
                        ui.update(|u| u.notify_error("Could not load the processed image."));
                        session.update(|s| {
                            s.settle(generation);
                        });
                    }
                },
                Err(err) => {
                    log::error!("object removal failed: {err}");
                    ui.update(|u| u.notify_error("Object removal failed."));
                    session.update(|s| {
                        s.settle(generation);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mask_data, image_id, generation, on_processed);
    }
}

/// Reset the mask and repaint the original image.
fn run_clear(engine: &SharedEngine) {
    if let Some(e) = engine.borrow_mut().as_mut() {
        if let Err(err) = e.clear() {
            log::error!("clearing canvases failed: {err:?}");
        }
    }
}

/// Export the display canvas and hand it to the browser as a download.
fn run_download(engine: &SharedEngine, ui: RwSignal<UiState>) {
    let data_url = {
        let engine_ref = engine.borrow();
        let Some(e) = engine_ref.as_ref() else {
            return;
        };
        match e.display_data_url() {
            Ok(url) => url,
            Err(err) => {
                log::error!("canvas export failed: {err:?}");
                ui.update(|u| u.notify_error("Could not export the image."));
                return;
            }
        }
    };
    if let Err(err) = crate::util::download::save_data_url(&data_url, EDITED_FILE_NAME) {
        log::error!("download failed: {err}");
        ui.update(|u| u.notify_error("Could not start the download."));
    }
}
