//! Bottom status line for user-facing notices.
//!
//! Every failed backend call lands here as a dismissable notice instead of a
//! blocking alert. Error notices also auto-dismiss after a few seconds.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// How long a notice stays up before dismissing itself, in milliseconds.
#[cfg(feature = "hydrate")]
const NOTICE_TIMEOUT_MS: u32 = 5000;

/// Status bar at the bottom of every page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Auto-dismiss: when a notice appears, schedule its removal; if a newer
    // notice replaced it in the meantime, leave that one alone.
    Effect::new(move || {
        let Some(notice) = ui.get().notice else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                ui.update(|u| {
                    if u.notice.as_ref() == Some(&notice) {
                        u.notice = None;
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notice;
        }
    });

    let notice_class = move || match ui.get().notice {
        Some(n) if n.kind == NoticeKind::Error => "status-bar__notice status-bar__notice--error",
        Some(_) => "status-bar__notice status-bar__notice--info",
        None => "status-bar__notice",
    };

    let notice_text = move || ui.get().notice.map(|n| n.text).unwrap_or_default();

    let on_dismiss = move |_| ui.update(UiState::dismiss_notice);

    view! {
        <div class="status-bar">
            <span class=notice_class>{notice_text}</span>
            <span class="status-bar__spacer"></span>
            <Show when=move || ui.get().notice.is_some()>
                <button class="btn status-bar__dismiss" on:click=on_dismiss>
                    "\u{00d7}"
                </button>
            </Show>
        </div>
    }
}
