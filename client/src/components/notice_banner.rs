//! Toast-style banner for success and error notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any view can raise a notice through `UiState`; this banner is mounted once
//! by `App` and auto-dismisses each notice unless a newer one replaced it.

use leptos::prelude::*;

use crate::state::ui::{NoticeLevel, UiState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(seq) = ui.with(|u| u.notice.as_ref().map(|n| n.seq)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let timeout = u64::from(crate::state::ui::NOTICE_TIMEOUT_MS);
            gloo_timers::future::sleep(std::time::Duration::from_millis(timeout)).await;
            ui.update(|u| u.dismiss(seq));
        });
    });

    view! {
        {move || {
            ui.get()
                .notice
                .map(|notice| {
                    let seq = notice.seq;
                    let class = match notice.level {
                        NoticeLevel::Success => "notice notice--success",
                        NoticeLevel::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class role="status">
                            <strong class="notice__title">{notice.title}</strong>
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__close"
                                on:click=move |_| ui.update(|u| u.dismiss(seq))
                                aria-label="Dismiss"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
