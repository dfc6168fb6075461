//! `/` sends each session phase to its start page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::root_target;

#[component]
pub fn RootPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        navigate(
            root_target(state.session.phase()),
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });

    view! {
        <div class="page">
            <p class="page__status">"Loading..."</p>
        </div>
    }
}
