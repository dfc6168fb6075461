//! Modal dialog asking for a single text value (title, description, username).

#[cfg(test)]
#[path = "prompt_dialog_test.rs"]
mod prompt_dialog_test;

use leptos::prelude::*;

/// Submitted value, or `None` when the input is blank (treated as cancel).
pub(crate) fn prompt_result(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Dialog with one text field, pre-filled from `value`.
#[component]
pub fn PromptDialog(
    #[prop(into)] title: String,
    value: RwSignal<String>,
    #[prop(optional)] multiline: bool,
    on_cancel: Callback<()>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let submit = Callback::new(move |()| match prompt_result(&value.get_untracked()) {
        Some(text) => on_submit.run(text),
        None => on_cancel.run(()),
    });

    let field = if multiline {
        view! {
            <textarea
                class="dialog__textarea"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                autofocus=true
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="dialog__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.run(());
                    }
                }
                autofocus=true
            />
        }
        .into_any()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">{field}</label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
