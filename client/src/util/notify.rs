//! Console logging plus user-facing notices for REST outcomes.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::ui::UiState;

/// Log a failed call to the developer console and raise an error notice
/// with the backend's message, or `fallback` when it sent none.
pub fn report_failure(ui: RwSignal<UiState>, operation: &str, err: &ApiError, fallback: &str) {
    leptos::logging::error!("{operation} failed: {err}");
    let text = err.user_message(fallback);
    ui.update(|u| {
        u.error(&text);
    });
}

/// Log a failed call without bothering the user (background fetches).
pub fn log_failure(operation: &str, err: &ApiError) {
    leptos::logging::warn!("{operation} failed: {err}");
}

pub fn report_success(ui: RwSignal<UiState>, title: &str, text: &str) {
    ui.update(|u| {
        u.success(title, text);
    });
}
