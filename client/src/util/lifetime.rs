//! Liveness flag tying async requests to the view that issued them.
//!
//! A request spawned from a view keeps running after the view unmounts.
//! Checking `is_alive` before touching shared state makes late responses
//! no-ops instead of stale writes into another view's data.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl ViewLifetime {
    /// A lifetime that ends when the current reactive owner is cleaned up.
    pub fn for_current_view() -> Self {
        let lifetime = Self::default();
        let handle = lifetime.clone();
        leptos::prelude::on_cleanup(move || handle.end());
        lifetime
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
