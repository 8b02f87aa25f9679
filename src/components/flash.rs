//! Flash Banners
//!
//! Success and error messages that clear themselves after a few seconds.

use leptos::prelude::*;
use smart_menu_core::config::FLASH_MS;

use crate::poll;

/// Pair of banner slots owned by one page
#[derive(Clone, Copy)]
pub struct Flash {
    success: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    /// Bumped on every new message so an older timer does not clear a newer one
    generation: RwSignal<u32>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            success: RwSignal::new(None),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.error.set(None);
        self.success.set(Some(message.into()));
        self.schedule_clear();
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::warn_1(&format!("[UI] {}", message).into());
        self.success.set(None);
        self.error.set(Some(message));
        self.schedule_clear();
    }

    pub fn clear(&self) {
        self.success.set(None);
        self.error.set(None);
    }

    fn schedule_clear(&self) {
        self.generation.update(|g| *g = g.wrapping_add(1));
        let issued = self.generation.try_get_untracked();
        let this = *self;
        poll::after(FLASH_MS, move || {
            if issued.is_some() && this.generation.try_get_untracked() == issued {
                this.clear();
            }
        });
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FlashBanner(flash: Flash) -> impl IntoView {
    view! {
        {move || flash.success.get().map(|msg| view! {
            <div class="alert alert-success" role="status">
                <span>{msg}</span>
                <button class="alert-close" on:click=move |_| flash.clear()>"×"</button>
            </div>
        })}
        {move || flash.error.get().map(|msg| view! {
            <div class="alert alert-error" role="alert">
                <span>{msg}</span>
                <button class="alert-close" on:click=move |_| flash.clear()>"×"</button>
            </div>
        })}
    }
}
