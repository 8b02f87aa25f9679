//! Timers
//!
//! Fixed-period polling and one-shot delays tied to the lifetime of the
//! view that started them.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Whether the view that created it is still mounted. Create it in the
/// component body, where the reactive owner is known, and move clones into
/// async tasks: after an `.await` there is no owner to attach cleanup to.
#[derive(Clone, Debug)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    /// Lifetime of the current reactive owner
    pub fn current() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self(alive)
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Runs `f` once after `ms`, unless the view is gone by then
    pub fn after<F>(&self, ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        let lifetime = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            if lifetime.is_alive() {
                f();
            }
        });
    }
}

/// Runs `tick` immediately and then every `period_ms` until the owning view
/// is cleaned up. No backoff: a slow tick simply delays the next one.
pub fn poll_every<F, Fut>(period_ms: u32, mut tick: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let lifetime = Lifetime::current();
    spawn_local(async move {
        while lifetime.is_alive() {
            tick().await;
            TimeoutFuture::new(period_ms).await;
        }
    });
}

/// `after` on the current owner's lifetime. Without an owner (inside an
/// async task) the call always fires, so callers must check their own state.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Lifetime::current().after(ms, f);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_ends_with_its_owner() {
        let owner = Owner::new();
        let lifetime = owner.with(Lifetime::current);
        let held = lifetime.clone();
        assert!(held.is_alive());

        owner.cleanup();
        assert!(!lifetime.is_alive());
        assert!(!held.is_alive());
    }

    #[test]
    fn test_sibling_lifetimes_are_independent() {
        let first = Owner::new();
        let second = Owner::new();
        let a = first.with(Lifetime::current);
        let b = second.with(Lifetime::current);

        first.cleanup();
        assert!(!a.is_alive());
        assert!(b.is_alive());
    }
}
