//! Hooks that feed page-level browser events (scroll, keydown) into component
//! state, plus the shared body scroll lock.
//!
//! Browser callbacks never touch signals directly: they push into a coroutine
//! channel and the coroutine applies the update inside the Dioxus runtime.

use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::keys::NavKey;
use crate::core::platform;
use crate::core::scroll_lock::ScrollLock;

/// Vertical page offset, refreshed on every window scroll.
pub fn use_scroll_offset() -> Signal<f64> {
    let offset = use_signal(platform::scroll_offset);

    let updates = use_coroutine(move |mut rx: UnboundedReceiver<f64>| {
        let mut offset_signal = offset;
        async move {
            while let Some(y) = rx.next().await {
                offset_signal.set(y);
            }
        }
    });

    use_hook(move || {
        let tx = updates.tx();
        let listener = platform::on_window_scroll(move |y| {
            let _ = tx.unbounded_send(y);
        })
        .map_err(|err| debug!("scroll listener not installed: {err}"))
        .ok();
        Rc::new(listener)
    });

    offset
}

/// Route document-level Escape/arrow presses to `on_key`.
pub fn use_document_keys(on_key: Callback<NavKey>) {
    let keys = use_coroutine(move |mut rx: UnboundedReceiver<NavKey>| async move {
        while let Some(key) = rx.next().await {
            on_key.call(key);
        }
    });

    use_hook(move || {
        let tx = keys.tx();
        let listener = platform::on_document_keydown(move |name| {
            let key = NavKey::from_key_name(&name);
            if key != NavKey::Other {
                let _ = tx.unbounded_send(key);
            }
        })
        .map_err(|err| debug!("keydown listener not installed: {err}"))
        .ok();
        Rc::new(listener)
    });
}

/// App-wide scroll lock, mirrored onto `<body>` whenever it changes.
pub fn use_scroll_lock_provider() -> Signal<ScrollLock> {
    let lock = use_signal(ScrollLock::default);
    use_context_provider(|| lock);

    use_effect(move || {
        let locked = lock.read().is_locked();
        if let Err(err) = platform::set_body_scroll_locked(locked) {
            debug!("body scroll lock not applied: {err}");
        }
    });

    lock
}

/// The shared scroll lock, or a private one when no provider is mounted.
pub fn use_scroll_lock() -> Signal<ScrollLock> {
    let local = use_signal(ScrollLock::default);
    try_use_context::<Signal<ScrollLock>>().unwrap_or(local)
}
