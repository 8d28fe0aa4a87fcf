//! Browser bridge. Everything here talks to `web-sys` on wasm and degrades to
//! `SiteError::Unsupported` (or a neutral value) on other targets, so views can
//! call it unconditionally and treat failures as "behaviour not available".

use std::future::Future;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::core::reveal::IntersectionSample;
use crate::error::{Result, SiteError};

pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn(future);
    }
}

#[cfg(target_arch = "wasm32")]
fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(SiteError::Missing("window"))
}

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(SiteError::Missing("document"))
}

/// Current vertical page offset; `0.0` where there is no page.
pub fn scroll_offset() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

pub fn scroll_to_smooth(top: f64) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = top;
        Err(SiteError::Unsupported)
    }
}

/// Toggle `overflow: hidden` on `<body>`.
pub fn set_body_scroll_locked(locked: bool) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        let body = document()?.body().ok_or(SiteError::Missing("document body"))?;
        let style = body.style();
        if locked {
            style.set_property("overflow", "hidden")?;
        } else {
            style.remove_property("overflow")?;
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locked;
        Err(SiteError::Unsupported)
    }
}

/// Measurements needed to scroll an anchor target below the fixed header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorGeometry {
    pub target_viewport_top: f64,
    pub page_offset: f64,
    pub header_height: Option<f64>,
}

/// Measure `selector` and the header element. `Ok(None)` when the target does
/// not exist on the page.
pub fn anchor_geometry(selector: &str, header_id: &str) -> Result<Option<AnchorGeometry>> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = document()?;
        let Some(target) = document.query_selector(selector)? else {
            return Ok(None);
        };
        let header_height = document
            .get_element_by_id(header_id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| el.offset_height() as f64);
        Ok(Some(AnchorGeometry {
            target_viewport_top: target.get_bounding_client_rect().top(),
            page_offset: window()?.scroll_y()?,
            header_height,
        }))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (selector, header_id);
        Err(SiteError::Unsupported)
    }
}

/// Blocking informational dialog.
pub fn show_dialog(message: &str) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        window()?.alert_with_message(message)?;
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        Err(SiteError::Unsupported)
    }
}

/// Registered DOM listener; removed again when dropped.
pub struct ListenerHandle {
    #[cfg(target_arch = "wasm32")]
    target: web_sys::EventTarget,
    #[cfg(target_arch = "wasm32")]
    event: &'static str,
    #[cfg(target_arch = "wasm32")]
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(target_arch = "wasm32")]
fn listen(
    target: web_sys::EventTarget,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<ListenerHandle> {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    Ok(ListenerHandle {
        target,
        event,
        callback,
    })
}

/// Call `handler` with the page offset on every window scroll.
pub fn on_window_scroll(mut handler: impl FnMut(f64) + 'static) -> Result<ListenerHandle> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = window()?;
        let reader = window.clone();
        listen(web_sys::EventTarget::from(window), "scroll", move |_event| {
            handler(reader.scroll_y().unwrap_or(0.0));
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = &mut handler;
        Err(SiteError::Unsupported)
    }
}

/// Call `handler` with `KeyboardEvent.key` for every keydown on the document.
pub fn on_document_keydown(mut handler: impl FnMut(String) + 'static) -> Result<ListenerHandle> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = document()?;
        listen(web_sys::EventTarget::from(document), "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                handler(key_event.key());
            }
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = &mut handler;
        Err(SiteError::Unsupported)
    }
}

/// Live intersection observer; disconnected when dropped.
pub struct VisibilityObserver {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe the elements with the given ids. `on_batch` receives each batch of
/// visibility changes and returns the ids that should no longer be observed.
pub fn observe_visibility(
    ids: &[String],
    visible_ratio: f64,
    root_margin: &str,
    mut on_batch: impl FnMut(Vec<IntersectionSample>) -> Vec<String> + 'static,
) -> Result<VisibilityObserver> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = document()?;
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let entries: Vec<web_sys::IntersectionObserverEntry> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into().ok())
                    .collect();
                let samples = entries
                    .iter()
                    .map(|entry| IntersectionSample {
                        id: entry.target().id(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                for id in on_batch(samples) {
                    if let Some(entry) = entries.iter().find(|entry| entry.target().id() == id) {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(visible_ratio));
        init.set_root_margin(root_margin);
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let mut observed = 0usize;
        for id in ids {
            if let Some(element) = document.get_element_by_id(id) {
                observer.observe(&element);
                observed += 1;
            }
        }
        if observed == 0 {
            observer.disconnect();
            return Err(SiteError::Missing("reveal targets"));
        }

        Ok(VisibilityObserver {
            observer,
            _callback: callback,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (ids, visible_ratio, root_margin, &mut on_batch);
        Err(SiteError::Unsupported)
    }
}
