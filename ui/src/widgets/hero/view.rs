use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::trace;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::autoplay::TimerToken;
use crate::core::config::{site, ImageItem};
use crate::core::keys::NavKey;
use crate::core::{platform, timing};
use crate::t;

use super::engine::HeroEngine;

/// Autoplaying hero slider. Renders nothing for an empty slide list.
#[component]
pub fn HeroSlider(slides: Vec<ImageItem>, children: Element) -> Element {
    let Some(engine) = HeroEngine::new(slides, &site().interaction) else {
        return rsx! {};
    };

    rsx! {
        HeroStage { initial: engine, {children} }
    }
}

#[component]
fn HeroStage(initial: HeroEngine, children: Element) -> Element {
    let (engine, coroutine) = use_hero_driver(initial);

    let snapshot = engine();
    let current = snapshot.current_index();

    rsx! {
        div {
            id: "heroSlider",
            class: "hero-slider",
            tabindex: 0,
            aria_label: t!("hero-slider-label"),
            onmouseenter: move |_| coroutine.send(HeroEvent::PointerEnter),
            onmouseleave: move |_| coroutine.send(HeroEvent::PointerLeave),
            ontouchstart: move |evt: TouchEvent| {
                if let Some(point) = evt.touches_changed().first() {
                    coroutine.send(HeroEvent::TouchStart(point.screen_coordinates().x));
                }
            },
            ontouchend: move |evt: TouchEvent| {
                if let Some(point) = evt.touches_changed().first() {
                    coroutine.send(HeroEvent::TouchEnd(point.screen_coordinates().x));
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                let key = NavKey::from_key_name(&evt.key().to_string());
                if key != NavKey::Other {
                    coroutine.send(HeroEvent::Key(key));
                }
            },

            div { class: "slides",
                { snapshot.slides().iter().enumerate().map(|(index, slide)| {
                    let class = if index == current { "slide active" } else { "slide" };
                    rsx! {
                        div { key: "{index}", class: "{class}",
                            img { src: "{slide.src}", alt: "{slide.alt}" }
                        }
                    }
                })}
            }

            div { class: "hero-content", {children} }

            button {
                r#type: "button",
                class: "slider-btn prev",
                aria_label: t!("slider-prev"),
                onclick: move |_| coroutine.send(HeroEvent::Prev),
                span { class: "material-icons", "chevron_left" }
            }
            button {
                r#type: "button",
                class: "slider-btn next",
                aria_label: t!("slider-next"),
                onclick: move |_| coroutine.send(HeroEvent::Next),
                span { class: "material-icons", "chevron_right" }
            }

            div { class: "slider-dots",
                { (0..snapshot.slides().len()).map(|index| {
                    let class = if index == current { "slider-dot active" } else { "slider-dot" };
                    rsx! {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: "{class}",
                            aria_label: t!("slider-go-to", number = (index + 1)),
                            onclick: move |_| coroutine.send(HeroEvent::GoTo(index)),
                        }
                    }
                })}
            }
        }
    }
}

/// Own the slider state and the coroutine that applies every `HeroEvent` to
/// it, including the autoplay ticks it schedules for itself.
fn use_hero_driver(initial: HeroEngine) -> (Signal<HeroEngine>, Coroutine<HeroEvent>) {
    let engine = use_signal(move || initial);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<HeroEvent>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<HeroEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut engine_signal = engine;

        async move {
            let interval_ms = engine_signal.peek().interval_ms();
            let first = engine_signal.with_mut(|hero| hero.start_autoplay());
            queue_tick(sender_slot.clone(), first, interval_ms);

            while let Some(event) = rx.next().await {
                let timer = engine_signal.with_mut(|hero| match event {
                    HeroEvent::Next => hero.next().timer,
                    HeroEvent::Prev => hero.prev().timer,
                    HeroEvent::GoTo(index) => hero.go_to(index as i64).timer,
                    HeroEvent::Tick(token) => hero.on_timer(token).and_then(|update| update.timer),
                    HeroEvent::Key(key) => hero.handle_key(key).and_then(|update| update.timer),
                    HeroEvent::TouchStart(x) => {
                        hero.touch_start(x);
                        None
                    }
                    HeroEvent::TouchEnd(x) => hero.touch_end(x).and_then(|update| update.timer),
                    HeroEvent::PointerEnter => {
                        hero.pointer_enter();
                        None
                    }
                    HeroEvent::PointerLeave => Some(hero.pointer_leave()),
                });

                if let Some(token) = timer {
                    queue_tick(sender_slot.clone(), token, interval_ms);
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    (engine, coroutine)
}

fn queue_tick(
    sender_slot: Rc<RefCell<Option<UnboundedSender<HeroEvent>>>>,
    token: TimerToken,
    delay_ms: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        trace!(?token, delay_ms, "autoplay tick queued");
        platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = sender.unbounded_send(HeroEvent::Tick(token));
        });
    }
}

#[derive(Debug, Clone)]
enum HeroEvent {
    Next,
    Prev,
    GoTo(usize),
    Tick(TimerToken),
    Key(NavKey),
    TouchStart(f64),
    TouchEnd(f64),
    PointerEnter,
    PointerLeave,
}
