//! Scroll-triggered fade-in for page sections.
//!
//! A page calls [`use_reveal_group`] with the ids of every element that should
//! animate, then wraps each of those elements in [`Reveal`]. Until the browser
//! reports an element as visible it stays faded out. Where no observer can be
//! installed (server rendering, old browsers) everything is shown at once.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, trace};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::config::site;
use crate::core::platform::{self, VisibilityObserver};
use crate::core::reveal::{RevealCue, RevealTracker};
use crate::core::timing;

const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;";
const SHOWN_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    /// False when no visibility observer is running.
    observing: bool,
    revealed: HashSet<String>,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            observing: cfg!(target_arch = "wasm32"),
            revealed: HashSet::new(),
        }
    }
}

impl RevealState {
    pub fn is_visible(&self, id: &str) -> bool {
        !self.observing || self.revealed.contains(id)
    }

    fn show(&mut self, id: String) {
        self.revealed.insert(id);
    }

    fn give_up(&mut self) {
        self.observing = false;
    }
}

#[derive(Debug, Clone)]
enum RevealMessage {
    Cue(RevealCue),
    Show(String),
}

type SenderSlot = Rc<RefCell<Option<UnboundedSender<RevealMessage>>>>;

/// Start watching `ids` and share the reveal state with descendant [`Reveal`]s.
pub fn use_reveal_group(ids: Vec<String>) -> Signal<RevealState> {
    let state = use_signal(RevealState::default);
    use_context_provider(|| state);

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<RevealMessage>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut state_signal = state;
        async move {
            while let Some(message) = rx.next().await {
                match message {
                    RevealMessage::Cue(cue) if cue.delay_ms == 0 => {
                        state_signal.with_mut(|s| s.show(cue.id));
                    }
                    RevealMessage::Cue(cue) => queue_show(sender_slot.clone(), cue),
                    RevealMessage::Show(id) => state_signal.with_mut(|s| s.show(id)),
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    let observer_slot: Rc<RefCell<Option<VisibilityObserver>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    use_effect(move || {
        if observer_slot.borrow().is_some() {
            return;
        }
        let mut state_signal = state;
        let Some(mut tracker) = RevealTracker::new(ids.clone(), site().interaction.reveal_stagger_ms)
        else {
            state_signal.with_mut(RevealState::give_up);
            return;
        };

        let interaction = &site().interaction;
        let tx = coroutine.tx();
        let observed = platform::observe_visibility(
            &ids,
            interaction.reveal_visible_ratio,
            &interaction.reveal_root_margin,
            move |batch| {
                let cues = tracker.process(&batch);
                let done: Vec<String> = cues.iter().map(|cue| cue.id.clone()).collect();
                for cue in cues {
                    let _ = tx.unbounded_send(RevealMessage::Cue(cue));
                }
                done
            },
        );

        match observed {
            Ok(observer) => {
                observer_slot.borrow_mut().replace(observer);
            }
            Err(err) => {
                debug!("reveal observer unavailable, showing everything: {err}");
                state_signal.with_mut(RevealState::give_up);
            }
        }
    });

    state
}

fn queue_show(sender_slot: SenderSlot, cue: RevealCue) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        trace!(id = %cue.id, delay_ms = cue.delay_ms, "reveal queued");
        platform::spawn_future(async move {
            timing::sleep_ms(cue.delay_ms).await;
            let _ = sender.unbounded_send(RevealMessage::Show(cue.id));
        });
    }
}

/// Wrapper that fades `children` in once its id has been revealed.
#[component]
pub fn Reveal(
    #[props(into)] id: String,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let visible = try_use_context::<Signal<RevealState>>()
        .map(|state| state.read().is_visible(&id))
        .unwrap_or(true);
    let style = if visible { SHOWN_STYLE } else { HIDDEN_STYLE };

    rsx! {
        div { id: "{id}", class: "{class}", style: style, {children} }
    }
}
