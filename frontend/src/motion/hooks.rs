use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use super::observer::{DomRevealHost, RevealElement};
use super::reveal::{RevealOptions, RevealScheduler};
use super::scroll::{FrameGate, ScrollState, SectionTracker};
use crate::config;
use crate::dom;

/// Reveals the referenced element the first time it scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let scheduler = RevealScheduler::new(DomRevealHost::<RevealElement>::new());
            if let Some(element) = node.cast::<Element>() {
                scheduler.register(RevealElement::new(element), options);
            }
            move || scheduler.dispose()
        },
        node,
    );
}

/// Reveals every `.reveal-item` inside the referenced container, one by one.
#[hook]
pub fn use_reveal_group(container: NodeRef, stagger_ms: u32, options: RevealOptions) {
    use_effect_with_deps(
        move |container: &NodeRef| {
            let scheduler = RevealScheduler::new(DomRevealHost::<RevealElement>::new());
            if let Some(element) = container.cast::<Element>() {
                let members = reveal_items(&element);
                scheduler.register_group(RevealElement::new(element), members, stagger_ms, options);
            }
            move || scheduler.dispose()
        },
        container,
    );
}

fn reveal_items(container: &Element) -> Vec<RevealElement> {
    let Ok(nodes) = container.query_selector_all(".reveal-item") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(RevealElement::new)
        .collect()
}

/// Scroll progress and active section, recomputed at most once per frame.
#[hook]
pub fn use_scroll_state(sections: &'static [&'static str]) -> ScrollState {
    let state = use_state_eq(ScrollState::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = SectionTracker::new(sections, config::NAV_HEIGHT_PX);
                let listener = web_sys::window()
                    .map(|window| ScrollListener::attach(window, tracker, move |next| state.set(next)));
                move || drop(listener)
            },
            (),
        );
    }
    *state
}

/// Window scroll/resize subscription that funnels raw events into one
/// animation-frame recompute. Detaches everything on drop.
pub struct ScrollListener {
    window: Window,
    on_event: Closure<dyn Fn()>,
    gate: Rc<FrameGate>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl ScrollListener {
    pub fn attach<F>(window: Window, tracker: SectionTracker, on_change: F) -> Self
    where
        F: Fn(ScrollState) + 'static,
    {
        let gate = Rc::new(FrameGate::default());
        let frame_id = Rc::new(Cell::new(None));

        let on_frame = {
            let window = window.clone();
            let gate = gate.clone();
            let frame_id = frame_id.clone();
            Rc::new(Closure::<dyn Fn()>::new(move || {
                gate.release();
                frame_id.set(None);
                let metrics = dom::scroll_metrics(&window);
                on_change(tracker.sample(&metrics, |id| dom::section_bounds(&window, id)));
            }))
        };

        let on_event = {
            let window = window.clone();
            let gate = gate.clone();
            let frame_id = frame_id.clone();
            Closure::<dyn Fn()>::new(move || {
                if !gate.arm() {
                    return;
                }
                match window.request_animation_frame((*on_frame).as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(e) => {
                        log::warn!("requestAnimationFrame failed: {:?}", e);
                        gate.release();
                    }
                }
            })
        };

        for event in ["scroll", "resize"] {
            if let Err(e) = window.add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref()) {
                log::warn!("Failed to listen for {}: {:?}", event, e);
            }
        }
        // Initial sample
        on_event.as_ref().unchecked_ref::<js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL).ok();

        Self {
            window,
            on_event,
            gate,
            frame_id,
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        for event in ["scroll", "resize"] {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.gate.release();
    }
}
