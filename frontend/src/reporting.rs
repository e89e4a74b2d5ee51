use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::config;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportEvent {
    PageView { path: String },
    Error { message: String, location: Option<String> },
    SearchMiss { anchor: String },
    ContactSubmitted { ok: bool },
}

pub trait ReportSink {
    fn report(&self, event: &ReportEvent);
}

/// Forwards events to `window[REPORT_HOOK]` when the analytics snippet has
/// installed it. Looked up on every call since the snippet loads async.
pub struct WindowSink;

impl ReportSink for WindowSink {
    fn report(&self, event: &ReportEvent) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let hook = match js_sys::Reflect::get(&window, &JsValue::from_str(config::REPORT_HOOK)) {
            Ok(value) => match value.dyn_into::<js_sys::Function>() {
                Ok(function) => function,
                Err(_) => return,
            },
            Err(_) => return,
        };
        let payload = match event.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(payload) => payload,
            Err(e) => {
                log::debug!("Could not serialize report event: {}", e);
                return;
            }
        };
        if let Err(e) = hook.call1(&JsValue::NULL, &payload) {
            log::debug!("Report hook threw: {:?}", e);
        }
    }
}

pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&self, _event: &ReportEvent) {}
}

/// Handle to the reporting sink, shared through Yew context.
#[derive(Clone)]
pub struct Reporter(Rc<dyn ReportSink>);

impl Reporter {
    pub fn new(sink: impl ReportSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn disabled() -> Self {
        Self::new(NullSink)
    }

    pub fn report(&self, event: ReportEvent) {
        log::debug!("report: {:?}", event);
        self.0.report(&event);
    }
}

impl PartialEq for Reporter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_reporter() -> Reporter {
    use_context::<Reporter>().unwrap_or_else(Reporter::disabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(Rc<RefCell<Vec<ReportEvent>>>);

    impl ReportSink for Recorder {
        fn report(&self, event: &ReportEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn test_events_carry_type_tag() {
        let event = ReportEvent::SearchMiss { anchor: "pricing".to_string() };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "search_miss", "anchor": "pricing"})
        );

        let event = ReportEvent::Error { message: "boom".to_string(), location: None };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "error", "message": "boom", "location": null})
        );
    }

    #[test]
    fn test_reporter_forwards_to_sink() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let reporter = Reporter::new(Recorder(events.clone()));

        reporter.report(ReportEvent::ContactSubmitted { ok: true });
        reporter.clone().report(ReportEvent::PageView { path: "/team".to_string() });

        assert_eq!(
            *events.borrow(),
            vec![
                ReportEvent::ContactSubmitted { ok: true },
                ReportEvent::PageView { path: "/team".to_string() },
            ]
        );
    }

    #[test]
    fn test_reporter_equality_is_identity() {
        let reporter = Reporter::disabled();
        assert!(reporter == reporter.clone());
        assert!(reporter != Reporter::disabled());
    }
}
