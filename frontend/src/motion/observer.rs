use std::marker::PhantomData;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::reveal::{AnimationKind, RevealHost, Revealable, Subscription};

/// Browser element that can be handed to [`DomRevealHost`].
pub trait DomTarget: Revealable {
    fn element(&self) -> &Element;
}

/// Section or card that fades in through the `revealed` class.
#[derive(Clone)]
pub struct RevealElement(Element);

impl RevealElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl Revealable for RevealElement {
    fn reveal(&self, kind: Option<AnimationKind>) {
        let classes = self.0.class_list();
        let result = match kind {
            Some(kind) => classes.add_2("revealed", kind.class()),
            None => classes.add_1("revealed"),
        };
        if let Err(e) = result {
            log::warn!("Failed to mark element revealed: {:?}", e);
        }
    }
}

impl DomTarget for RevealElement {
    fn element(&self) -> &Element {
        &self.0
    }
}

pub struct ObserverSubscription {
    observer: IntersectionObserver,
    callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Subscription for ObserverSubscription {
    fn cancel(self) {
        self.observer.disconnect();
        // Usually cancelled from inside the callback, so the closure can't be freed yet.
        let callback = self.callback;
        Timeout::new(0, move || drop(callback)).forget();
    }
}

/// Reveal host backed by `IntersectionObserver` and `setTimeout`.
pub struct DomRevealHost<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> DomRevealHost<T> {
    pub fn new() -> Self {
        Self { _target: PhantomData }
    }
}

impl<T: DomTarget> RevealHost for DomRevealHost<T> {
    type Target = T;
    type Subscription = ObserverSubscription;
    type Deferred = Timeout;

    fn subscribe(
        &self,
        target: &T,
        threshold: f64,
        mut on_visible: Box<dyn FnMut()>,
    ) -> Option<ObserverSubscription> {
        if !visibility_supported() {
            return None;
        }
        let threshold = threshold.clamp(0.0, 1.0);

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let seen = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| {
                        let root_height = entry.root_bounds().map(|r| r.height()).unwrap_or(0.0);
                        crosses_threshold(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            entry.intersection_rect().height(),
                            root_height,
                            threshold,
                        )
                    });
                if seen {
                    on_visible();
                }
            },
        );

        let steps: js_sys::Array = observer_thresholds(threshold)
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&steps);
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver construction failed: {:?}", e);
                return None;
            }
        };
        observer.observe(target.element());

        Some(ObserverSubscription { observer, callback })
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub fn visibility_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Small ratios the observer also reports at. A target much taller than the
/// viewport never reaches `threshold` itself, so these keep callbacks coming
/// while it scrolls through and `crosses_threshold` gets to check its height.
const TALL_TARGET_STEPS: [f64; 6] = [0.0, 0.0025, 0.005, 0.01, 0.025, 0.05];

/// Ratios passed to `IntersectionObserver`: every step below `threshold`,
/// then `threshold` itself.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let mut steps: Vec<f64> = TALL_TARGET_STEPS
        .iter()
        .copied()
        .filter(|step| *step < threshold)
        .collect();
    steps.push(threshold);
    steps
}

/// Whether an intersection report counts as "seen". Targets taller than the
/// viewport can never reach a large ratio, so they also count once they fill
/// the same share of the viewport.
pub fn crosses_threshold(
    is_intersecting: bool,
    ratio: f64,
    visible_height: f64,
    root_height: f64,
    threshold: f64,
) -> bool {
    if !is_intersecting {
        return false;
    }
    ratio >= threshold || (root_height > 0.0 && visible_height >= root_height * threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_intersecting_is_never_seen() {
        assert!(!crosses_threshold(false, 1.0, 500.0, 800.0, 0.1));
    }

    #[test]
    fn test_ratio_at_threshold_is_seen() {
        assert!(crosses_threshold(true, 0.15, 30.0, 800.0, 0.15));
        assert!(!crosses_threshold(true, 0.05, 10.0, 800.0, 0.15));
    }

    #[test]
    fn test_tall_target_counts_by_viewport_share() {
        // 4000px section with 200px showing in an 800px viewport.
        assert!(crosses_threshold(true, 0.05, 200.0, 800.0, 0.15));
        assert!(!crosses_threshold(true, 0.01, 40.0, 800.0, 0.15));
    }

    #[test]
    fn test_observer_reports_small_ratios_below_threshold() {
        assert_eq!(
            observer_thresholds(0.15),
            vec![0.0, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.15]
        );
        assert_eq!(observer_thresholds(0.01), vec![0.0, 0.0025, 0.005, 0.01]);
        assert_eq!(observer_thresholds(0.0), vec![0.0]);
    }

    #[test]
    fn test_very_tall_target_is_seen_at_some_reported_ratio() {
        // 20000px section in an 800px viewport: the ratio tops out at 0.04.
        let (height, viewport, threshold) = (20_000.0, 800.0, 0.15);
        let seen_at = observer_thresholds(threshold)
            .into_iter()
            .filter(|ratio| *ratio > 0.0)
            .find(|ratio| crosses_threshold(true, *ratio, ratio * height, viewport, threshold));
        assert_eq!(seen_at, Some(0.01));
    }

    #[test]
    fn test_zero_threshold_reveals_on_any_overlap() {
        assert!(crosses_threshold(true, 0.0, 0.0, 0.0, 0.0));
    }
}
