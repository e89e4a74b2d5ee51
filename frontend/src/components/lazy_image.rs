use web_sys::Element;
use yew::prelude::*;

use crate::motion::observer::{DomRevealHost, DomTarget};
use crate::motion::reveal::{AnimationKind, RevealOptions, RevealScheduler, Revealable};

/// Starts loading the image once any part of it is near the viewport.
const LAZY_THRESHOLD: f64 = 0.01;

/// `<img>` whose real source is only assigned on first sight.
#[derive(Clone)]
struct LazySource {
    image: Element,
    src: String,
}

impl Revealable for LazySource {
    fn reveal(&self, _kind: Option<AnimationKind>) {
        if let Err(e) = self.image.set_attribute("src", &self.src) {
            log::warn!("Failed to set image source {}: {:?}", self.src, e);
            return;
        }
        let _ = self.image.class_list().add_1("loaded");
    }
}

impl DomTarget for LazySource {
    fn element(&self) -> &Element {
        &self.image
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |src: &AttrValue| {
                let scheduler = RevealScheduler::new(DomRevealHost::<LazySource>::new());
                if let Some(image) = node.cast::<Element>() {
                    let target = LazySource { image, src: src.to_string() };
                    scheduler.register(target, RevealOptions { threshold: LAZY_THRESHOLD, kind: None });
                }
                move || scheduler.dispose()
            },
            props.src.clone(),
        );
    }

    html! {
        <img
            ref={node}
            class={classes!("lazy-image", props.class.clone())}
            alt={props.alt.clone()}
            data-src={props.src.clone()}
            decoding="async"
        />
    }
}
