// frontend_chakra_site/src/components/reveal.rs
use std::rc::Rc;

use gloo::console::error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Visibility state of a revealed block. `Revealed` is terminal: once an
/// element has been shown it never goes back to hidden, even if it scrolls
/// out of view and back in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn observe(self, visible: bool) -> Self {
        match (self, visible) {
            (RevealState::Hidden, true) => RevealState::Revealed,
            (state, _) => state,
        }
    }
}

impl Reducible for RevealState {
    type Action = bool;

    fn reduce(self: Rc<Self>, visible: bool) -> Rc<Self> {
        let next = self.observe(visible);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Hidden-state offset the element animates away from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealMotion {
    /// Fade in while rising this many pixels.
    Rise(u32),
    SlideFromLeft(u32),
    SlideFromRight(u32),
    /// Fade in while growing from this percentage of full size.
    Grow(u32),
}

impl RevealMotion {
    fn hidden_transform(self) -> String {
        match self {
            RevealMotion::Rise(px) => format!("translateY({}px)", px),
            RevealMotion::SlideFromLeft(px) => format!("translateX(-{}px)", px),
            RevealMotion::SlideFromRight(px) => format!("translateX({}px)", px),
            RevealMotion::Grow(percent) => format!("scale({})", f64::from(percent) / 100.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First time the element enters the viewport.
    #[default]
    InView,
    /// Right after the first render.
    Mount,
}

pub const TRANSITION_MS: u32 = 600;

pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

pub fn reveal_style(state: RevealState, motion: RevealMotion, delay_ms: u32) -> String {
    let transition = format!(
        "transition: opacity {t}ms ease-out {d}ms, transform {t}ms ease-out {d}ms;",
        t = TRANSITION_MS,
        d = delay_ms
    );
    match state {
        RevealState::Hidden => format!(
            "{} opacity: 0; transform: {};",
            transition,
            motion.hidden_transform()
        ),
        RevealState::Revealed => format!("{} opacity: 1; transform: none;", transition),
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(RevealMotion::Rise(20))]
    pub motion: RevealMotion,
    #[prop_or_default]
    pub trigger: RevealTrigger,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Owns the browser observer and its callback; both live until the effect
/// that created them is cleaned up.
struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportWatch {
    fn start(element: &Element, reveal: UseReducerDispatcher<RevealState>) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                    .any(|entry| entry.is_intersecting());
                if visible {
                    reveal.dispatch(true);
                    // Nothing left to watch once revealed.
                    observer.disconnect();
                }
            },
        );

        // Any visible pixel counts, with no root margin.
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// What the first render's effect settles on.
#[derive(Debug, PartialEq)]
enum Wiring<W, E> {
    Watching(W),
    RevealNow,
    ObserverFailed(E),
}

impl<W, E> Wiring<W, E> {
    /// `start` is only called for in-view triggers; `None` means the element
    /// never reached the DOM.
    fn choose(trigger: RevealTrigger, start: impl FnOnce() -> Option<Result<W, E>>) -> Self {
        match trigger {
            RevealTrigger::Mount => Wiring::RevealNow,
            RevealTrigger::InView => match start() {
                Some(Ok(watch)) => Wiring::Watching(watch),
                Some(Err(e)) => Wiring::ObserverFailed(e),
                None => Wiring::RevealNow,
            },
        }
    }

    fn reveals_now(&self) -> bool {
        !matches!(self, Wiring::Watching(_))
    }
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer_eq(RevealState::default);

    {
        let node = node.clone();
        let reveal = state.dispatcher();
        use_effect_with(props.trigger, move |trigger| {
            let wiring = Wiring::choose(*trigger, || {
                node.cast::<Element>()
                    .map(|element| ViewportWatch::start(&element, reveal.clone()))
            });
            if wiring.reveals_now() {
                reveal.dispatch(true);
            }
            let watch = match wiring {
                Wiring::Watching(watch) => Some(watch),
                Wiring::ObserverFailed(e) => {
                    error!("Viewport observer unavailable, revealing immediately:", e);
                    None
                }
                Wiring::RevealNow => None,
            };
            move || drop(watch)
        });
    }

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={reveal_style(*state, props.motion, props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(RevealState::default(), RevealState::Hidden);
        assert_eq!(RevealState::default().observe(false), RevealState::Hidden);
    }

    #[test]
    fn first_visible_signal_reveals() {
        let state = RevealState::Hidden.observe(false).observe(false).observe(true);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn leaving_and_reentering_viewport_never_hides_again() {
        let mut state = RevealState::Hidden;
        let mut transitions = 0;
        for visible in [true, false, true, false, false, true, true, false] {
            let next = state.observe(visible);
            if next != state {
                transitions += 1;
            }
            state = next;
        }
        assert_eq!(state, RevealState::Revealed);
        assert_eq!(transitions, 1);
    }

    #[test]
    fn reducer_keeps_same_rc_after_reveal() {
        let revealed = Rc::new(RevealState::Revealed);
        let after = Rc::clone(&revealed).reduce(false);
        assert!(Rc::ptr_eq(&revealed, &after));
        let after = Rc::clone(&revealed).reduce(true);
        assert!(Rc::ptr_eq(&revealed, &after));
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay(0, 100), 0);
        assert_eq!(stagger_delay(3, 100), 300);
        assert_eq!(stagger_delay(1, 200), 200);
        assert_eq!(stagger_delay(usize::MAX, 200), u32::MAX);
    }

    #[test]
    fn hidden_style_carries_motion_offset() {
        let style = reveal_style(RevealState::Hidden, RevealMotion::SlideFromLeft(50), 0);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translateX(-50px)"));

        let style = reveal_style(RevealState::Hidden, RevealMotion::Grow(90), 200);
        assert!(style.contains("scale(0.9)"));
        assert!(style.contains("ease-out 200ms"));
    }

    #[test]
    fn revealed_style_is_resting_position() {
        let style = reveal_style(RevealState::Revealed, RevealMotion::Rise(30), 100);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("transform: none;"));
    }

    #[test]
    fn mount_trigger_reveals_without_an_observer() {
        let mut started = false;
        let wiring: Wiring<(), ()> = Wiring::choose(RevealTrigger::Mount, || {
            started = true;
            Some(Ok(()))
        });
        assert_eq!(wiring, Wiring::RevealNow);
        assert!(!started);
        assert!(wiring.reveals_now());
    }

    #[test]
    fn in_view_trigger_waits_for_the_observer() {
        let wiring: Wiring<&str, ()> = Wiring::choose(RevealTrigger::InView, || Some(Ok("watch")));
        assert_eq!(wiring, Wiring::Watching("watch"));
        assert!(!wiring.reveals_now());
    }

    #[test]
    fn failed_observer_falls_back_to_revealing() {
        let wiring: Wiring<(), &str> = Wiring::choose(RevealTrigger::InView, || Some(Err("no observer")));
        assert_eq!(wiring, Wiring::ObserverFailed("no observer"));
        assert!(wiring.reveals_now());
        assert_eq!(RevealState::Hidden.observe(wiring.reveals_now()), RevealState::Revealed);
    }

    #[test]
    fn detached_element_reveals_immediately() {
        let wiring: Wiring<(), ()> = Wiring::choose(RevealTrigger::InView, || None);
        assert_eq!(wiring, Wiring::RevealNow);
    }

    #[function_component(HiddenCard)]
    fn hidden_card() -> Html {
        html! {
            <Reveal motion={RevealMotion::Rise(30)} delay_ms={200} class="card">
                <p>{"Kashmir Quality"}</p>
            </Reveal>
        }
    }

    #[tokio::test]
    async fn first_render_is_hidden_with_children_in_place() {
        let html = yew::LocalServerRenderer::<HiddenCard>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains(r#"class="card""#));
        assert!(html.contains("opacity: 0; transform: translateY(30px);"));
        assert!(html.contains("ease-out 200ms"));
        assert!(html.contains("<p>Kashmir Quality</p>"));
    }
}
