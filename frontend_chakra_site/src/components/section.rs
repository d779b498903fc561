// frontend_chakra_site/src/components/section.rs
use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal, RevealMotion};
use crate::content::{duplicate_key, Keyed};

/// How each composed card enters the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    Static,
    Staggered { motion: RevealMotion, step_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSlot {
    pub key: &'static str,
    pub index: usize,
    pub delay_ms: u32,
}

/// One slot per record, in source order. The index only feeds the delay.
pub fn card_slots<T: Keyed>(items: &[T], entrance: Entrance) -> Vec<CardSlot> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CardSlot {
            key: item.key(),
            index,
            delay_ms: match entrance {
                Entrance::Static => 0,
                Entrance::Staggered { step_ms, .. } => stagger_delay(index, step_ms),
            },
        })
        .collect()
}

/// Renders one card per record with `template`, keyed by the record's own key.
pub fn compose<T, F>(items: &[T], entrance: Entrance, class: &'static str, template: F) -> Html
where
    T: Keyed,
    F: Fn(&T, usize) -> Html,
{
    debug_assert_eq!(duplicate_key(items), None, "card keys must be unique");
    items
        .iter()
        .zip(card_slots(items, entrance))
        .map(|(item, slot)| match entrance {
            Entrance::Static => html! {
                <div key={slot.key} class={classes!(class)}>
                    { template(item, slot.index) }
                </div>
            },
            Entrance::Staggered { motion, .. } => html! {
                <Reveal key={slot.key} motion={motion} delay_ms={slot.delay_ms} class={classes!(class)}>
                    { template(item, slot.index) }
                </Reveal>
            },
        })
        .collect::<Html>()
}
