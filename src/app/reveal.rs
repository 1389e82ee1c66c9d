use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::interactions::dom;

/// Share of an element that must enter the viewport before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

/// One-way reveal flag for `target`: hidden and offset on mount, flipped by
/// the first viewport intersection past the threshold, after which
/// observation stops and the flag never reverts. Callers bind the returned
/// signal to the `fade-in` class.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    // start hidden and offset; the fade-in animation carries the element
    // back to its resting place
    Effect::new(move |_| {
        if let Some(el) = target.get() {
            dom::set_style(&el, "opacity", "0");
            dom::set_style(&el, "transform", "translateY(20px)");
        }
    });

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    // revealed elements never un-reveal, so stop watching on the first hit
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    revealed
}
