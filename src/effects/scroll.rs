//! Scroll-driven behaviors: active-section tracking for the nav, smooth
//! anchor scrolling, parallax on the hero's floating icons, and the
//! IntersectionObserver-based reveal animations.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;

fn page_y_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Id of the section currently under the probe line, scanning `.section` and
/// `.hero` elements top to bottom (the last hit wins, matching the shipped
/// behavior for overlapping sections).
fn current_section() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let probe = page_y_offset() + config::NAV_HIGHLIGHT_PROBE_PX;
    let sections = document.query_selector_all(".section, .hero").ok()?;
    let mut current = None;
    for i in 0..sections.length() {
        let section = match sections.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
            Some(section) => section,
            None => continue,
        };
        let top = f64::from(section.offset_top());
        let height = f64::from(section.client_height());
        if probe >= top && probe < top + height {
            let id = section.id();
            if !id.is_empty() {
                current = Some(id);
            }
        }
    }
    current
}

/// Tracks which section the viewport is over so the nav can mark its link
/// `active`. Recomputes on every scroll event and again behind a short
/// trailing debounce, plus once at mount.
#[hook]
pub fn use_active_section() -> UseStateHandle<Option<String>> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                active.set(current_section());

                let window = web_sys::window().unwrap();
                let direct = Closure::wrap(Box::new({
                    let active = active.clone();
                    move || active.set(current_section())
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", direct.as_ref().unchecked_ref())
                    .unwrap();

                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let debounced = Closure::wrap(Box::new(move || {
                    let active = active.clone();
                    // Replacing the handle cancels the previous timeout.
                    *pending.borrow_mut() = Some(Timeout::new(config::SCROLL_DEBOUNCE_MS, move || {
                        active.set(current_section());
                    }));
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", debounced.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        direct.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        debounced.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    active
}

/// Smooth-scroll to the section a nav link points at, stopping short of the
/// fixed navbar.
pub fn scroll_to_section(hash: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(hash).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let (Some(window), Some(target)) = (web_sys::window(), target) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(f64::from(target.offset_top()) - config::NAV_ANCHOR_OFFSET_PX);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Floating hero icons drift upward as the page scrolls, each a little
/// faster than the one before it.
#[hook]
pub fn use_parallax_icons() {
    use_event_with_window("scroll", move |_: Event| {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };
        let scrolled = page_y_offset();
        if let Ok(icons) = document.query_selector_all(".float-icon") {
            for i in 0..icons.length() {
                if let Some(icon) = icons.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                    let speed = 0.5 + f64::from(i) * 0.1;
                    let _ = icon
                        .style()
                        .set_property("transform", &format!("translateY({}px)", -(scrolled * speed)));
                }
            }
        }
    });
}

/// Fade-in cards as they enter the viewport. Elements are tagged `fade-in`
/// up front and get `visible` once they intersect; they stay visible after.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();

            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let _ = entry.target().class_list().add_1("visible");
                        }
                    }
                },
            ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from(config::REVEAL_THRESHOLD));
            options.set_root_margin(config::REVEAL_ROOT_MARGIN);
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .unwrap();

            if let Ok(cards) = document.query_selector_all(".feature-card, .chapter-card, .testimonial-card") {
                for i in 0..cards.length() {
                    if let Some(card) = cards.get(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                        let _ = card.class_list().add_1("fade-in");
                        observer.observe(&card);
                    }
                }
            }

            move || {
                observer.disconnect();
                drop(callback);
            }
        },
        (),
    );
}
