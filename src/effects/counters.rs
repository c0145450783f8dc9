//! Hero stats counter: numbers tick up from zero once the stats block
//! scrolls into view, with a short stagger between the three stats.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Thousands collapse to one decimal with a `K+` suffix, everything else
/// renders as a bare integer.
pub fn format_stat(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}K+", value / 1000.0)
    } else {
        format!("{}", value as i64)
    }
}

/// Tick `el` from zero up to `target` over the configured duration, then pin
/// the exact target value and stop.
pub fn animate_counter(el: &HtmlElement, target: f64) {
    let ticks = f64::from(config::COUNTER_DURATION_MS / config::COUNTER_TICK_MS);
    let increment = target / ticks;
    let current = Rc::new(Cell::new(0.0_f64));
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let el = el.clone();
    let interval = Interval::new(config::COUNTER_TICK_MS, {
        let handle = handle.clone();
        move || {
            current.set(current.get() + increment);
            if current.get() >= target {
                el.set_text_content(Some(&format_stat(target)));
                drop(handle.borrow_mut().take());
            } else {
                el.set_text_content(Some(&format_stat(current.get().floor())));
            }
        }
    });
    *handle.borrow_mut() = Some(interval);
}

/// Kick off the counters once `.hero-stats` is half visible. Runs once per
/// page load, guarded by the `counted` class.
#[hook]
pub fn use_stats_counters() {
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();

            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        if target.class_list().contains("counted") {
                            continue;
                        }
                        let _ = target.class_list().add_1("counted");

                        let stats = match target.query_selector_all(".stat-number") {
                            Ok(stats) => stats,
                            Err(_) => continue,
                        };
                        for index in 0..stats.length() {
                            let stat = match stats.get(index).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                                Some(stat) => stat,
                                None => continue,
                            };
                            let value = match config::STAT_TARGETS.get(index as usize) {
                                Some(&value) => value,
                                None => continue,
                            };
                            Timeout::new(index * config::STAT_STAGGER_MS, move || {
                                // The rating is a fraction; it renders directly
                                // instead of counting.
                                if index == 1 {
                                    stat.set_text_content(Some("4.9/5"));
                                } else {
                                    animate_counter(&stat, value);
                                }
                            })
                            .forget();
                        }
                    }
                },
            ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from(config::STATS_THRESHOLD));
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .unwrap();

            if let Ok(Some(stats)) = document.query_selector(".hero-stats") {
                observer.observe(&stats);
            }

            move || {
                observer.disconnect();
                drop(callback);
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_numbers_collapse_to_thousands() {
        assert_eq!(format_stat(15_000.0), "15.0K+");
        assert_eq!(format_stat(1_500.0), "1.5K+");
        assert_eq!(format_stat(1_000.0), "1.0K+");
    }

    #[test]
    fn small_numbers_render_bare() {
        assert_eq!(format_stat(250.0), "250");
        assert_eq!(format_stat(999.0), "999");
        assert_eq!(format_stat(0.0), "0");
    }

    #[test]
    fn floored_progress_values_render_as_integers() {
        assert_eq!(format_stat(117.0_f64.floor()), "117");
        assert_eq!(format_stat(999.9_f64.floor()), "999");
    }
}
