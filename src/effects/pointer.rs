//! Pointer-driven flourishes: gradient orbs that trail the cursor and the
//! 3D tilt on the book cover.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Gradient orbs shift with the cursor, each layer traveling a little
/// further than the last.
#[hook]
pub fn use_gradient_orbs() {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let document_for_handler = document.clone();

            let callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                let window = match web_sys::window() {
                    Some(window) => window,
                    None => return,
                };
                let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
                let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
                let mouse_x = f64::from(e.client_x()) / width;
                let mouse_y = f64::from(e.client_y()) / height;

                if let Ok(orbs) = document_for_handler.query_selector_all(".gradient-orb") {
                    for i in 0..orbs.length() {
                        if let Some(orb) = orbs.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                            let speed = f64::from(i + 1) * 20.0;
                            let x = (mouse_x - 0.5) * speed;
                            let y = (mouse_y - 0.5) * speed;
                            let _ = orb
                                .style()
                                .set_property("transform", &format!("translate({}px, {}px)", x, y));
                        }
                    }
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            document
                .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                let _ = document.remove_event_listener_with_callback(
                    "mousemove",
                    callback.as_ref().unchecked_ref(),
                );
            }
        },
        (),
    );
}

fn book_cover_of(event: &MouseEvent) -> Option<(HtmlElement, HtmlElement)> {
    let host: HtmlElement = event.current_target()?.dyn_into().ok()?;
    let cover = host
        .query_selector(".book-cover")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())?;
    Some((host, cover))
}

/// Rotate the book cover toward the cursor while it hovers the mock.
pub fn on_book_tilt() -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if let Some((host, cover)) = book_cover_of(&e) {
            let rect = host.get_bounding_client_rect();
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            let center_x = rect.width() / 2.0;
            let center_y = rect.height() / 2.0;
            let rotate_x = (y - center_y) / 20.0;
            let rotate_y = (center_x - x) / 20.0;
            let _ = cover.style().set_property(
                "transform",
                &format!("rotateX({}deg) rotateY({}deg)", rotate_x, rotate_y),
            );
        }
    })
}

/// Settle back to the resting pose when the cursor leaves.
pub fn on_book_tilt_reset() -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if let Some((_, cover)) = book_cover_of(&e) {
            let _ = cover
                .style()
                .set_property("transform", "rotateX(0) rotateY(-15deg)");
        }
    })
}
