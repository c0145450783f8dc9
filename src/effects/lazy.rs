//! Lazy image loading: `img[data-src]` elements get their real source the
//! first time they approach the viewport, then stop being observed.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[hook]
pub fn use_lazy_images() {
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();

            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                            if let Some(src) = img.get_attribute("data-src") {
                                img.set_src(&src);
                                let _ = img.remove_attribute("data-src");
                            }
                        }
                        observer.unobserve(&target);
                    }
                },
            ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).unwrap();

            if let Ok(images) = document.query_selector_all("img[data-src]") {
                for i in 0..images.length() {
                    if let Some(img) = images.get(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                        observer.observe(&img);
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
