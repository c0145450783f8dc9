//! Transient banner in the top-right corner. Fire-and-forget: timers are
//! leaked with `forget()` and act on a detached node once a banner has been
//! replaced, which makes them harmless no-ops.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config;
use crate::form::machine::Severity;

const SUCCESS_ICON_PATH: &str = "M10 0C4.48 0 0 4.48 0 10C0 15.52 4.48 20 10 20C15.52 20 20 15.52 20 10C20 4.48 15.52 0 10 0ZM8 15L3 10L4.41 8.59L8 12.17L15.59 4.58L17 6L8 15Z";
const ERROR_ICON_PATH: &str = "M10 0C4.48 0 0 4.48 0 10C0 15.52 4.48 20 10 20C15.52 20 20 15.52 20 10C20 4.48 15.52 0 10 0ZM11 15H9V13H11V15ZM11 11H9V5H11V11Z";

/// Show `message` in a severity-colored banner, replacing any banner already
/// on screen. At most one `.notification` element ever exists in the document.
pub fn present(message: &str, severity: Severity) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    // An existing banner goes away instantly, no exit transition.
    if let Ok(Some(existing)) = document.query_selector(".notification") {
        existing.remove();
    }

    let banner: HtmlElement = match document.create_element("div").ok().and_then(|el| el.dyn_into().ok()) {
        Some(banner) => banner,
        None => return,
    };

    let (class_suffix, background, icon_path) = match severity {
        Severity::Success => ("success", config::SUCCESS_ACCENT_COLOR, SUCCESS_ICON_PATH),
        Severity::Error => ("error", config::ERROR_BORDER_COLOR, ERROR_ICON_PATH),
    };
    banner.set_class_name(&format!("notification notification-{}", class_suffix));
    banner.set_inner_html(&format!(
        r#"<div class="notification-content" style="display: flex; align-items: center; gap: 12px; font-weight: 500;">
            <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
                <path d="{}" fill="currentColor"/>
            </svg>
            <span>{}</span>
        </div>"#,
        icon_path, message
    ));
    banner.style().set_css_text(&format!(
        "position: fixed; top: 100px; right: 20px; z-index: 10000; \
         background: {}; color: white; padding: 16px 24px; border-radius: 12px; \
         box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2); \
         transform: translateX(400px); transition: transform 0.3s ease;",
        background
    ));

    if let Some(body) = document.body() {
        let _ = body.append_child(&banner);
    }

    // Slide in on the next tick so the initial transform gets a transition.
    {
        let banner = banner.clone();
        Timeout::new(config::NOTIFICATION_ENTER_MS, move || {
            let _ = banner.style().set_property("transform", "translateX(0)");
        })
        .forget();
    }

    Timeout::new(config::NOTIFICATION_HOLD_MS, move || {
        let _ = banner.style().set_property("transform", "translateX(400px)");
        Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
            banner.remove();
        })
        .forget();
    })
    .forget();
}
