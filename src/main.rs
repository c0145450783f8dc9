use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

mod config;
mod form {
    pub mod machine;
}
mod components {
    pub mod download_form;
    pub mod notification;
}
mod effects {
    pub mod counters;
    pub mod lazy;
    pub mod pointer;
    pub mod scroll;
}
mod pages {
    pub mod landing;
}

use effects::scroll::{scroll_to_section, use_active_section};
use pages::landing::Landing;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#features", "What's inside"),
    ("#chapters", "Chapters"),
    ("#testimonials", "Reviews"),
    ("#download", "Download"),
];

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

fn focus_burger_menu() {
    if let Some(burger) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".burger-menu").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = burger.focus();
    }
}

fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map_or(false, |width| width <= config::MOBILE_BREAKPOINT_PX)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_active_section();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_handler = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_for_handler.page_y_offset().unwrap_or(0.0);
                    is_scrolled.set(offset > config::NAV_SCROLL_THRESHOLD_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let open = !*menu_open;
            menu_open.set(open);
            set_body_scroll_locked(open);
        })
    };

    // Enter and Space activate the burger like a click would.
    let toggle_menu_key = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                let open = !*menu_open;
                menu_open.set(open);
                set_body_scroll_locked(open);
            }
        })
    };

    // Escape backs out of the open menu and hands focus back to the burger.
    let menu_keydown = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                menu_open.set(false);
                set_body_scroll_locked(false);
                focus_burger_menu();
            }
        })
    };

    let nav_link = |hash: &'static str, label: &'static str| {
        let onclick = {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(hash);
                if viewport_is_mobile() {
                    menu_open.set(false);
                    set_body_scroll_locked(false);
                }
            })
        };
        let is_active = active_section.as_deref() == Some(&hash[1..]);
        html! {
            <a
                href={hash}
                class={classes!("nav-link", is_active.then_some("active"))}
                {onclick}
            >
                {label}
            </a>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.1rem 2rem;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(15, 23, 42, 0.92);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.2rem;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 1.8rem;
                    }
                    .nav-link {
                        color: #94a3b8;
                        text-decoration: none;
                        font-size: 0.95rem;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover { color: #fff; }
                    .nav-link.active { color: #a5b4fc; }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 6px;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                        transition: transform 0.2s ease;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-menu {
                            position: fixed;
                            inset: 0;
                            background: rgba(15, 23, 42, 0.98);
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            gap: 2rem;
                            transform: translateX(100%);
                            transition: transform 0.3s ease;
                        }
                        .nav-menu.active { transform: translateX(0); }
                        .nav-link { font-size: 1.3rem; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={{
                    let menu_open = menu_open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section("#hero");
                        if viewport_is_mobile() {
                            menu_open.set(false);
                            set_body_scroll_locked(false);
                        }
                    })
                }}>
                    {"Ship Better Software"}
                </a>
                <button
                    class={classes!("burger-menu", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation menu"
                    onclick={toggle_menu}
                    onkeydown={toggle_menu_key}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div
                    class={classes!("nav-menu", (*menu_open).then_some("active"))}
                    onkeydown={menu_keydown}
                >
                    { for NAV_LINKS.iter().map(|&(hash, label)| nav_link(hash, label)) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn console_banner() {
    web_sys::console::log_2(
        &"%c🎨 Ship Better Software — landing".into(),
        &"color: #6366f1; font-size: 20px; font-weight: bold;".into(),
    );
    web_sys::console::log_2(
        &"%cBuilt with modern web standards and best practices".into(),
        &"color: #475569; font-size: 14px;".into(),
    );
    web_sys::console::log_2(
        &"%cInterested in the code? Check out the repository!".into(),
        &"color: #10b981; font-size: 12px;".into(),
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    console_banner();
    yew::Renderer::<App>::new().render();
}
