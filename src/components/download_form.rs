//! The download form and the concrete [`FormView`] that binds the submission
//! machine to the live document.

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;
use web_sys::{AddEventListenerOptions, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::components::notification;
use crate::config;
use crate::form::machine::{Disposition, FieldSnapshot, FormMachine, FormView, Severity};

pub struct DomFormView {
    form: HtmlFormElement,
    inputs: Vec<HtmlInputElement>,
    button: Option<HtmlButtonElement>,
}

impl DomFormView {
    pub fn bind(form: HtmlFormElement) -> Self {
        let mut inputs = Vec::new();
        if let Ok(nodes) = form.query_selector_all(".form-input") {
            for i in 0..nodes.length() {
                if let Some(input) = nodes.get(i).and_then(|node| node.dyn_into::<HtmlInputElement>().ok()) {
                    inputs.push(input);
                }
            }
        }
        let button = form
            .query_selector(".btn-submit")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Self { form, inputs, button }
    }

    /// Snapshot the current field values, typed off each input's `type`.
    pub fn snapshot(&self) -> Vec<FieldSnapshot> {
        self.inputs
            .iter()
            .map(|input| {
                if input.type_() == "email" {
                    FieldSnapshot::email(input.value())
                } else {
                    FieldSnapshot::text(input.value())
                }
            })
            .collect()
    }

    fn button_span(&self, class: &str) -> Option<HtmlElement> {
        self.button
            .as_ref()?
            .query_selector(class)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn set_span_display(&self, class: &str, display: &str) {
        if let Some(span) = self.button_span(class) {
            let _ = span.style().set_property("display", display);
        }
    }
}

impl FormView for DomFormView {
    fn set_field_error(&mut self, index: usize, on: bool) {
        let input = match self.inputs.get(index) {
            Some(input) => input,
            None => return,
        };
        if on {
            let _ = input.style().set_property("border-color", config::ERROR_BORDER_COLOR);
            // The cue clears itself on the field's next input event, once.
            let reset_target = input.clone();
            let reset = js_sys::Function::from(Closure::once_into_js(move |_event: web_sys::Event| {
                let _ = reset_target.style().set_property("border-color", "transparent");
            }));
            let options = AddEventListenerOptions::new();
            options.set_once(true);
            let _ = input.add_event_listener_with_callback_and_add_event_listener_options(
                "input",
                &reset,
                &options,
            );
        } else {
            let _ = input.style().set_property("border-color", "transparent");
        }
    }

    fn set_submit_busy(&mut self, busy: bool) {
        if let Some(button) = &self.button {
            button.set_disabled(busy);
        }
        if busy {
            self.set_span_display(".btn-text", "none");
            self.set_span_display(".btn-icon", "none");
            self.set_span_display(".btn-loading", "flex");
        } else {
            self.set_span_display(".btn-text", "block");
            self.set_span_display(".btn-icon", "block");
            self.set_span_display(".btn-loading", "none");
        }
    }

    fn clear_form(&mut self) {
        self.form.reset();
    }

    fn show_notification(&mut self, message: &str, severity: Severity) {
        notification::present(message, severity);
    }
}

#[function_component(DownloadForm)]
pub fn download_form() -> Html {
    // One machine per mounted form, constructed once at startup.
    let machine = use_mut_ref(FormMachine::new);

    let onsubmit = {
        let machine = machine.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();
            let mut view = DomFormView::bind(form.clone());
            let snapshot = view.snapshot();

            let disposition = machine.borrow_mut().submit(&snapshot, &mut view);
            log!(format!(
                "download form submit: {:?}, machine now {:?}",
                disposition,
                machine.borrow().state()
            ));
            if disposition == Disposition::Accepted {
                let machine = machine.clone();
                spawn_local(async move {
                    TimeoutFuture::new(config::SEND_DELAY_MS).await;
                    let mut view = DomFormView::bind(form);
                    machine.borrow_mut().finish_send(&mut view);
                });
            }
        })
    };

    html! {
        // novalidate keeps the browser's native email check out of the way so
        // the machine owns validation end to end.
        <form class="download-form" novalidate=true {onsubmit}>
            <input
                type="text"
                name="name"
                class="form-input"
                placeholder="Your name"
                aria-label="Your name"
            />
            <input
                type="email"
                name="email"
                class="form-input"
                placeholder="Your email address"
                aria-label="Your email address"
            />
            <button type="submit" class="btn-submit">
                <span class="btn-text">{"Get the Free Chapter"}</span>
                <span class="btn-icon">
                    <svg width="18" height="18" viewBox="0 0 24 24" fill="none">
                        <path d="M5 12H19M19 12L12 5M19 12L12 19" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                    </svg>
                </span>
                <span class="btn-loading">
                    <span class="loading-spinner"></span>
                    {"Sending..."}
                </span>
            </button>
        </form>
    }
}
