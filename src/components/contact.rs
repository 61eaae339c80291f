use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::error::FormError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Name, email and message are required; subject is optional.
pub fn validate_contact(form: &ContactMessage) -> Result<(), FormError> {
    let missing = [&form.name, &form.email, &form.message]
        .iter()
        .any(|field| field.trim().is_empty());
    if missing {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(&form.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormNotice {
    Success(String),
    Error(String),
}

impl FormNotice {
    pub fn class(&self) -> &'static str {
        match self {
            FormNotice::Success(_) => "success",
            FormNotice::Error(_) => "error",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            FormNotice::Success(text) | FormNotice::Error(text) => text,
        }
    }
}

/// Shown status message plus the timer that will clear it.
#[hook]
fn use_notice() -> (UseStateHandle<Option<FormNotice>>, Callback<FormNotice>) {
    let notice = use_state(|| None::<FormNotice>);
    let clear: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let show = {
        let notice = notice.clone();
        Callback::from(move |next: FormNotice| {
            notice.set(Some(next));
            let notice = notice.clone();
            // Replacing the handle cancels a clear still pending from an older message.
            *clear.borrow_mut() = Some(Timeout::new(config::MESSAGE_CLEAR_MS, move || notice.set(None)));
        })
    };
    (notice, show)
}

fn render_notice(notice: &Option<FormNotice>, id: &'static str) -> Html {
    match notice {
        Some(notice) => html! {
            <div {id} class={classes!("form-message", notice.class())}>{ notice.text().to_string() }</div>
        },
        None => html! { <div {id} class="form-message"></div> },
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(ContactMessage::default);
    let sending = use_state(|| false);
    let (notice, show_notice) = use_notice();

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactMessage { name: input.value(), ..(*form).clone() });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactMessage { email: input.value(), ..(*form).clone() });
        })
    };
    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactMessage { subject: input.value(), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactMessage { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sending = sending.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if let Err(error) = validate_contact(&form) {
                show_notice.emit(FormNotice::Error(error.to_string()));
                return;
            }

            if let Ok(payload) = serde_json::to_string(&*form) {
                debug!("contact: sending {}", payload);
            }
            sending.set(true);
            let form = form.clone();
            let sending = sending.clone();
            let show_notice = show_notice.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::CONTACT_SEND_DELAY_MS).await;
                info!("contact: message sent");
                show_notice.emit(FormNotice::Success(
                    "Thank you! Your message has been sent successfully.".to_string(),
                ));
                form.set(ContactMessage::default());
                sending.set(false);
            });
        })
    };

    html! {
        <form id="contact-form" class="contact-form" {onsubmit}>
            <div class="form-row">
                <input type="text" name="name" placeholder="Your Name *" value={form.name.clone()} oninput={on_name} />
                <input type="email" name="email" placeholder="Your Email *" value={form.email.clone()} oninput={on_email} />
            </div>
            <input type="text" name="subject" placeholder="Subject" value={form.subject.clone()} oninput={on_subject} />
            <textarea name="message" rows="5" placeholder="Your Message *" value={form.message.clone()} oninput={on_message} />
            <button type="submit" class="btn btn-primary" disabled={*sending}>
                if *sending {
                    <i class="fa-solid fa-spinner fa-spin"></i>{" Sending..."}
                } else {
                    <i class="fa-solid fa-paper-plane"></i>{" Send Message"}
                }
            </button>
            { render_notice(&notice, "form-message") }
        </form>
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let sending = use_state(|| false);
    let (notice, show_notice) = use_notice();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if !is_valid_email(&email) {
                show_notice.emit(FormNotice::Error(FormError::InvalidEmail.to_string()));
                return;
            }
            sending.set(true);
            let email = email.clone();
            let sending = sending.clone();
            let show_notice = show_notice.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::NEWSLETTER_SEND_DELAY_MS).await;
                info!("newsletter: subscribed");
                show_notice.emit(FormNotice::Success("Thank you for subscribing!".to_string()));
                email.set(String::new());
                sending.set(false);
            });
        })
    };

    html! {
        <form id="newsletter-form" class="newsletter-form" {onsubmit}>
            <input type="email" placeholder="Your email" required=true value={(*email).clone()} {oninput} />
            <button type="submit" disabled={*sending}>
                if *sending {
                    <i class="fa-solid fa-spinner fa-spin"></i>
                } else {
                    {"Subscribe"}
                }
            </button>
            { render_notice(&notice, "newsletter-message") }
        </form>
    }
}
