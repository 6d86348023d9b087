//! Contact Section Component
//!
//! Social links plus a form that hands the message to the visitor's mail
//! client. Blank fields raise a browser alert instead.

use dioxus::prelude::*;
use folio_core::contact::{INCOMPLETE_FORM_ALERT, MESSAGE_READY_NOTICE};
use folio_core::{ContactField, ContactForm};

use crate::context::{use_site, use_toaster};

#[derive(Props, Clone, PartialEq)]
struct SocialItemProps {
    href: String,
    icon: &'static str,
    label: &'static str,
    value: String,
}

/// One social link. Clicking it spawns a ripple (see the page behaviors).
#[component]
fn SocialItem(props: SocialItemProps) -> Element {
    rsx! {
        a {
            class: "social-item",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            i { class: "{props.icon}" }
            div {
                strong { "{props.label}" }
                p { "{props.value}" }
            }
        }
    }
}

fn open_mail_client(link: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(link) {
        tracing::warn!("cannot open mail client: {:?}", e);
    }
}

#[component]
pub fn Contact() -> Element {
    let profile = use_site().profile;
    let toaster = use_toaster();
    let mut form = use_signal(ContactForm::default);

    let recipient = profile.contact.email.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let link = match form.read().mailto(&recipient) {
            Ok(link) => link,
            Err(e) => {
                tracing::debug!("{}", e);
                gloo::dialogs::alert(INCOMPLETE_FORM_ALERT);
                return;
            }
        };

        open_mail_client(&link);
        toaster.success(MESSAGE_READY_NOTICE);
        form.set(ContactForm::default());
    };

    let contact = &profile.contact;

    rsx! {
        section { id: "contact",
            h2 { class: "section-title", "Kontak" }
            div { class: "contact-container",
                div { class: "glass-card",
                    h3 { "Mari Terhubung" }
                    p { "Punya proyek atau ingin berkolaborasi? Jangan ragu untuk menghubungi saya." }
                    div { class: "social-links",
                        SocialItem {
                            href: contact.mailto(),
                            icon: "fas fa-envelope",
                            label: "Email",
                            value: contact.email.clone(),
                        }
                        SocialItem {
                            href: contact.linkedin_url(),
                            icon: "fab fa-linkedin",
                            label: "LinkedIn",
                            value: profile.name.clone(),
                        }
                        SocialItem {
                            href: contact.github_url(),
                            icon: "fab fa-github",
                            label: "GitHub",
                            value: contact.github.clone(),
                        }
                        SocialItem {
                            href: contact.instagram_url(),
                            icon: "fab fa-instagram",
                            label: "Instagram",
                            value: format!("@{}", contact.instagram),
                        }
                    }
                }

                form { class: "contact-form glass-card", onsubmit: on_submit,
                    for field in ContactField::ALL {
                        FormControl { key: "{field}", field, form }
                    }
                    button { class: "btn btn-primary", r#type: "submit",
                        i { class: "fas fa-paper-plane" }
                        "Kirim Pesan"
                    }
                }
            }
        }
    }
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Nama Anda",
        ContactField::Email => "Email Anda",
        ContactField::Subject => "Subjek",
        ContactField::Message => "Pesan Anda",
    }
}

/// Input bound to one field of the shared form signal.
#[component]
fn FormControl(field: ContactField, form: Signal<ContactForm>) -> Element {
    let mut form = form;
    let value = form.read().field(field).to_string();
    let name = field.name();
    let hint = placeholder(field);
    let oninput = move |e: FormEvent| form.write().set(field, e.value());

    rsx! {
        if field == ContactField::Message {
            textarea { name, placeholder: hint, value, oninput }
        } else {
            input {
                r#type: if field == ContactField::Email { "email" } else { "text" },
                name,
                placeholder: hint,
                value,
                oninput,
            }
        }
    }
}
