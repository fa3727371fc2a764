use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::notification::{ToastAction, ToastContext};
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content::{sections, ContactInfo, CONTACT_INFO, SERVICES, SOCIAL_LINKS};
use crate::form::{Field, FormAction, FormState};
use crate::hooks::{use_reveal, REVEAL_MARGIN};
use crate::inquiry::{DeskHandle, Inquiry, InquiryDesk};

/// What the section does once the desk has answered.
#[derive(Debug, PartialEq)]
pub(crate) struct Settlement {
    pub toast: ToastAction,
    pub clear_form: bool,
}

impl Settlement {
    /// Raises the toast, clears the form if the desk accepted, and ends the
    /// submitting state.
    pub(crate) fn apply(
        self,
        push_toast: impl FnOnce(ToastAction),
        update_form: impl FnOnce(FormAction),
        set_submitting: impl FnOnce(bool),
    ) {
        push_toast(self.toast);
        if self.clear_form {
            update_form(FormAction::Reset);
        }
        set_submitting(false);
    }
}

/// Hands the form to the desk and decides which toast to raise. The form is
/// only cleared when the desk accepted the inquiry.
pub(crate) async fn deliver(desk: &dyn InquiryDesk, form: &FormState) -> Settlement {
    let missing = form.missing_required();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        warn!("submitting with blank required fields: {}", names.join(", "));
    }

    match desk.submit(Inquiry::from(form)).await {
        Ok(receipt) => {
            info!("consultation request {} received", receipt.reference);
            Settlement {
                toast: ToastAction::success(config::INQUIRY_SUCCESS_MESSAGE),
                clear_form: true,
            }
        }
        Err(e) => {
            error!("consultation request failed: {}", e);
            Settlement {
                toast: ToastAction::error("Something went wrong. Please try again or call us directly."),
                clear_form: false,
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct InfoCardProps {
    info: ContactInfo,
}

#[function_component(InfoCard)]
fn info_card(props: &InfoCardProps) -> Html {
    let info = &props.info;
    html! {
        <div class="info-card">
            <div class="info-icon">
                <Icon kind={info.icon} size={22} />
            </div>
            <div>
                <h4>{ info.label }</h4>
                <p class="info-value">{ info.value }</p>
                <p class="info-subtext">{ info.subtext }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    /// Where consultation requests go. Defaults to the simulated desk.
    #[prop_or_default]
    pub desk: DeskHandle,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form = use_reducer(FormState::default);
    let submitting = use_state(|| false);
    let is_mounted = use_is_mounted();
    let toasts = use_context::<ToastContext>();

    let info_node = use_node_ref();
    let info_revealed = use_reveal(info_node.clone(), REVEAL_MARGIN);
    let form_node = use_node_ref();
    let form_revealed = use_reveal(form_node.clone(), REVEAL_MARGIN);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set(field, input.value()));
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set(Field::Service, select.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let desk = props.desk.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let desk = desk.clone();
            let is_mounted = is_mounted.clone();

            spawn_local(async move {
                let settlement = deliver(&*desk.0, &form).await;
                if !is_mounted() {
                    return;
                }
                settlement.apply(
                    |toast| match &toasts {
                        Some(toasts) => toasts.dispatch(toast),
                        None => warn!("no toast provider mounted"),
                    },
                    |action| form.dispatch(action),
                    |busy| submitting.set(busy),
                );
            });
        })
    };

    html! {
        <section id={sections::CONTACT} class="contact">
            <div class="container">
                <SectionHeader
                    eyebrow="Get In Touch"
                    title="Schedule Your"
                    highlight={AttrValue::from("Free Consultation")}
                    description="Take the first step towards resolving your legal matters. Our team is ready to provide expert guidance tailored to your needs."
                />

                <div class="contact-grid">
                    <div
                        ref={info_node}
                        class={classes!("contact-info", "reveal", "from-left", info_revealed.then(|| "revealed"))}
                    >
                        <div class="contact-card">
                            <h3>{"Contact Information"}</h3>
                            <div class="info-list">
                                { for CONTACT_INFO.iter().map(|info| html! {
                                    <InfoCard key={info.label} info={info.clone()} />
                                }) }
                            </div>
                            <div class="contact-socials">
                                <p>{"Follow Us"}</p>
                                <div class="social-row">
                                    { for SOCIAL_LINKS.iter().map(|(icon, label)| html! {
                                        <a key={*label} href="#" class="social-link" aria-label={*label}>
                                            <Icon kind={*icon} size={18} />
                                        </a>
                                    }) }
                                </div>
                            </div>
                        </div>
                    </div>

                    <div
                        ref={form_node}
                        class={classes!("contact-form-wrap", "reveal", "from-right", form_revealed.then(|| "revealed"))}
                        style="transition-delay: 200ms;"
                    >
                        <form class="contact-form" {onsubmit}>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="name">{"Full Name *"}</label>
                                    <input
                                        id="name"
                                        type="text"
                                        placeholder="Your full name"
                                        required=true
                                        value={form.name.clone()}
                                        oninput={on_input(Field::Name)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="email">{"Email Address *"}</label>
                                    <input
                                        id="email"
                                        type="email"
                                        placeholder="your@email.com"
                                        required=true
                                        value={form.email.clone()}
                                        oninput={on_input(Field::Email)}
                                    />
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-field">
                                    <label for="phone">{"Phone Number"}</label>
                                    <input
                                        id="phone"
                                        type="tel"
                                        placeholder="+234 800 000 0000"
                                        value={form.phone.clone()}
                                        oninput={on_input(Field::Phone)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="service">{"Service Required *"}</label>
                                    <select id="service" required=true onchange={on_service}>
                                        <option value="" disabled=true selected={form.service.is_empty()}>
                                            {"Select a service"}
                                        </option>
                                        { for SERVICES.iter().map(|service| html! {
                                            <option key={*service} value={*service} selected={form.service == *service}>
                                                { *service }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                            </div>

                            <div class="form-field">
                                <label for="message">{"Your Message *"}</label>
                                <textarea
                                    id="message"
                                    rows="5"
                                    placeholder="Please describe your legal matter briefly..."
                                    required=true
                                    value={form.message.clone()}
                                    oninput={on_message}
                                />
                            </div>

                            <button type="submit" class="submit-button" disabled={*submitting}>
                                if *submitting {
                                    <span class="spinner"></span>
                                    {"Sending..."}
                                } else {
                                    <Icon kind={IconKind::Send} size={20} />
                                    {"Request Consultation"}
                                }
                            </button>

                            <p class="form-note">
                                {"By submitting this form, you agree to our privacy policy. We'll respond within 24 hours."}
                            </p>
                        </form>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .contact {
                        padding: 6rem 0;
                        background: #f9fafb;
                    }
                    .contact-grid {
                        display: grid;
                        gap: 3rem;
                    }
                    @media (min-width: 1024px) {
                        .contact-grid { grid-template-columns: 2fr 3fr; }
                    }
                    .contact-card {
                        height: 100%;
                        background: #001F3F;
                        border-radius: 1rem;
                        padding: 2rem;
                        color: #fff;
                    }
                    .contact-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }
                    .info-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .info-card {
                        display: flex;
                        gap: 1rem;
                    }
                    .info-icon {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: rgba(201, 169, 110, 0.2);
                        color: #C9A96E;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .info-card h4 {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        margin-bottom: 0.25rem;
                    }
                    .info-value { font-weight: 500; }
                    .info-subtext {
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    .contact-socials {
                        margin-top: 2.5rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .contact-socials p {
                        color: #9ca3af;
                        margin-bottom: 1rem;
                    }
                    .social-row {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .social-link {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: all 0.3s ease;
                    }
                    .social-link:hover {
                        background: #C9A96E;
                        color: #001F3F;
                    }
                    .contact-form {
                        background: #fff;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: grid;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .form-row { grid-template-columns: 1fr 1fr; }
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #001F3F;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        font: inherit;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #C9A96E;
                        box-shadow: 0 0 0 3px rgba(201, 169, 110, 0.2);
                    }
                    .form-field textarea { resize: none; }
                    .submit-button {
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1.25rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #C9A96E;
                        color: #001F3F;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .submit-button:hover:not(:disabled) {
                        background: #B8956B;
                        box-shadow: 0 10px 15px rgba(201, 169, 110, 0.3);
                    }
                    .submit-button:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        border: 2px solid rgba(0, 31, 63, 0.3);
                        border-top-color: #001F3F;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .form-note {
                        text-align: center;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use crate::components::notification::{ToastKind, ToastQueue};
    use crate::form::tests::filled;
    use crate::inquiry::tests::InstantDesk;
    use crate::inquiry::{InquiryError, Receipt};

    struct ClosedDesk;

    #[async_trait(?Send)]
    impl InquiryDesk for ClosedDesk {
        async fn submit(&self, _inquiry: Inquiry) -> Result<Receipt, InquiryError> {
            Err(InquiryError::Rejected("intake closed".into()))
        }
    }

    /// Runs a settlement against plain reducer state, starting mid-submit.
    fn settle(settlement: Settlement, form: Rc<FormState>) -> (Rc<ToastQueue>, Rc<FormState>, bool) {
        let queue = RefCell::new(Rc::new(ToastQueue::default()));
        let form = RefCell::new(form);
        let submitting = Cell::new(true);

        settlement.apply(
            |toast| {
                queue.replace_with(|q| q.clone().reduce(toast));
            },
            |action| {
                form.replace_with(|f| f.clone().reduce(action));
            },
            |busy| submitting.set(busy),
        );

        (queue.into_inner(), form.into_inner(), submitting.get())
    }

    #[tokio::test]
    async fn accepted_inquiry_raises_one_success_toast_and_clears_form() {
        let form = filled();
        let settlement = deliver(&InstantDesk, &form).await;
        let (queue, form, submitting) = settle(settlement, form);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].kind, ToastKind::Success);
        assert_eq!(
            queue.toasts()[0].message,
            AttrValue::from(config::INQUIRY_SUCCESS_MESSAGE)
        );
        assert!(form.is_empty());
        assert!(!submitting);
    }

    #[tokio::test]
    async fn failed_inquiry_keeps_what_was_typed() {
        let form = filled();
        let settlement = deliver(&ClosedDesk, &form).await;
        let (queue, after, submitting) = settle(settlement, form.clone());

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].kind, ToastKind::Error);
        assert_eq!(after, form);
        assert!(!submitting);
    }

    #[tokio::test]
    async fn accepts_form_without_phone() {
        let form = filled().reduce(FormAction::Set(Field::Phone, String::new()));
        let settlement = deliver(&InstantDesk, &form).await;
        assert!(settlement.clear_form);
    }
}
