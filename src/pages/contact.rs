use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::animated_section::{AnimatedSection, Direction};
use crate::components::button::{Button, ButtonSize, ButtonType};
use crate::components::fields::{SelectInput, SelectOption, TextArea, TextInput};
use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::contact::form::{service_options, ContactForm, Field, FormAction, SubmitStatus};
use crate::contact::mailer::{send_contact_email, Delivery};
use crate::pages::shared::{stagger, PageHero};
use crate::utils::{email_link, phone_link, whatsapp_link};

struct ContactMethod {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    value: &'static str,
    href: String,
    external: bool,
}

fn contact_methods() -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            icon: Icon::Mail,
            title: "Email Us",
            description: "Send us an email anytime",
            value: config::CONTACT_EMAIL,
            href: email_link(config::CONTACT_EMAIL, None),
            external: false,
        },
        ContactMethod {
            icon: Icon::Phone,
            title: "Call Us",
            description: "Mon-Fri from 9am to 6pm",
            value: config::CONTACT_PHONE,
            href: phone_link(config::CONTACT_PHONE),
            external: false,
        },
        ContactMethod {
            icon: Icon::WhatsApp,
            title: "WhatsApp",
            description: "Quick response guaranteed",
            value: "Chat with us",
            href: whatsapp_link(config::CONTACT_WHATSAPP, None),
            external: true,
        },
        ContactMethod {
            icon: Icon::MapPin,
            title: "Visit Us",
            description: "Come say hello",
            value: config::CONTACT_ADDRESS,
            href: "#".to_string(),
            external: false,
        },
    ]
}

// (days, hours)
const WORKING_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let form = use_reducer(ContactForm::default);

    let edit = |field: Field| {
        let form = form.dispatcher();
        Callback::from(move |value: String| form.dispatch(FormAction::Edit(field, value)))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_submitting() {
                return;
            }
            match form.fields.validate() {
                Err(errors) => form.dispatch(FormAction::Rejected(errors)),
                Ok(submission) => {
                    form.dispatch(FormAction::Submitting);
                    let dispatcher = form.dispatcher();
                    spawn_local(async move {
                        match send_contact_email(&submission).await {
                            Ok(Delivery::Sent) => {
                                log::info!("Contact message delivered");
                                dispatcher.dispatch(FormAction::Delivered);
                            }
                            Ok(Delivery::Demo) => dispatcher.dispatch(FormAction::Delivered),
                            Err(e) => dispatcher.dispatch(FormAction::Failed(e.to_string())),
                        }
                    });
                }
            }
        })
    };

    let send_another = {
        let form = form.dispatcher();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::SendAnother))
    };

    let options: Vec<SelectOption> = std::iter::once(("", "Select a service"))
        .chain(service_options())
        .map(|(value, label)| SelectOption {
            value: value.into(),
            label: label.into(),
        })
        .collect();
    let error = |field: Field| form.error(field).map(AttrValue::from);

    let form_panel = if form.status == SubmitStatus::Success {
        html! {
            <div class="contact-success">
                <div class="success-icon"><IconView icon={Icon::CheckCircle} /></div>
                <h3>{"Message Sent!"}</h3>
                <p class="muted">{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
                <Button onclick={send_another}>{"Send Another Message"}</Button>
            </div>
        }
    } else {
        html! {
            <>
                <div class="contact-form-head">
                    <div class="send-badge"><IconView icon={Icon::Send} /></div>
                    <div>
                        <h2>{"Send us a Message"}</h2>
                        <p class="muted small">{"We'll respond within 24 hours"}</p>
                    </div>
                </div>
                <form class="contact-form" {onsubmit} novalidate=true>
                    <div class="form-row">
                        <TextInput
                            label="Your Name"
                            name="name"
                            placeholder="John Doe"
                            icon={Icon::User}
                            value={form.fields.get(Field::Name).to_string()}
                            error={error(Field::Name)}
                            oninput={edit(Field::Name)}
                        />
                        <TextInput
                            label="Email Address"
                            name="email"
                            input_type="email"
                            placeholder="john@example.com"
                            icon={Icon::Mail}
                            value={form.fields.get(Field::Email).to_string()}
                            error={error(Field::Email)}
                            oninput={edit(Field::Email)}
                        />
                    </div>
                    <div class="form-row">
                        <TextInput
                            label="Phone Number (Optional)"
                            name="phone"
                            input_type="tel"
                            placeholder="+1 234 567 8900"
                            icon={Icon::Phone}
                            value={form.fields.get(Field::Phone).to_string()}
                            oninput={edit(Field::Phone)}
                        />
                        <SelectInput
                            label="Service Interested In"
                            name="service"
                            {options}
                            value={form.fields.get(Field::Service).to_string()}
                            error={error(Field::Service)}
                            onchange={edit(Field::Service)}
                        />
                    </div>
                    <TextArea
                        label="Your Message"
                        name="message"
                        placeholder="Tell us about your project, goals, and how we can help..."
                        value={form.fields.get(Field::Message).to_string()}
                        error={error(Field::Message)}
                        oninput={edit(Field::Message)}
                    />
                    if let SubmitStatus::Error(reason) = &form.status {
                        <div class="submit-error" role="alert">
                            <IconView icon={Icon::AlertCircle} />
                            <p>{ reason.clone() }</p>
                        </div>
                    }
                    <Button kind={ButtonType::Submit} size={ButtonSize::Lg} class="full-width" loading={form.is_submitting()}>
                        <IconView icon={Icon::Send} />{"Send Message"}
                    </Button>
                </form>
            </>
        }
    };

    html! {
        <div class="contact-page">
            <PageHero
                tag="Get In Touch"
                icon={Icon::Sparkles}
                title="Let's Build Something"
                accent="Amazing Together"
                lead="Have a project in mind? We'd love to hear from you. Get in touch and let's discuss how we can help bring your vision to life."
            />
            <section class="section contact-section">
                <div class="container contact-grid">
                    <AnimatedSection direction={Direction::Left}>
                        <div class="contact-panel">{ form_panel }</div>
                    </AnimatedSection>
                    <AnimatedSection direction={Direction::Right}>
                        <h2>{"Other Ways to Reach Us"}</h2>
                        <p class="muted">{"Choose the most convenient way to get in touch with our team."}</p>
                        { for contact_methods().into_iter().enumerate().map(|(i, method)| html! {
                            <AnimatedSection delay={stagger(i, 0.1)} direction={Direction::Right}>
                                <a
                                    class="contact-method"
                                    href={method.href}
                                    target={method.external.then(|| "_blank")}
                                    rel={method.external.then(|| "noopener noreferrer")}
                                >
                                    <div class="icon-badge"><IconView icon={method.icon} /></div>
                                    <div>
                                        <h3>{ method.title }</h3>
                                        <p class="muted small">{ method.description }</p>
                                        <p class="accent">{ method.value }</p>
                                    </div>
                                </a>
                            </AnimatedSection>
                        }) }
                        <div class="card working-hours">
                            <h3>{"Working Hours"}</h3>
                            { for WORKING_HOURS.iter().map(|(days, hours)| html! {
                                <div class="hours-row">
                                    <span class="muted">{ *days }</span>
                                    <span>{ *hours }</span>
                                </div>
                            }) }
                        </div>
                    </AnimatedSection>
                </div>
            </section>
            <section class="section contact-map">
                <div class="container">
                    <AnimatedSection>
                        <div class="map-placeholder">
                            <div class="icon-badge"><IconView icon={Icon::MapPin} /></div>
                            <p class="muted">{"Interactive map coming soon"}</p>
                            <p class="muted small">{ config::CONTACT_ADDRESS }</p>
                        </div>
                    </AnimatedSection>
                </div>
            </section>
            <style>
                {r#"
                .contact-section { padding-top: 0; }
                .contact-grid { display: grid; grid-template-columns: 3fr 2fr; gap: 3rem; }
                .contact-panel {
                    position: relative;
                    padding: 2.5rem;
                    border-radius: 32px;
                    background: linear-gradient(135deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
                    border: 1px solid var(--border);
                }
                .contact-form-head { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 2rem; }
                .contact-form-head h2 { margin: 0; }
                .send-badge {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 12px;
                    background: var(--accent);
                    color: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                }
                .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                .submit-error {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: 12px;
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.2);
                    color: #f87171;
                }
                .submit-error p { margin: 0; font-size: 0.9rem; }
                .btn.full-width { width: 100%; }
                .contact-success { text-align: center; padding: 4rem 0; }
                .contact-success h3 { font-size: 1.875rem; margin: 0 0 0.75rem; }
                .contact-success p { margin-bottom: 2rem; }
                .success-icon {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: rgba(34, 197, 94, 0.15);
                    border: 1px solid rgba(34, 197, 94, 0.3);
                    color: #4ade80;
                    font-size: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .contact-method {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    padding: 1.25rem;
                    margin-bottom: 1rem;
                    border-radius: 16px;
                    background: var(--card-bg);
                    border: 1px solid var(--border);
                    text-decoration: none;
                    transition: border-color 0.2s;
                }
                .contact-method:hover { border-color: rgba(250, 255, 1, 0.4); }
                .contact-method .icon-badge { margin-bottom: 0; flex-shrink: 0; }
                .contact-method h3 { margin: 0 0 0.25rem; font-size: 1rem; }
                .contact-method p { margin: 0 0 0.25rem; }
                .working-hours { height: auto; }
                .working-hours h3 { margin-top: 0; }
                .hours-row { display: flex; justify-content: space-between; font-size: 0.9rem; padding: 0.35rem 0; }
                .map-placeholder {
                    aspect-ratio: 21 / 9;
                    border-radius: 32px;
                    border: 1px solid var(--border);
                    background: var(--card-bg);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                }
                .map-placeholder p { margin: 0.25rem 0; }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                @media (max-width: 640px) {
                    .form-row { grid-template-columns: 1fr; }
                    .contact-panel { padding: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
