use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::components::faq::Faq;
use crate::config;
use crate::contact::contact_form::ContactForm;
use crate::contact::controller::Prefill;
use crate::scroll::use_reveal_on_scroll;
use crate::Site;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    /// Selection made elsewhere on the page, e.g. a service card button. Wins over the query string.
    #[prop_or_default]
    pub prefill: Option<Prefill>,
}

/// The contact form, seeded from `?service=` and `?borough=`.
#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let site = use_context::<Site>().unwrap_or_default();
    let service = use_search_param("service".to_string());
    let borough = use_search_param("borough".to_string());

    // .contact-item starts hidden until revealed, on every route that renders this section
    use_reveal_on_scroll();

    let prefill = props.prefill.clone().unwrap_or(Prefill { service, borough });
    let tel = config::tel_href();
    let mailto = config::mailto_href();

    html! {
        <section id="contact" class="contact-form-section">
            <div class="contact-intro">
                <h2>{"Get Your Free Estimate"}</h2>
                <p>{"Tell us about the job and we'll get back to you within 24 hours."}</p>
                <div class="contact-item">
                    <strong>{"Call: "}</strong>
                    <a href={tel.clone()} onclick={site.analytics.on_click(AnalyticsEvent::phone_call(&tel))}>
                        { config::BUSINESS_PHONE }
                    </a>
                </div>
                <div class="contact-item">
                    <strong>{"Email: "}</strong>
                    <a href={mailto.clone()} onclick={site.analytics.on_click(AnalyticsEvent::email_click(&mailto))}>
                        { config::BUSINESS_EMAIL }
                    </a>
                </div>
            </div>
            <ContactForm
                submitter={site.submitter.clone()}
                analytics={site.analytics.clone()}
                {prefill}
            />
        </section>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let site = use_context::<Site>().unwrap_or_default();
    let tel = config::tel_href();

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Contact Us"}</h1>
                <p>{"Free, no-obligation estimates anywhere in the five boroughs."}</p>
            </section>

            <div class="emergency-notice" onclick={site.analytics.on_click(AnalyticsEvent::emergency_click())}>
                <strong>{"Emergency? "}</strong>
                {"Burst pipe, no power or no heat: call "}
                <a href={tel.clone()} onclick={site.analytics.on_click(AnalyticsEvent::phone_call(&tel))}>
                    { config::BUSINESS_PHONE }
                </a>
                {" for same-day service."}
            </div>

            <ContactSection />

            <section class="area-quick-links">
                <h2>{"Areas We Serve"}</h2>
                <div class="area-links">
                    { for config::BOROUGHS.iter().map(|(slug, name)| html! {
                        <a
                            class="area-quick-link"
                            href={format!("/contact?borough={}#contact", slug)}
                            onclick={site.analytics.on_click(AnalyticsEvent::area_link_click(name))}
                        >
                            <span class="area-name">{ *name }</span>
                        </a>
                    }) }
                </div>
            </section>

            <Faq />
        </div>
    }
}
