use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::components::faq::Faq;
use crate::config;
use crate::contact::controller::Prefill;
use crate::pages::contact::ContactSection;
use crate::scroll::{scroll_to_anchor, use_reveal_on_scroll};
use crate::Site;

struct ServiceInfo {
    slug: &'static str,
    title: &'static str,
    blurb: &'static str,
    image: &'static str,
}

const SERVICE_CARDS: [ServiceInfo; 6] = [
    ServiceInfo { slug: "plumbing", title: "Plumbing", blurb: "Leaks, clogs, water heaters and full repipes.", image: "/assets/services/plumbing.jpg" },
    ServiceInfo { slug: "electrical", title: "Electrical", blurb: "Outlets, panels, lighting and code corrections.", image: "/assets/services/electrical.jpg" },
    ServiceInfo { slug: "painting", title: "Painting", blurb: "Interior painting, plaster repair and finishing.", image: "/assets/services/painting.jpg" },
    ServiceInfo { slug: "carpentry", title: "Carpentry", blurb: "Built-ins, doors, trim and custom shelving.", image: "/assets/services/carpentry.jpg" },
    ServiceInfo { slug: "renovation", title: "Kitchen & Bath", blurb: "Complete renovations from demo to final walkthrough.", image: "/assets/services/renovation.jpg" },
    ServiceInfo { slug: "handyman", title: "Handyman", blurb: "The small jobs list, done in one visit.", image: "/assets/services/handyman.jpg" },
];

#[function_component(Home)]
pub fn home() -> Html {
    let site = use_context::<Site>().unwrap_or_default();
    let prefill = use_state(|| None::<Prefill>);

    use_reveal_on_scroll();

    let request_estimate = {
        let prefill = prefill.clone();
        let analytics = site.analytics.clone();
        Callback::from(move |(selection, label): (Prefill, &'static str)| {
            analytics.track(AnalyticsEvent::cta_click(label));
            prefill.set(Some(selection));
            scroll_to_anchor("contact");
        })
    };

    let hero_cta = {
        let analytics = site.analytics.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            analytics.track(AnalyticsEvent::cta_click("Get a Free Estimate"));
            scroll_to_anchor("contact");
        })
    };

    let tel = config::tel_href();

    html! {
        <div class="home">
            <section class="hero">
                <img class="hero-bg" src="/assets/hero-bg.jpg" alt="" />
                <div class="hero-content">
                    <h1>{"Reliable Home Repairs Across New York City"}</h1>
                    <p>{"Licensed, insured pros for plumbing, electrical, painting and renovations in all five boroughs."}</p>
                    <div class="hero-buttons">
                        <a href="#contact" class="cta-button primary" onclick={hero_cta}>
                            {"Get a Free Estimate"}
                        </a>
                        <a href={tel.clone()} class="cta-button secondary" onclick={
                            let analytics = site.analytics.clone();
                            let tel = tel.clone();
                            Callback::from(move |_: MouseEvent| {
                                analytics.track(AnalyticsEvent::cta_click("Call Now"));
                                analytics.track(AnalyticsEvent::phone_call(&tel));
                            })
                        }>
                            {"Call Now"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="services" class="services-section">
                <h2>{"Our Services"}</h2>
                <div class="services-grid">
                    { for SERVICE_CARDS.iter().map(|service| {
                        let onclick = {
                            let request_estimate = request_estimate.clone();
                            let slug = service.slug;
                            Callback::from(move |_: MouseEvent| {
                                request_estimate.emit((
                                    Prefill { service: Some(slug.to_string()), borough: None },
                                    "Get an Estimate",
                                ))
                            })
                        };
                        html! {
                            <div class="service-card">
                                <img src={service.image} alt={service.title} loading="lazy" class="lazy" />
                                <h3>{ service.title }</h3>
                                <p>{ service.blurb }</p>
                                <button class="cta-button small" {onclick}>{"Get an Estimate"}</button>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section id="areas" class="locations-section">
                <h2>{"Serving All Five Boroughs"}</h2>
                <div class="locations-grid">
                    { for config::BOROUGHS.iter().map(|(slug, name)| {
                        let onclick = {
                            let request_estimate = request_estimate.clone();
                            let slug = *slug;
                            Callback::from(move |_: MouseEvent| {
                                request_estimate.emit((
                                    Prefill { service: None, borough: Some(slug.to_string()) },
                                    "Book in Borough",
                                ))
                            })
                        };
                        html! {
                            <div class="location-card">
                                <h3>{ *name }</h3>
                                <button class="cta-button small" {onclick}>{"Book in Borough"}</button>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <Faq />

            <ContactSection prefill={(*prefill).clone()} />
        </div>
    }
}
