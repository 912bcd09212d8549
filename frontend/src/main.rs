use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, Element, MouseEvent, Node};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod analytics;
mod config;
mod scroll;
mod contact {
    pub mod validation;
    pub mod payload;
    pub mod submission;
    pub mod controller;
    pub mod contact_form;
}
mod components {
    pub mod faq;
    pub mod scroll_to_top;
}
mod pages {
    pub mod home;
    pub mod contact;
    pub mod not_found;
}

use analytics::{Analytics, AnalyticsEvent};
use components::scroll_to_top::ScrollToTop;
use contact::submission::{HttpSubmitter, SimulatedSubmitter, SubmitterHandle};
use pages::{
    home::Home,
    contact::ContactPage,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Collaborators shared with every page through context.
#[derive(Clone, PartialEq)]
pub struct Site {
    pub analytics: Analytics,
    pub submitter: SubmitterHandle,
}

impl Site {
    /// Picks the HTTP submitter when an endpoint was configured at build time.
    pub fn from_environment() -> Self {
        let submitter = match config::contact_endpoint() {
            Some(url) => {
                info!("Contact form posts to {}", url);
                SubmitterHandle::new(HttpSubmitter { url })
            }
            None => {
                info!("No contact endpoint configured, using simulated submission");
                SubmitterHandle::new(SimulatedSubmitter { delay_ms: config::SIMULATED_SUBMIT_DELAY_MS })
            }
        };

        let analytics = Analytics::from_gtag();
        if !analytics.is_enabled() {
            info!("gtag not found, analytics disabled");
        }

        Self { analytics, submitter }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self {
            analytics: Analytics::disabled(),
            submitter: SubmitterHandle::new(SimulatedSubmitter { delay_ms: config::SIMULATED_SUBMIT_DELAY_MS }),
        }
    }
}

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("services", "Services"),
    ("areas", "Areas"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let site = use_context::<Site>().unwrap_or_default();
    let menu_open = use_state(|| false);
    let is_scrolled = scroll::header_is_scrolled(scroll::use_scroll_y());
    let nav_ref = use_node_ref();
    let route = use_route::<Route>();

    // Close the mobile menu when clicking anywhere outside the header
    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(move |_| {
            let document = window().and_then(|w| w.document());
            let click_callback = Closure::wrap(Box::new(move |e: web_sys::Event| {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = match (nav_ref.cast::<Element>(), target) {
                    (Some(nav), Some(target)) => nav.contains(Some(&target)),
                    _ => false,
                };
                if !inside {
                    menu_open.set(false);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = &document {
                    let _ = document.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_link = |id: &'static str| {
        let menu_open = menu_open.clone();
        let on_home = route == Some(Route::Home);
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            // Off the home page the browser follows "/#id" on its own
            if on_home {
                e.prevent_default();
                scroll::scroll_to_anchor(id);
            }
        })
    };

    let tel = config::tel_href();

    html! {
        <header class={classes!("header", is_scrolled.then(|| "scrolled"))} ref={nav_ref}>
            <nav class="navbar">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::BUSINESS_NAME }
                </Link<Route>>

                <button class={classes!("hamburger", (*menu_open).then(|| "active"))} onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                        <li>
                            <a class="nav-link" href={format!("/#{}", id)} onclick={section_link(*id)}>{ *label }</a>
                        </li>
                    }) }
                    <li>
                        <a class="nav-link nav-phone" href={tel.clone()} onclick={site.analytics.on_click(AnalyticsEvent::phone_call(&tel))}>
                            { config::BUSINESS_PHONE }
                        </a>
                    </li>
                </ul>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Site,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Site> context={props.site.clone()}>
            <BrowserRouter>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <ScrollToTop />
            </BrowserRouter>
            <style>
                {r#"
                body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: #333; }
                main { padding-top: 72px; }
                .header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 900;
                    background: #fff;
                    transition: background 0.3s ease;
                }
                .header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .navbar { display: flex; align-items: center; justify-content: space-between; max-width: 1200px; margin: 0 auto; padding: 1rem; }
                .nav-logo { font-weight: bold; color: #2c5aa0; text-decoration: none; }
                .nav-menu { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
                .nav-link { color: #333; text-decoration: none; }
                .hamburger { display: none; background: none; border: none; cursor: pointer; }
                .hamburger span { display: block; width: 25px; height: 3px; margin: 5px 0; background: #333; transition: transform 0.3s ease; }
                @media (max-width: 768px) {
                    .hamburger { display: block; }
                    .nav-menu {
                        position: fixed;
                        left: -100%;
                        top: 64px;
                        flex-direction: column;
                        width: 100%;
                        padding: 2rem 0;
                        background: #fff;
                        text-align: center;
                        transition: left 0.3s ease;
                    }
                    .nav-menu.active { left: 0; }
                    .hamburger.active span:nth-child(2) { opacity: 0; }
                    .hamburger.active span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                    .hamburger.active span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
                }
                .service-card, .location-card, .contact-item {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .service-card.revealed, .location-card.revealed, .contact-item.revealed { opacity: 1; transform: translateY(0); }
                .service-card.revealed:hover { transform: translateY(-10px) scale(1.02); }
                .location-card.revealed:hover { transform: translateY(-5px) scale(1.02); }
                .cta-button { display: inline-block; padding: 0.8rem 1.6rem; border: none; border-radius: 6px; background: #2c5aa0; color: #fff; cursor: pointer; text-decoration: none; }
                .form-group input.error, .form-group select.error { border-color: #d9534f; }
                .field-error { color: #d9534f; font-size: 0.85rem; margin-top: 0.25rem; }
                .submit-button:disabled { opacity: 0.7; cursor: wait; }
                .success-message { background: #e8f5e9; border: 1px solid #4caf50; border-radius: 8px; padding: 1.5rem; margin-bottom: 1.5rem; position: relative; }
                .success-dismiss { position: absolute; top: 0.5rem; right: 0.75rem; background: none; border: none; font-size: 1.4rem; cursor: pointer; }
                .submit-failure { background: #fdecea; border: 1px solid #d9534f; border-radius: 8px; padding: 1rem; margin-bottom: 1.5rem; }
                .faq-question { cursor: pointer; position: relative; padding-right: 2rem; }
                .faq-question .toggle-icon { position: absolute; right: 0; font-size: 1.2em; font-weight: bold; }
                .emergency-notice { cursor: pointer; background: #fff3cd; padding: 1rem; border-radius: 8px; }
                .scroll-to-top {
                    position: fixed;
                    bottom: 20px;
                    right: 20px;
                    width: 50px;
                    height: 50px;
                    border-radius: 50%;
                    background: #2c5aa0;
                    color: white;
                    border: none;
                    font-size: 20px;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                    z-index: 1000;
                }
                .scroll-to-top.visible { opacity: 1; pointer-events: auto; }
                "#}
            </style>
        </ContextProvider<Site>>
    }
}

/// Mounts the site on `root`. Call once, after the host page has loaded.
pub fn start(root: Element, site: Site) {
    info!("Starting site, analytics enabled: {}", site.analytics.is_enabled());
    yew::Renderer::<App>::with_root_and_props(root, AppProps { site }).render();
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app").or_else(|| d.body().map(Into::into)));

    match root {
        Some(root) => start(root, Site::from_environment()),
        None => log::error!("No mount point found, site not started"),
    }
}
