use log::warn;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventParams {
    pub event_category: &'static str,
    pub event_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: EventParams,
}

impl AnalyticsEvent {
    fn new(name: &'static str, category: &'static str, label: impl Into<String>) -> Self {
        Self {
            name,
            params: EventParams {
                event_category: category,
                event_label: label.into(),
            },
        }
    }

    pub fn form_submit() -> Self {
        Self::new("form_submit", "contact", "contact_form")
    }

    pub fn phone_call(href: &str) -> Self {
        Self::new("phone_call", "contact", href)
    }

    pub fn email_click(href: &str) -> Self {
        Self::new("email_click", "contact", href)
    }

    pub fn emergency_click() -> Self {
        Self::new("emergency_click", "contact", "emergency_notice")
    }

    pub fn cta_click(text: &str) -> Self {
        Self::new("cta_click", "engagement", text.trim())
    }

    pub fn area_link_click(area: &str) -> Self {
        Self::new("area_link_click", "navigation", area)
    }
}

/// Optional event reporting capability. Tracking through an empty handle is a no-op.
#[derive(Clone, Default, PartialEq)]
pub struct Analytics(Option<Callback<AnalyticsEvent>>);

impl Analytics {
    pub fn new(reporter: Callback<AnalyticsEvent>) -> Self {
        Self(Some(reporter))
    }

    pub fn disabled() -> Self {
        Self(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.0.is_some()
    }

    pub fn track(&self, event: AnalyticsEvent) {
        if let Some(reporter) = &self.0 {
            reporter.emit(event);
        }
    }

    /// Click handler that reports `event` and lets the default action proceed.
    pub fn on_click(&self, event: AnalyticsEvent) -> Callback<MouseEvent> {
        let analytics = self.clone();
        Callback::from(move |_: MouseEvent| analytics.track(event.clone()))
    }

    /// Wires the page's `gtag` function if the tag script has been loaded.
    pub fn from_gtag() -> Self {
        match lookup_gtag() {
            Some(gtag) => Self::new(Callback::from(move |event: AnalyticsEvent| {
                send_to_gtag(&gtag, &event)
            })),
            None => Self::disabled(),
        }
    }
}

fn lookup_gtag() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn send_to_gtag(gtag: &js_sys::Function, event: &AnalyticsEvent) {
    let params = match serde_wasm_bindgen::to_value(&event.params) {
        Ok(params) => params,
        Err(e) => {
            warn!("Could not encode analytics params for {}: {}", event.name, e);
            return;
        }
    };

    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.name),
        &params,
    ) {
        warn!("gtag rejected {}: {:?}", event.name, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn disabled_handle_swallows_events() {
        let analytics = Analytics::disabled();
        assert!(!analytics.is_enabled());
        analytics.track(AnalyticsEvent::form_submit());
    }

    #[test]
    fn reporter_receives_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let analytics = {
            let seen = seen.clone();
            Analytics::new(Callback::from(move |event: AnalyticsEvent| {
                seen.borrow_mut().push(event)
            }))
        };

        analytics.track(AnalyticsEvent::cta_click("  Get a Free Estimate "));
        analytics.track(AnalyticsEvent::form_submit());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].name, "cta_click");
        assert_eq!(seen[0].params.event_label, "Get a Free Estimate");
        assert_eq!(seen[1].params.event_category, "contact");
        assert_eq!(seen[1].params.event_label, "contact_form");
    }

    #[test]
    fn params_serialize_with_gtag_keys() {
        let event = AnalyticsEvent::phone_call("tel:917-624-8550");
        assert_eq!(
            serde_json::to_value(&event.params).unwrap(),
            serde_json::json!({
                "event_category": "contact",
                "event_label": "tel:917-624-8550",
            })
        );
    }
}
