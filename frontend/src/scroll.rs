use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;

pub const HEADER_SCROLLED_AFTER: f64 = 100.0;
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 300.0;
pub const REVEAL_MARGIN: f64 = 150.0;

pub const REVEAL_SELECTOR: &str = ".service-card, .location-card, .contact-item";

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER
}

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN
}

/// Document offset to scroll to so the target sits just under the fixed header.
pub fn anchor_offset(target_top: f64, header_height: f64) -> f64 {
    (target_top - header_height).max(0.0)
}

/// Current `window.scrollY`, refreshed on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                scroll_y.set(current_scroll_y());
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    *scroll_y
}

/// Re-runs the reveal check on mount and after every scroll.
#[hook]
pub fn use_reveal_on_scroll() {
    let scroll_y = use_scroll_y();
    use_effect_with_deps(move |_| {
        reveal_visible_elements();
        || ()
    }, scroll_y);
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls to the element with `id`, leaving room for the `.header` bar.
pub fn scroll_to_anchor(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let header_height = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0);

    smooth_scroll_to(anchor_offset(target.offset_top() as f64, header_height));
}

pub fn scroll_into_center(element: &Element) {
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    options.block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Adds `revealed` to every reveal-on-scroll element that has entered the viewport.
pub fn reveal_visible_elements() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };

    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            if should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
                let _ = element.class_list().add_1("revealed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_style_switches_after_threshold() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(100.0));
        assert!(header_is_scrolled(100.5));
    }

    #[test]
    fn scroll_top_button_threshold() {
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(301.0));
    }

    #[test]
    fn reveal_once_inside_margin() {
        assert!(should_reveal(600.0, 800.0));
        assert!(!should_reveal(650.0, 800.0));
        assert!(should_reveal(-20.0, 800.0));
    }

    #[test]
    fn reveal_selector_covers_every_hidden_block() {
        let selectors: Vec<&str> = REVEAL_SELECTOR.split(", ").collect();
        for class in [".service-card", ".location-card", ".contact-item"] {
            assert!(selectors.contains(&class), "{} is never revealed", class);
        }
    }

    #[test]
    fn anchor_offset_leaves_room_for_header() {
        assert_eq!(anchor_offset(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_offset(40.0, 80.0), 0.0);
    }
}
