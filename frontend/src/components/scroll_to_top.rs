use yew::prelude::*;

use crate::scroll::{scroll_top_visible, smooth_scroll_to, use_scroll_y};

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = scroll_top_visible(use_scroll_y());
    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <button
            class={classes!("scroll-to-top", visible.then(|| "visible"))}
            aria-label="Back to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
