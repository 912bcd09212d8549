use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for has moved or never existed."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                {"Back to the homepage"}
            </Link<Route>>
        </section>
    }
}
