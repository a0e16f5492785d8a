use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    use_effect_with_deps(
        move |path| {
            log::warn!("No route for {}", path);
            || ()
        },
        location.map(|l| l.path().to_string()).unwrap_or_default(),
    );

    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="button-primary">{"Return to Home"}</Link<Route>>
        </div>
    }
}
