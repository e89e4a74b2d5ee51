use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::pages::legal::LEGAL_CSS;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title("Page not found | Brightforge Studio".to_string());

    html! {
        <div class="legal-content not-found">
            <style>{LEGAL_CSS}</style>
            <div>
                <h1>{"404"}</h1>
                <p>{"We couldn't find that page. It may have moved, or the link might be mistyped."}</p>
                <p>{"Try the search in the top bar, or head back home."}</p>
                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
