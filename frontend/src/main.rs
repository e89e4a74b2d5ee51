use chrono::Datelike;
use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod recovery;
mod reporting;
mod motion;
mod components {
    pub mod lazy_image;
    pub mod notification;
}
mod contact;
mod search {
    pub mod catalog;
    pub mod index;
    pub mod modal;
}
mod pages {
    pub mod home;
    pub mod legal;
    pub mod not_found;
    pub mod team;
}

use motion::hooks::use_scroll_state;
use pages::{
    home::Home,
    legal::{PrivacyPolicy, TermsOfService},
    not_found::NotFound,
    team::Team,
};
use reporting::{ReportEvent, Reporter, WindowSink};
use search::catalog::HOME_SECTIONS;
use search::modal::SearchModal;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/team")]
    Team,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
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
        Route::Team => {
            info!("Rendering Team page");
            html! { <Team /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Nav entries for the home page sections, `(section id, label)`.
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("services", "Services"),
    ("portfolio", "Work"),
    ("testimonials", "Clients"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_scroll_state(HOME_SECTIONS);
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home));

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let section_link = |id: &'static str, label: &'static str| {
        let is_active = on_home && scroll.active_section == Some(id);
        let class = classes!("nav-link", is_active.then(|| "active"));
        if on_home {
            let onclick = {
                let menu_open = menu_open.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    menu_open.set(false);
                    dom::scroll_to_anchor(id);
                })
            };
            html! { <a href={format!("#{}", id)} {class} {onclick}>{label}</a> }
        } else {
            html! { <a href={format!("/#{}", id)} {class}>{label}</a> }
        }
    };

    html! {
        <nav class={classes!("top-nav", (scroll.scroll_percent > 2.0).then(|| "scrolled"))}>
            <div class="scroll-progress" style={format!("width: {:.1}%;", scroll.scroll_percent)}></div>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"brightforge"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|&(id, label)| section_link(id, label)) }
                    <Link<Route> to={Route::Team} classes="nav-link">
                        {"Team"}
                    </Link<Route>>
                    <SearchModal />
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <p>{format!("© {} Brightforge Studio. All rights reserved.", year)}</p>
            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                {" | "}
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
            </div>
        </footer>
    }
}

/// Reports a page view whenever the path changes.
#[function_component(PageViews)]
fn page_views() -> Html {
    let reporter = reporting::use_reporter();
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();
    use_effect_with_deps(
        move |path: &String| {
            reporter.report(ReportEvent::PageView { path: path.clone() });
            || ()
        },
        path,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    let reporter = use_memo(|_| Reporter::new(WindowSink), ());

    html! {
        <ContextProvider<Reporter> context={(*reporter).clone()}>
            <BrowserRouter>
                <style>{SHELL_CSS}</style>
                <PageViews />
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ContextProvider<Reporter>>
    }
}

const SHELL_CSS: &str = r#"
    body {
        margin: 0;
        background: #1a1a1a;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 900;
        transition: background 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(26, 26, 26, 0.92);
        backdrop-filter: blur(10px);
        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.3);
    }
    .scroll-progress {
        height: 3px;
        background: linear-gradient(90deg, #1E90FF, #7EB2FF);
        transition: width 0.1s linear;
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1.2rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        color: #fff;
        font-size: 1.5rem;
        font-weight: bold;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 1.8rem;
    }
    .nav-link {
        color: #bbb;
        text-decoration: none;
        transition: color 0.2s ease;
    }
    .nav-link:hover,
    .nav-link.active {
        color: #7EB2FF;
    }
    .search-trigger {
        background: rgba(255, 255, 255, 0.06);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 8px;
        color: #bbb;
        padding: 0.4rem 0.8rem;
        cursor: pointer;
        display: flex;
        gap: 0.5rem;
        align-items: center;
    }
    .search-shortcut {
        font-size: 0.75rem;
        color: #777;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: #fff;
    }
    .site-footer {
        text-align: center;
        color: #777;
        padding: 3rem 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.06);
        background: #141414;
    }
    .site-footer .legal-links a {
        color: #1E90FF;
        text-decoration: none;
    }
    @media (max-width: 900px) {
        .burger-menu { display: flex; }
        .nav-right {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            background: rgba(26, 26, 26, 0.97);
            padding: 1.5rem;
        }
        .nav-right.mobile-menu-open { display: flex; }
    }
"#;

fn main() {
    // Panic hook first so even logger setup failures get the recovery screen
    recovery::install();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
