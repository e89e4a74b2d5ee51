use std::rc::Rc;

use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use super::catalog::site_catalog;
use super::index::{group_by_category, Activation, Direction, SearchAction, SearchIndex, SearchSession};
use crate::dom::{self, DomProbe};
use crate::reporting::{use_reporter, ReportEvent};
use crate::Route;

#[function_component(SearchModal)]
pub fn search_modal() -> Html {
    let index = use_memo(|_| site_catalog(), ());
    let session = {
        let index: Rc<SearchIndex> = index.clone();
        use_reducer(move || SearchSession::new(index))
    };
    let notice = use_state(|| None::<String>);
    let input_ref = use_node_ref();
    let navigator = use_navigator();
    let reporter = use_reporter();

    // Ctrl/Cmd+K opens, Escape closes, from anywhere on the page.
    {
        let dispatcher = session.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if (e.ctrl_key() || e.meta_key()) && e.key().eq_ignore_ascii_case("k") {
                e.prevent_default();
                dispatcher.dispatch(SearchAction::Open);
            } else if e.key() == "Escape" {
                dispatcher.dispatch(SearchAction::Close);
            }
        });
    }

    {
        let input_ref = input_ref.clone();
        let notice = notice.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                if *is_open {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                } else {
                    notice.set(None);
                }
                || ()
            },
            session.is_open,
        );
    }

    let run_activation = {
        let session = session.clone();
        let notice = notice.clone();
        Callback::from(move |activation: Activation| match activation {
            Activation::ScrollTo(id) => {
                session.dispatch(SearchAction::Close);
                dom::scroll_to_anchor(&id);
            }
            Activation::Navigate(path) => {
                session.dispatch(SearchAction::Close);
                let route = Route::recognize(&path).unwrap_or(Route::NotFound);
                match &navigator {
                    Some(navigator) => navigator.push(&route),
                    None => log::warn!("No navigator available for {}", path),
                }
            }
            Activation::MissingAnchor(id) => {
                log::warn!("Search target #{} is not on this page", id);
                reporter.report(ReportEvent::SearchMiss { anchor: id });
                notice.set(Some("That section lives on the home page.".to_string()));
            }
        })
    };

    let open = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SearchAction::Open))
    };

    let close = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SearchAction::Close))
    };

    let oninput = {
        let session = session.clone();
        let notice = notice.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            notice.set(None);
            session.dispatch(SearchAction::Query(input.value()));
        })
    };

    let onkeydown = {
        let session = session.clone();
        let run_activation = run_activation.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowDown" => {
                e.prevent_default();
                session.dispatch(SearchAction::Advance(Direction::Next));
            }
            "ArrowUp" => {
                e.prevent_default();
                session.dispatch(SearchAction::Advance(Direction::Previous));
            }
            "Enter" => {
                e.prevent_default();
                if let Some(activation) = session.activate_selected(&DomProbe) {
                    run_activation.emit(activation);
                }
            }
            _ => {}
        })
    };

    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    // Portal into <body>: inside the blurred nav the fixed backdrop would be
    // clipped to the nav's box.
    let overlay = if session.is_open {
        html! {
            <div class="search-backdrop" onclick={close}>
                <style>
                    {r#"
                        .search-backdrop {
                            position: fixed;
                            inset: 0;
                            background: rgba(10, 10, 20, 0.7);
                            backdrop-filter: blur(6px);
                            display: flex;
                            justify-content: center;
                            align-items: flex-start;
                            padding-top: 12vh;
                            z-index: 1000;
                        }
                        .search-panel {
                            width: min(600px, 92vw);
                            background: rgba(30, 30, 30, 0.95);
                            border: 1px solid rgba(126, 178, 255, 0.2);
                            border-radius: 16px;
                            box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4);
                            overflow: hidden;
                        }
                        .search-panel input {
                            width: 100%;
                            padding: 1.2rem 1.5rem;
                            font-size: 1.1rem;
                            background: transparent;
                            border: none;
                            border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                            color: #fff;
                            outline: none;
                        }
                        .search-group h4 {
                            margin: 0;
                            padding: 0.8rem 1.5rem 0.4rem;
                            font-size: 0.75rem;
                            text-transform: uppercase;
                            letter-spacing: 0.08em;
                            color: #7EB2FF;
                        }
                        .search-result {
                            padding: 0.7rem 1.5rem;
                            color: #ddd;
                            cursor: pointer;
                        }
                        .search-result.selected,
                        .search-result:hover {
                            background: rgba(126, 178, 255, 0.12);
                            color: #fff;
                        }
                        .search-empty,
                        .search-notice {
                            padding: 1rem 1.5rem;
                            color: #999;
                        }
                    "#}
                </style>
                <div class="search-panel" onclick={stop_propagation} role="dialog" aria-modal="true">
                    <input
                        ref={input_ref}
                        type="search"
                        placeholder={format!("Search {} pages and services...", index.len())}
                        value={session.query.clone()}
                        {oninput}
                        {onkeydown}
                    />
                    if let Some(message) = (*notice).as_ref() {
                        <div class="search-notice">{message}</div>
                    }
                    if !session.query.trim().is_empty() && session.results.is_empty() {
                        <div class="search-empty">{format!("Nothing matches \"{}\"", session.query)}</div>
                    }
                    {
                        group_by_category(&session.results).into_iter().map(|(category, members)| {
                            html! {
                                <div class="search-group" key={category.to_string()}>
                                    <h4>{category}</h4>
                                    {
                                        members.into_iter().map(|(position, result)| {
                                            let onclick = {
                                                let session = session.clone();
                                                let run_activation = run_activation.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    session.dispatch(SearchAction::Select(position));
                                                    if let Some(activation) = session.activate_index(position, &DomProbe) {
                                                        run_activation.emit(activation);
                                                    }
                                                })
                                            };
                                            html! {
                                                <div
                                                    class={classes!("search-result", (session.selected == Some(position)).then(|| "selected"))}
                                                    {onclick}
                                                >
                                                    {result.title()}
                                                </div>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        }
    } else {
        html! {}
    };
    let overlay = match web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => yew::create_portal(overlay, body.into()),
        None => overlay,
    };

    html! {
        <>
            <button class="search-trigger" onclick={open} aria-label="Search the site">
                {"🔍"}
                <span class="search-shortcut">{"Ctrl K"}</span>
            </button>
            {overlay}
        </>
    }
}
