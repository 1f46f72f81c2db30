// src/components/app.rs
use std::rc::Rc;

use gloo::console::error;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::board::{remove_failure_notice, Board, BoardAction, RemoveKey, TicketCounter};
use crate::components::{ActivityList, SignupForm, StatusBanner};
use crate::config::BoardConfig;
use crate::notify::NotifierHandle;
use crate::signup::SignupReaction;
use crate::status::{StatusAction, StatusRegion};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<BoardConfig>,
    /// Where unregister failures are reported.
    pub notifier: NotifierHandle,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let client = ApiClient::new(config.api_base.clone());

    let board = use_reducer(Board::default);
    let status = use_reducer(StatusRegion::default);
    let tickets = use_mut_ref(TicketCounter::default);

    // One fetch on mount and one per successful mutation.
    {
        let dispatcher = board.dispatcher();
        let client = client.clone();
        let tickets = tickets.clone();
        use_effect_with(board.refresh_epoch(), move |_| {
            let ticket = tickets.borrow_mut().issue();
            spawn_local(async move {
                match client.list_activities().await {
                    Ok(activities) => {
                        dispatcher.dispatch(BoardAction::FetchSucceeded { ticket, activities })
                    }
                    Err(e) => {
                        error!(format!("Error fetching activities: {e}"));
                        dispatcher.dispatch(BoardAction::FetchFailed { ticket });
                    }
                }
            });
            || ()
        });
    }

    // Hide the status message after the configured delay. A newer message
    // tears this effect down, which drops (and cancels) the old timeout.
    {
        let dispatcher = status.dispatcher();
        let hide_ms = config.status_hide_ms;
        use_effect_with(
            (status.generation(), status.is_visible()),
            move |&(generation, visible)| {
                let timeout = visible.then(|| {
                    Timeout::new(hide_ms, move || {
                        dispatcher.dispatch(StatusAction::Hide { generation })
                    })
                });
                move || drop(timeout)
            },
        );
    }

    let on_remove = {
        let dispatcher = board.dispatcher();
        let client = client.clone();
        let notifier = props.notifier.clone();
        let board = board.clone();
        let tickets = tickets.clone();
        Callback::from(move |key: RemoveKey| {
            if board.is_busy(&key) {
                return;
            }
            dispatcher.dispatch(BoardAction::RemoveStarted(key.clone()));

            let dispatcher = dispatcher.clone();
            let client = client.clone();
            let notifier = notifier.clone();
            let tickets = tickets.clone();
            spawn_local(async move {
                match client.unregister(&key.activity, &key.participant).await {
                    Ok(()) => {
                        let after = tickets.borrow().last();
                        dispatcher.dispatch(BoardAction::RemoveSucceeded { key, after });
                    }
                    Err(e) => {
                        error!(format!(
                            "Error removing {} from {}: {e}",
                            key.participant, key.activity
                        ));
                        dispatcher.dispatch(BoardAction::RemoveFailed(key));
                        notifier.notify(remove_failure_notice(&e));
                    }
                }
            });
        })
    };

    let on_outcome = {
        let board = board.dispatcher();
        let status = status.dispatcher();
        Callback::from(move |reaction: SignupReaction| {
            let (shown, refresh) = reaction.into_actions();
            status.dispatch(shown);
            if let Some(action) = refresh {
                board.dispatch(action);
            }
        })
    };

    html! {
        <div class="container">
            <header>
                <h1>{ "Mergington High School" }</h1>
                <h2>{ "Extracurricular Activities" }</h2>
            </header>

            <main>
                <section id="activities-container">
                    <h3>{ "Available Activities" }</h3>
                    <ActivityList board={(*board).clone()} {on_remove} />
                </section>

                <section id="signup-container">
                    <h3>{ "Sign Up for an Activity" }</h3>
                    <SignupForm
                        activities={board.activities()}
                        client={client}
                        {on_outcome}
                    />
                    <StatusBanner region={(*status).clone()} />
                </section>
            </main>
        </div>
    }
}
