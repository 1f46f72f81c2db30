// src/components/activity_list.rs
use yew::prelude::*;

use crate::board::{Board, ListView, RemoveKey};
use crate::model::Activity;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet — be the first to sign up!";

const TRASH_ICON: &str = "\u{1F5D1}";
const WORKING_ICON: &str = "...";

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub board: Board,
    pub on_remove: Callback<RemoveKey>,
}

/// Renders the whole list from the board. Nothing here survives between
/// fetches; every render starts from the current collection.
#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let body = match props.board.view() {
        ListView::Loading => html! { <p>{ LOADING_TEXT }</p> },
        ListView::Failed => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        ListView::Ready => {
            let activities = props.board.activities();
            html! {
                <>
                { for activities.iter().map(|activity| {
                    let busy: Vec<String> = activity
                        .participants
                        .iter()
                        .filter(|p| props.board.is_busy(&RemoveKey::new(activity.name.as_str(), p.as_str())))
                        .cloned()
                        .collect();
                    html! {
                        <ActivityCard
                            key={activity.name.clone()}
                            activity={activity.clone()}
                            {busy}
                            on_remove={props.on_remove.clone()}
                        />
                    }
                }) }
                </>
            }
        }
    };

    html! {
        <div id="activities-list">
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub activity: Activity,
    /// Participants whose remove control is waiting on the server.
    pub busy: Vec<String>,
    pub on_remove: Callback<RemoveKey>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let a = &props.activity;

    let participants = if a.participants.is_empty() {
        html! { <p class="no-participants">{ NO_PARTICIPANTS_TEXT }</p> }
    } else {
        html! {
            <div class="participants">
                <h5 class="participants-title">{ "Participants" }</h5>
                <div class="participants-list">
                    { for a.participants.iter().map(|p| {
                        let busy = props.busy.contains(p);
                        let onclick = {
                            let on_remove = props.on_remove.clone();
                            let key = RemoveKey::new(a.name.as_str(), p.as_str());
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_remove.emit(key.clone());
                            })
                        };
                        html! {
                            <div class="participant-row">
                                <span class="participant-name">{ p.clone() }</span>
                                <button
                                    class="delete-participant"
                                    title="Remove participant"
                                    data-activity={a.name.clone()}
                                    data-participant={p.clone()}
                                    disabled={busy}
                                    {onclick}
                                >
                                    { if busy { WORKING_ICON } else { TRASH_ICON } }
                                </button>
                            </div>
                        }
                    }) }
                </div>
            </div>
        }
    };

    html! {
        <div class="activity-card">
            <h4>{ a.name.clone() }</h4>
            <p class="activity-description">{ a.description.clone() }</p>
            <p><strong>{ "Schedule:" }</strong>{ format!(" {}", a.schedule) }</p>
            <p><strong>{ "Availability:" }</strong>{ format!(" {} spots left", a.spots_left()) }</p>
            { participants }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::{LocalServerRenderer, Reducible};

    use super::*;
    use crate::board::{BoardAction, TicketCounter};
    use crate::model::ActivityCollection;

    const CHESS: &str = r#"{"Chess Club": {"description":"d","schedule":"s","max_participants":10,"participants":["a@x.com"]}}"#;

    fn loaded(json: &str) -> Board {
        let mut tickets = TicketCounter::default();
        let board = Rc::new(Board::default()).reduce(BoardAction::FetchSucceeded {
            ticket: tickets.issue(),
            activities: ActivityCollection::from_json(json).unwrap(),
        });
        (*board).clone()
    }

    async fn render(board: Board) -> String {
        LocalServerRenderer::<ActivityList>::with_props(ActivityListProps {
            board,
            on_remove: Callback::from(|_| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn renders_chess_club_card() {
        let html = render(loaded(CHESS)).await;
        assert!(html.contains("<h4>Chess Club</h4>"), "{html}");
        assert!(html.contains("9 spots left"), "{html}");
        assert_eq!(html.matches("class=\"participant-row\"").count(), 1);
        assert!(html.contains("<span class=\"participant-name\">a@x.com</span>"));
        assert!(html.contains("data-activity=\"Chess Club\""));
        assert!(html.contains("data-participant=\"a@x.com\""));
        assert!(html.contains(TRASH_ICON));
        assert!(!html.contains(NO_PARTICIPANTS_TEXT));
    }

    #[tokio::test]
    async fn spots_left_is_not_clamped() {
        let html = render(loaded(
            r#"{"Tiny": {"max_participants":1,"participants":["a@x.com","b@x.com","c@x.com"]}}"#,
        ))
        .await;
        assert!(html.contains("-2 spots left"), "{html}");
    }

    #[tokio::test]
    async fn empty_roster_shows_message_and_no_controls() {
        let html = render(loaded(r#"{"Art": {"description":"paint","schedule":"Fri","max_participants":5,"participants":[]}}"#)).await;
        assert!(html.contains(NO_PARTICIPANTS_TEXT));
        assert!(html.contains("5 spots left"));
        assert!(!html.contains("delete-participant"));
        assert!(!html.contains("participants-list"));
    }

    #[tokio::test]
    async fn server_text_is_escaped() {
        let json = r#"{"Tom & \"Jerry's\" <b>": {
            "description":"<script>alert(1)</script>",
            "schedule":"Mon & Wed",
            "max_participants":2,
            "participants":["<img src=x onerror=alert(1)>"]
        }}"#;
        let html = render(loaded(json)).await;
        assert!(!html.contains("<script>"), "{html}");
        assert!(!html.contains("<img"), "{html}");
        assert!(!html.contains("<b>"), "{html}");
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("Mon &amp; Wed"));
        assert!(html.contains("data-activity=\"Tom &amp; &quot;Jerry's&quot; &lt;b&gt;\""), "{html}");
    }

    #[tokio::test]
    async fn single_quote_stays_inert_in_text_and_attributes() {
        let json = r#"{"O'Brien Club": {"max_participants":2,"participants":["o'x@y.com"]}}"#;
        let html = render(loaded(json)).await;
        // Attributes are double-quoted, so a raw ' cannot close them.
        assert!(html.contains("data-activity=\"O'Brien Club\""), "{html}");
        assert!(html.contains("data-participant=\"o'x@y.com\""), "{html}");
        assert!(html.contains("<h4>O'Brien Club</h4>"), "{html}");
        assert!(html.contains(">o'x@y.com</span>"), "{html}");
        assert!(!html.contains("='"), "{html}");
    }

    #[tokio::test]
    async fn rerender_is_identical() {
        let first = render(loaded(CHESS)).await;
        let second = render(loaded(CHESS)).await;
        assert_eq!(first, second);
        assert_eq!(second.matches("class=\"activity-card\"").count(), 1);
    }

    #[tokio::test]
    async fn loading_and_failure_states() {
        let html = render(Board::default()).await;
        assert!(html.contains(LOADING_TEXT));

        let mut tickets = TicketCounter::default();
        let failed = Rc::new(Board::default()).reduce(BoardAction::FetchFailed {
            ticket: tickets.issue(),
        });
        let html = render((*failed).clone()).await;
        assert!(html.contains(LOAD_FAILED_TEXT));
        assert!(!html.contains("activity-card"));
    }

    #[tokio::test]
    async fn busy_control_shows_working_indicator() {
        let board = Rc::new(loaded(CHESS))
            .reduce(BoardAction::RemoveStarted(RemoveKey::new("Chess Club", "a@x.com")));
        let html = render((*board).clone()).await;
        assert!(html.contains(WORKING_ICON));
        assert!(!html.contains(TRASH_ICON));
        assert!(html.contains("disabled"));
    }
}
