// src/components/signup_form.rs
use std::rc::Rc;

use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::model::ActivityCollection;
use crate::signup::{SignupOutcome, SignupReaction};

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub activities: Rc<ActivityCollection>,
    pub client: ApiClient,
    pub on_outcome: Callback<SignupReaction>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email = use_state(String::new);
    let activity = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            activity.set(select.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let activity = activity.clone();
        let client = props.client.clone();
        let on_outcome = props.on_outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = email.clone();
            let activity = activity.clone();
            let client = client.clone();
            let on_outcome = on_outcome.clone();
            let (name, address) = ((*activity).clone(), (*email).clone());

            spawn_local(async move {
                let result = client.signup(&name, &address).await;
                match &result {
                    Err(e) => error!(format!("Error signing up: {e}")),
                    Ok(resp) if !resp.ok => log!(format!("Signup rejected: HTTP {}", resp.status)),
                    Ok(_) => {}
                }

                let reaction = SignupOutcome::from_result(result).reaction();
                if reaction.clear_form {
                    email.set(String::new());
                    activity.set(String::new());
                }
                on_outcome.emit(reaction);
            });
        })
    };

    let selected = (*activity).clone();

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={(*email).clone()}
                    oninput={on_email}
                />
            </div>
            <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required=true onchange={on_activity}>
                    <option value="" selected={selected.is_empty()}>{ "-- Select an activity --" }</option>
                    { for props.activities.names().map(|name| html! {
                        <option value={name.to_string()} selected={selected == name}>{ name.to_string() }</option>
                    }) }
                </select>
            </div>
            <button type="submit">{ "Sign Up" }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use yew::LocalServerRenderer;

    use super::*;

    async fn render(json: &str) -> String {
        LocalServerRenderer::<SignupForm>::with_props(SignupFormProps {
            activities: Rc::new(ActivityCollection::from_json(json).unwrap()),
            client: ApiClient::new(""),
            on_outcome: Callback::from(|_| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn one_option_per_activity_in_order() {
        let html = render(
            r#"{"Chess Club": {"max_participants":10,"participants":["a@x.com"]},
                "Art & Design": {"max_participants":3}}"#,
        )
        .await;
        assert_eq!(html.matches("<option").count(), 3, "{html}");
        let chess = html.find("value=\"Chess Club\"").unwrap();
        let art = html.find("value=\"Art &amp; Design\"").unwrap();
        assert!(chess < art);
        assert!(html.contains(">Art &amp; Design</option>"));
    }

    #[tokio::test]
    async fn empty_collection_leaves_placeholder_only() {
        let html = render("{}").await;
        assert_eq!(html.matches("<option").count(), 1);
        assert!(html.contains("-- Select an activity --"));
    }
}
