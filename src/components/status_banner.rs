// src/components/status_banner.rs
use yew::prelude::*;

use crate::status::StatusRegion;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub region: StatusRegion,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let region = &props.region;
    let kind = region.message().map(|m| m.kind.class());
    let text = region
        .message()
        .map(|m| m.text.clone())
        .unwrap_or_default();

    html! {
        <div id="message" class={classes!(kind, (!region.is_visible()).then_some("hidden"))}>
            { text }
        </div>
    }
}
