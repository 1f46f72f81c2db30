// src/main.rs
mod api;
mod board;
mod components;
mod config;
mod error;
mod model;
mod notify;
mod signup;
mod status;

use std::rc::Rc;

use gloo::console::warn;

use components::{App, AppProps};
use config::BoardConfig;

fn main() {
    let (config, problem) = BoardConfig::load();
    if let Some(problem) = problem {
        warn!(problem);
    }
    let notifier = config.notifier.handle();

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        notifier,
    })
    .render();
}
