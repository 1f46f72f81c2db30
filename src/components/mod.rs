// src/components/mod.rs
mod activity_list;
mod app;
mod signup_form;
mod status_banner;

pub use activity_list::ActivityList;
pub use app::{App, AppProps};
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
