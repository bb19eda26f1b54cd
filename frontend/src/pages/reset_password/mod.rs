use leptos::*;
use leptos_meta::Title;

mod components;
pub mod controller;
mod panel;
mod repository;
pub mod types;
pub mod utils;
mod view_model;

pub use panel::ResetPasswordPanel;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <Title text="Reset Password"/>
        <ResetPasswordPanel/>
    }
}
