use leptos::*;
use leptos_meta::Title;

mod panel;

pub use panel::InvalidLinkPanel;

#[component]
pub fn InvalidLinkPage() -> impl IntoView {
    view! {
        <Title text="Invalid Link"/>
        <InvalidLinkPanel/>
    }
}
