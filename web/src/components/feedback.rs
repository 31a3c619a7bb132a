use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent, Spinner, SpinnerSize};

#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="feedback-loading">
            <Spinner size=SpinnerSize::Large />
            <p>{message.unwrap_or_else(|| "Loading, please wait...".to_string())}</p>
        </div>
    }
}

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "Something went wrong. Please try again.".to_string())}
        </MessageBar>
    }
}
