//! Status messages

use hexadmin_core::{Banner, BannerKind};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatusBannerProps {
    pub banner: Banner,
}

/// Outcome of the last login attempt, styled by kind
#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let class = match props.banner.kind {
        BannerKind::Success => "bg-green-50 text-green-800 border-green-200",
        BannerKind::Error => "bg-red-50 text-red-800 border-red-200",
    };
    let role = if props.banner.is_error() { "alert" } else { "status" };

    html! {
        <div class={classes!("p-3", "rounded-md", "border", "text-sm", class)} role={role}>
            {&props.banner.text}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct StartupErrorProps {
    pub message: String,
}

#[function_component(StartupError)]
pub fn startup_error(props: &StartupErrorProps) -> Html {
    html! {
        <div class="m-8 p-4 rounded-md bg-red-50 text-red-800 text-sm" role="alert">
            {format!("The console could not start: {}", props.message)}
        </div>
    }
}
