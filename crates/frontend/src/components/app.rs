//! Root component and top-level view switch

use super::{LoginForm, ProductDetail, ProductList, Spinner, StartupError};
use crate::config::BuildConfig;
use crate::console::{ConsoleProvider, use_console};
use hexadmin_core::{ConsoleAction, ConsoleView};
use yew::prelude::*;

#[function_component(ConsoleApp)]
pub fn console_app() -> Html {
    let config = use_memo((), |_| BuildConfig::console_config());

    match config.as_ref() {
        Ok(config) => html! {
            <ConsoleProvider config={config.clone()}>
                <ConsoleShell />
            </ConsoleProvider>
        },
        Err(err) => html! { <StartupError message={err.to_string()} /> },
    }
}

#[function_component(ConsoleShell)]
fn console_shell() -> Html {
    let console = use_console();

    match console.view() {
        ConsoleView::Loading => html! {
            <div class="min-h-screen flex items-center justify-center">
                <Spinner text={Some("Checking your session...".to_string())} />
            </div>
        },
        ConsoleView::Login => html! { <LoginForm /> },
        ConsoleView::Dashboard => html! { <Dashboard /> },
    }
}

#[function_component(Dashboard)]
fn dashboard() -> Html {
    let console = use_console();
    let on_select = console.callback(ConsoleAction::SelectProduct);
    let on_retry = console.callback(|()| ConsoleAction::RefreshProducts);
    let selected = console.selected.as_ref().map(|product| product.id.clone());

    html! {
        <main class="container mx-auto p-6 grid gap-6 lg:grid-cols-2">
            <ProductList
                products={console.products.clone()}
                loading={console.products_loading}
                error={console.products_error.clone()}
                {selected}
                {on_select}
                {on_retry}
            />
            <ProductDetail product={console.selected.clone()} />
        </main>
    }
}
