//! Login form

use super::{Spinner, StatusBanner};
use crate::console::use_console;
use hexadmin_core::{ConsoleAction, CredentialField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

fn edit(field: CredentialField) -> impl Fn(InputEvent) -> ConsoleAction {
    move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        ConsoleAction::EditCredential(field, input.value())
    }
}

/// Email and password form. Submitting clears the fields and keeps the
/// button disabled until the server answers.
#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let console = use_console();
    let on_username = console.callback(edit(CredentialField::Username));
    let on_password = console.callback(edit(CredentialField::Password));
    let on_submit = console.callback(|e: SubmitEvent| {
        e.prevent_default();
        ConsoleAction::SubmitLogin
    });
    let submitting = console.submitting;

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form class="w-full max-w-sm bg-white rounded-lg shadow-sm p-8 space-y-4" onsubmit={on_submit}>
                <h1 class="text-2xl font-semibold text-gray-900 text-center">{"Please sign in"}</h1>

                if let Some(banner) = &console.banner {
                    <StatusBanner banner={banner.clone()} />
                }

                <div>
                    <label for="username" class="block text-sm font-medium text-gray-700 mb-1">
                        {"Email address"}
                    </label>
                    <input
                        id="username"
                        name="username"
                        type="email"
                        class={INPUT_CLASS}
                        placeholder="name@example.com"
                        autocomplete="username"
                        required=true
                        value={console.credential.username.clone()}
                        oninput={on_username}
                    />
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 mb-1">
                        {"Password"}
                    </label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        class={INPUT_CLASS}
                        placeholder="Password"
                        autocomplete="current-password"
                        required=true
                        value={console.credential.password.clone()}
                        oninput={on_password}
                    />
                </div>

                <button
                    type="submit"
                    class="w-full py-2 px-4 rounded-md bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled={submitting}
                >
                    if submitting {
                        <Spinner inline=true />
                        {"Signing in..."}
                    } else {
                        {"Sign in"}
                    }
                </button>
            </form>
        </div>
    }
}
