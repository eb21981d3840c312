//! Combined login / sign-up view.

use dioxus::prelude::*;

use ui::components::{use_toast, Button, ButtonVariant, Input, Label};
use ui::{redirect, store_session, use_session};

use crate::Route;

#[component]
pub fn Auth() -> Element {
    let session = use_session();
    let toast_api = use_toast();
    let nav = use_navigator();
    let mut is_login = use_signal(|| true);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already authenticated: straight to the catalog
    if !session().loading && session().is_authenticated() {
        redirect("/");
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let email_value = email().trim().to_string();
            let password_value = password();
            if email_value.is_empty() || password_value.is_empty() {
                return;
            }

            // Local precondition: no network call on mismatch
            if !is_login() && password_value != confirm_password() {
                toast_api.error("Passwords do not match");
                return;
            }

            loading.set(true);
            let config = api::ApiConfig::default();
            let result = if is_login() {
                api::login(&config, &email_value, &password_value).await
            } else {
                api::register(&config, &email_value, &password_value).await
            };

            match result {
                Ok(auth) => {
                    store_session(session, &auth.token, &auth.user_id);
                    let fallback = if is_login() {
                        "Logged in successfully!"
                    } else {
                        "Account created successfully!"
                    };
                    toast_api.success(auth.message.unwrap_or_else(|| fallback.to_string()));
                    loading.set(false);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::error!("auth request failed: {e}");
                    loading.set(false);
                    toast_api.error(e.to_string());
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-heading",
                    h1 { "SingersRepo" }
                    p { "Your musical journey starts here" }
                }

                div {
                    class: "auth-tabs",
                    button {
                        class: if is_login() { "auth-tab active" } else { "auth-tab" },
                        onclick: move |_| is_login.set(true),
                        "Login"
                    }
                    button {
                        class: if !is_login() { "auth-tab active" } else { "auth-tab" },
                        onclick: move |_| is_login.set(false),
                        "Sign Up"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        Label { html_for: "email", "Email" }
                        Input {
                            id: "email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: email(),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "password", "Password" }
                        Input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    if !is_login() {
                        div {
                            class: "form-field",
                            Label { html_for: "confirm-password", "Confirm Password" }
                            Input {
                                id: "confirm-password",
                                r#type: "password",
                                placeholder: "Confirm your password",
                                value: confirm_password(),
                                required: true,
                                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            if is_login() { "Logging in..." } else { "Signing up..." }
                        } else {
                            if is_login() { "Login" } else { "Sign Up" }
                        }
                    }
                }

                p {
                    class: "auth-switch",
                    if is_login() { "Don't have an account? " } else { "Already have an account? " }
                    button {
                        class: "auth-switch-link",
                        onclick: move |_| is_login.set(!is_login()),
                        if is_login() { "Sign up here" } else { "Login here" }
                    }
                }
            }
        }
    }
}
