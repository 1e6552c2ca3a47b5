use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{ButtonPlacement, is_form_valid, placement_after_edit};

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);
    let mut loading = use_signal(|| false);
    let mut placement = use_signal(ButtonPlacement::default);

    // An existing session skips the form entirely.
    {
        let session = ctx.session();
        use_effect(move || {
            if session.is_authenticated() {
                navigator.replace(Route::Dashboard {});
            }
        });
    }

    let form_valid = is_form_valid(&username.read(), &password.read());

    let on_hover = move |_| {
        if !is_form_valid(&username.read(), &password.read()) {
            placement.set(placement().dodge_from_hover());
        }
    };

    let submit = {
        let session = ctx.session();
        use_callback(move |()| {
            if !is_form_valid(&username.read(), &password.read()) {
                // Enter does not pin the button down either.
                placement.set(placement().dodge_from_submit());
                return;
            }
            if loading() {
                return;
            }
            loading.set(true);
            let session = session.clone();
            let user = username.peek().clone();
            let pass = password.peek().clone();
            spawn(async move {
                match session.login(&user, &pass).await {
                    Ok(()) => {
                        error.set(None);
                        navigator.push(Route::Dashboard {});
                    }
                    Err(_) => {
                        error.set(Some(ViewError::Auth));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let button_label = if loading() { "Signing In..." } else { "Sign In" };
    let button_class = if loading() {
        "login-button loading".to_string()
    } else if form_valid {
        "login-button clickable".to_string()
    } else {
        format!("login-button {}", placement().css_class())
            .trim_end()
            .to_string()
    };

    rsx! {
        div { class: "login-wrapper",
            div { class: "login-container",
                div { class: "login-visual",
                    h1 { "AI Sentiment Analysis" }
                }
                div { class: "login-form-container",
                    div { class: "login-header",
                        h2 { "Welcome Back" }
                        p { "Please sign in to continue" }
                    }

                    if let Some(err) = error() {
                        div { class: "error-message", id: "login-error", "{err.message()}" }
                    }

                    form {
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            submit.call(());
                        },
                        div { class: "form-group",
                            label { r#for: "login-username", "Username" }
                            input {
                                id: "login-username",
                                r#type: "text",
                                value: "{username}",
                                oninput: move |evt| {
                                    username.set(evt.value());
                                    let valid = is_form_valid(&username.read(), &password.read());
                                    placement.set(placement_after_edit(placement(), valid));
                                },
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "login-password", "Password" }
                            input {
                                id: "login-password",
                                r#type: "password",
                                value: "{password}",
                                oninput: move |evt| {
                                    password.set(evt.value());
                                    let valid = is_form_valid(&username.read(), &password.read());
                                    placement.set(placement_after_edit(placement(), valid));
                                },
                            }
                        }
                        button {
                            id: "login-submit",
                            r#type: "submit",
                            class: "{button_class}",
                            disabled: loading() || !form_valid,
                            onmouseenter: on_hover,
                            "{button_label}"
                        }
                    }
                }
            }
        }
    }
}
