//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public-only route. A successful login caches the backend's user record
//! and then commits the identity credential; the public-only guard sees the
//! subject and its role in one snapshot and sends the visitor to their area.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gate::{IdentityError, Page};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::gated::Gated;
use crate::net::api::ApiError;

/// Why a login attempt failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginFailure {
    Identity(IdentityError),
    Backend(ApiError),
}

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const GENERIC_LOGIN_ERROR: &str = "An error occurred during login. Please try again.";

/// Trimmed email and raw password, or the message to show.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub fn login_error_message(failure: &LoginFailure) -> String {
    match failure {
        LoginFailure::Identity(IdentityError::InvalidCredentials) => INVALID_CREDENTIALS.to_owned(),
        LoginFailure::Backend(ApiError { message: Some(message), .. }) => message.clone(),
        _ => GENERIC_LOGIN_ERROR.to_owned(),
    }
}

#[cfg(feature = "hydrate")]
async fn sign_in(
    services: &crate::state::services::Services,
    email: String,
    password: String,
) -> Result<gate::Role, LoginFailure> {
    let issued = services.identity.sign_in_with_password(&email, &password).await.map_err(LoginFailure::Identity)?;
    let req = crate::net::types::LoginRequest { email, password, id_token: issued.credential.id_token.clone() };
    let mut record = crate::net::api::login(&services.config, &req).await.map_err(LoginFailure::Backend)?;
    if record.uid.is_empty() {
        record.uid.clone_from(&issued.credential.subject.uid);
    }
    let role = record.user_type;
    services.establish(&record, issued);
    Ok(role)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Gated page=Page::Login>
            <LoginForm/>
        </Gated>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::state::services::Services>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            leptos::task::spawn_local(async move {
                match sign_in(&services, email_value, password_value).await {
                    Ok(role) => log::info!("signed in as {}", role.as_str()),
                    Err(failure) => {
                        log::warn!("login failed: {failure:?}");
                        error.set(login_error_message(&failure));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
