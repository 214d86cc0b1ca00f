//! Account creation page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public-only route. Creates the identity account, registers the profile
//! with the backend, caches the resulting session record, and only then
//! commits the credential so the guard lands the new user in their area.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use gate::{IdentityError, Page, Role};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::gated::Gated;
use crate::net::api::ApiError;
use crate::net::types::SignupRequest;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub user_type: Role,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            full_name: String::new(),
            phone: String::new(),
            address: String::new(),
            user_type: Role::Buyer,
        }
    }
}

/// Check the form and build the backend request.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    if form.email.trim().is_empty() {
        return Err("Enter an email address.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters long");
    }
    if !form.user_type.is_known() {
        return Err("Choose an account type.");
    }
    Ok(SignupRequest {
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        full_name: form.full_name.trim().to_owned(),
        phone: form.phone.trim().to_owned(),
        address: form.address.trim().to_owned(),
        user_type: form.user_type,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupFailure {
    Identity(IdentityError),
    Backend(ApiError),
}

pub fn signup_error_message(failure: &SignupFailure) -> String {
    let text = match failure {
        SignupFailure::Identity(IdentityError::EmailInUse) => {
            "This email is already registered. Please use a different email or try logging in."
        }
        SignupFailure::Identity(IdentityError::WeakPassword) => {
            "Password is too weak. Please use a stronger password with at least 6 characters."
        }
        SignupFailure::Identity(IdentityError::InvalidEmail) => "The email address is not valid. Please check and try again.",
        SignupFailure::Identity(IdentityError::Network(_)) => {
            "Network error. Please check your internet connection and try again."
        }
        SignupFailure::Backend(ApiError { status: Some(409), .. }) => "User with this email already exists in our system.",
        SignupFailure::Backend(ApiError { status: Some(400), message: Some(message), .. }) => return message.clone(),
        SignupFailure::Backend(ApiError { status: Some(_), .. }) => {
            "An error occurred while registering your account. Please try again later."
        }
        _ => "An unexpected error occurred. Please try again or contact support if the problem persists.",
    };
    text.to_owned()
}

#[cfg(feature = "hydrate")]
async fn register(services: &crate::state::services::Services, req: SignupRequest) -> Result<Role, SignupFailure> {
    let issued = services.identity.sign_up(&req.email, &req.password).await.map_err(SignupFailure::Identity)?;
    crate::net::api::signup(&services.config, &issued.credential.id_token, &req)
        .await
        .map_err(SignupFailure::Backend)?;
    let record = req.session_record(&issued.credential.subject.uid);
    services.establish(&record, issued);
    Ok(req.user_type)
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Gated page=Page::Signup>
            <SignupFormView/>
        </Gated>
    }
}

#[component]
fn SignupFormView() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::state::services::Services>();
    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_signup(&form.get()) {
            Ok(req) => req,
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
                match register(&services, req).await {
                    Ok(role) => log::info!("registered {} account", role.as_str()),
                    Err(failure) => {
                        log::warn!("signup failed: {failure:?}");
                        error.set(signup_error_message(&failure));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {text_field(form, "email", "Email", "email", |f| &f.email, |f, v| f.email = v)}
                    {text_field(form, "password", "Password", "password", |f| &f.password, |f, v| f.password = v)}
                    {text_field(form, "confirmPassword", "Confirm password", "password", |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                    {text_field(form, "fullName", "Full name", "text", |f| &f.full_name, |f, v| f.full_name = v)}
                    {text_field(form, "phone", "Phone", "tel", |f| &f.phone, |f, v| f.phone = v)}
                    {text_field(form, "address", "Address", "text", |f| &f.address, |f, v| f.address = v)}
                    <label for="userType">"I am a"</label>
                    <select
                        id="userType"
                        on:change=move |ev| {
                            let role = Role::from_user_type(&event_target_value(&ev));
                            form.update(|f| f.user_type = role);
                        }
                    >
                        <option value="buyer" selected=move || form.with(|f| f.user_type == Role::Buyer)>"Buyer"</option>
                        <option value="farmer" selected=move || form.with(|f| f.user_type == Role::Farmer)>"Farmer"</option>
                    </select>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}

fn text_field(
    form: RwSignal<SignupForm>,
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    get: fn(&SignupForm) -> &String,
    set: fn(&mut SignupForm, String),
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <input
            id=id
            type=kind
            required
            prop:value=move || form.with(|f| get(f).clone())
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}
