use shared::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::hooks::use_locale::use_locale;
use crate::pages::is_valid_email;
use crate::services::api::ApiClient;
use crate::services::i18n::t;
use crate::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let locale = use_locale().locale;
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_email_change = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let on_password_change = {
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.is_empty() {
                error.set(Some(t(locale, "auth.emailRequired")));
                return;
            }
            if !is_valid_email(&email) {
                error.set(Some(t(locale, "auth.emailInvalid")));
                return;
            }
            if password.is_empty() {
                error.set(Some(t(locale, "auth.passwordRequired")));
                return;
            }

            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let submitting = submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                submitting.set(true);

                match ApiClient::new().sign_in(&request).await {
                    Ok(_user) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(api_error) => {
                        error.set(Some(api_error.message().to_string()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    html! {
        <>
            <Header authenticated={false} on_logout={Callback::noop()} />

            <main class="main auth-page">
                <div class="auth-card">
                    <h2>{t(locale, "auth.signInToAccount")}</h2>

                    {if let Some(error) = (*error).clone() {
                        html! { <div class="form-message error">{error}</div> }
                    } else {
                        html! {}
                    }}

                    <form class="auth-form" onsubmit={onsubmit}>
                        <div class="form-group">
                            <label for="email">{t(locale, "auth.yourEmail")}</label>
                            <input
                                type="email"
                                id="email"
                                value={(*email).clone()}
                                onchange={on_email_change}
                                disabled={*submitting}
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">{t(locale, "auth.password")}</label>
                            <input
                                type="password"
                                id="password"
                                value={(*password).clone()}
                                onchange={on_password_change}
                                disabled={*submitting}
                            />
                        </div>

                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            {if *submitting {
                                t(locale, "auth.signingIn")
                            } else {
                                t(locale, "auth.signIn")
                            }}
                        </button>
                    </form>

                    <p class="auth-switch">
                        {t(locale, "auth.dontHaveAccount")}
                        {" "}
                        <Link<Route> to={Route::SignUp}>{t(locale, "auth.signUp")}</Link<Route>>
                    </p>
                </div>
            </main>
        </>
    }
}
