use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::hooks::use_locale::use_locale;
use crate::services::api::ApiClient;
use crate::services::i18n::t;
use crate::Route;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let locale = use_locale().locale;
    let navigator = use_navigator();
    let api_client = ApiClient::new();

    let on_logout = {
        let api_client = api_client.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            api_client.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    if !api_client.is_authenticated() {
        return html! { <Redirect<Route> to={Route::SignUp} /> };
    }

    html! {
        <>
            <Header authenticated={true} on_logout={on_logout} />

            <main class="main dashboard-page">
                <div class="container">
                    <div class="dashboard-card">
                        <h2>{t(locale, "dashboard.title")}</h2>
                        <p>{t(locale, "dashboard.body")}</p>
                        <Link<Route> to={Route::Transactions} classes="btn btn-primary">
                            {t(locale, "dashboard.openTransactions")}
                        </Link<Route>>
                    </div>
                </div>
            </main>
        </>
    }
}
