use shared::Locale;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use hooks::use_locale::LocaleHandle;
use pages::dashboard::DashboardPage;
use pages::login::LoginPage;
use pages::sign_up::SignUpPage;
use pages::transactions::TransactionsPage;
use services::session::Session;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    SignUp,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/transactions")]
    Transactions,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Redirect<Route> to={Route::SignUp} /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Transactions => html! { <TransactionsPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    // The chosen locale outlives the session, so it is seeded from and
    // persisted to local storage.
    let locale = use_state(|| Session.locale());

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            Session.set_locale(next);
            locale.set(next);
        })
    };

    let handle = LocaleHandle {
        locale: *locale,
        set_locale,
    };

    html! {
        <BrowserRouter>
            <ContextProvider<LocaleHandle> context={handle}>
                <Switch<Route> render={switch} />
            </ContextProvider<LocaleHandle>>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
