use shared::Locale;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_locale::use_locale;
use crate::services::i18n::t;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub authenticated: bool,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let locale_handle = use_locale();
    let locale = locale_handle.locale;

    let on_locale_change = {
        let set_locale = locale_handle.set_locale.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_locale.emit(Locale::from_code(&select.value()));
        })
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            on_logout.emit(());
        })
    };

    html! {
        <header class="header">
            <div class="container">
                <h1 class="app-name">{t(locale, "common.appName")}</h1>

                {if props.authenticated {
                    html! {
                        <nav class="header-nav">
                            <Link<Route> to={Route::Dashboard} classes="nav-link">
                                {t(locale, "common.dashboard")}
                            </Link<Route>>
                            <Link<Route> to={Route::Transactions} classes="nav-link">
                                {t(locale, "common.transactions")}
                            </Link<Route>>
                        </nav>
                    }
                } else {
                    html! {}
                }}

                <div class="header-right">
                    <select class="locale-select" onchange={on_locale_change}>
                        <option value="en" selected={locale == Locale::En}>{"English"}</option>
                        <option value="pt-BR" selected={locale == Locale::PtBr}>{"Português"}</option>
                    </select>

                    {if props.authenticated {
                        html! {
                            <button type="button" class="btn btn-secondary" onclick={on_logout}>
                                {t(locale, "common.logout")}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </header>
    }
}
