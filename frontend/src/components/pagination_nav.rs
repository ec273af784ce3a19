use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_locale::use_locale;
use crate::hooks::use_pagination::PaginationHandle;
use crate::services::i18n::t;

const PER_PAGE_CHOICES: [u32; 4] = [10, 30, 50, 100];

#[derive(Properties, PartialEq)]
pub struct PaginationNavProps {
    pub pagination: PaginationHandle,
}

#[function_component(PaginationNav)]
pub fn pagination_nav(props: &PaginationNavProps) -> Html {
    let locale = use_locale().locale;
    let pagination = &props.pagination;
    let state = &pagination.state;

    let on_prev = {
        let set_page = pagination.set_page.clone();
        let page = state.page();
        Callback::from(move |_: MouseEvent| {
            set_page.emit(page.saturating_sub(1));
        })
    };

    let on_next = {
        let set_page = pagination.set_page.clone();
        let page = state.page();
        Callback::from(move |_: MouseEvent| {
            set_page.emit(page + 1);
        })
    };

    let on_per_page = {
        let set_per_page = pagination.set_per_page.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(per_page) = select.value().parse::<u32>() {
                set_per_page.emit(per_page);
            }
        })
    };

    html! {
        <nav class="pagination-nav">
            <button
                type="button"
                class="pagination-btn"
                onclick={on_prev}
                disabled={!state.can_go_prev()}
            >
                {t(locale, "transactions.previousPage")}
            </button>

            {for state.visible_pages().into_iter().map(|page| {
                let set_page = pagination.set_page.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    set_page.emit(page);
                });
                let class = if page == state.page() {
                    "pagination-page active"
                } else {
                    "pagination-page"
                };
                html! {
                    <button type="button" class={class} onclick={onclick}>
                        {page}
                    </button>
                }
            })}

            <button
                type="button"
                class="pagination-btn"
                onclick={on_next}
                disabled={!state.can_go_next()}
            >
                {t(locale, "transactions.nextPage")}
            </button>

            <span class="pagination-summary">
                {format!(
                    "{} {} {} {}",
                    t(locale, "transactions.pageLabel"),
                    state.page(),
                    t(locale, "transactions.pageOf"),
                    state.total_pages(),
                )}
            </span>

            <select class="pagination-per-page" onchange={on_per_page}>
                {for PER_PAGE_CHOICES.iter().map(|choice| html! {
                    <option
                        value={choice.to_string()}
                        selected={*choice == state.per_page()}
                    >
                        {format!("{} {}", choice, t(locale, "common.items"))}
                    </option>
                })}
            </select>
        </nav>
    }
}
