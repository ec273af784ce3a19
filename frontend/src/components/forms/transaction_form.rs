use shared::{
    validate_amount_digits, AmountError, Category, Currency, TransactionCreateRequest,
    TransactionKind,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::amount_input::AmountInput;
use crate::hooks::use_locale::use_locale;
use crate::services::date_utils::{combine_date_time, current_date_value, current_time_value};
use crate::services::i18n::{category_label, t};

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub categories: Vec<Category>,
    pub saving: bool,
    pub form_error: Option<String>,
    pub on_submit: Callback<TransactionCreateRequest>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let locale = use_locale().locale;

    let digits = use_state(String::new);
    let currency = use_state(Currency::default);
    let kind = use_state(|| TransactionKind::Expense);
    let description = use_state(String::new);
    let category_id = use_state(String::new);
    let date = use_state(current_date_value);
    let time = use_state(current_time_value);
    let local_error = use_state(|| None::<String>);

    let on_digits_change = {
        let digits = digits.clone();
        let local_error = local_error.clone();
        Callback::from(move |value: String| {
            digits.set(value);
            local_error.set(None);
        })
    };

    let on_currency_change = {
        let currency = currency.clone();
        Callback::from(move |value: Currency| {
            currency.set(value);
        })
    };

    let on_kind_change = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind.set(match select.value().as_str() {
                "income" => TransactionKind::Income,
                _ => TransactionKind::Expense,
            });
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_category_change = {
        let category_id = category_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_id.set(select.value());
        })
    };

    let on_date_change = {
        let date = date.clone();
        let local_error = local_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
            local_error.set(None);
        })
    };

    let on_time_change = {
        let time = time.clone();
        let local_error = local_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            time.set(input.value());
            local_error.set(None);
        })
    };

    let onsubmit = {
        let digits = digits.clone();
        let currency = currency.clone();
        let kind = kind.clone();
        let description = description.clone();
        let category_id = category_id.clone();
        let date = date.clone();
        let time = time.clone();
        let local_error = local_error.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let amount = match validate_amount_digits(&digits) {
                Ok(amount) => amount,
                Err(AmountError::AmountRequired) => {
                    local_error.set(Some(t(locale, "transactions.amountRequired")));
                    return;
                }
                Err(AmountError::AmountTooSmall) => {
                    local_error.set(Some(t(locale, "transactions.amountMin")));
                    return;
                }
            };
            if date.is_empty() {
                local_error.set(Some(t(locale, "transactions.dateRequired")));
                return;
            }
            if time.is_empty() {
                local_error.set(Some(t(locale, "transactions.timeRequired")));
                return;
            }

            let category = if category_id.is_empty() {
                None
            } else {
                Some((*category_id).clone())
            };

            on_submit.emit(TransactionCreateRequest {
                amount,
                currency: currency.code().to_string(),
                kind: *kind,
                description: (*description).clone(),
                category_id: category,
                occurred_at: combine_date_time(&date, &time),
            });
        })
    };

    let error = (*local_error)
        .clone()
        .or_else(|| props.form_error.clone());

    html! {
        <form class="transaction-form" onsubmit={onsubmit}>
            {if let Some(error) = error {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}

            <div class="form-group">
                <label for="amount">{t(locale, "transactions.amount")}</label>
                <AmountInput
                    digits={(*digits).clone()}
                    currency={*currency}
                    on_digits_change={on_digits_change}
                    on_currency_change={on_currency_change}
                    disabled={props.saving}
                />
            </div>

            <div class="form-group">
                <label for="kind">{t(locale, "transactions.kind")}</label>
                <select id="kind" onchange={on_kind_change} disabled={props.saving}>
                    <option value="expense" selected={*kind == TransactionKind::Expense}>
                        {t(locale, "transactions.expense")}
                    </option>
                    <option value="income" selected={*kind == TransactionKind::Income}>
                        {t(locale, "transactions.income")}
                    </option>
                </select>
            </div>

            <div class="form-group">
                <label for="description">{t(locale, "transactions.description")}</label>
                <input
                    type="text"
                    id="description"
                    value={(*description).clone()}
                    onchange={on_description_change}
                    disabled={props.saving}
                />
            </div>

            <div class="form-group">
                <label for="category">{t(locale, "transactions.category")}</label>
                <select id="category" onchange={on_category_change} disabled={props.saving}>
                    <option value="" selected={category_id.is_empty()}>
                        {t(locale, "transactions.categoryPlaceholder")}
                    </option>
                    {for props.categories.iter().map(|category| html! {
                        <option
                            value={category.id.clone()}
                            selected={*category_id == category.id}
                        >
                            {category_label(locale, category)}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="date">{t(locale, "transactions.date")}</label>
                    <input
                        type="date"
                        id="date"
                        value={(*date).clone()}
                        onchange={on_date_change}
                        disabled={props.saving}
                    />
                </div>
                <div class="form-group">
                    <label for="time">{t(locale, "transactions.time")}</label>
                    <input
                        type="time"
                        id="time"
                        value={(*time).clone()}
                        onchange={on_time_change}
                        disabled={props.saving}
                    />
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled={props.saving}>
                {if props.saving {
                    t(locale, "transactions.saving")
                } else {
                    t(locale, "transactions.addTransaction")
                }}
            </button>
        </form>
    }
}
