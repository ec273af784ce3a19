use shared::{display_amount, format_money, sanitize_digits, Currency};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_locale::use_locale;

#[derive(Properties, PartialEq)]
pub struct AmountInputProps {
    /// Canonical digit string (integer cents). The rendered value is
    /// always derived from this, never from raw keystrokes.
    pub digits: String,
    pub currency: Currency,
    pub on_digits_change: Callback<String>,
    pub on_currency_change: Callback<Currency>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Calculator-style money input: typed characters are reduced to their
/// digits, appended to the cents value, and echoed back fully formatted.
/// Backspace drops the last digit because the formatted text is
/// re-derived on every input event.
#[function_component(AmountInput)]
pub fn amount_input(props: &AmountInputProps) -> Html {
    let locale = use_locale().locale;

    let oninput = {
        let on_digits_change = props.on_digits_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_digits_change.emit(sanitize_digits(&input.value()));
        })
    };

    let on_currency = {
        let on_currency_change = props.on_currency_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(currency) = Currency::from_code(&select.value()) {
                on_currency_change.emit(currency);
            }
        })
    };

    html! {
        <div class="amount-input">
            <input
                type="text"
                inputmode="numeric"
                class="amount-input-field"
                placeholder={format_money(0.0, props.currency, locale)}
                value={display_amount(&props.digits, props.currency, locale)}
                oninput={oninput}
                disabled={props.disabled}
            />
            <select class="amount-input-currency" onchange={on_currency} disabled={props.disabled}>
                {for Currency::ALL.iter().map(|currency| html! {
                    <option value={currency.code()} selected={*currency == props.currency}>
                        {currency.code()}
                    </option>
                })}
            </select>
        </div>
    }
}
