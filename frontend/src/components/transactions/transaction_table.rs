use shared::{format_money, Currency, Locale, Transaction, TransactionKind};
use yew::prelude::*;

use crate::components::category_badge::CategoryBadge;
use crate::hooks::use_locale::use_locale;
use crate::services::date_utils::format_date_time;
use crate::services::i18n::t;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub on_delete: Callback<String>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let locale = use_locale().locale;

    if props.loading {
        return html! { <div class="loading">{t(locale, "common.loading")}</div> };
    }
    if props.transactions.is_empty() {
        return html! {
            <div class="empty-state">{t(locale, "transactions.noTransactions")}</div>
        };
    }

    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{t(locale, "transactions.date")}</th>
                        <th>{t(locale, "transactions.description")}</th>
                        <th>{t(locale, "transactions.category")}</th>
                        <th>{t(locale, "transactions.amount")}</th>
                        <th>{t(locale, "transactions.actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.transactions.iter().map(|transaction| {
                        render_row(transaction, locale, &props.on_delete)
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_row(transaction: &Transaction, locale: Locale, on_delete: &Callback<String>) -> Html {
    let currency = Currency::from_code(&transaction.currency).unwrap_or_default();
    let (amount_class, signed_amount) = match transaction.kind {
        TransactionKind::Income => (
            "amount income",
            format!("+{}", format_money(transaction.amount, currency, locale)),
        ),
        TransactionKind::Expense => (
            "amount expense",
            format!("-{}", format_money(transaction.amount, currency, locale)),
        ),
    };
    let description = if transaction.description.trim().is_empty() {
        t(locale, "transactions.untitled")
    } else {
        transaction.description.clone()
    };

    let onclick = {
        let on_delete = on_delete.clone();
        let id = transaction.id.clone();
        Callback::from(move |_: MouseEvent| {
            on_delete.emit(id.clone());
        })
    };

    html! {
        <tr key={transaction.id.clone()}>
            <td class="date">{format_date_time(&transaction.occurred_at, locale)}</td>
            <td class="description">{description}</td>
            <td class="category">
                <CategoryBadge category={transaction.category.clone()} />
            </td>
            <td class={amount_class}>{signed_amount}</td>
            <td class="actions">
                <button
                    type="button"
                    class="btn btn-danger btn-small"
                    title={t(locale, "transactions.deleteTransactionTooltip")}
                    onclick={onclick}
                >
                    {"×"}
                </button>
            </td>
        </tr>
    }
}
