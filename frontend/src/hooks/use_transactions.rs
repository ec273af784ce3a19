use std::rc::Rc;

use shared::{Transaction, TransactionCreateRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_locale::use_locale;
use crate::hooks::use_pagination::PaginationHandle;
use crate::hooks::use_toast::{ToastHandle, ToastMessage};
use crate::services::api::ApiClient;
use crate::services::i18n::t;

enum TransactionListAction {
    Loaded(Vec<Transaction>),
    Prepend(Transaction),
    Remove(String),
}

/// Reducer store for the fetched page of transactions. Dispatched
/// actions fold over the value current at dispatch time, so an
/// optimistic prepend or removal applies to the list the user is
/// looking at, not a render-time snapshot.
#[derive(PartialEq)]
struct TransactionList(Vec<Transaction>);

impl Reducible for TransactionList {
    type Action = TransactionListAction;

    fn reduce(self: Rc<Self>, action: TransactionListAction) -> Rc<Self> {
        match action {
            TransactionListAction::Loaded(transactions) => Rc::new(Self(transactions)),
            TransactionListAction::Prepend(transaction) => {
                let mut next = self.0.clone();
                next.insert(0, transaction);
                Rc::new(Self(next))
            }
            TransactionListAction::Remove(id) => Rc::new(Self(
                self.0
                    .iter()
                    .filter(|transaction| transaction.id != id)
                    .cloned()
                    .collect(),
            )),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub list_error: Option<String>,
    pub saving: bool,
    pub form_error: Option<String>,
}

pub struct UseTransactionsResult {
    pub state: TransactionsState,
    pub actions: UseTransactionsActions,
}

#[derive(Clone)]
pub struct UseTransactionsActions {
    pub refresh: Callback<()>,
    pub create: Callback<TransactionCreateRequest>,
    pub delete: Callback<String>,
    pub clear_form_error: Callback<()>,
    pub clear_list_error: Callback<()>,
}

/// Transaction list state for the current pagination window, plus
/// create and delete actions. Created and deleted rows update the list
/// and the total count optimistically; `refresh` refetches the current
/// page from the server.
#[hook]
pub fn use_transactions(
    api_client: &ApiClient,
    pagination: &PaginationHandle,
    toast: &ToastHandle,
    on_created: Callback<()>,
) -> UseTransactionsResult {
    let locale = use_locale().locale;

    let transactions = use_reducer(|| TransactionList(Vec::new()));
    let loading = use_state(|| true);
    let list_error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let reload_tick = use_state(|| 0u32);

    // Refetch whenever the pagination window moves or a refresh is asked
    // for explicitly.
    {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let list_error = list_error.clone();
        let set_meta = pagination.set_meta.clone();

        use_effect_with(
            (pagination.page(), pagination.per_page(), *reload_tick),
            move |(page, per_page, _)| {
                let page = *page;
                let per_page = *per_page;

                spawn_local(async move {
                    loading.set(true);

                    match api_client.list_transactions(page, per_page).await {
                        Ok(fetched) => {
                            set_meta.emit(fetched.meta);
                            transactions.dispatch(TransactionListAction::Loaded(
                                fetched.transactions,
                            ));
                            list_error.set(None);
                        }
                        Err(error) => {
                            gloo::console::error!(
                                "Failed to fetch transactions:",
                                error.message()
                            );
                            list_error.set(Some(error.message().to_string()));
                        }
                    }

                    loading.set(false);
                });

                || ()
            },
        );
    }

    let refresh = {
        let reload_tick = reload_tick.clone();
        use_callback(*reload_tick, move |_, _| {
            reload_tick.set(reload_tick.wrapping_add(1));
        })
    };

    let create = {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();
        let adjust_total_count = pagination.adjust_total_count.clone();
        let show_toast = toast.show.clone();
        let on_created = on_created.clone();

        use_callback(locale, move |request: TransactionCreateRequest, _| {
            let api_client = api_client.clone();
            let transactions = transactions.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();
            let adjust_total_count = adjust_total_count.clone();
            let show_toast = show_toast.clone();
            let on_created = on_created.clone();

            spawn_local(async move {
                form_error.set(None);
                saving.set(true);

                match api_client.create_transaction(&request).await {
                    Ok(created) => {
                        transactions.dispatch(TransactionListAction::Prepend(created.transaction));
                        adjust_total_count.emit(1);

                        let text = created
                            .message
                            .unwrap_or_else(|| t(locale, "transactions.createSuccess"));
                        show_toast.emit(ToastMessage::success(text));
                        on_created.emit(());
                    }
                    Err(error) => {
                        form_error.set(Some(error.message().to_string()));
                    }
                }

                saving.set(false);
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let adjust_total_count = pagination.adjust_total_count.clone();
        let show_toast = toast.show.clone();

        use_callback(locale, move |id: String, _| {
            let api_client = api_client.clone();
            let transactions = transactions.clone();
            let adjust_total_count = adjust_total_count.clone();
            let show_toast = show_toast.clone();

            spawn_local(async move {
                match api_client.delete_transaction(&id).await {
                    Ok(()) => {
                        transactions.dispatch(TransactionListAction::Remove(id));
                        adjust_total_count.emit(-1);
                        show_toast
                            .emit(ToastMessage::success(t(locale, "transactions.deleteSuccess")));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to delete transaction:", error.message());
                        show_toast.emit(ToastMessage::error(t(locale, "transactions.deleteError")));
                    }
                }
            });
        })
    };

    let clear_form_error = {
        let form_error = form_error.clone();
        use_callback((), move |_, _| {
            form_error.set(None);
        })
    };

    let clear_list_error = {
        let list_error = list_error.clone();
        use_callback((), move |_, _| {
            list_error.set(None);
        })
    };

    let state = TransactionsState {
        transactions: transactions.0.clone(),
        loading: *loading,
        list_error: (*list_error).clone(),
        saving: *saving,
        form_error: (*form_error).clone(),
    };

    let actions = UseTransactionsActions {
        refresh,
        create,
        delete,
        clear_form_error,
        clear_list_error,
    };

    UseTransactionsResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionKind;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn transaction(id: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount: 10.0,
            currency: "BRL".to_string(),
            kind: TransactionKind::Expense,
            description: format!("row {id}"),
            category: None,
            occurred_at: "2026-08-01T12:00:00Z".to_string(),
            created_at: "2026-08-01T12:00:00Z".to_string(),
            updated_at: "2026-08-01T12:00:00Z".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_prepend_keeps_previously_loaded_rows() {
        let list = Rc::new(TransactionList(Vec::new()));
        let list = list.reduce(TransactionListAction::Loaded(vec![transaction("a")]));
        let list = list.reduce(TransactionListAction::Prepend(transaction("b")));

        let ids: Vec<&str> = list.0.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[wasm_bindgen_test]
    fn test_remove_drops_only_the_matching_row() {
        let list = Rc::new(TransactionList(Vec::new()));
        let list = list.reduce(TransactionListAction::Loaded(vec![
            transaction("a"),
            transaction("b"),
            transaction("c"),
        ]));
        let list = list.reduce(TransactionListAction::Remove("b".to_string()));
        let list = list.reduce(TransactionListAction::Remove("a".to_string()));

        let ids: Vec<&str> = list.0.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }
}
