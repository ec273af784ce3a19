use shared::Category;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::alert::Alert;
use crate::components::forms::{CategoryForm, TransactionForm};
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::components::pagination_nav::PaginationNav;
use crate::components::toast::Toast;
use crate::components::transactions::TransactionTable;
use crate::hooks::use_categories::use_categories;
use crate::hooks::use_locale::use_locale;
use crate::hooks::use_pagination::{use_pagination, UsePaginationOptions};
use crate::hooks::use_toast::use_toast;
use crate::hooks::use_transactions::use_transactions;
use crate::services::api::ApiClient;
use crate::services::i18n::{category_label, t};
use crate::Route;

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let locale = use_locale().locale;
    let navigator = use_navigator();
    let api_client = ApiClient::new();

    let pagination = use_pagination(UsePaginationOptions::default());
    let toast = use_toast();

    let show_transaction_form = use_state(|| false);
    let show_category_manager = use_state(|| false);
    let editing_category = use_state(|| None::<Category>);

    let on_created = {
        let show_transaction_form = show_transaction_form.clone();
        Callback::from(move |_| {
            show_transaction_form.set(false);
        })
    };
    let transactions = use_transactions(&api_client, &pagination, &toast, on_created);

    let on_category_saved = {
        let editing_category = editing_category.clone();
        Callback::from(move |_| {
            editing_category.set(None);
        })
    };
    let categories = use_categories(&api_client, on_category_saved);

    // Hooks are all registered by this point, so bailing out for the
    // auth redirect is safe.
    if !api_client.is_authenticated() {
        return html! { <Redirect<Route> to={Route::SignUp} /> };
    }

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

    let open_transaction_form = {
        let show_transaction_form = show_transaction_form.clone();
        let clear_form_error = transactions.actions.clear_form_error.clone();
        Callback::from(move |_: MouseEvent| {
            clear_form_error.emit(());
            show_transaction_form.set(true);
        })
    };
    let close_transaction_form = {
        let show_transaction_form = show_transaction_form.clone();
        Callback::from(move |_| {
            show_transaction_form.set(false);
        })
    };

    let open_category_manager = {
        let show_category_manager = show_category_manager.clone();
        let editing_category = editing_category.clone();
        let clear_form_error = categories.actions.clear_form_error.clone();
        Callback::from(move |_: MouseEvent| {
            clear_form_error.emit(());
            editing_category.set(None);
            show_category_manager.set(true);
        })
    };
    let close_category_manager = {
        let show_category_manager = show_category_manager.clone();
        let editing_category = editing_category.clone();
        Callback::from(move |_| {
            editing_category.set(None);
            show_category_manager.set(false);
        })
    };

    html! {
        <>
            <Header authenticated={true} on_logout={on_logout} />
            <Toast message={toast.message.clone()} />

            <main class="main transactions-page">
                <div class="container">
                    <div class="page-heading">
                        <div>
                            <h2>{t(locale, "transactions.title")}</h2>
                            <p class="subtitle">{t(locale, "transactions.subtitle")}</p>
                        </div>
                        <div class="page-actions">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={open_category_manager}
                            >
                                {t(locale, "transactions.manageCategories")}
                            </button>
                            <button
                                type="button"
                                class="btn btn-primary"
                                onclick={open_transaction_form}
                            >
                                {t(locale, "transactions.addTransaction")}
                            </button>
                        </div>
                    </div>

                    <Alert
                        message={transactions.state.list_error.clone()}
                        on_dismiss={transactions.actions.clear_list_error.clone()}
                    />

                    <TransactionTable
                        transactions={transactions.state.transactions.clone()}
                        loading={transactions.state.loading}
                        on_delete={transactions.actions.delete.clone()}
                    />

                    <PaginationNav pagination={pagination.clone()} />
                </div>
            </main>

            {if *show_transaction_form {
                html! {
                    <Modal
                        title={t(locale, "transactions.newTransaction")}
                        on_close={close_transaction_form}
                    >
                        <TransactionForm
                            categories={categories.state.categories.clone()}
                            saving={transactions.state.saving}
                            form_error={transactions.state.form_error.clone()}
                            on_submit={transactions.actions.create.clone()}
                        />
                    </Modal>
                }
            } else {
                html! {}
            }}

            {if *show_category_manager {
                let editing = (*editing_category).clone();
                html! {
                    <Modal
                        title={t(locale, "transactions.manageCategories")}
                        on_close={close_category_manager}
                    >
                        <ul class="category-list">
                            {for categories.state.categories.iter().map(|category| {
                                render_category_row(
                                    category,
                                    locale,
                                    &editing_category,
                                    &categories.actions.delete,
                                )
                            })}
                        </ul>

                        <CategoryForm
                            editing={editing}
                            saving={categories.state.saving}
                            form_error={categories.state.form_error.clone()}
                            on_submit={categories.actions.save.clone()}
                        />
                    </Modal>
                }
            } else {
                html! {}
            }}
        </>
    }
}

fn render_category_row(
    category: &Category,
    locale: shared::Locale,
    editing_category: &UseStateHandle<Option<Category>>,
    on_delete: &Callback<String>,
) -> Html {
    let label = category_label(locale, category);

    let controls = if category.system {
        html! { <span class="category-system-tag">{t(locale, "transactions.systemCategory")}</span> }
    } else {
        let on_edit = {
            let editing_category = editing_category.clone();
            let category = category.clone();
            Callback::from(move |_: MouseEvent| {
                editing_category.set(Some(category.clone()));
            })
        };
        let on_delete = {
            let on_delete = on_delete.clone();
            let id = category.id.clone();
            Callback::from(move |_: MouseEvent| {
                on_delete.emit(id.clone());
            })
        };
        html! {
            <>
                <button
                    type="button"
                    class="btn btn-small"
                    onclick={on_edit}
                >
                    {t(locale, "transactions.editCategory")}
                </button>
                <button
                    type="button"
                    class="btn btn-danger btn-small"
                    title={t(locale, "transactions.deleteCategoryTooltip")}
                    onclick={on_delete}
                >
                    {t(locale, "transactions.deleteCategory")}
                </button>
            </>
        }
    };

    html! {
        <li key={category.id.clone()} class="category-row">
            <span
                class="category-swatch"
                style={format!("background-color: {}", category.color)}
                data-icon={category.icon.clone()}
            />
            <span class="category-name">{label}</span>
            <span class="category-controls">{controls}</span>
        </li>
    }
}
