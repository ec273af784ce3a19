use std::rc::Rc;

use shared::{Category, CategoryCreateRequest, CategoryUpdateRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// A category form submission, either creating a new category or
/// editing an existing one.
#[derive(Clone, PartialEq)]
pub enum CategorySave {
    Create(CategoryCreateRequest),
    Update {
        id: String,
        request: CategoryUpdateRequest,
    },
}

enum CategoryListAction {
    Loaded(Vec<Category>),
    Upsert(Category),
    Remove(String),
}

/// Reducer store for the category list. Dispatched actions fold over
/// the value current at dispatch time, so a save or delete applies to
/// the fetched list rather than a render-time snapshot.
#[derive(PartialEq)]
struct CategoryList(Vec<Category>);

impl Reducible for CategoryList {
    type Action = CategoryListAction;

    fn reduce(self: Rc<Self>, action: CategoryListAction) -> Rc<Self> {
        match action {
            CategoryListAction::Loaded(categories) => Rc::new(Self(categories)),
            CategoryListAction::Upsert(saved) => {
                let mut next = self.0.clone();
                match next.iter_mut().find(|category| category.id == saved.id) {
                    Some(existing) => *existing = saved,
                    None => next.push(saved),
                }
                Rc::new(Self(next))
            }
            CategoryListAction::Remove(id) => Rc::new(Self(
                self.0
                    .iter()
                    .filter(|category| category.id != id)
                    .cloned()
                    .collect(),
            )),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub loading: bool,
    pub saving: bool,
    pub form_error: Option<String>,
}

pub struct UseCategoriesResult {
    pub state: CategoriesState,
    pub actions: UseCategoriesActions,
}

#[derive(Clone)]
pub struct UseCategoriesActions {
    pub save: Callback<CategorySave>,
    pub delete: Callback<String>,
    pub clear_form_error: Callback<()>,
}

/// Category list for pickers and the management modal. Fetched once on
/// mount; saves and deletes keep the local list in sync without a
/// refetch.
#[hook]
pub fn use_categories(api_client: &ApiClient, on_saved: Callback<()>) -> UseCategoriesResult {
    let categories = use_reducer(|| CategoryList(Vec::new()));
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    {
        let api_client = api_client.clone();
        let categories = categories.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.list_categories().await {
                    Ok(fetched) => categories.dispatch(CategoryListAction::Loaded(fetched)),
                    Err(error) => {
                        gloo::console::error!("Failed to fetch categories:", error.message());
                    }
                }
                loading.set(false);
            });

            || ()
        });
    }

    let save = {
        let api_client = api_client.clone();
        let categories = categories.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();
        let on_saved = on_saved.clone();

        use_callback((), move |submission: CategorySave, _| {
            let api_client = api_client.clone();
            let categories = categories.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                form_error.set(None);
                saving.set(true);

                let result = match &submission {
                    CategorySave::Create(request) => api_client.create_category(request).await,
                    CategorySave::Update { id, request } => {
                        api_client.update_category(id, request).await
                    }
                };

                match result {
                    Ok(saved) => {
                        categories.dispatch(CategoryListAction::Upsert(saved));
                        on_saved.emit(());
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
        let categories = categories.clone();
        let form_error = form_error.clone();

        use_callback((), move |id: String, _| {
            let api_client = api_client.clone();
            let categories = categories.clone();
            let form_error = form_error.clone();

            spawn_local(async move {
                match api_client.delete_category(&id).await {
                    Ok(()) => {
                        categories.dispatch(CategoryListAction::Remove(id));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to delete category:", error.message());
                        form_error.set(Some(error.message().to_string()));
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

    let state = CategoriesState {
        categories: categories.0.clone(),
        loading: *loading,
        saving: *saving,
        form_error: (*form_error).clone(),
    };

    let actions = UseCategoriesActions {
        save,
        delete,
        clear_form_error,
    };

    UseCategoriesResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            color: "#EF4444".to_string(),
            icon: "food".to_string(),
            system: false,
            key: String::new(),
        }
    }

    #[wasm_bindgen_test]
    fn test_upsert_appends_new_and_replaces_existing() {
        let list = Rc::new(CategoryList(Vec::new()));
        let list = list.reduce(CategoryListAction::Loaded(vec![category("a", "Food")]));
        let list = list.reduce(CategoryListAction::Upsert(category("b", "Travel")));
        assert_eq!(list.0.len(), 2);

        let list = list.reduce(CategoryListAction::Upsert(category("a", "Groceries")));
        assert_eq!(list.0.len(), 2);
        assert_eq!(list.0[0].name, "Groceries");
    }

    #[wasm_bindgen_test]
    fn test_remove_keeps_the_rest_of_the_loaded_list() {
        let list = Rc::new(CategoryList(Vec::new()));
        let list = list.reduce(CategoryListAction::Loaded(vec![
            category("a", "Food"),
            category("b", "Travel"),
        ]));
        let list = list.reduce(CategoryListAction::Remove("a".to_string()));

        assert_eq!(list.0.len(), 1);
        assert_eq!(list.0[0].id, "b");
    }
}
