use shared::{Category, CategoryCreateRequest, CategoryUpdateRequest};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_categories::CategorySave;
use crate::hooks::use_locale::use_locale;
use crate::services::i18n::t;

const COLOR_OPTIONS: [&str; 8] = [
    "#EF4444", "#F97316", "#F59E0B", "#22C55E", "#3B82F6", "#8B5CF6", "#EC4899", "#14B8A6",
];

const ICON_OPTIONS: [&str; 12] = [
    "food",
    "shopping",
    "transport",
    "home",
    "fitness",
    "salary",
    "gifts",
    "health",
    "entertainment",
    "travel",
    "investment",
    "other",
];

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    /// Present when editing an existing category; absent for creation.
    pub editing: Option<Category>,
    pub saving: bool,
    pub form_error: Option<String>,
    pub on_submit: Callback<CategorySave>,
}

#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    let locale = use_locale().locale;

    let name = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|category| category.name.clone())
            .unwrap_or_default()
    });
    let color = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|category| category.color.clone())
            .unwrap_or_else(|| COLOR_OPTIONS[0].to_string())
    });
    let icon = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|category| category.icon.clone())
            .unwrap_or_else(|| ICON_OPTIONS[0].to_string())
    });
    let local_error = use_state(|| None::<String>);

    // Reset the fields when the form switches between create and edit,
    // or to a different category.
    {
        let name = name.clone();
        let color = color.clone();
        let icon = icon.clone();
        let local_error = local_error.clone();
        use_effect_with(props.editing.clone(), move |editing| {
            match editing {
                Some(category) => {
                    name.set(category.name.clone());
                    color.set(category.color.clone());
                    icon.set(category.icon.clone());
                }
                None => {
                    name.set(String::new());
                    color.set(COLOR_OPTIONS[0].to_string());
                    icon.set(ICON_OPTIONS[0].to_string());
                }
            }
            local_error.set(None);
            || ()
        });
    }

    let on_name_change = {
        let name = name.clone();
        let local_error = local_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            local_error.set(None);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let color = color.clone();
        let icon = icon.clone();
        let local_error = local_error.clone();
        let editing = props.editing.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.trim().is_empty() {
                local_error.set(Some(t(locale, "transactions.categoryNameRequired")));
                return;
            }

            let submission = match &editing {
                Some(category) => CategorySave::Update {
                    id: category.id.clone(),
                    request: CategoryUpdateRequest {
                        name: Some((*name).clone()),
                        color: Some((*color).clone()),
                        icon: Some((*icon).clone()),
                    },
                },
                None => CategorySave::Create(CategoryCreateRequest {
                    name: (*name).clone(),
                    color: (*color).clone(),
                    icon: (*icon).clone(),
                }),
            };
            on_submit.emit(submission);
        })
    };

    let error = (*local_error)
        .clone()
        .or_else(|| props.form_error.clone());

    html! {
        <form class="category-form" onsubmit={onsubmit}>
            {if let Some(error) = error {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}

            <div class="form-group">
                <label for="category-name">{t(locale, "transactions.categoryName")}</label>
                <input
                    type="text"
                    id="category-name"
                    value={(*name).clone()}
                    onchange={on_name_change}
                    disabled={props.saving}
                />
            </div>

            <div class="form-group">
                <label>{t(locale, "transactions.categoryColor")}</label>
                <div class="color-options">
                    {for COLOR_OPTIONS.iter().map(|option| {
                        let color = color.clone();
                        let value = option.to_string();
                        let class = if *option == color.as_str() {
                            "color-swatch selected"
                        } else {
                            "color-swatch"
                        };
                        let onclick = Callback::from(move |_: MouseEvent| {
                            color.set(value.clone());
                        });
                        html! {
                            <button
                                type="button"
                                class={class}
                                style={format!("background-color: {option}")}
                                onclick={onclick}
                                disabled={props.saving}
                            />
                        }
                    })}
                </div>
            </div>

            <div class="form-group">
                <label>{t(locale, "transactions.categoryIcon")}</label>
                <div class="icon-options">
                    {for ICON_OPTIONS.iter().map(|option| {
                        let icon = icon.clone();
                        let value = option.to_string();
                        let class = if *option == icon.as_str() {
                            "icon-option selected"
                        } else {
                            "icon-option"
                        };
                        let onclick = Callback::from(move |_: MouseEvent| {
                            icon.set(value.clone());
                        });
                        html! {
                            <button
                                type="button"
                                class={class}
                                data-icon={*option}
                                onclick={onclick}
                                disabled={props.saving}
                            >
                                {*option}
                            </button>
                        }
                    })}
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled={props.saving}>
                {if props.saving {
                    t(locale, "transactions.savingCategory")
                } else {
                    t(locale, "transactions.saveCategory")
                }}
            </button>
        </form>
    }
}
