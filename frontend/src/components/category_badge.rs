use shared::Category;
use yew::prelude::*;

use crate::hooks::use_locale::use_locale;
use crate::services::i18n::{category_label, t};

#[derive(Properties, PartialEq)]
pub struct CategoryBadgeProps {
    pub category: Option<Category>,
}

#[function_component(CategoryBadge)]
pub fn category_badge(props: &CategoryBadgeProps) -> Html {
    let locale = use_locale().locale;

    match &props.category {
        Some(category) => html! {
            <span
                class="category-badge"
                style={format!("background-color: {}", category.color)}
                data-icon={category.icon.clone()}
            >
                {category_label(locale, category)}
            </span>
        },
        None => html! {
            <span class="category-badge category-badge-empty">
                {t(locale, "transactions.uncategorized")}
            </span>
        },
    }
}
