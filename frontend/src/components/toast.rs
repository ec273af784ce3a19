use yew::prelude::*;

use crate::hooks::use_toast::{ToastMessage, ToastVariant};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };
    let class = match message.variant {
        ToastVariant::Success => "toast toast-success",
        ToastVariant::Error => "toast toast-error",
    };
    html! {
        <div class={class} role="status">
            {&message.text}
        </div>
    }
}
