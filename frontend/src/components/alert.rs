use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Inline dismissible error banner, used for list-level failures that
/// should stay visible until acknowledged.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| {
            on_dismiss.emit(());
        })
    };

    html! {
        <div class="alert alert-error" role="alert">
            <span class="alert-message">{message}</span>
            <button type="button" class="alert-dismiss" onclick={onclick}>{"×"}</button>
        </div>
    }
}
