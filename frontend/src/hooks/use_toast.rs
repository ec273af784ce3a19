use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: ToastVariant::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: ToastVariant::Error,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub message: Option<ToastMessage>,
    pub show: Callback<ToastMessage>,
}

/// Transient notification state. Every shown toast clears itself after
/// three seconds; showing another one simply overwrites the current.
#[hook]
pub fn use_toast() -> ToastHandle {
    let message = use_state(|| None::<ToastMessage>);

    let show = {
        let message = message.clone();
        use_callback((), move |toast: ToastMessage, _| {
            message.set(Some(toast));

            let message_clear = message.clone();
            spawn_local(async move {
                TimeoutFuture::new(3000).await;
                message_clear.set(None);
            });
        })
    };

    ToastHandle {
        message: (*message).clone(),
        show,
    }
}
