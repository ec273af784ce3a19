use shared::Locale;
use yew::prelude::*;

/// Active locale plus the setter, provided as a context from the app
/// root so the header switcher and every label lookup agree.
#[derive(Clone, PartialEq)]
pub struct LocaleHandle {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

#[hook]
pub fn use_locale() -> LocaleHandle {
    use_context::<LocaleHandle>().unwrap_or(LocaleHandle {
        locale: Locale::default(),
        set_locale: Callback::noop(),
    })
}
