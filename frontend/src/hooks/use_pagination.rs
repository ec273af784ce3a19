use std::rc::Rc;

use shared::{
    parse_positive_int, PaginationMeta, PaginationState, DEFAULT_PAGE_WINDOW, DEFAULT_PER_PAGE,
};
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;
use yew::prelude::*;

/// Knobs for [`use_pagination`]. The defaults match the transactions
/// list; a second paginated view would override the query param names
/// to keep both alive in one URL.
#[derive(Clone, PartialEq)]
pub struct UsePaginationOptions {
    pub default_per_page: u32,
    pub page_param: &'static str,
    pub per_page_param: &'static str,
    pub window_size: u32,
}

impl Default for UsePaginationOptions {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            page_param: "page",
            per_page_param: "per_page",
            window_size: DEFAULT_PAGE_WINDOW,
        }
    }
}

enum PaginationAction {
    SetPage(u32),
    SetPerPage(u32),
    SetMeta(Option<PaginationMeta>),
    AdjustTotalCount(i64),
}

/// Reducer store around [`PaginationState`]. Dispatched actions fold
/// over the value current at dispatch time, not a render-time snapshot,
/// so a `SetMeta` landing after a page change keeps the new page.
#[derive(PartialEq)]
struct PaginationStore(PaginationState);

impl Reducible for PaginationStore {
    type Action = PaginationAction;

    fn reduce(self: Rc<Self>, action: PaginationAction) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            PaginationAction::SetPage(page) => next.set_page(page),
            PaginationAction::SetPerPage(per_page) => next.set_per_page(per_page),
            PaginationAction::SetMeta(meta) => next.set_meta(meta),
            PaginationAction::AdjustTotalCount(delta) => next.adjust_total_count(delta),
        }
        Rc::new(Self(next))
    }
}

/// Pagination state plus the actions a page view needs. Cheap to clone
/// into callbacks.
#[derive(Clone, PartialEq)]
pub struct PaginationHandle {
    pub state: PaginationState,
    pub set_page: Callback<u32>,
    pub set_per_page: Callback<u32>,
    pub set_meta: Callback<Option<PaginationMeta>>,
    pub adjust_total_count: Callback<i64>,
}

impl PaginationHandle {
    pub fn page(&self) -> u32 {
        self.state.page()
    }

    pub fn per_page(&self) -> u32 {
        self.state.per_page()
    }
}

/// URL-synced pagination. `page` and `per_page` are read from the query
/// string on mount (invalid or missing values fall back to defaults)
/// and written back whenever the raw params differ from the canonical
/// rendering, so `?page=abc` becomes `?page=1` and the URL stays
/// shareable. The mount-time canonicalization replaces the history
/// entry; later page or per-page changes push one.
#[hook]
pub fn use_pagination(options: UsePaginationOptions) -> PaginationHandle {
    let store = {
        let options = options.clone();
        use_reducer(move || {
            let search = current_search();
            let page = parse_positive_int(query_param(&search, options.page_param).as_deref(), 1);
            let per_page = parse_positive_int(
                query_param(&search, options.per_page_param).as_deref(),
                options.default_per_page,
            );
            PaginationStore(PaginationState::new(page, per_page).with_window(options.window_size))
        })
    };

    let first_sync = use_mut_ref(|| true);
    {
        let options = options.clone();
        use_effect_with(
            (store.0.page(), store.0.per_page()),
            move |(page, per_page)| {
                let replace = std::mem::replace(&mut *first_sync.borrow_mut(), false);
                let search = current_search();
                if !query_in_sync(&search, &options, *page, *per_page) {
                    write_query(
                        &[
                            (options.page_param, page.to_string()),
                            (options.per_page_param, per_page.to_string()),
                        ],
                        replace,
                    );
                }
                || ()
            },
        );
    }

    let set_page = {
        let store = store.clone();
        use_callback((), move |page: u32, _| {
            store.dispatch(PaginationAction::SetPage(page));
        })
    };

    let set_per_page = {
        let store = store.clone();
        use_callback((), move |per_page: u32, _| {
            store.dispatch(PaginationAction::SetPerPage(per_page));
        })
    };

    let set_meta = {
        let store = store.clone();
        use_callback((), move |meta: Option<PaginationMeta>, _| {
            store.dispatch(PaginationAction::SetMeta(meta));
        })
    };

    let adjust_total_count = {
        let store = store.clone();
        use_callback((), move |delta: i64, _| {
            store.dispatch(PaginationAction::AdjustTotalCount(delta));
        })
    };

    PaginationHandle {
        state: store.0.clone(),
        set_page,
        set_per_page,
        set_meta,
        adjust_total_count,
    }
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

fn query_param(search: &str, name: &str) -> Option<String> {
    let params = UrlSearchParams::new_with_str(search.trim_start_matches('?')).ok()?;
    params.get(name)
}

/// Raw-string comparison against the canonical rendering: a missing or
/// non-canonical raw value (`abc`, `0`, `7.9`) is out of sync even when
/// it parses to the same fallback.
fn query_in_sync(search: &str, options: &UsePaginationOptions, page: u32, per_page: u32) -> bool {
    query_param(search, options.page_param).as_deref() == Some(page.to_string().as_str())
        && query_param(search, options.per_page_param).as_deref()
            == Some(per_page.to_string().as_str())
}

/// Merge the given pairs into the current query string and rewrite the
/// URL in place. Unrelated params survive the rewrite.
fn write_query(pairs: &[(&str, String)], replace: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let Ok(search) = location.search() else {
        return;
    };
    let Ok(params) = UrlSearchParams::new_with_str(search.trim_start_matches('?')) else {
        return;
    };
    for (name, value) in pairs {
        params.set(name, value);
    }
    let path = location.pathname().unwrap_or_default();
    let query = String::from(params.to_string());
    let url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };

    let Ok(history) = window.history() else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(&url))
    };
    if result.is_err() {
        gloo::console::error!("Failed to update history with", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn meta(current_page: u32, per_page: u32, total_count: u64) -> PaginationMeta {
        PaginationMeta {
            current_page,
            per_page,
            total_count,
        }
    }

    #[wasm_bindgen_test]
    fn test_query_param_reads_with_and_without_question_mark() {
        assert_eq!(query_param("?page=3&per_page=10", "page").as_deref(), Some("3"));
        assert_eq!(query_param("page=3&per_page=10", "per_page").as_deref(), Some("10"));
        assert_eq!(query_param("?page=3", "missing"), None);
    }

    #[wasm_bindgen_test]
    fn test_write_query_preserves_unrelated_params() {
        write_query(&[("tab", "all".to_string())], true);
        write_query(&[("page", "2".to_string())], true);
        let search = current_search();
        assert_eq!(query_param(&search, "tab").as_deref(), Some("all"));
        assert_eq!(query_param(&search, "page").as_deref(), Some("2"));
    }

    #[wasm_bindgen_test]
    fn test_invalid_query_values_fall_back_to_defaults() {
        write_query(
            &[("page", "zero".to_string()), ("per_page", "-5".to_string())],
            true,
        );
        let search = current_search();
        let page = parse_positive_int(query_param(&search, "page").as_deref(), 1);
        let per_page = parse_positive_int(query_param(&search, "per_page").as_deref(), DEFAULT_PER_PAGE);
        assert_eq!(page, 1);
        assert_eq!(per_page, DEFAULT_PER_PAGE);
    }

    #[wasm_bindgen_test]
    fn test_non_canonical_raw_values_are_out_of_sync() {
        let options = UsePaginationOptions::default();
        assert!(query_in_sync("?page=2&per_page=30", &options, 2, 30));
        // These all parse to the fallback but must still be rewritten.
        assert!(!query_in_sync("?page=abc&per_page=30", &options, 1, 30));
        assert!(!query_in_sync("?page=0&per_page=30", &options, 1, 30));
        assert!(!query_in_sync("?page=7.9&per_page=30", &options, 7, 30));
        assert!(!query_in_sync("", &options, 1, 30));
    }

    #[wasm_bindgen_test]
    fn test_reducer_keeps_page_across_late_meta() {
        let store = Rc::new(PaginationStore(PaginationState::new(1, 30)));
        let store = store.reduce(PaginationAction::SetMeta(Some(meta(1, 30, 31))));
        let store = store.reduce(PaginationAction::SetPage(2));
        assert_eq!(store.0.page(), 2);
        assert_eq!(store.0.total_count(), 31);

        // The page-2 refetch reports meta again; the page must survive.
        let store = store.reduce(PaginationAction::SetMeta(Some(meta(2, 30, 31))));
        assert_eq!(store.0.page(), 2);
    }

    #[wasm_bindgen_test]
    fn test_reducer_adjusts_count_set_by_earlier_action() {
        let store = Rc::new(PaginationStore(PaginationState::new(1, 30)));
        let store = store.reduce(PaginationAction::SetMeta(Some(meta(1, 30, 1))));
        let store = store.reduce(PaginationAction::AdjustTotalCount(1));
        assert_eq!(store.0.total_count(), 2);

        let store = store.reduce(PaginationAction::AdjustTotalCount(-2));
        assert_eq!(store.0.total_count(), 0);
    }
}
