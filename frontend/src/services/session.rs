use gloo::storage::{LocalStorage, Storage};
use shared::Locale;

const ACCESS_TOKEN_KEY: &str = "accessToken";
const CLIENT_KEY: &str = "client";
const UID_KEY: &str = "uid";
const EXPIRY_KEY: &str = "expiry";
const TOKEN_TYPE_KEY: &str = "tokenType";
const LOCALE_KEY: &str = "locale";

/// Auth headers issued by the backend on sign-up/sign-in and replayed on
/// every authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthTokens {
    pub access_token: String,
    pub client: String,
    pub uid: String,
    pub expiry: Option<String>,
    pub token_type: Option<String>,
}

/// Process-wide session store over browser local storage. Reads and
/// writes are explicit; nothing here has implicit side effects or talks
/// to the network.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Session;

impl Session {
    pub fn get(&self) -> Option<AuthTokens> {
        let access_token: String = LocalStorage::get(ACCESS_TOKEN_KEY).ok()?;
        let client: String = LocalStorage::get(CLIENT_KEY).ok()?;
        let uid: String = LocalStorage::get(UID_KEY).ok()?;
        Some(AuthTokens {
            access_token,
            client,
            uid,
            expiry: LocalStorage::get(EXPIRY_KEY).ok(),
            token_type: LocalStorage::get(TOKEN_TYPE_KEY).ok(),
        })
    }

    pub fn set(&self, tokens: &AuthTokens) {
        let _ = LocalStorage::set(ACCESS_TOKEN_KEY, &tokens.access_token);
        let _ = LocalStorage::set(CLIENT_KEY, &tokens.client);
        let _ = LocalStorage::set(UID_KEY, &tokens.uid);
        match &tokens.expiry {
            Some(expiry) => {
                let _ = LocalStorage::set(EXPIRY_KEY, expiry);
            }
            None => LocalStorage::delete(EXPIRY_KEY),
        }
        match &tokens.token_type {
            Some(token_type) => {
                let _ = LocalStorage::set(TOKEN_TYPE_KEY, token_type);
            }
            None => LocalStorage::delete(TOKEN_TYPE_KEY),
        }
    }

    pub fn clear(&self) {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(CLIENT_KEY);
        LocalStorage::delete(UID_KEY);
        LocalStorage::delete(EXPIRY_KEY);
        LocalStorage::delete(TOKEN_TYPE_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    pub fn locale(&self) -> Locale {
        LocalStorage::get::<String>(LOCALE_KEY)
            .map(|code| Locale::from_code(&code))
            .unwrap_or_default()
    }

    pub fn set_locale(&self, locale: Locale) {
        let _ = LocalStorage::set(LOCALE_KEY, locale.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_round_trip() {
        let session = Session;
        session.clear();
        assert!(!session.is_authenticated());

        session.set(&AuthTokens {
            access_token: "token".to_string(),
            client: "client-1".to_string(),
            uid: "user@example.com".to_string(),
            expiry: Some("1700000000".to_string()),
            token_type: None,
        });

        let tokens = session.get().expect("tokens stored");
        assert_eq!(tokens.access_token, "token");
        assert_eq!(tokens.uid, "user@example.com");
        assert_eq!(tokens.expiry.as_deref(), Some("1700000000"));
        assert_eq!(tokens.token_type, None);
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session.get(), None);
    }

    #[wasm_bindgen_test]
    fn test_locale_round_trip() {
        let session = Session;
        session.set_locale(Locale::PtBr);
        assert_eq!(session.locale(), Locale::PtBr);
        session.set_locale(Locale::En);
        assert_eq!(session.locale(), Locale::En);
    }
}
