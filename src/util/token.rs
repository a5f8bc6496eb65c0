//! Persisted access-token storage.
//!
//! The session token lives in `localStorage` under a fixed key. The session
//! flow is the only writer; reads happen during restore and when attaching
//! the `Authorization` header. Requires a browser environment — on the
//! server every read reports "no token".

const STORAGE_KEY: &str = "access_token";

/// Key-value storage for the persisted access token.
///
/// Abstracted so the session flow can be exercised without a browser.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed token store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(value) = storage.get_item(STORAGE_KEY) {
                    return value;
                }
            }
            None
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}
