use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use common::ApiError;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

/// Most recent fetch function handed to the hook.
///
/// Clones share one slot, so a callback created on the first render still
/// calls the closure from the latest render.
pub struct LatestFetch<F>(Rc<RefCell<Option<Rc<F>>>>);

impl<F> LatestFetch<F> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    pub fn replace(&self, fetch_fn: F) {
        *self.0.borrow_mut() = Some(Rc::new(fetch_fn));
    }

    pub fn current(&self) -> Option<Rc<F>> {
        self.0.borrow().clone()
    }
}

impl<F> Clone for LatestFetch<F> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<F> Default for LatestFetch<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Load data on mount and expose a callback to load it again.
///
/// Refetches use the fetch function from the latest render. Loading again on
/// its own when inputs change needs a `key` on the component.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();
    let latest = (*use_state(LatestFetch::<F>::new)).clone();
    latest.replace(fetch_fn);

    let refetch = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let latest = latest.clone();

        use_callback((), move |_, _| {
            let Some(fetch_fn) = latest.current() else {
                return;
            };
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                match fut.await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        let message = err.to_string();
                        fetch_state.set(FetchState::Error(message.clone()));
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(message);
                        }
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_fetch_starts_empty() {
        let latest: LatestFetch<fn() -> &'static str> = LatestFetch::new();
        assert!(latest.current().is_none());
    }

    #[test]
    fn test_clone_sees_replaced_fetch() {
        let latest: LatestFetch<Box<dyn Fn() -> String>> = LatestFetch::new();
        let first_url = "http://localhost:5000/api".to_string();
        latest.replace(Box::new(move || format!("{}/health", first_url)));

        // Held by a callback created on the first render
        let captured = latest.clone();
        assert_eq!((captured.current().unwrap())(), "http://localhost:5000/api/health");

        let saved_url = "http://other/api".to_string();
        latest.replace(Box::new(move || format!("{}/health", saved_url)));

        assert_eq!((captured.current().unwrap())(), "http://other/api/health");
    }
}
