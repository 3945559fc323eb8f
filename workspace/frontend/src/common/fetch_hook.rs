use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use crate::hooks::FetchState;
use crate::common::toast::ToastContext;

/// Fetches on mount and returns a callback to fetch again.
///
/// Once data has loaded, a refetch keeps showing it while in flight and a
/// failed refetch leaves it in place; the error is only logged and toasted.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let has_data = use_mut_ref(|| false);
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider is missing");
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let has_data = has_data.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let has_data = has_data.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();

            if !*has_data.borrow() {
                fetch_state.set(FetchState::Loading);
            }

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                match fut.await {
                    Ok(data) => {
                        *has_data.borrow_mut() = true;
                        fetch_state.set(FetchState::Success(data));
                    }
                    Err(err) => {
                        if *has_data.borrow() {
                            log::warn!("Refresh failed, keeping previous data: {}", err);
                        } else {
                            fetch_state.set(FetchState::Error(err.clone()));
                        }
                        toast_ctx.show_error(err);
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
