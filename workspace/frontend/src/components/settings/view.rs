use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::ToastContext;
use crate::router::Route;
use crate::settings;

fn input_value(node: &NodeRef) -> Option<String> {
    node.cast::<HtmlInputElement>().map(|input| input.value().trim().to_string())
}

#[function_component(Settings)]
pub fn settings_view() -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider is missing");
    let navigator = use_navigator();
    let current = settings::get_settings();

    let host_ref = use_node_ref();
    let port_ref = use_node_ref();
    let path_ref = use_node_ref();
    let https_ref = use_node_ref();
    let refresh_ref = use_node_ref();

    let on_save = {
        let host_ref = host_ref.clone();
        let port_ref = port_ref.clone();
        let path_ref = path_ref.clone();
        let https_ref = https_ref.clone();
        let refresh_ref = refresh_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let port = input_value(&port_ref).and_then(|v| v.parse::<u16>().ok());
            let Some(port) = port else {
                toast_ctx.show_error("Port must be a number between 0 and 65535".to_string());
                return;
            };
            let refresh_secs = input_value(&refresh_ref)
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(0);
            let host = input_value(&host_ref).filter(|h| !h.is_empty());
            let path = input_value(&path_ref).unwrap_or_default();
            let use_https = https_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.checked())
                .unwrap_or(false);

            settings::update_settings(|s| {
                if let Some(host) = host {
                    s.api_host = host;
                }
                s.api_port = port;
                s.api_path = path;
                s.api_use_https = use_https;
                s.refresh_interval_ms = refresh_secs.saturating_mul(1000);
            });

            let updated = settings::get_settings();
            log::info!("Settings saved, API base URL: {}", updated.api_base_url());
            toast_ctx.show_success(format!("Using ledger API at {}", updated.api_base_url()));

            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <div class="max-w-xl mx-auto card bg-base-100 shadow">
            <form class="card-body" onsubmit={on_save}>
                <h2 class="card-title">{"Ledger Connection"}</h2>
                <label class="form-control w-full">
                    <span class="label-text">{"API host"}</span>
                    <input ref={host_ref} type="text" class="input input-bordered w-full" value={current.api_host.clone()} />
                </label>
                <label class="form-control w-full">
                    <span class="label-text">{"API port"}</span>
                    <input ref={port_ref} type="number" class="input input-bordered w-full" value={current.api_port.to_string()} />
                </label>
                <label class="form-control w-full">
                    <span class="label-text">{"Path prefix"}</span>
                    <input ref={path_ref} type="text" class="input input-bordered w-full" placeholder="(none)" value={current.api_path.clone()} />
                </label>
                <label class="label cursor-pointer justify-start gap-3">
                    <input ref={https_ref} type="checkbox" class="checkbox" checked={current.api_use_https} />
                    <span class="label-text">{"Use HTTPS"}</span>
                </label>
                <label class="form-control w-full">
                    <span class="label-text">{"Refresh product list every (seconds, 0 = never)"}</span>
                    <input ref={refresh_ref} type="number" min="0" class="input input-bordered w-full" value={(current.refresh_interval_ms / 1000).to_string()} />
                </label>
                <div class="card-actions justify-end mt-4">
                    <button type="submit" class="btn btn-primary">{"Save"}</button>
                </div>
            </form>
        </div>
    }
}
