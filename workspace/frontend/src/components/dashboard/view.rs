use common::{Kpis, ProductHistory, ProductSummary, calculate_kpis};
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use super::chart::EnvironmentChart;
use super::product_grid::{ProductGrid, ProductSearch};
use super::stats::KpiStats;
use super::tabs::JourneyTabs;
use super::timeline::JourneyTimeline;
use crate::api_client::chain::get_products;
use crate::api_client::product::get_product_history;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::hooks::Tab;
use crate::router::Route;
use crate::settings;

/// The product currently on display. Replaced wholesale on each load.
#[derive(Clone, PartialEq)]
struct SelectedProduct {
    product_id: String,
    history: ProductHistory,
    kpis: Option<Kpis>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Product to open, taken from the route.
    #[prop_or_default]
    pub product_id: Option<String>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &Props) -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider is missing");
    let navigator = use_navigator();
    let (products_state, refetch_products) = use_fetch_with_refetch(get_products);
    let query = use_state(String::new);
    let selected = use_state(|| None::<SelectedProduct>);
    let active_tab = use_state(Tab::default);

    // Load the product named by the route; a failed load keeps the previous one.
    {
        let selected = selected.clone();
        let toast_ctx = toast_ctx.clone();
        use_effect_with(props.product_id.clone(), move |product_id| {
            if let Some(product_id) = product_id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match get_product_history(&product_id).await {
                        Ok(history) => {
                            let kpis = calculate_kpis(&history.history);
                            selected.set(Some(SelectedProduct { product_id, history, kpis }));
                        }
                        Err(err) => {
                            log::error!("Error fetching product details: {}", err);
                            toast_ctx.show_error(format!("Could not load product {}: {}", product_id, err));
                        }
                    }
                });
            }
            || ()
        });
    }

    // Optional polling of the product list.
    {
        let refetch_products = refetch_products.clone();
        let interval_ms = settings::get_settings().refresh_interval_ms;
        use_effect_with(interval_ms, move |interval_ms| {
            let interval = (*interval_ms > 0).then(|| {
                log::debug!("Polling product list every {} ms", interval_ms);
                Interval::new(*interval_ms, move || refetch_products.emit(()))
            });
            move || drop(interval)
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_select = Callback::from(move |product_id: String| {
        log::debug!("Product selected: {}", product_id);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Product { id: product_id });
        }
    });

    let on_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    let render_products = {
        let query = (*query).clone();
        let selected_id = (*selected).as_ref().map(|s| s.product_id.clone());
        Callback::from(move |products: Vec<ProductSummary>| {
            html! {
                <ProductGrid
                    {products}
                    query={query.clone()}
                    selected={selected_id.clone()}
                    on_select={on_select.clone()}
                />
            }
        })
    };

    html! {
        <div class="max-w-6xl mx-auto">
            <div class="mb-6">
                <h2 class="text-2xl font-bold mb-2 flex items-center">
                    <i class="fas fa-box mr-2"></i>{"Supply Chain Tracker"}
                </h2>
                <p class="text-gray-600">{"Track products through their entire supply chain journey"}</p>
            </div>

            <div class="mb-6">
                <ProductSearch query={(*query).clone()} {on_search} />
                <FetchRender<Vec<ProductSummary>>
                    state={(*products_state).clone()}
                    render={render_products}
                    on_retry={Some(refetch_products.clone())}
                    loading_text={Some("Loading products from the ledger...".to_string())}
                />
            </div>

            {(*selected).as_ref().map(|product| html! {
                <>
                    {product.kpis.clone().map(|kpis| html! { <KpiStats {kpis} /> }).unwrap_or_default()}
                    <JourneyTabs active={*active_tab} on_change={on_tab.clone()} />
                    {match *active_tab {
                        Tab::Timeline => html! { <JourneyTimeline history={product.history.history.clone()} /> },
                        Tab::Metrics => html! { <EnvironmentChart history={product.history.history.clone()} /> },
                    }}
                </>
            }).unwrap_or_default()}
        </div>
    }
}
