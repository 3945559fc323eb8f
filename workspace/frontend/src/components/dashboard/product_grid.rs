use common::{ProductSummary, filter_products, short_label};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    pub query: String,
    pub on_search: Callback<String>,
}

#[function_component(ProductSearch)]
pub fn product_search(props: &SearchProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <label class="input input-bordered flex items-center gap-2 w-full">
            <i class="fas fa-search text-gray-400"></i>
            <input
                type="text"
                class="grow"
                placeholder="Search products..."
                value={props.query.clone()}
                {oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct GridProps {
    pub products: Vec<ProductSummary>,
    pub query: String,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(ProductGrid)]
pub fn product_grid(props: &GridProps) -> Html {
    let visible = filter_products(props.products.iter().map(|p| p.product_id.as_str()), &props.query);

    if visible.is_empty() {
        let message = if props.products.is_empty() {
            "No products on the ledger yet."
        } else {
            "No products match your search."
        };
        return html! {
            <div class="alert alert-info mt-4">
                <i class="fas fa-info-circle"></i>
                <span>{message}</span>
            </div>
        };
    }

    html! {
        <div class="mt-4 grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
            {for visible.into_iter().map(|id| {
                let summary = props.products.iter().find(|p| p.product_id == id);
                let is_selected = props.selected.as_deref() == Some(id);
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = id.to_string();
                    Callback::from(move |_| on_select.emit(id.clone()))
                };

                html! {
                    <button
                        key={id.to_string()}
                        title={id.to_string()}
                        class={classes!(
                            "btn", "h-auto", "py-3", "flex-col", "normal-case",
                            if is_selected { "btn-primary btn-outline btn-active" } else { "btn-ghost border-base-300" }
                        )}
                        {onclick}
                    >
                        <span class="font-mono">{short_label(id)}</span>
                        {summary.and_then(|s| s.name.as_ref()).map(|name| html! {
                            <span class="text-xs opacity-70">
                                {name}
                                {summary.and_then(|s| s.sku.as_ref()).map(|sku| format!(" · {}", sku)).unwrap_or_default()}
                            </span>
                        }).unwrap_or_default()}
                    </button>
                }
            })}
        </div>
    }
}
