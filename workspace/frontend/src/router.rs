use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::layout::Layout;
use crate::components::settings::Settings;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/product/:id")]
    Product { id: String },
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Dashboard page");
            html! { <DashboardPage /> }
        }
        Route::Product { id } => {
            log::trace!("Rendering Dashboard page for product {}", id);
            html! { <DashboardPage product_id={Some(id)} /> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <Layout title="Settings"><Settings /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct DashboardPageProps {
    #[prop_or_default]
    product_id: Option<String>,
}

/// Wraps the dashboard so the navbar refresh button can remount it, which
/// reloads the product list and the selected product.
#[function_component(DashboardPage)]
fn dashboard_page(props: &DashboardPageProps) -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Dashboard refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Dashboard" on_refresh={Some(on_refresh)}>
            <Dashboard key={*refresh_trigger} product_id={props.product_id.clone()} />
        </Layout>
    }
}
