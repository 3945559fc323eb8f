use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let refresh_button = props.on_refresh.clone().map(|on_refresh| {
        html! {
            <button
                class="btn btn-ghost btn-circle"
                title="Reload from ledger"
                onclick={Callback::from(move |_| on_refresh.emit(()))}
            >
                <i class="fas fa-sync-alt text-lg"></i>
            </button>
        }
    });

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-3">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">
                    <i class="fas fa-link"></i>{" ChainTrack"}
                </Link<Route>>
                <span class="text-lg font-semibold opacity-70" id="page-title">{ &props.title }</span>
            </div>
            <div class="flex-none gap-2">
                {refresh_button.unwrap_or_default()}
                <Link<Route> to={Route::Settings} classes="btn btn-ghost btn-circle">
                    <i class="fas fa-cog text-lg"></i>
                </Link<Route>>
            </div>
        </div>
    }
}
