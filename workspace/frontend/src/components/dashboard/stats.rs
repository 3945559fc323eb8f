use common::{Kpis, split_unit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kpis: Kpis,
}

#[function_component(KpiStats)]
pub fn kpi_stats(props: &Props) -> Html {
    let cards = props.kpis.cards();

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-6">
            {for cards.into_iter().map(|card| {
                let display = split_unit(&card.value);
                html! {
                    <div class={classes!("stats", "shadow", "bg-base-100", card.alert.then_some("border-l-4 border-error"))}>
                        <div class="stat">
                            <div class={classes!("stat-figure", if card.alert { "text-error" } else { "text-gray-400" })}>
                                <i class={classes!(card.icon.class(), "text-xl")}></i>
                            </div>
                            <div class="stat-title">{card.title}</div>
                            <div class="stat-value text-2xl">
                                {display.value}
                                {display.unit.map(|unit| html! {
                                    <span class="text-base font-medium text-gray-500">{" "}{unit}</span>
                                }).unwrap_or_default()}
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
