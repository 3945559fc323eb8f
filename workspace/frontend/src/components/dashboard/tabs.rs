use yew::prelude::*;

use crate::hooks::Tab;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Tab,
    pub on_change: Callback<Tab>,
}

#[function_component(JourneyTabs)]
pub fn journey_tabs(props: &Props) -> Html {
    html! {
        <div role="tablist" class="tabs tabs-bordered mb-4">
            {for Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let onclick = {
                    let on_change = props.on_change.clone();
                    Callback::from(move |_| {
                        log::debug!("Switching to {} tab", tab.label());
                        on_change.emit(tab);
                    })
                };
                html! {
                    <a role="tab" class={classes!("tab", (tab == props.active).then_some("tab-active"))} {onclick}>
                        <i class={classes!(tab.icon(), "mr-2")}></i>
                        {tab.label()}
                    </a>
                }
            })}
        </div>
    }
}
