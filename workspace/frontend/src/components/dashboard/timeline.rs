use common::{TimelineEntry, format_duration, prepare_timeline, HistoryEvent};
use yew::prelude::*;

use super::local_datetime;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub history: Vec<HistoryEvent>,
}

#[function_component(JourneyTimeline)]
pub fn journey_timeline(props: &Props) -> Html {
    let entries = prepare_timeline(&props.history);
    if entries.is_empty() {
        return html! {};
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">
                    <i class="fas fa-clock mr-2"></i>{"Product Journey"}
                </h3>
                <ul class="space-y-4">
                    {for entries.iter().map(render_entry)}
                </ul>
            </div>
        </div>
    }
}

fn render_entry(entry: &TimelineEntry) -> Html {
    let flagged = entry.issue.is_some();

    html! {
        <li class={classes!("flex", "items-start", flagged.then_some("bg-red-50 p-4 rounded-lg"))}>
            <div class={classes!(
                "flex-shrink-0", "w-8", "h-8", "rounded-full", "flex", "items-center", "justify-center",
                if flagged { "bg-red-100" } else { "bg-base-200" }
            )}>
                <i class={classes!(entry.kind.icon(), entry.kind.color(), "text-sm")}></i>
            </div>
            <div class="ml-4 flex-grow">
                <div class="flex items-center justify-between">
                    <p class="font-medium">{&entry.status_label}</p>
                    {entry.delta_seconds.map(|delta| html! {
                        <span class="text-sm text-gray-500">{format!("+{}", format_duration(delta))}</span>
                    }).unwrap_or_default()}
                </div>
                <p class="text-sm text-gray-500">{format!("From: {} → To: {}", entry.from, entry.to)}</p>
                <p class="text-sm text-gray-500">{local_datetime(entry.timestamp)}</p>
                {render_details(entry)}
                {entry.issue.as_ref().map(|issue| html! {
                    <div class="mt-2 p-2 bg-red-100 rounded text-sm text-red-700">
                        <p class="font-semibold">{&issue.label}</p>
                        <p>{&issue.description}</p>
                    </div>
                }).unwrap_or_default()}
                {entry.reading.map(|reading| {
                    let humidity = reading.humidity.map(|h| format!("{}%", h)).unwrap_or_else(|| "-".to_string());
                    html! {
                        <div class={classes!(
                            "mt-1", "badge", "gap-1",
                            if reading.violation { "badge-error" } else { "badge-info badge-outline" }
                        )}>
                            <i class="fas fa-thermometer-half"></i>
                            {format!("{}°C", reading.temperature)}
                            <span class="opacity-50">{"|"}</span>
                            <i class="fas fa-tint"></i>
                            {humidity}
                        </div>
                    }
                }).unwrap_or_default()}
            </div>
        </li>
    }
}

fn render_details(entry: &TimelineEntry) -> Html {
    if entry.location.is_none() && entry.batch_id.is_none() {
        return html! {};
    }

    html! {
        <p class="text-xs text-gray-400">
            {entry.location.map(|loc| html! {
                <span class="mr-3">
                    <i class="fas fa-map-pin mr-1"></i>
                    {format!("{:.4}, {:.4}", loc.lat, loc.lng)}
                </span>
            }).unwrap_or_default()}
            {entry.batch_id.as_ref().map(|batch| html! {
                <span><i class="fas fa-layer-group mr-1"></i>{batch}</span>
            }).unwrap_or_default()}
        </p>
    }
}
