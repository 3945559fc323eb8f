use common::{HistoryEvent, MetricSeries, TEMPERATURE_MAX, TEMPERATURE_MIN, environmental_series};
use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::{Axis, AxisSide, Legend};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::local_time;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const TEMPERATURE_COLOR: &str = "#8884d8";
const HUMIDITY_COLOR: &str = "#82ca9d";
const ALERT_COLOR: &str = "#EF4444";
const CHART_DIV_ID: &str = "environment-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub history: Vec<HistoryEvent>,
}

#[function_component(EnvironmentChart)]
pub fn environment_chart(props: &Props) -> Html {
    let series = {
        let points = environmental_series(&props.history);
        MetricSeries::from_points(&points, local_time)
    };

    // no readings, no chart
    if series.is_empty() {
        return html! {};
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">
                    <i class="fas fa-chart-line mr-2"></i>{"Environmental Metrics"}
                </h3>
                <PlotlyChart series={series} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlotlyChartProps {
    series: MetricSeries,
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

fn draw(div_id: &str, series: &MetricSeries) -> Result<(), String> {
    let temperature = Scatter::new(series.labels.clone(), series.temperatures.clone())
        .mode(Mode::LinesMarkers)
        .name("Temperature (°C)")
        .line(Line::new().color(TEMPERATURE_COLOR).width(2.0))
        .marker(Marker::new().color(TEMPERATURE_COLOR).size(6));

    let humidity = Scatter::new(series.labels.clone(), series.humidities.clone())
        .mode(Mode::Lines)
        .name("Humidity (%)")
        .y_axis("y2")
        .line(Line::new().color(HUMIDITY_COLOR).width(2.0));

    let alerts = Scatter::new(series.alert_labels(), series.alert_temperatures())
        .mode(Mode::Markers)
        .name(&format!("Outside {}–{}°C", TEMPERATURE_MIN, TEMPERATURE_MAX))
        .marker(Marker::new().color(ALERT_COLOR).size(9));

    let layout = Layout::new()
        .height(256)
        .x_axis(Axis::new().show_grid(false))
        .y_axis(Axis::new().title(Title::with_text("Temperature (°C)")))
        .y_axis2(
            Axis::new()
                .title(Title::with_text("Humidity (%)"))
                .overlaying("y")
                .side(AxisSide::Right),
        )
        .legend(Legend::new());

    let data = js_sys::Array::new();
    data.push(&to_js(&temperature)?);
    data.push(&to_js(&humidity)?);
    if !series.alerts.is_empty() {
        data.push(&to_js(&alerts)?);
    }

    newPlot(div_id, data.into(), to_js(&layout)?);
    Ok(())
}

#[function_component(PlotlyChart)]
fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.series.clone()), move |(container_ref, series)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_DIV_ID);
            if let Err(e) = draw(CHART_DIV_ID, series) {
                log::error!("Failed to draw environment chart: {}", e);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:256px;"></div>
    }
}
