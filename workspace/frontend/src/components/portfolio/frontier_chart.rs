use common::FrontierPoint;
use plotly::common::{Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::plot::render_plot;

const CHART_ID: &str = "frontier-chart";
const MIN_MARKER: f64 = 6.0;
const MAX_MARKER: f64 = 22.0;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub points: Vec<FrontierPoint>,
}

/// Marker diameters scaled linearly between the lowest and highest Sharpe ratio.
fn marker_sizes(points: &[FrontierPoint]) -> Vec<usize> {
    let (low, high) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.sharpe), hi.max(p.sharpe))
    });
    let span = high - low;

    points
        .iter()
        .map(|p| {
            let weight = if span > 0.0 { (p.sharpe - low) / span } else { 0.5 };
            (MIN_MARKER + weight * (MAX_MARKER - MIN_MARKER)).round() as usize
        })
        .collect()
}

#[function_component(FrontierChart)]
pub fn frontier_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.points.clone()), |(container_ref, points)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);

            let volatility: Vec<f64> = points.iter().map(|p| p.volatility).collect();
            let returns: Vec<f64> = points.iter().map(|p| p.expected_return).collect();
            let labels: Vec<String> = points.iter().map(|p| format!("Sharpe {:.2}", p.sharpe)).collect();

            let trace = Scatter::new(volatility, returns)
                .mode(Mode::Markers)
                .name("Possible Portfolios")
                .text_array(labels)
                .marker(Marker::new().color("#8884d8").size_array(marker_sizes(points)));

            let layout = Layout::new()
                .x_axis(Axis::new().title(Title::with_text("Volatility %")))
                .y_axis(Axis::new().title(Title::with_text("Return %")))
                .height(400);

            render_plot(CHART_ID, &[trace], &layout);
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
