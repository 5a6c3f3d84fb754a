use common::ChartRow;
use plotly::common::{DashType, Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::plot::render_plot;

const CHART_ID: &str = "prediction-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<ChartRow>,
}

fn values(rows: &[ChartRow], pick: fn(&ChartRow) -> &str) -> Vec<f64> {
    rows.iter()
        .map(|row| pick(row).parse::<f64>().unwrap_or(f64::NAN))
        .collect()
}

/// Predicted price with its lower and upper bounds
#[function_component(PredictionChart)]
pub fn prediction_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.rows.clone()), |(container_ref, rows)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);

            let dates: Vec<String> = rows.iter().map(|row| row.date.clone()).collect();

            let traces = vec![
                Scatter::new(dates.clone(), values(rows, |r| r.predicted.as_str()))
                    .mode(Mode::Lines)
                    .name("Predicted Price")
                    .line(Line::new().color("#8884d8").width(2.0)),
                Scatter::new(dates.clone(), values(rows, |r| r.lower.as_str()))
                    .mode(Mode::Lines)
                    .name("Lower Bound")
                    .line(Line::new().color("#82ca9d").dash(DashType::Dash)),
                Scatter::new(dates, values(rows, |r| r.upper.as_str()))
                    .mode(Mode::Lines)
                    .name("Upper Bound")
                    .line(Line::new().color("#ffc658").dash(DashType::Dash)),
            ];

            let layout = Layout::new()
                .x_axis(Axis::new().title(Title::with_text("Date")))
                .y_axis(Axis::new().title(Title::with_text("Price ($)")))
                .height(400);

            render_plot(CHART_ID, &traces, &layout);
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
