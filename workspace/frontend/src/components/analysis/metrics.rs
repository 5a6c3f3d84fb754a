use common::AccuracyMetrics;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metrics: AccuracyMetrics,
}

#[function_component(ModelAccuracy)]
pub fn model_accuracy(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Model Accuracy"}</h3>
                <div class="stats stats-vertical">
                    <div class="stat px-0 py-2">
                        <div class="stat-title">{"MAE"}</div>
                        <div class="stat-value text-2xl">{format!("${}", props.metrics.mae)}</div>
                    </div>
                    <div class="stat px-0 py-2">
                        <div class="stat-title">{"RMSE"}</div>
                        <div class="stat-value text-2xl">{format!("${}", props.metrics.rmse)}</div>
                    </div>
                </div>
                <p class="text-xs text-gray-500">{"Lower values indicate better accuracy"}</p>
            </div>
        </div>
    }
}
