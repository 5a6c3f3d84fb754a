use plotly::Layout;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Draw `traces` into the element with id `div_id`.
pub fn render_plot<T: Serialize>(div_id: &str, traces: &[T], layout: &Layout) {
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    let rendered = to_js(traces).and_then(|data| {
        let layout = to_js(layout)?;
        let config = to_js(&config)?;
        newPlot(div_id, data, layout, config);
        Ok(())
    });

    match rendered {
        Ok(()) => log::trace!("Rendered chart {}", div_id),
        Err(e) => log::error!("Failed to render chart {}: {}", div_id, e),
    }
}
