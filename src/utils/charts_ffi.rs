// ============================================================================
// CHARTS FFI - bindings to the ApexCharts helpers in index.html
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// window.renderDonutChart(containerId, labels, series)
    #[wasm_bindgen(js_name = renderDonutChart)]
    pub fn render_donut_chart(container_id: &str, labels: JsValue, series: JsValue);

    /// window.renderAreaChart(containerId, categories, series)
    /// series: [{ name, data: [..] }, ..]
    #[wasm_bindgen(js_name = renderAreaChart)]
    pub fn render_area_chart(container_id: &str, categories: JsValue, series: JsValue);

    /// window.renderBarChart(containerId, categories, series)
    #[wasm_bindgen(js_name = renderBarChart)]
    pub fn render_bar_chart(container_id: &str, categories: JsValue, series: JsValue);
}
