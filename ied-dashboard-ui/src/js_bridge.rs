//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. Callers pass ready-made JSON strings.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static GROUPED_BAR_CHART_JS: &str = include_str!("../assets/js/grouped-bar-chart.js");

/// Polls run every 100 ms and give up after this many tries (30 s).
const MAX_POLL_ATTEMPTS: u32 = 300;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('IED JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON string so it can sit inside a single-quoted JS literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope once D3
/// is available, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, GROUPED_BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__iedChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__iedChartsReady || window.__iedChartsWaiting) {{ return; }}
            window.__iedChartsWaiting = true;
            var attempts = 0;
            var waitForD3 = setInterval(function() {{
                if (++attempts > {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(waitForD3);
                    window.__iedChartsWaiting = false;
                    console.warn('[IED] D3 did not load, charts disabled');
                    return;
                }}
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__iedChartScripts);
                    delete window.__iedChartScripts;
                    if (typeof renderGroupedBarChart !== 'undefined') window.renderGroupedBarChart = renderGroupedBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__iedChartsReady = true;
                    window.__iedChartsWaiting = false;
                    console.log('IED charts initialized');
                }}
            }}, 100);
        }})();
    "#
    );
    let _ = js_sys::eval(&init_js);
    log::info!("[IED] js_bridge: chart scripts queued");
}

/// Render a grouped bar chart (one group per year, one bar per series).
///
/// Polls until D3.js is loaded, the chart scripts are initialized and the
/// container element exists, then renders.
pub fn render_grouped_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&grouped_bar_chart_script(container_id, data_json, config_json));
}

/// The polling render script; stops after [`MAX_POLL_ATTEMPTS`] tries, e.g.
/// when the page was left before D3 finished loading.
fn grouped_bar_chart_script(container_id: &str, data_json: &str, config_json: &str) -> String {
    let escaped_data = escape_for_js(data_json);
    let escaped_config = escape_for_js(config_json);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (++attempts > {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    console.warn('[IED] gave up waiting for #{container_id}');
                    return;
                }}
                if (window.__iedChartsReady &&
                    typeof window.renderGroupedBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderGroupedBarChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[IED] renderGroupedBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js("if (window.hideTooltip) { window.hideTooltip(); }");
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(el) = container {
        el.set_inner_html("");
    }
}
