//! Live chart: temperature on the left axis, humidity on the right axis,
//! independent linear scales over a shared category x axis.

use dht_client::panel::Panel;
use dht_client::reading::{format_humidity, format_temperature};
use dht_client::series::ChartSeries;
use leptos::prelude::*;

const PLOT_WIDTH: f64 = 640.0;
const PLOT_HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 56.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;

const TEMPERATURE_COLOR: &str = "rgb(255, 99, 132)";
const HUMIDITY_COLOR: &str = "rgb(54, 162, 235)";

/// Renders the chart window, or nothing at all if the history bootstrap
/// never succeeded
#[component]
pub fn SensorChart(panel: RwSignal<Panel>) -> impl IntoView {
    view! {
        <section>
            <h2>"History"</h2>
            {move || panel.with(|p| p.chart.as_ref().map(chart_view))}
        </section>
    }
}

fn chart_view(chart: &ChartSeries) -> AnyView {
    let temperature: Vec<f64> = chart.temperature().collect();
    let humidity: Vec<f64> = chart.humidity().collect();

    let (Some((t_lo, t_hi)), Some((h_lo, h_hi))) = (
        axis_bounds(temperature.iter().copied()),
        axis_bounds(humidity.iter().copied()),
    ) else {
        return view! { <p>"No readings charted yet."</p> }.into_any();
    };

    let temperature_points = polyline_points(&temperature, t_lo, t_hi);
    let humidity_points = polyline_points(&humidity, h_lo, h_hi);
    let first_label = chart.labels().next().unwrap_or_default().to_string();
    let last_label = chart.labels().last().unwrap_or_default().to_string();

    let view_box = format!(
        "0 0 {} {}",
        MARGIN_LEFT + PLOT_WIDTH + MARGIN_RIGHT,
        MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM
    );
    let plot_origin = format!("translate({MARGIN_LEFT}, {MARGIN_TOP})");

    view! {
        <svg viewBox=view_box style="width: 100%; height: auto;">
            <g transform=plot_origin>
                <rect
                    width=PLOT_WIDTH
                    height=PLOT_HEIGHT
                    fill="none"
                    stroke="#dee2e6"
                />
                <polyline
                    points=temperature_points
                    fill="none"
                    stroke=TEMPERATURE_COLOR
                    stroke-width="2"
                />
                <polyline
                    points=humidity_points
                    fill="none"
                    stroke=HUMIDITY_COLOR
                    stroke-width="2"
                />
                <text x="-8" y="12" text-anchor="end" fill=TEMPERATURE_COLOR font-size="12">
                    {format_temperature(t_hi)}
                </text>
                <text x="-8" y=PLOT_HEIGHT text-anchor="end" fill=TEMPERATURE_COLOR font-size="12">
                    {format_temperature(t_lo)}
                </text>
                <text x={PLOT_WIDTH + 8.0} y="12" fill=HUMIDITY_COLOR font-size="12">
                    {format_humidity(h_hi)}
                </text>
                <text x={PLOT_WIDTH + 8.0} y=PLOT_HEIGHT fill=HUMIDITY_COLOR font-size="12">
                    {format_humidity(h_lo)}
                </text>
                <text y={PLOT_HEIGHT + 20.0} font-size="12" fill="#6c757d">
                    {first_label}
                </text>
                <text
                    x=PLOT_WIDTH
                    y={PLOT_HEIGHT + 20.0}
                    text-anchor="end"
                    font-size="12"
                    fill="#6c757d"
                >
                    {last_label}
                </text>
            </g>
        </svg>
        <p style="font-size: 0.85rem;">
            <span style={format!("color: {TEMPERATURE_COLOR};")}>"— Temperature (°F)"</span>
            " "
            <span style={format!("color: {HUMIDITY_COLOR};")}>"— Humidity (%)"</span>
        </p>
    }
    .into_any()
}

/// Min/max of a value sequence, widened when all values coincide so the
/// scale never degenerates
fn axis_bounds<I: Iterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        bounds = Some(match bounds {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
    }
    bounds.map(|(lo, hi)| if lo == hi { (lo - 1.0, hi + 1.0) } else { (lo, hi) })
}

/// SVG polyline points for a series scaled into the plot area; points are
/// spread evenly over the category axis
fn polyline_points(values: &[f64], lo: f64, hi: f64) -> String {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if n <= 1 {
                0.0
            } else {
                i as f64 * PLOT_WIDTH / (n - 1) as f64
            };
            let y = PLOT_HEIGHT - (value - lo) / (hi - lo) * PLOT_HEIGHT;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_bounds_spans_min_and_max() {
        assert_eq!(axis_bounds([70.0, 75.5, 68.2].into_iter()), Some((68.2, 75.5)));
    }

    #[test]
    fn axis_bounds_widens_flat_series() {
        assert_eq!(axis_bounds([50.0, 50.0].into_iter()), Some((49.0, 51.0)));
    }

    #[test]
    fn axis_bounds_empty_is_none() {
        assert_eq!(axis_bounds(std::iter::empty()), None);
    }

    #[test]
    fn polyline_maps_min_to_bottom_and_max_to_top() {
        let points = polyline_points(&[0.0, 10.0], 0.0, 10.0);
        assert_eq!(points, format!("0.0,{PLOT_HEIGHT:.1} {PLOT_WIDTH:.1},0.0"));
    }

    #[test]
    fn polyline_single_point_sits_on_left_edge() {
        let points = polyline_points(&[5.0], 0.0, 10.0);
        assert_eq!(points, format!("0.0,{:.1}", PLOT_HEIGHT / 2.0));
    }

    #[test]
    fn polyline_emits_one_pair_per_value() {
        let points = polyline_points(&[1.0, 2.0, 3.0, 4.0], 0.0, 10.0);
        assert_eq!(points.split(' ').count(), 4);
    }
}
