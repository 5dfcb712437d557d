//! Main App component and refresh orchestration

use leptos::prelude::*;

use crate::components::chart::SensorChart;
use crate::components::readout::ReadoutPanel;
use dht_client::panel::Panel;

/// How often the live reading is refreshed
pub const REFRESH_INTERVAL_MS: u32 = 60_000;

/// Root application component
///
/// On mount the chart is bootstrapped from the history endpoint and a first
/// reading is taken; afterwards the reading refreshes on a fixed timer and
/// whenever the Read Now button is pressed.
#[component]
pub fn App() -> impl IntoView {
    let panel = RwSignal::new(Panel::new());

    bootstrap_chart(panel);
    refresh(panel);
    start_refresh_timer(panel);

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <h1>"DHT Sensor Dashboard"</h1>
            <ReadoutPanel panel />
            <SensorChart panel />
        </main>
    }
}

/// Fetch the bounded history once and install the chart window. On failure
/// the chart is never created and later appends are silent no-ops.
fn bootstrap_chart(panel: RwSignal<Panel>) {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    leptos::task::spawn_local(async move {
        match client().fetch_history().await {
            Ok(history) => panel.update(|p| {
                p.install_chart(dht_client::series::ChartSeries::from_history(&history));
            }),
            Err(e) => leptos::logging::error!("Error initializing chart: {e}"),
        }
    });

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    let _ = panel;
}

/// Fetch the latest reading and apply it to the panel. The loader/button
/// state is reverted on both outcomes.
pub fn refresh(panel: RwSignal<Panel>) {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        panel.update(|p| p.begin_refresh());

        leptos::task::spawn_local(async move {
            let outcome = client().fetch_current().await;
            let label = dht_client::reading::time_label(chrono::Local::now());

            panel.update(|p| {
                match outcome {
                    Ok(conditions) => p.apply_reading(&conditions, label),
                    Err(e) => {
                        leptos::logging::error!("Error fetching DHT data: {e}");
                        p.apply_failure();
                    }
                }
                p.finish_refresh();
            });
        });
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    let _ = panel;
}

fn start_refresh_timer(panel: RwSignal<Panel>) {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    gloo_timers::callback::Interval::new(REFRESH_INTERVAL_MS, move || refresh(panel)).forget();

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    let _ = panel;
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn client() -> dht_client::DhtClient {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    dht_client::DhtClient::new(origin, std::sync::Arc::new(dht_client::io::GlooHttpClient))
}
