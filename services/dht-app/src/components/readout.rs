//! Numeric readout: current values, last-updated label, loader, Read Now button

use dht_client::panel::Panel;
use leptos::prelude::*;

/// Displays the latest temperature/humidity values and the manual trigger.
/// The button is disabled while a refresh is in flight; that is a soft guard
/// only, a timer tick can still interleave.
#[component]
pub fn ReadoutPanel(panel: RwSignal<Panel>) -> impl IntoView {
    view! {
        <section>
            <div style="display: flex; gap: 3rem;">
                <div>
                    <h2 style="margin-bottom: 0.25rem;">"Temperature (°F)"</h2>
                    <p style="font-size: 2rem; margin: 0;">
                        {move || panel.with(|p| p.readout.temperature.clone())}
                    </p>
                </div>
                <div>
                    <h2 style="margin-bottom: 0.25rem;">"Humidity (%)"</h2>
                    <p style="font-size: 2rem; margin: 0;">
                        {move || panel.with(|p| p.readout.humidity.clone())}
                    </p>
                </div>
            </div>
            <p style="color: #6c757d;">
                "Last updated: "
                {move || panel.with(|p| p.readout.last_updated.clone())}
            </p>
            <button
                on:click=move |_| crate::app::refresh(panel)
                disabled=move || panel.with(|p| p.busy)
                style="padding: 0.5rem 1rem;"
            >
                "Read Now"
            </button>
            <span
                style:visibility=move || if panel.with(|p| p.busy) { "visible" } else { "hidden" }
                style="margin-left: 0.75rem; color: #6c757d;"
            >
                "Reading..."
            </span>
        </section>
    }
}
