//! Detail Overlay
//!
//! Modal with the stat radar chart and ability list for the selected
//! record. Chart geometry comes from the radar module; this file only
//! assembles SVG markup. Closes on the button, an overlay click, or
//! Escape.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::radar::{self, RADAR_AXES};

const CHART_SIZE: f64 = 300.0;
const CHART_RADIUS: f64 = 105.0;
/// How far outside the rim the axis labels sit.
const LABEL_OFFSET: f64 = 26.0;

#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let escape_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_detail();
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        <Show when=move || ctx.selected.get().is_some()>
            <div class="modal-overlay" on:click=move |_| ctx.close_detail()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    {move || ctx.selected.get().map(|pokemon| {
                        let series = radar::radar_series(&pokemon);
                        let center = CHART_SIZE / 2.0;

                        let rings = [0.25, 0.5, 0.75, 1.0].iter().map(|fraction| view! {
                            <polygon
                                class="radar-grid"
                                points=radar::grid_points(*fraction, center, center, CHART_RADIUS)
                            />
                        }).collect_view();

                        let axes = radar::axis_endpoints(center, center, CHART_RADIUS)
                            .iter()
                            .map(|(x, y)| view! {
                                <line class="radar-axis" x1=center y1=center x2=*x y2=*y/>
                            })
                            .collect_view();

                        let labels = radar::axis_endpoints(center, center, CHART_RADIUS + LABEL_OFFSET)
                            .iter()
                            .zip(RADAR_AXES.iter())
                            .map(|((x, y), (_, label))| view! {
                                <text class="radar-label" x=*x y=*y>{*label}</text>
                            })
                            .collect_view();

                        let value_points = radar::polygon_points(
                            &series.values,
                            series.axis_max,
                            center,
                            center,
                            CHART_RADIUS,
                        );

                        let abilities: Vec<String> = pokemon
                            .abilities
                            .iter()
                            .map(|a| a.ability.name.clone())
                            .collect();

                        view! {
                            <h2 class="modal-title">{pokemon.name.clone()}</h2>
                            <svg class="radar" viewBox=format!("0 0 {CHART_SIZE} {CHART_SIZE}")>
                                {rings}
                                {axes}
                                <polygon class="radar-values" points=value_points/>
                                {labels}
                            </svg>
                            <p class="abilities-heading">"Abilities:"</p>
                            <ul class="ability-list">
                                {abilities.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                            </ul>
                            <button class="btn-close" on:click=move |_| ctx.close_detail()>
                                "Close"
                            </button>
                        }
                    })}
                </div>
            </div>
        </Show>
    }
}
