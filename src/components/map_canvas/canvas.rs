use super::{background, lines, stations, tooltip, trains};
use crate::animator::TrainAnimator;
use crate::interaction;
use crate::topology::StationTopology;
use crate::transform::MapTransform;
use leptos::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, MouseEvent};

/// The live map: lines, stations and animated train markers on one canvas,
/// with hover tooltips and click interactions.
///
/// Clicking a train marker re-selects the watched train; clicking a station
/// toggles its detail tooltip. The canvas is resized to its container on
/// every render, so the fit transform follows the window.
#[component]
#[must_use]
pub fn MapCanvas(
    topology: ReadSignal<StationTopology>,
    animator: ReadSignal<TrainAnimator>,
    watched_train: ReadSignal<usize>,
    set_watched_train: WriteSignal<usize>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hovered_station, set_hovered_station) = create_signal(None::<usize>);
    let (clicked_station, set_clicked_station) = create_signal(None::<usize>);

    setup_render_effect(
        canvas_ref,
        topology,
        animator,
        hovered_station,
        clicked_station,
        watched_train,
    );

    let handle_mouse_move = move |ev: MouseEvent| {
        if let Some(canvas_elem) = canvas_ref.get() {
            let canvas: &web_sys::HtmlCanvasElement = &canvas_elem;
            let (x, y) = pointer_position(canvas, &ev);

            let current_topology = topology.get();
            let transform = fit_to_canvas(canvas, &current_topology);
            let hit = interaction::find_station_at((x, y), current_topology.stations(), &transform);
            if hit != hovered_station.get() {
                set_hovered_station.set(hit);
            }
        }
    };

    let handle_click = move |ev: MouseEvent| {
        if let Some(canvas_elem) = canvas_ref.get() {
            let canvas: &web_sys::HtmlCanvasElement = &canvas_elem;
            let (x, y) = pointer_position(canvas, &ev);

            let current_topology = topology.get();
            let transform = fit_to_canvas(canvas, &current_topology);

            let current_animator = animator.get();
            if let Some(train) =
                interaction::find_train_at((x, y), current_animator.trains(), &transform)
            {
                set_watched_train.set(train);
                return;
            }

            if let Some(station) =
                interaction::find_station_at((x, y), current_topology.stations(), &transform)
            {
                // A second click on the same station hides the details again.
                set_clicked_station.update(|current| {
                    *current = if *current == Some(station) {
                        None
                    } else {
                        Some(station)
                    };
                });
            }
        }
    };

    let handle_mouse_leave = move |_ev: MouseEvent| {
        set_hovered_station.set(None);
    };

    view! {
        <div class="map-container">
            <canvas
                node_ref=canvas_ref
                on:mousemove=handle_mouse_move
                on:click=handle_click
                on:mouseleave=handle_mouse_leave
                style=move || {
                    if hovered_station.get().is_some() {
                        "cursor: pointer;"
                    } else {
                        "cursor: default;"
                    }
                }
            ></canvas>
        </div>
    }
}

/// Redraw whenever any rendered state changes, coalesced through a single
/// `requestAnimationFrame` so a burst of signal updates costs one frame.
fn setup_render_effect(
    canvas_ref: NodeRef<html::Canvas>,
    topology: ReadSignal<StationTopology>,
    animator: ReadSignal<TrainAnimator>,
    hovered_station: ReadSignal<Option<usize>>,
    clicked_station: ReadSignal<Option<usize>>,
    watched_train: ReadSignal<usize>,
) {
    let (render_requested, set_render_requested) = create_signal(false);

    create_effect(move |_| {
        // Track all dependencies
        let _ = topology.get();
        let _ = animator.get();
        let _ = hovered_station.get();
        let _ = clicked_station.get();
        let _ = watched_train.get();

        if !render_requested.get_untracked() {
            set_render_requested.set(true);

            let window = web_sys::window().expect("window");
            let callback = Closure::once(move || {
                set_render_requested.set(false);

                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };
                let canvas_elem: &web_sys::HtmlCanvasElement = &canvas;

                // Browser dimensions are always non-negative
                #[allow(clippy::cast_sign_loss)]
                let container_width = canvas_elem.client_width() as u32;
                #[allow(clippy::cast_sign_loss)]
                let container_height = canvas_elem.client_height() as u32;
                if container_width > 0 && container_height > 0 {
                    canvas_elem.set_width(container_width);
                    canvas_elem.set_height(container_height);
                }

                render_map(
                    canvas_elem,
                    &topology.get_untracked(),
                    &animator.get_untracked(),
                    hovered_station.get_untracked(),
                    clicked_station.get_untracked(),
                    watched_train.get_untracked(),
                );
            });
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            callback.forget();
        }
    });
}

fn render_map(
    canvas: &web_sys::HtmlCanvasElement,
    topology: &StationTopology,
    animator: &TrainAnimator,
    hovered: Option<usize>,
    clicked: Option<usize>,
    watched: usize,
) {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    let Ok(Some(context)) = canvas.get_context("2d") else {
        logging::warn!("Failed to get 2D context");
        return;
    };
    let Ok(ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
        logging::warn!("Failed to cast to 2D rendering context");
        return;
    };

    // The fit is a single pass over the stations; recomputing it every frame
    // keeps the map responsive to resizes.
    let transform = MapTransform::fit(topology.stations(), width, height);

    background::draw(&ctx, width, height);
    lines::draw_lines(&ctx, topology, &transform);
    stations::draw_stations(&ctx, topology, &transform, hovered, clicked);
    trains::draw_trains(&ctx, animator.trains(), &transform, watched);

    if let Some(index) = hovered.or(clicked) {
        if let Some(station) = topology.stations().get(index) {
            tooltip::draw_tooltip(&ctx, station, &transform, width, clicked == Some(index));
        }
    }
}

fn pointer_position(canvas: &web_sys::HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    )
}

fn fit_to_canvas(
    canvas: &web_sys::HtmlCanvasElement,
    topology: &StationTopology,
) -> MapTransform {
    MapTransform::fit(
        topology.stations(),
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    )
}
