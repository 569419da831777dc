use crate::animator::TrainAnimator;
use crate::api::feed;
use crate::components::map_canvas::MapCanvas;
use crate::components::station_info::StationInfo;
use crate::constants::{ANIMATION_TICK_MS, CLOCK_INTERVAL_MS, TRAIN_POLL_INTERVAL_MS};
use crate::import::{positions, stations};
use crate::models::TrainSnapshot;
use crate::resolver::{self, StopSequence};
use crate::topology::StationTopology;
use gloo_timers::callback::Interval;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (topology, set_topology) = create_signal(StationTopology::default());
    let (snapshots, set_snapshots) = create_signal(Vec::<TrainSnapshot>::new());
    let (animator, set_animator) = create_signal(TrainAnimator::default());
    let (watched_train, set_watched_train) = create_signal(0usize);
    let (stops, set_stops) = create_signal(None::<StopSequence>);
    let (clock, set_clock) = create_signal(chrono::Local::now().naive_local());

    // One-time station load. A missing or empty file degrades to an empty
    // map; every dependent lookup then reports "no data" instead of failing.
    spawn_local(async move {
        match feed::fetch_station_data().await {
            Ok(content) => {
                let (loaded, stats) = stations::parse_station_csv(&content);
                if loaded.is_empty() {
                    logging::warn!("no stations loaded ({} rows skipped)", stats.skipped);
                } else {
                    logging::log!(
                        "loaded {} stations, skipped {} rows",
                        stats.loaded,
                        stats.skipped
                    );
                }
                set_topology.set(loaded);
            }
            Err(e) => logging::error!("station data unavailable: {e}"),
        }
    });

    // Slow poll of the external position feed. The fetch runs off the tick
    // path entirely; a failed or slow cycle leaves the previous snapshots
    // (and therefore the previous targets) in place.
    let refresh_positions = move || {
        spawn_local(async move {
            match feed::fetch_positions().await {
                Ok(payload) => {
                    let batch = positions::parse_positions(&payload);
                    if batch.is_empty() {
                        logging::warn!("position feed returned no trains");
                    }
                    set_snapshots.set(batch);
                }
                Err(e) => {
                    logging::warn!("position poll failed, keeping previous positions: {e}");
                }
            }
        });
    };
    refresh_positions();
    let poll = Interval::new(TRAIN_POLL_INTERVAL_MS, refresh_positions);
    poll.forget();

    // Fast animation clock: one discrete easing step per tick, independent
    // of the polling cadence.
    let tick = Interval::new(ANIMATION_TICK_MS, move || {
        set_animator.update(TrainAnimator::tick);
    });
    tick.forget();

    let wall_clock = Interval::new(CLOCK_INTERVAL_MS, move || {
        set_clock.set(chrono::Local::now().naive_local());
    });
    wall_clock.forget();

    // Each polling cycle (and each watched-train change): hand the fresh
    // targets to the animator and re-resolve the watched train's stops.
    create_effect(move |_| {
        let current_topology = topology.get();
        let batch = snapshots.get();
        if current_topology.is_empty() || batch.is_empty() {
            return;
        }

        set_animator.update(|animator| animator.ingest(&batch, &current_topology));

        let watched = watched_train.get();
        let Some(snapshot) = batch.get(watched) else {
            logging::warn!("watched train {watched} not in feed ({} trains)", batch.len());
            return;
        };
        match resolver::resolve_snapshot(&current_topology, snapshot) {
            Ok(sequence) => set_stops.set(Some(sequence)),
            Err(e) => logging::warn!("keeping previous stops for train {watched}: {e}"),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/subway_screen.css"/>
        <Title text="CityX Subway Display"/>

        <div class="app">
            <MapCanvas
                topology=topology
                animator=animator
                watched_train=watched_train
                set_watched_train=set_watched_train
            />
            <StationInfo stops=stops watched_train=watched_train clock=clock/>
        </div>
    }
}
