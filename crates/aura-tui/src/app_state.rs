//! AppState — shared read-only data passed to all components during render.
//!
//! The App event loop is the only writer; components read it in `draw` and
//! key handlers.

use aura_proto::config::UiConfig;
use aura_proto::model::UiSnapshot;

pub struct AppState {
    /// The most recent merged snapshot. Fully replaced on every accepted
    /// poll result; never partially mutated.
    pub snapshot: UiSnapshot,
    /// True while the receive prompt is open and polling is suppressed.
    pub receiving: bool,
    /// Rolling in-app log (newest last, capped).
    pub logs: Vec<String>,
    /// Animation frame counter, advanced by the UI tick.
    pub anim_frame: usize,
    /// Display thresholds from config.
    pub ui: UiConfig,
}

impl AppState {
    pub fn new(ui: UiConfig) -> Self {
        Self {
            snapshot: UiSnapshot::default(),
            receiving: false,
            logs: Vec::new(),
            anim_frame: 0,
            ui,
        }
    }
}
