pub mod meter_bar;
pub mod pane;
