//! Mouse interaction: region tagging, outside-press observation, and
//! clickable hit areas.

pub mod click_handler;
pub mod hit_area;
pub mod outside;
pub mod region_index;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
pub use outside::{OutsideCallback, OutsideHandle, OutsideObservers, PointerEvent};
pub use region_index::{rect_contains, RegionIndex, RegionTag};
