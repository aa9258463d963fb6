mod assets;
mod component;
mod events;
mod selection;
mod widget;

pub use component::SeatMap;
pub use events::{SEAT_SELECTION_CHANGED, SelectionChange};
pub use selection::{Phase, SelectionState};
pub use widget::SeatMapWidget;
