//! Background visibility computation for interactive exploration.
//!
//! The GUI submits a [`ViewRequest`] whenever the viewport or zoom changes.
//! A single long-lived worker runs the newest request, publishing each depth
//! into the shared [`DrawList`] and notifying the presenter port. Submitting
//! a newer request cancels the running job between depths and clears the list.

mod controller;
pub mod data;
pub mod events;
pub mod frame;
pub mod ports;

pub use controller::InteractiveController;
pub use data::draw_list::DrawList;
pub use data::view_request::ViewRequest;
pub use events::render::RenderEvent;
pub use frame::{FrameStyle, render_frame};
pub use ports::presenter::InteractiveControllerPresenterPort;
