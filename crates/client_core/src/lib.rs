//! Client side of the schedule: fetches talks, owns the view state and
//! drives a [`Renderer`].

pub mod controller;
pub mod error;
pub mod provider;
pub mod render;
pub mod theme_store;

pub use controller::ScheduleController;
pub use error::ClientError;
pub use provider::{TalkProvider, TalksClient};
pub use render::{Notice, Renderer, TextRenderer};
pub use theme_store::ThemeStore;
