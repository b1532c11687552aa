pub mod models;
pub mod components;
pub mod api;
pub mod constants;
pub mod debounce;
pub mod drag;
pub mod itinerary_store;
pub mod logging;

pub use components::app::App;
