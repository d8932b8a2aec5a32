//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct
//! - `input`: Key event handling
//! - `refresh`: Reloading commits and recomputing the layout
//! - `render`: UI rendering

mod input;
mod refresh;
mod render;
mod state;

pub use state::App;
