//! Contact form submit control, independent of any UI binding.

mod controller;
mod state;
mod transport;

pub use controller::*;
pub use state::*;
pub use transport::*;
