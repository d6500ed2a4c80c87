pub mod status;

pub use status::{AppState, status_page};
