pub mod progress;
pub mod report;

pub use progress::{create_spinner, finish_spinner, hidden_spinner};
pub use report::{render_json, render_outcome, render_outcome_json, render_text, MANUAL_STEPS};
