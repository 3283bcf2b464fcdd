pub mod app;
pub mod config;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod session;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use content::ContentTable;
pub use session::{SessionTracker, SubmitError};
pub use state::{AppState, SessionStore};
pub use storage::load_content;
