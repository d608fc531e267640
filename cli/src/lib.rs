pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod error;
pub mod logging;
pub mod request;

// Re-export commonly used items
pub use app::KetbanApp;
pub use args::Args;
pub use error::AppError;
pub use request::{CURRENT_USER_ID, current_user_record};
