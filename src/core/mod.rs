pub mod commands;
pub mod history;
pub mod session;

pub use history::SessionHistory;
pub use session::Session;
