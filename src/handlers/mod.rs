// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod home;
mod metrics;
mod todo;

// Todo service
pub use todo::todo_handler;

// Monitored service
pub use home::home_handler;
pub use metrics::metrics_handler;
