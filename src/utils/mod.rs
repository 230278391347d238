pub mod distance;
pub mod instance;
pub mod loader;
pub mod logging;
pub mod nearest_queue;
