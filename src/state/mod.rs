pub mod settings;
pub mod timeline;

pub use settings::{load_speed, save_speed};
pub use timeline::Timeline;
