pub mod config;
pub mod constants;
pub mod error;
pub mod face;
pub mod gate;
pub mod mesh;
pub mod placeholder;
pub mod platform;
pub mod report;
pub mod roll;
pub mod score;
pub mod shake;
pub mod spin;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use face::*;
pub use gate::*;
pub use mesh::*;
pub use placeholder::*;
pub use platform::*;
pub use report::*;
pub use roll::*;
pub use score::*;
pub use shake::*;
pub use spin::*;

// Shaders bundled as string constants
pub static DIE_WGSL: &str = include_str!("../../shaders/die.wgsl");
