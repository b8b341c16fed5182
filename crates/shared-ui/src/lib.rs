pub mod components;
pub mod motion;

pub use components::*;
pub use motion::{MotionVariant, VariantTable};
