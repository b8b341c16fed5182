// Layout
pub mod navbar;

// Overlay/popup
pub mod dropdown_menu;

// Animation
pub mod animate;

// Re-exports for convenience
pub use animate::*;
pub use dropdown_menu::*;
pub use navbar::*;
