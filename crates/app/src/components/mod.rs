pub mod header;
pub mod session_notice;

pub use header::AppHeader;
pub use session_notice::SessionNotice;
