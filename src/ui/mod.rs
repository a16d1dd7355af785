//! UI components and rendering
//!
//! The window holds a single read-only text surface. Nothing here mutates
//! the surface; that is the session's job.

pub mod text;
pub mod viewport;

// Re-exports for convenience
pub use text::{install_fonts, FontConfig};
pub use viewport::{SurfaceViewport, ViewportConfig};
