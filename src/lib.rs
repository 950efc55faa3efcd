//=========================================================================
// Canvas Bridge Library Root
//
// Bridges an engine that renders into a pointer-addressed ARGB32
// framebuffer onto a host drawing surface, and carries host pointer and
// keyboard input back to the engine in its own conventions.
//
// Responsibilities:
// - Expose the host-agnostic bridge (`core`) and the `Session` context
// - Keep the winit window host (`platform`) behind `run_windowed`
//
// Typical usage:
// ```ignore
// use canvas_bridge::SessionBuilder;
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     SessionBuilder::new()
//         .with_size(640, 480)
//         .run_windowed(MyEngine::new())?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the pixel conversion, framebuffer bridge, input
// translation and engine boundary. Everything in it can be driven
// without a window.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` is the winit/softbuffer host and is only reachable through
// `SessionBuilder::run_windowed`.
//
mod platform;
mod session;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use platform::WindowPresenter;
pub use session::{Session, SessionBuilder};
