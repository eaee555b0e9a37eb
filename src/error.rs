use thiserror::Error;

/// Errors surfaced by the visualizer.
#[derive(Debug, Error)]
pub enum VizError {
    /// Video/controller subsystem or event pump failed to come up.
    #[error("SDL subsystem init failed: {0}")]
    Init(String),

    /// The window could not be created.
    #[error("window creation failed: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    /// Runtime SDL failure (surface access, fill, present).
    #[error("SDL error: {0}")]
    Sdl(String),
}

pub type Result<T> = std::result::Result<T, VizError>;
