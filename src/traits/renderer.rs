use crate::frame::FrameOutput;

/// Anything that can consume a finished frame: a GPU renderer, a logger,
/// a test recorder
pub trait RenderBackend {
    fn submit(&mut self, frame: &FrameOutput) -> Result<(), Box<dyn std::error::Error>>;
}
