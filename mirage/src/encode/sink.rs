use crate::foundation::core::DualImage;
use crate::foundation::error::MirageResult;

/// Consumer of finished composites.
pub trait RasterSink {
    /// Take one composite. Called once per successful render.
    fn consume(&mut self, image: &DualImage) -> MirageResult<()>;
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    images: Vec<DualImage>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured images, oldest first.
    pub fn images(&self) -> &[DualImage] {
        &self.images
    }

    /// Most recently captured image.
    pub fn last(&self) -> Option<&DualImage> {
        self.images.last()
    }
}

impl RasterSink for InMemorySink {
    fn consume(&mut self, image: &DualImage) -> MirageResult<()> {
        self.images.push(image.clone());
        Ok(())
    }
}
