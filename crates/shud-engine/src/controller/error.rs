use std::fmt;

/// The renderer could not be bound or its resources could not be created.
///
/// Whatever was acquired before the failure has already been released when
/// this error is returned.
#[derive(Debug)]
pub struct InitError {
    source: anyhow::Error,
}

impl InitError {
    pub(crate) fn new(source: anyhow::Error) -> Self {
        Self { source }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render surface initialization failed: {:#}", self.source)
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

/// A frame failed in a way the binding cannot recover from.
///
/// The controller has been torn down when this error is returned.
#[derive(Debug)]
pub struct RenderError {
    source: anyhow::Error,
}

impl RenderError {
    pub(crate) fn new(source: anyhow::Error) -> Self {
        Self { source }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame render failed: {:#}", self.source)
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn init_error_is_labeled_with_full_chain() {
        let inner: anyhow::Result<()> = Err(anyhow::anyhow!("no adapter"));
        let err = InitError::new(inner.context("failed to find a suitable GPU adapter").unwrap_err());
        assert_eq!(
            err.to_string(),
            "render surface initialization failed: failed to find a suitable GPU adapter: no adapter"
        );
    }

    #[test]
    fn render_error_exposes_source() {
        let err = RenderError::new(anyhow::anyhow!("out of memory"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "out of memory");
    }
}
