//! Render error types

/// Errors raised while setting up or presenting frames
#[derive(Debug)]
pub enum RenderError {
    /// No GPU adapter compatible with the window surface
    NoAdapter,
    /// Surface could not be created or configured
    Surface(String),
    /// Device request failed
    Device(String),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl RenderError {
    /// Whether the app can keep running after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RenderError::SurfaceLost | RenderError::Other(_))
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::NoAdapter => write!(f, "No compatible graphics adapter found"),
            RenderError::Surface(msg) => write!(f, "Surface error: {}", msg),
            RenderError::Device(msg) => write!(f, "Failed to create device: {}", msg),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::NoAdapter),
            "No compatible graphics adapter found"
        );
    }

    #[test]
    fn test_surface_error_mapping() {
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Lost), RenderError::SurfaceLost));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Outdated), RenderError::SurfaceLost));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::OutOfMemory), RenderError::OutOfMemory));
        assert!(matches!(RenderError::from(wgpu::SurfaceError::Timeout), RenderError::Other(_)));
    }

    #[test]
    fn test_recoverable() {
        assert!(RenderError::SurfaceLost.is_recoverable());
        assert!(!RenderError::OutOfMemory.is_recoverable());
        assert!(!RenderError::NoAdapter.is_recoverable());
    }
}
