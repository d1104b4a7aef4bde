use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of calls across the host window boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("window unavailable")]
    WindowUnavailable,

    #[error("host disconnected")]
    Disconnected,

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NiwinError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("resize.min_width = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: resize.min_width = 0"
        );
    }

    #[test]
    fn host_error_display() {
        assert_eq!(HostError::WindowUnavailable.to_string(), "window unavailable");
        assert_eq!(HostError::Disconnected.to_string(), "host disconnected");
        assert_eq!(
            HostError::Rejected("bad payload".into()).to_string(),
            "request rejected: bad payload"
        );
        assert_eq!(
            HostError::NotSupported("wayland".into()).to_string(),
            "not supported: wayland"
        );
    }

    #[test]
    fn niwin_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: NiwinError = config_err.into();
        assert!(matches!(err, NiwinError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn niwin_error_from_host() {
        let err: NiwinError = HostError::Disconnected.into();
        assert!(matches!(err, NiwinError::Host(HostError::Disconnected)));
        assert_eq!(err.to_string(), "host disconnected");
    }

    #[test]
    fn niwin_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NiwinError = io_err.into();
        assert!(matches!(err, NiwinError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn niwin_error_other_variants() {
        let err = NiwinError::Window("event loop gone".into());
        assert_eq!(err.to_string(), "window error: event loop gone");

        let err = NiwinError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
