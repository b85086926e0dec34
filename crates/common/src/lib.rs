use thiserror::Error;

pub mod http;
pub mod registry;
pub mod types;
pub mod utils;

/// Failures of an outbound service-to-service call.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("service not registered: {0}")]
    Unregistered(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("remote returned status {0}")]
    RemoteStatus(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn core_error_messages() {
        let e = CoreError::Unregistered("post-details-service".into());
        assert_eq!(e.to_string(), "service not registered: post-details-service");
        let e = CoreError::RemoteStatus(404);
        assert_eq!(e.to_string(), "remote returned status 404");
    }
}
