use crate::{HealthRes, StatusRes};

/// Liveness message returned by the root endpoint.
pub const STATUS_MESSAGE: &str = "SALTGUARD ML API Running";

/// Simple health service shared by the REST API and the tools
///
/// This service provides a standardised way to check that the SALTGUARD service is running.
/// It reports liveness only; it does not exercise the model.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "SALTGUARD is alive".into(),
        }
    }

    /// Static status payload served at the root path.
    pub fn status() -> StatusRes {
        StatusRes {
            status: STATUS_MESSAGE.into(),
        }
    }
}
