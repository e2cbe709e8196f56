use crate::wire::HealthRes;

/// Liveness check shared by the REST server and anything else that wants to report status.
///
/// The result never depends on configuration or on the upstream news API.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Returns the fixed liveness payload.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "ok".into(),
        }
    }
}
