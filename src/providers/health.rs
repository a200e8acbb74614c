use crate::errors::SessionError;
use std::fmt;

/// Outcome of probing one service's liveness endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceState {
    Alive,
    Down,
    /// The probe itself failed (connection refused, timeout, ...).
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReport {
    pub service: String,
    pub state: ServiceState,
}

impl ServiceReport {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state == ServiceState::Alive
    }
}

impl fmt::Display for ServiceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ServiceState::Alive => write!(f, "The {} service is alive", self.service),
            ServiceState::Down => write!(f, "The {} service is not alive", self.service),
            ServiceState::Unreachable(msg) => {
                write!(f, "Error when trying to connect to the {} service: {}", self.service, msg)
            }
        }
    }
}

/// Converts a probe result into a report, folding probe errors into
/// `Unreachable`.
pub(crate) fn probe(service: &str, alive: Result<bool, SessionError>) -> ServiceReport {
    let state = match alive {
        Ok(true) => ServiceState::Alive,
        Ok(false) => ServiceState::Down,
        Err(err) => ServiceState::Unreachable(err.to_string()),
    };
    if !matches!(state, ServiceState::Alive) {
        log::warn!("service probe failed: {service}");
    }
    ServiceReport { service: service.to_string(), state }
}

/// One combined user-visible message listing every service that is not
/// alive, or `None` when everything is up.
#[must_use]
pub fn summarize(reports: &[ServiceReport]) -> Option<String> {
    let down: Vec<String> =
        reports.iter().filter(|r| !r.is_alive()).map(ToString::to_string).collect();
    if down.is_empty() { None } else { Some(down.join("; ")) }
}
