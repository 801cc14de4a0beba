use crate::constants::method;

/// What the transport layer should do after writing the CORS headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightAction {
    /// Hand the request on to the application.
    Continue,
    /// Finish the response now, without a body.
    Halt,
}

impl PreflightAction {
    pub fn should_halt(self) -> bool {
        matches!(self, PreflightAction::Halt)
    }
}

/// Halts on an `OPTIONS` request regardless of whether the origin matched.
///
/// The comparison is exact; HTTP method names are case-sensitive.
pub fn preflight_action(request_method: &str) -> PreflightAction {
    if request_method == method::OPTIONS {
        PreflightAction::Halt
    } else {
        PreflightAction::Continue
    }
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
