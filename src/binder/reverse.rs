use super::bind::{bind_url, BindArgs};
use crate::config::UnboundPolicy;
use crate::errors::RouteError;
use crate::routes::RouteEntry;
use tracing::debug;

/// Resolve an action identifier to a concrete URL.
///
/// Scans `routes` in insertion order for entries whose `controller.method`
/// equals `action` and attempts a bind against each. Binding is attempted
/// even with no arguments, since a parameterless entry must still be
/// confirmed to require none. The first successful bind wins. A binding
/// failure is remembered and
/// the scan continues, so one action can have several route variants listed
/// most-specific first; when every candidate fails, the *last* binding
/// failure is re-raised. If no entry matched at all, the failure is
/// [`RouteError::NoMatchingAction`].
pub fn reverse(
    routes: &[RouteEntry],
    action: &str,
    args: &BindArgs,
    policy: UnboundPolicy,
) -> Result<String, RouteError> {
    let mut last_failure: Option<RouteError> = None;

    for entry in routes {
        if !entry.matches_action(action) {
            continue;
        }
        match bind_url(&entry.path_pattern, args.clone(), policy) {
            Ok(url) => return Ok(url),
            Err(err) if err.is_bind_failure() => {
                debug!(
                    action = %action,
                    pattern = %entry.path_pattern,
                    error = %err,
                    "candidate route failed to bind, continuing scan"
                );
                last_failure = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    match last_failure {
        Some(err) => Err(err),
        None => Err(RouteError::NoMatchingAction {
            action: action.to_string(),
        }),
    }
}
