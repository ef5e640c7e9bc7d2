//! User Notifications
//!
//! Failures and one-shot confirmations surface as browser alerts.

use std::fmt::Debug;

use crate::error::ApiError;

pub fn alert(message: &str) {
    warn_on_err("NOTIFY", "alert", leptos::prelude::window().alert_with_message(message));
}

/// Log a failed DOM call that the UI can carry on without. Returns
/// whether it succeeded.
pub fn warn_on_err<E: Debug>(context: &str, action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[{}] {} failed: {:?}", context, action, e);
            false
        }
    }
}

/// Log the failure and tell the operator what went wrong
pub fn alert_error(context: &str, err: &ApiError) {
    log::error!("[{}] {}", context, err);
    alert(&err.user_message());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_on_err_reports_outcome() {
        assert!(warn_on_err::<&str>("NOTES", "focusing note input", Ok(())));
        assert!(!warn_on_err("NOTES", "focusing note input", Err("element detached")));
    }
}
