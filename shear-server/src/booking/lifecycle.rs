//! Appointment lifecycle
//!
//! The status state machine:
//!
//! ```text
//! PENDING ──▶ CONFIRMED ──▶ COMPLETED
//!    │            │
//!    └────────────┴───▶ CANCELLED
//! ```
//!
//! `CANCELLED` and `COMPLETED` are terminal. Writing the current status
//! again is rejected like any other illegal transition, so a status write
//! that succeeds always changed something.

use thiserror::Error;

use shared::models::AppointmentStatus;

#[derive(Debug, Error)]
#[error("Cannot move appointment from {from} to {to}")]
pub struct TransitionError {
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,
}

/// Check a requested status transition
pub fn ensure_transition(
    from: AppointmentStatus,
    to: AppointmentStatus,
) -> Result<(), TransitionError> {
    use AppointmentStatus::*;

    let allowed = matches!(
        (from, to),
        (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
    );

    if allowed {
        Ok(())
    } else {
        Err(TransitionError { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AppointmentStatus::*;

    #[test]
    fn test_forward_transitions_allowed() {
        assert!(ensure_transition(Pending, Confirmed).is_ok());
        assert!(ensure_transition(Pending, Cancelled).is_ok());
        assert!(ensure_transition(Confirmed, Completed).is_ok());
        assert!(ensure_transition(Confirmed, Cancelled).is_ok());
    }

    #[test]
    fn test_backward_transitions_rejected() {
        assert!(ensure_transition(Confirmed, Pending).is_err());
        assert!(ensure_transition(Completed, Confirmed).is_err());
        assert!(ensure_transition(Cancelled, Pending).is_err());
    }

    #[test]
    fn test_no_op_rejected() {
        for status in [Pending, Confirmed, Completed, Cancelled] {
            assert!(ensure_transition(status, status).is_err());
        }
    }

    #[test]
    fn test_terminal_states_are_final() {
        for to in [Pending, Confirmed, Completed, Cancelled] {
            assert!(ensure_transition(Completed, to).is_err());
            assert!(ensure_transition(Cancelled, to).is_err());
        }
    }

    #[test]
    fn test_pending_cannot_skip_to_completed() {
        assert!(ensure_transition(Pending, Completed).is_err());
    }
}
