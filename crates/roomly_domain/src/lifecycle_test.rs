#[cfg(test)]
mod tests {
    use crate::lifecycle::{transition, BookingStatus};
    use BookingStatus::*;

    #[test]
    fn test_pending_decisions() {
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_approved_paths() {
        assert!(Approved.can_transition_to(Cancelled));
        assert!(Approved.can_transition_to(Completed));
        assert!(!Approved.can_transition_to(Pending));
        assert!(!Approved.can_transition_to(Rejected));
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for terminal in [Rejected, Cancelled, Completed] {
            for next in BookingStatus::ALL {
                assert!(
                    !terminal.can_transition_to(next),
                    "{:?} must not move to {:?}",
                    terminal,
                    next
                );
            }
        }
    }

    #[test]
    fn test_no_backward_transitions() {
        // Monotonic lifecycle: nothing ever returns to PENDING.
        for status in BookingStatus::ALL {
            assert!(!status.can_transition_to(Pending));
        }
    }

    #[test]
    fn test_edit_and_cancel_eligibility() {
        for status in BookingStatus::ALL {
            let expected = matches!(status, Pending | Approved);
            assert_eq!(status.can_edit(), expected, "can_edit for {:?}", status);
            assert_eq!(status.can_cancel(), expected, "can_cancel for {:?}", status);
        }
    }

    #[test]
    fn test_delete_eligibility() {
        for status in BookingStatus::ALL {
            let expected = matches!(status, Cancelled | Rejected);
            assert_eq!(status.can_delete(), expected, "can_delete for {:?}", status);
        }
    }

    #[test]
    fn test_rejected_booking_actions() {
        // Scenario: a REJECTED booking can only be deleted.
        assert!(!Rejected.can_edit());
        assert!(!Rejected.can_cancel());
        assert!(Rejected.can_delete());
    }

    #[test]
    fn test_completed_enables_no_action() {
        assert!(!Completed.can_edit());
        assert!(!Completed.can_cancel());
        assert!(!Completed.can_delete());
    }

    #[test]
    fn test_transition_error_names_both_states() {
        let err = transition(Completed, Cancelled).unwrap_err();
        assert_eq!(err.from, Completed);
        assert_eq!(err.to, Cancelled);
        assert!(err.to_string().contains("Completed"));
    }

    #[test]
    fn test_only_pending_is_decidable() {
        for status in BookingStatus::ALL {
            assert_eq!(status.is_decidable(), status == Pending);
        }
    }
}
