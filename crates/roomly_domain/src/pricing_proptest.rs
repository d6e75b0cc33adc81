#[cfg(test)]
mod proptests {
    use crate::pricing::{quote, QuoteError, QuoteRequest};
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn base_request(offset_minutes: i64, length_minutes: i64, attendees: u32) -> QuoteRequest<'static> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::minutes(offset_minutes);
        QuoteRequest {
            start_time: Some(start),
            end_time: Some(start + Duration::minutes(length_minutes)),
            purpose: Some("prop"),
            attendees: Some(attendees),
        }
    }

    proptest! {
        /// For any valid interval the billed hours are ceil(minutes/60) and
        /// the price is hours × rate, both non-negative.
        #[test]
        fn valid_intervals_bill_ceil_hours(
            offset in 0i64..100_000,
            minutes in 1i64..10_000,
            attendees in 1u32..50,
            capacity in 50u32..200,
            rate in 0i64..1_000_000,
        ) {
            let request = base_request(offset, minutes, attendees);
            let quote = quote(&request, capacity, rate).unwrap();
            let expected_hours = (minutes + 59) / 60;
            prop_assert_eq!(quote.duration_hours, expected_hours);
            prop_assert_eq!(quote.total_price, expected_hours * rate);
            prop_assert!(quote.duration_hours > 0);
            prop_assert!(quote.total_price >= 0);
        }

        /// Any non-positive interval rejects with EndBeforeOrEqualStart no
        /// matter what the other fields hold.
        #[test]
        fn non_positive_intervals_reject(
            offset in 0i64..100_000,
            backwards in 0i64..10_000,
            attendees in 1u32..500,
            capacity in 1u32..200,
        ) {
            let mut request = base_request(offset, 60, attendees);
            request.end_time =
                request.start_time.map(|s| s - Duration::minutes(backwards));
            prop_assert_eq!(
                quote(&request, capacity, 100),
                Err(QuoteError::EndBeforeOrEqualStart)
            );
        }

        /// Any attendee count above capacity rejects with the capacity error.
        #[test]
        fn over_capacity_rejects(
            capacity in 1u32..100,
            excess in 1u32..100,
        ) {
            let attendees = capacity + excess;
            let request = base_request(0, 60, attendees);
            prop_assert_eq!(
                quote(&request, capacity, 100),
                Err(QuoteError::AttendeesExceedCapacity { attendees, capacity })
            );
        }

        /// The calculator is a pure function: identical inputs, identical
        /// outputs.
        #[test]
        fn quoting_twice_matches(
            offset in 0i64..100_000,
            minutes in 1i64..10_000,
            attendees in 1u32..50,
            rate in 0i64..1_000_000,
        ) {
            let request = base_request(offset, minutes, attendees);
            prop_assert_eq!(quote(&request, 50, rate), quote(&request, 50, rate));
        }
    }
}
