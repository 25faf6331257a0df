#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fieldsy_admin::libs::records::{Booking, Claim, Field, Paginated, Payment, Review, User};

    #[test]
    fn test_booking_deserializes_camel_case_payload() {
        let json = r#"{
            "id": "bk-101",
            "status": "CONFIRMED",
            "date": "2025-03-15T14:30:00Z",
            "startTime": "2:00PM",
            "endTime": "4:00PM",
            "numberOfDogs": 3,
            "totalPrice": 45.5,
            "field": { "name": "Green Meadow", "owner": { "name": "Olive Owner" } },
            "user": { "name": "Alice", "email": "alice@example.com" }
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, "bk-101");
        assert_eq!(booking.status, "CONFIRMED");
        assert_eq!(booking.day(), NaiveDate::from_ymd_opt(2025, 3, 15));
        assert_eq!(booking.number_of_dogs, Some(3));
        assert_eq!(booking.total_price, Some(45.5));
        assert_eq!(booking.duration(), "2hr");
    }

    #[test]
    fn test_booking_accepts_legacy_dogs_key() {
        let json = r#"{ "id": "bk-102", "status": "PENDING", "dogs": 2 }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.number_of_dogs, Some(2));
    }

    #[test]
    fn test_booking_missing_optionals_deserialize_to_none() {
        let json = r#"{ "id": "bk-103" }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, "");
        assert!(booking.date.is_none());
        assert!(booking.day().is_none());
        assert!(booking.field.is_none());
        assert!(booking.user.is_none());
        assert_eq!(booking.duration(), "N/A");
    }

    #[test]
    fn test_booking_search_haystack_covers_declared_fields() {
        let json = r#"{
            "id": "bk-104",
            "field": { "name": "Green Meadow" },
            "user": { "name": "Alice", "email": "alice@example.com" }
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        let haystack = booking.search_haystack();
        assert!(haystack.contains(&"bk-104"));
        assert!(haystack.contains(&"Green Meadow"));
        assert!(haystack.contains(&"Alice"));
        assert!(haystack.contains(&"alice@example.com"));
    }

    #[test]
    fn test_paginated_envelope_defaults() {
        let envelope: Paginated<Booking> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(envelope.items.is_empty());
        assert_eq!(envelope.total, 0);
        assert_eq!(envelope.pages, 0);

        let json = r#"{ "items": [{ "id": "bk-1" }], "total": 41, "pages": 5 }"#;
        let envelope: Paginated<Booking> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.items.len(), 1);
        assert_eq!(envelope.total, 41);
        assert_eq!(envelope.pages, 5);
    }

    #[test]
    fn test_field_deserializes_and_searches() {
        let json = r#"{
            "id": "fl-1",
            "name": "Oak Paddock",
            "status": "ACTIVE",
            "city": "London",
            "maxDogs": 8,
            "pricePerHour": 15.0,
            "owner": { "name": "Olive Owner", "email": "olive@example.com" },
            "createdAt": "2025-02-01T09:00:00Z"
        }"#;
        let field: Field = serde_json::from_str(json).unwrap();
        assert_eq!(field.max_dogs, Some(8));
        assert_eq!(field.day(), NaiveDate::from_ymd_opt(2025, 2, 1));
        assert!(field.search_haystack().contains(&"Oak Paddock"));
        assert!(field.search_haystack().contains(&"olive@example.com"));
    }

    #[test]
    fn test_user_claim_payment_review_deserialize() {
        let user: User = serde_json::from_str(
            r#"{ "id": "us-1", "name": "Alice", "email": "alice@example.com", "role": "DOG_OWNER", "status": "ACTIVE" }"#,
        )
        .unwrap();
        assert_eq!(user.role, "DOG_OWNER");
        assert!(user.search_haystack().contains(&"alice@example.com"));

        let claim: Claim = serde_json::from_str(
            r#"{ "id": "cl-1", "status": "PENDING", "email": "claimant@example.com", "field": { "name": "Oak Paddock" } }"#,
        )
        .unwrap();
        assert!(claim.search_haystack().contains(&"claimant@example.com"));
        assert!(claim.search_haystack().contains(&"Oak Paddock"));

        let payment: Payment = serde_json::from_str(
            r#"{ "id": "py-1", "status": "PAID", "amount": 45.5, "bookingId": "bk-101", "createdAt": "2025-03-15T14:30:00Z" }"#,
        )
        .unwrap();
        assert_eq!(payment.amount, Some(45.5));
        assert_eq!(payment.day(), NaiveDate::from_ymd_opt(2025, 3, 15));
        assert!(payment.search_haystack().contains(&"bk-101"));

        let review: Review = serde_json::from_str(
            r#"{ "id": "rv-1", "rating": 4.5, "comment": "Lovely secure field", "user": { "name": "Alice" } }"#,
        )
        .unwrap();
        assert_eq!(review.rating, Some(4.5));
        assert!(review.search_haystack().contains(&"Lovely secure field"));
    }
}
