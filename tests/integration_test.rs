#[cfg(test)]
mod e2e_integration_test {
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use id_holidays::{
        search, validate, DisplayState, HolidayChecker, HttpHolidayLookup, LookupConfig,
        LookupResult, SimpleLookup, ValidationError, NO_HOLIDAYS_MESSAGE,
        SERVER_ERROR_MESSAGE,
    };
    use serde_json::json;
    use std::time::Duration;

    const VALID_ID: &str = "8001015009087";

    fn lookup_for(server: &MockServer) -> HttpHolidayLookup {
        HttpHolidayLookup::new(LookupConfig::default().with_endpoint(server.url("/holidays")))
    }

    #[tokio::test]
    async fn found_report_merges_decoded_identity_and_holidays() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/holidays")
                    .json_body(json!({"idNumber": VALID_ID, "name": "Thandi"}));
                then.status(200).json_body(json!({
                    "message": "Holidays found",
                    "description": "New Year's Day",
                    "allHolidays": "New Year's Day\nGood Friday\nFreedom Day",
                    "year": 1980
                }));
            })
            .await;

        let state = search(VALID_ID, "Thandi", &lookup_for(&server)).await;
        mock.assert_async().await;

        let report = state.report().unwrap();
        assert_eq!(report.decoded.full_date(), "01-01-1980");
        assert_eq!(
            report.description,
            "Name: Thandi\nID Number: 8001015009087\nBirth Date: 01-01-1980\nGender: Male\nCitizen: Yes"
        );
        assert_eq!(report.holiday_description, "New Year's Day");
        assert_eq!(
            report.all_holidays_list,
            vec!["New Year's Day", "Good Friday", "Freedom Day"]
        );
        assert_eq!(report.year.as_deref(), Some("1980"));
        assert_eq!(report.message, "Holidays found");
    }

    #[tokio::test]
    async fn empty_lookup_answer_uses_fallback_description() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/holidays");
                then.status(200).json_body(json!({"message": "No holidays"}));
            })
            .await;

        let state = search("9002154999087", "", &lookup_for(&server)).await;
        let report = state.report().unwrap();
        assert_eq!(report.holiday_description, NO_HOLIDAYS_MESSAGE);
        assert!(report.all_holidays_list.is_empty());
        assert_eq!(report.year, None);
    }

    #[tokio::test]
    async fn local_rejection_never_reaches_the_service() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/holidays");
                then.status(200).json_body(json!({}));
            })
            .await;

        let state = search("8001015009088", "", &lookup_for(&server)).await;
        assert_eq!(
            state.error_message(),
            Some(ValidationError::ChecksumMismatch.to_string().as_str())
        );
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn service_has_the_final_say() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/holidays");
                then.status(200)
                    .json_body(json!({"message": "Invalid ID number supplied"}));
            })
            .await;

        assert!(validate(VALID_ID).is_ok());
        let state = search(VALID_ID, "", &lookup_for(&server)).await;
        assert_eq!(
            state,
            DisplayState::Failed {
                error_message: "Invalid ID number supplied".to_string()
            }
        );
    }

    #[tokio::test]
    async fn server_failure_shows_generic_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/holidays");
                then.status(503).body("maintenance");
            })
            .await;

        let state = search(VALID_ID, "", &lookup_for(&server)).await;
        assert_eq!(state.error_message(), Some(SERVER_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn unreachable_service_shows_generic_message() {
        // nothing listens on the discard port
        let lookup = HttpHolidayLookup::new(
            LookupConfig::default()
                .with_endpoint("http://127.0.0.1:9/holidays".to_string())
                .with_timeout(Duration::from_millis(500)),
        );
        let state = search(VALID_ID, "", &lookup).await;
        assert_eq!(state.error_message(), Some(SERVER_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn second_search_replaces_first_result() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/holidays")
                    .json_body(json!({"idNumber": VALID_ID}));
                then.status(200)
                    .json_body(json!({"description": "New Year's Day", "year": "1980"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/holidays")
                    .json_body(json!({"idNumber": "9002154999087"}));
                then.status(500);
            })
            .await;

        let checker = HolidayChecker::new(lookup_for(&server));
        assert!(checker.search(VALID_ID, "").await.is_ok());
        assert_eq!(checker.state().report().unwrap().decoded.id_number, VALID_ID);

        checker.search("9002154999087", "").await;
        let state = checker.state();
        assert!(state.report().is_none());
        assert_eq!(state.error_message(), Some(SERVER_ERROR_MESSAGE));
    }

    #[test]
    fn blocking_search_with_simple_lookup() {
        let checker = HolidayChecker::new(SimpleLookup::returning(LookupResult {
            description: Some("Youth Day".to_string()),
            ..LookupResult::default()
        }));

        let state = checker.search_blocking("0505300123088", "Sipho");
        let report = state.report().unwrap();
        assert_eq!(report.decoded.full_date(), "30-05-2005");
        assert_eq!(report.holiday_description, "Youth Day");

        let requests = checker.lookup().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id_number, "0505300123088");
        assert_eq!(requests[0].name.as_deref(), Some("Sipho"));
    }

    #[test]
    fn display_state_serializes_for_clients() {
        let state = DisplayState::Failed {
            error_message: SERVER_ERROR_MESSAGE.to_string(),
        };
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"status": "failed", "errorMessage": "A server error occurred."})
        );
        assert_eq!(
            serde_json::to_value(DisplayState::Idle).unwrap(),
            json!({"status": "idle"})
        );
    }
}
