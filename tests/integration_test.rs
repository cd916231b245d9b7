#[cfg(test)]
mod integration_test {
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use nuban::{
        generate, infer_banks, validate, Bank, BankCode, BankDirectory, BankInferrer,
        DirectoryConfig, DirectoryError, HttpBankDirectory, NubanChecksum, NubanError,
        StaticBankDirectory, Validator,
    };

    const BANKS_JSON: &str = r#"[
        {"name": "Access Bank", "shortCode": "044", "longCode": "00044"},
        {"name": "Guaranty Trust Bank", "shortCode": "058"},
        {"name": "Kuda Microfinance Bank", "longCode": "50211"},
        {"name": "Unlisted Bank"}
    ]"#;

    #[test]
    fn test_generate_then_validate() {
        let account_number = generate("123456789", "044").unwrap();
        assert_eq!(account_number, "1234567895");
        assert_eq!(validate(&account_number, "044"), Ok(true));
        assert_eq!(validate(&account_number, "058"), Ok(false));

        assert_eq!(validate("0000000000", "044"), Ok(true));
        assert_eq!(validate("123", "044"), Ok(false));
        assert_eq!(validate("", "044"), Ok(false));
    }

    #[test]
    fn test_errors_surface_to_the_caller() {
        assert_eq!(
            generate("1234567890", "044"),
            Err(NubanError::SerialNumberTooLong)
        );
        assert_eq!(generate("123456789", "12"), Err(NubanError::InvalidBankCode));
        assert_eq!(validate("1234567895", "12"), Err(NubanError::InvalidBankCode));
        assert_eq!(BankCode::parse("1234"), Err(NubanError::InvalidBankCode));
    }

    #[test]
    fn test_validator_for_formatted_input() {
        let validator = NubanChecksum::new("50211").unwrap();
        let account_number = generate("1", "50211").unwrap();
        assert_eq!(account_number, "0000000019");
        assert!(validator.is_valid_match("000-000-0019"));
        assert!(!validator.is_valid_match("000-000-0018"));
    }

    #[test]
    fn test_infer_from_static_directory() {
        let directory = StaticBankDirectory::from_json(BANKS_JSON).unwrap();
        let banks = directory.list_banks();

        let account_number = generate("987654", "50211").unwrap();
        let matches = infer_banks(&account_number, &banks);
        assert!(matches.contains(&Bank::new("Kuda Microfinance Bank", None, Some("50211"))));
        for bank in &matches {
            assert!(bank.matches(&account_number));
        }

        // every bank listed in the directory is found back from one of its account numbers
        for bank in &banks {
            for (_, code) in bank.codes() {
                let account_number = generate("310487214", code).unwrap();
                assert!(infer_banks(&account_number, &banks).contains(bank));
            }
        }
    }

    #[test]
    fn test_infer_from_http_directory() {
        let server = MockServer::start();
        let mock_service = server.mock(|when, then| {
            when.method(GET).path("/banks.json");
            then.status(200)
                .header("content-type", "application/json")
                .body(BANKS_JSON);
        });

        let directory = HttpBankDirectory::new(DirectoryConfig::new(&server.url("/banks.json")));
        let inferrer = BankInferrer::new(directory);

        let matches = inferrer.infer("1234567895");
        mock_service.assert();
        assert_eq!(
            matches,
            vec![Bank::new("Access Bank", Some("044"), Some("00044"))]
        );
    }

    #[test]
    fn test_unavailable_directory() {
        let server = MockServer::start();
        let _ = server.mock(|when, then| {
            when.method(GET).path("/banks.json");
            then.status(503);
        });

        let directory = HttpBankDirectory::new(DirectoryConfig::new(&server.url("/banks.json")));
        assert_eq!(
            directory.fetch_banks(),
            Err(DirectoryError::FetchFailed(
                "Unexpected HTTP status code 503".to_string()
            ))
        );

        // the checksum keeps working without a directory, inference finds nothing
        let inferrer = BankInferrer::new(directory);
        assert!(inferrer.infer("1234567895").is_empty());
        assert_eq!(validate("1234567895", "044"), Ok(true));
    }
}
