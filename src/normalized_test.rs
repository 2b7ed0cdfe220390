use super::*;

fn descriptor_with(headers: &[(&str, &str)]) -> RequestDescriptor {
    let mut request = RequestDescriptor::new("GET");
    request.headers = headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    request
}

mod new {
    use super::*;

    #[test]
    fn should_lowercase_names_and_trim_lowercase_values() {
        // Arrange
        let request = descriptor_with(&[("oRigiN", "  HTTPS://Foo.BAR  ")]);

        // Act
        let normalized = NormalizedHeaders::new(&request);

        // Assert
        assert_eq!(normalized.get("origin"), Some("https://foo.bar"));
    }

    #[test]
    fn should_yield_empty_map_given_no_headers() {
        // Arrange
        let request = RequestDescriptor::new("GET");

        // Act
        let normalized = NormalizedHeaders::new(&request);

        // Assert
        assert!(normalized.is_empty());
    }

    #[test]
    fn should_keep_last_value_given_names_collide() {
        // Arrange
        let request = descriptor_with(&[("Origin", "first"), ("ORIGIN", "second")]);

        // Act
        let normalized = NormalizedHeaders::new(&request);

        // Assert
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized.get("origin"), Some("second"));
    }
}

mod get {
    use super::*;

    #[test]
    fn should_find_entry_given_lookup_name_has_mixed_case() {
        // Arrange
        let request = descriptor_with(&[("authorization", "Bearer abc")]);
        let normalized = NormalizedHeaders::new(&request);

        // Act & Assert
        assert_eq!(normalized.get("AUTHORIZATION"), Some("bearer abc"));
    }

    #[test]
    fn should_return_none_given_entry_is_absent() {
        // Arrange
        let normalized = NormalizedHeaders::new(&RequestDescriptor::new("GET"));

        // Act & Assert
        assert_eq!(normalized.get("origin"), None);
    }
}
