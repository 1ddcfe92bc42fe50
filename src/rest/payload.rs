//! Request body serialization for REST resources.
//!
//! Resources serialize to JSON objects containing exactly the fields the
//! caller has set. The omission rule is enforced structurally: every
//! optional field on a resource struct carries
//! `#[serde(skip_serializing_if = "Option::is_none")]`, so unset fields
//! never appear in the body — not even as `null`. A resource with no set
//! fields serializes to `{}`, which is a valid body for action endpoints.

use serde::Serialize;

use crate::rest::errors::ResourceError;

/// Serializes a resource into a JSON request body.
///
/// Set fields appear with their values unchanged; unset fields are
/// omitted entirely. `resource_name` is carried into the error for
/// diagnostics.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if the resource cannot be
/// rendered as JSON.
pub fn serialize<T>(resource: &T, resource_name: &'static str) -> Result<String, ResourceError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(resource).map_err(|source| ResourceError::Serialization {
        resource: resource_name,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct TestPayload {
        #[serde(skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<String>,
    }

    #[test]
    fn test_set_fields_appear_with_values_unchanged() {
        let payload = TestPayload {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            amount: None,
        };

        let body = serialize(&payload, "test").unwrap();
        assert_eq!(body, r#"{"firstName":"John","lastName":"Doe"}"#);
    }

    #[test]
    fn test_unset_fields_are_omitted_not_null() {
        let payload = TestPayload {
            first_name: None,
            last_name: Some("Doe".to_string()),
            amount: None,
        };

        let body = serialize(&payload, "test").unwrap();
        assert!(!body.contains("firstName"));
        assert!(!body.contains("null"));
        assert_eq!(body, r#"{"lastName":"Doe"}"#);
    }

    #[test]
    fn test_empty_payload_serializes_to_empty_object() {
        let payload = TestPayload {
            first_name: None,
            last_name: None,
            amount: None,
        };

        let body = serialize(&payload, "test").unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_string_values_are_not_reformatted() {
        // Amounts are strings on the wire and must pass through verbatim
        let payload = TestPayload {
            first_name: None,
            last_name: None,
            amount: Some("9.99".to_string()),
        };

        let body = serialize(&payload, "test").unwrap();
        assert_eq!(body, r#"{"amount":"9.99"}"#);
    }

    #[test]
    fn test_serialization_failure_names_the_resource() {
        struct Failing;

        impl Serialize for Failing {
            fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                Err(serde::ser::Error::custom("not representable"))
            }
        }

        let result = serialize(&Failing, "failing");

        assert!(matches!(
            result,
            Err(ResourceError::Serialization {
                resource: "failing",
                ..
            })
        ));
    }
}
