//! Interpretation of raw responses from the hosted backend.

use serde::de::DeserializeOwned;

use crate::error::RemoteError;

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decodes a successful JSON body, or turns a failed response into an error.
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RemoteError> {
    if !is_success(status) {
        return Err(RemoteError::from_response(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

/// For calls whose body is irrelevant on success (mutations, sign-out).
pub fn expect_success(status: u16, body: &str) -> Result<(), RemoteError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(RemoteError::from_response(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::listing::Listing;

    #[test]
    fn decodes_rows_on_success() {
        let rows: Vec<Listing> =
            decode_json(200, r#"[{"id":1,"title":"a"},{"id":2,"title":"b"}]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].title(), Some("b"));
    }

    #[test]
    fn failed_status_carries_remote_message() {
        let err = decode_json::<Vec<Listing>>(
            406,
            r#"{"code":"PGRST116","message":"JSON object requested, multiple (or no) rows returned"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            RemoteError::Api {
                status: 406,
                message: "JSON object requested, multiple (or no) rows returned".into()
            }
        );
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_json::<Vec<Listing>>(200, "{not json").unwrap_err();
        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[test]
    fn mutations_only_check_status() {
        assert_eq!(expect_success(204, ""), Ok(()));
        assert_eq!(expect_success(201, ""), Ok(()));
        assert_eq!(
            expect_success(401, r#"{"message":"JWT expired"}"#).unwrap_err().to_string(),
            "JWT expired"
        );
    }
}
