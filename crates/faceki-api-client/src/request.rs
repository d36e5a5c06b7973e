//! Outbound request construction.

use std::path::Path;

use reqwest::{
    header::CONTENT_TYPE,
    multipart::{Form, Part},
    RequestBuilder,
};

use crate::{
    operation::{BodyShape, OperationSpec},
    Client, Error, Token,
};

impl Client {
    /// Prepare the URL.
    pub(crate) fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Prepare the request common to all body shapes: method, URL and authorization.
    fn build(
        &self,
        spec: &OperationSpec,
        path_param: Option<&str>,
        token: Option<&Token>,
    ) -> RequestBuilder {
        let url = self.build_url(&spec.render_path(path_param));
        let req = self.reqwest.request(spec.method.clone(), url);
        match token {
            Some(token) if spec.requires_auth => req.bearer_auth(token.as_str()),
            _ => req,
        }
    }

    /// An internal utility to prepare a request without a body.
    pub(crate) fn build_empty(
        &self,
        spec: &OperationSpec,
        path_param: Option<&str>,
        token: &Token,
    ) -> RequestBuilder {
        debug_assert_eq!(spec.body, BodyShape::Empty);
        self.build(spec, path_param, Some(token))
            .header(CONTENT_TYPE, "application/json")
    }

    /// An internal utility to prepare a request with a JSON body.
    ///
    /// The body is serialized as is, `None` fields included as `null`.
    pub(crate) fn build_json<T>(
        &self,
        spec: &OperationSpec,
        token: Option<&Token>,
        body: &T,
    ) -> RequestBuilder
    where
        T: serde::Serialize + ?Sized,
    {
        debug_assert_eq!(spec.body, BodyShape::Json);
        self.build(spec, None, token).json(body)
    }

    /// An internal utility to prepare a request with a multipart body.
    pub(crate) fn build_multipart(
        &self,
        spec: &OperationSpec,
        token: &Token,
        form: Form,
    ) -> RequestBuilder {
        debug_assert!(matches!(spec.body, BodyShape::Multipart { .. }));
        self.build(spec, None, Some(token)).multipart(form)
    }
}

/// Load the file at `path` into a form under `file_field`.
///
/// The file is read in full and closed before returning, the part is named after the path
/// as given.
pub(crate) async fn file_form(file_field: &'static str, path: &Path) -> Result<Form, Error> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|source| Error::FileAccess {
            path: path.to_owned(),
            source,
        })?;
    let part = Part::bytes(content).file_name(path.to_string_lossy().into_owned());
    Ok(Form::new().part(file_field, part))
}

#[cfg(test)]
mod tests {
    use crate::{operation, tests::test_client, ErrorKind};

    use super::*;

    #[test]
    fn build_url_trims_trailing_slash() {
        let client = test_client("http://localhost:1234/".to_owned());
        assert_eq!(
            client.build_url(operation::GET_KYC_RULES.path),
            "http://localhost:1234/kycrules/api/kycrules"
        );
    }

    #[test]
    fn empty_request_carries_auth_and_content_type() {
        let client = test_client("http://localhost:1234".to_owned());
        let token = Token::from("abc");

        let req = client
            .build_empty(&operation::GET_KYC_RECORDS, Some("link-1"), &token)
            .build()
            .unwrap();

        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(
            req.url().as_str(),
            "http://localhost:1234/kycverify/api/kycverify/link/link-1"
        );
        assert_eq!(req.headers()["authorization"], "Bearer abc");
        assert_eq!(req.headers()["content-type"], "application/json");
        assert!(req.body().is_none());
    }

    #[test]
    fn token_exchange_request_has_no_auth() {
        let client = test_client("http://localhost:1234".to_owned());

        let req = client
            .build_json(&operation::ACCESS_TOKEN, None, &serde_json::json!({}))
            .build()
            .unwrap();

        assert_eq!(req.method(), reqwest::Method::POST);
        assert!(req.headers().get("authorization").is_none());
        assert_eq!(req.headers()["content-type"], "application/json");
    }

    #[test]
    fn json_request_keeps_nulls() {
        let client = test_client("http://localhost:1234".to_owned());
        let token = Token::from("abc");
        let body = serde_json::json!({ "present": "yes", "absent": null });

        let req = client
            .build_json(&operation::MULTI_KYC_VERIFICATION, Some(&token), &body)
            .build()
            .unwrap();

        let sent: serde_json::Value =
            serde_json::from_slice(req.body().unwrap().as_bytes().unwrap()).unwrap();
        assert_eq!(sent, body);
        assert_eq!(req.headers()["authorization"], "Bearer abc");
    }

    #[tokio::test]
    async fn file_form_missing_file() {
        let err = file_form(
            operation::SELFIE_IMAGE_FIELD,
            Path::new("/definitely/not/here/selfie.jpg"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FileAccess);
        assert_matches!(
            err,
            Error::FileAccess { path, source }
                if path == Path::new("/definitely/not/here/selfie.jpg")
                    && source.kind() == std::io::ErrorKind::NotFound
        );
    }
}
