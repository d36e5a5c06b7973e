//! The table of the endpoints exposed by the service.

use std::borrow::Cow;

use reqwest::Method;

/// The multipart field the face match selfie is uploaded under.
pub const SELFIE_IMAGE_FIELD: &str = "selfie_image";

/// The shape of the request body an operation sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    /// No body.
    Empty,
    /// A JSON document.
    Json,
    /// A multipart form carrying a single file.
    Multipart {
        /// The form field the file content goes under.
        file_field: &'static str,
    },
}

/// A static descriptor of a single endpoint.
#[derive(Debug)]
pub struct OperationSpec {
    /// A short machine-friendly name, used in logs.
    pub name: &'static str,
    /// The HTTP method.
    pub method: Method,
    /// The path relative to the base URL, may hold a single `{param}` placeholder.
    pub path: &'static str,
    /// The request body shape.
    pub body: BodyShape,
    /// Whether the call carries the bearer token.
    pub requires_auth: bool,
    /// What a failed call was trying to do, used in error messages.
    pub failure: &'static str,
}

impl OperationSpec {
    /// Substitute the path parameter into the path template.
    ///
    /// The value is inserted verbatim, without any encoding of our own.
    pub fn render_path(&self, param: Option<&str>) -> Cow<'static, str> {
        let Some(value) = param else {
            return Cow::Borrowed(self.path);
        };
        let Some((start, end)) = placeholder(self.path) else {
            return Cow::Borrowed(self.path);
        };
        Cow::Owned(format!(
            "{}{}{}",
            &self.path[..start],
            value,
            &self.path[end..]
        ))
    }
}

/// The byte range of the `{param}` placeholder in `path`, closing brace included.
///
/// An unterminated `{` is not a placeholder.
fn placeholder(path: &str) -> Option<(usize, usize)> {
    let start = path.find('{')?;
    let end = start + path[start..].find('}')? + 1;
    Some((start, end))
}

/// POST `/auth/api/access-token`
pub static ACCESS_TOKEN: OperationSpec = OperationSpec {
    name: "access_token",
    method: Method::POST,
    path: "/auth/api/access-token",
    body: BodyShape::Json,
    requires_auth: false,
    failure: "token generation failed",
};

/// GET `/kycrules/api/kycrules`
pub static GET_KYC_RULES: OperationSpec = OperationSpec {
    name: "get_kyc_rules",
    method: Method::GET,
    path: "/kycrules/api/kycrules",
    body: BodyShape::Empty,
    requires_auth: true,
    failure: "Failed to retrieve KYC rules",
};

/// POST `/kycverify/api/kycverify/kyc-verification`
pub static KYC_VERIFICATION: OperationSpec = OperationSpec {
    name: "kyc_verification",
    method: Method::POST,
    path: "/kycverify/api/kycverify/kyc-verification",
    body: BodyShape::Json,
    requires_auth: true,
    failure: "KYC verification failed",
};

/// POST `/kycverify/api/kycverify/multi-kyc-verification`
pub static MULTI_KYC_VERIFICATION: OperationSpec = OperationSpec {
    name: "multi_kyc_verification",
    method: Method::POST,
    path: "/kycverify/api/kycverify/multi-kyc-verification",
    body: BodyShape::Json,
    requires_auth: true,
    failure: "Multiple KYC verification failed",
};

/// GET `/kycverify/api/kycverify/kyc-verify-summary`
pub static GET_KYC_SUMMARY: OperationSpec = OperationSpec {
    name: "get_kyc_summary",
    method: Method::GET,
    path: "/kycverify/api/kycverify/kyc-verify-summary",
    body: BodyShape::Empty,
    requires_auth: true,
    failure: "Failed to retrieve KYC summaries",
};

/// POST `/kycverify/api/kycverify/kyc-verify-link`
pub static GENERATE_KYC_LINK: OperationSpec = OperationSpec {
    name: "generate_kyc_link",
    method: Method::POST,
    path: "/kycverify/api/kycverify/kyc-verify-link",
    body: BodyShape::Json,
    requires_auth: true,
    failure: "Failed to generate KYC link",
};

/// GET `/kycverify/api/kycverify/link/{link_id}`
pub static GET_KYC_RECORDS: OperationSpec = OperationSpec {
    name: "get_kyc_records",
    method: Method::GET,
    path: "/kycverify/api/kycverify/link/{link_id}",
    body: BodyShape::Empty,
    requires_auth: true,
    failure: "Failed to fetch KYC records",
};

/// GET `/kycverify/api/kycverify/records/{request_id}`
pub static GET_KYC_RECORDS_BY_REQUEST_ID: OperationSpec = OperationSpec {
    name: "get_kyc_records_by_request_id",
    method: Method::GET,
    path: "/kycverify/api/kycverify/records/{request_id}",
    body: BodyShape::Empty,
    requires_auth: true,
    failure: "Failed to fetch KYC records",
};

/// POST `/facelink/api/face-check`
pub static FACE_MATCH: OperationSpec = OperationSpec {
    name: "face_match",
    method: Method::POST,
    path: "/facelink/api/face-check",
    body: BodyShape::Multipart {
        file_field: SELFIE_IMAGE_FIELD,
    },
    requires_auth: true,
    failure: "Face match verification failed",
};

/// All the operations, the token exchange first.
pub static ALL: [&OperationSpec; 9] = [
    &ACCESS_TOKEN,
    &GET_KYC_RULES,
    &KYC_VERIFICATION,
    &MULTI_KYC_VERIFICATION,
    &GET_KYC_SUMMARY,
    &GENERATE_KYC_LINK,
    &GET_KYC_RECORDS,
    &GET_KYC_RECORDS_BY_REQUEST_ID,
    &FACE_MATCH,
];
