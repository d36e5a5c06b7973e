//! Common types.

/// A reference to an image as accepted by the KYC endpoints.
///
/// Opaque in a sense that our code does not try to validate or load it, the value is
/// passed through to the service as is.
pub type ImageRef<'a> = &'a str;

/// An arbitrary JSON document returned by the service.
///
/// The schema is owned by the service and is not validated on our end.
pub type ResponsePayload = serde_json::Value;
