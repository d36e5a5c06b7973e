//! POST `/kycverify/api/kycverify/kyc-verify-link`

use serde::{Deserialize, Serialize};

use crate::{operation::GENERATE_KYC_LINK, Client, Error};

impl Client {
    /// Generate a KYC verification link for an application.
    ///
    /// `expire_time` is the link lifetime in seconds. Returns an empty string if the service
    /// responded without a link.
    pub async fn generate_kyc_link(
        &self,
        expire_time: u64,
        application_id: &str,
    ) -> Result<String, Error> {
        let token = self.token().await?;
        let req = GenerateKycLinkRequest {
            expire_time,
            application_id,
        };
        let req = self.build_json(&GENERATE_KYC_LINK, Some(&token), &req);
        let GenerateKycLinkResponse { link } = self.dispatch(&GENERATE_KYC_LINK, req).await?;
        Ok(link.unwrap_or_default())
    }
}

/// Input data for the generate KYC link request.
#[derive(Debug, Serialize)]
struct GenerateKycLinkRequest<'a> {
    /// The link lifetime, in seconds.
    expire_time: u64,
    /// The application to associate the link with.
    application_id: &'a str,
}

/// The response from the generate KYC link request.
#[derive(Debug, Deserialize, PartialEq)]
struct GenerateKycLinkResponse {
    /// The generated link, `null` is treated as absent.
    #[serde(default)]
    link: Option<String>,
}
