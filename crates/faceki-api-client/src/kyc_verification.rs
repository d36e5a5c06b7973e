//! POST `/kycverify/api/kycverify/kyc-verification`

use serde::Serialize;

use crate::{operation::KYC_VERIFICATION, Client, Error, ImageRef, ResponsePayload};

impl Client {
    /// Verify a selfie against the front and back of an identity document.
    pub async fn kyc_verification(
        &self,
        req: KycVerificationRequest<'_>,
    ) -> Result<ResponsePayload, Error> {
        let token = self.token().await?;
        let req = self.build_json(&KYC_VERIFICATION, Some(&token), &req);
        self.dispatch(&KYC_VERIFICATION, req).await
    }
}

/// Input data for the KYC verification request.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct KycVerificationRequest<'a> {
    /// The selfie of the person being verified.
    pub selfie_image: ImageRef<'a>,
    /// The front of the identity document.
    pub doc_front_image: ImageRef<'a>,
    /// The back of the identity document.
    pub doc_back_image: ImageRef<'a>,
}
