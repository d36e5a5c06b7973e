//! POST `/kycverify/api/kycverify/multi-kyc-verification`

use serde::Serialize;

use crate::{operation::MULTI_KYC_VERIFICATION, Client, Error, ImageRef, ResponsePayload};

impl Client {
    /// Verify a selfie against an identity document and, optionally, a driving license and
    /// a passport.
    pub async fn multi_kyc_verification(
        &self,
        req: MultiKycVerificationRequest<'_>,
    ) -> Result<ResponsePayload, Error> {
        let token = self.token().await?;
        let req = self.build_json(&MULTI_KYC_VERIFICATION, Some(&token), &req);
        self.dispatch(&MULTI_KYC_VERIFICATION, req).await
    }
}

/// Input data for the multi-document KYC verification request.
///
/// The optional documents are always sent, the unset ones as `null`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MultiKycVerificationRequest<'a> {
    /// The selfie of the person being verified.
    pub selfie_image: ImageRef<'a>,
    /// The front of the identity document.
    pub id_front_image: ImageRef<'a>,
    /// The back of the identity document.
    pub id_back_image: ImageRef<'a>,
    /// The front of the driving license.
    pub dl_front_image: Option<ImageRef<'a>>,
    /// The back of the driving license.
    pub dl_back_image: Option<ImageRef<'a>>,
    /// The front of the passport.
    pub pp_front_image: Option<ImageRef<'a>>,
    /// The back of the passport.
    pub pp_back_image: Option<ImageRef<'a>>,
}

impl<'a> MultiKycVerificationRequest<'a> {
    /// A request with the required images only.
    pub fn new(
        selfie_image: ImageRef<'a>,
        id_front_image: ImageRef<'a>,
        id_back_image: ImageRef<'a>,
    ) -> Self {
        Self {
            selfie_image,
            id_front_image,
            id_back_image,
            dl_front_image: None,
            dl_back_image: None,
            pp_front_image: None,
            pp_back_image: None,
        }
    }
}
