//! GET `/kycverify/api/kycverify/kyc-verify-summary`

use crate::{operation::GET_KYC_SUMMARY, Client, Error, ResponsePayload};

impl Client {
    /// Retrieve the summary of the KYC verifications.
    pub async fn get_kyc_summary(&self) -> Result<ResponsePayload, Error> {
        let token = self.token().await?;
        let req = self.build_empty(&GET_KYC_SUMMARY, None, &token);
        self.dispatch(&GET_KYC_SUMMARY, req).await
    }
}
