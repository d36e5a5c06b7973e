//! GET `/kycverify/api/kycverify/link/{link_id}`

use crate::{operation::GET_KYC_RECORDS, Client, Error, ResponsePayload};

impl Client {
    /// Fetch the KYC records collected through a verification link.
    pub async fn get_kyc_records(&self, link_id: &str) -> Result<ResponsePayload, Error> {
        let token = self.token().await?;
        let req = self.build_empty(&GET_KYC_RECORDS, Some(link_id), &token);
        self.dispatch(&GET_KYC_RECORDS, req).await
    }
}
