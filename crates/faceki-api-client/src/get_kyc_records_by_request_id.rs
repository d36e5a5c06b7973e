//! GET `/kycverify/api/kycverify/records/{request_id}`

use crate::{operation::GET_KYC_RECORDS_BY_REQUEST_ID, Client, Error, ResponsePayload};

impl Client {
    /// Fetch the KYC records of a single verification request.
    pub async fn get_kyc_records_by_request_id(
        &self,
        request_id: &str,
    ) -> Result<ResponsePayload, Error> {
        let token = self.token().await?;
        let req = self.build_empty(&GET_KYC_RECORDS_BY_REQUEST_ID, Some(request_id), &token);
        self.dispatch(&GET_KYC_RECORDS_BY_REQUEST_ID, req).await
    }
}
