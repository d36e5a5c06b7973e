//! GET `/kycrules/api/kycrules`

use crate::{operation::GET_KYC_RULES, Client, Error, ResponsePayload};

impl Client {
    /// Retrieve the KYC rules configured for the client.
    pub async fn get_kyc_rules(&self) -> Result<ResponsePayload, Error> {
        let token = self.token().await?;
        let req = self.build_empty(&GET_KYC_RULES, None, &token);
        self.dispatch(&GET_KYC_RULES, req).await
    }
}
