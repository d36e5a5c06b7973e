//! POST `/facelink/api/face-check`

use std::path::Path;

use crate::{
    operation::{FACE_MATCH, SELFIE_IMAGE_FIELD},
    request::file_form,
    Client, Error, ResponsePayload,
};

impl Client {
    /// Match the face on a selfie image file.
    ///
    /// The file is read before anything is sent, so a missing file fails without any network
    /// calls at all.
    pub async fn face_match(
        &self,
        selfie_image_path: impl AsRef<Path>,
    ) -> Result<ResponsePayload, Error> {
        let form = file_form(SELFIE_IMAGE_FIELD, selfie_image_path.as_ref()).await?;
        let token = self.token().await?;
        let req = self.build_multipart(&FACE_MATCH, &token, form);
        self.dispatch(&FACE_MATCH, req).await
    }
}
