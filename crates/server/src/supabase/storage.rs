//! Object storage operations against the configured bucket.

use reqwest::header::CONTENT_TYPE;

use super::{SupabaseClient, SupabaseError};

impl SupabaseClient {
    /// Upload `bytes` to `path` inside the configured bucket.
    ///
    /// Sent with `x-upsert: true`, so re-uploading the same path overwrites
    /// the existing object instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or the Storage API
    /// answers with a non-success status.
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), SupabaseError> {
        let url = format!("{}/object/{}/{path}", self.inner.storage_url, self.inner.bucket);
        let request = self
            .inner
            .http
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes);
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }

    /// Publicly retrievable URL for an object at `path`.
    ///
    /// Purely string construction; the bucket must be marked public in the
    /// Supabase project for the URL to actually resolve.
    #[must_use]
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/object/public/{}/{path}",
            self.inner.storage_url, self.inner.bucket
        )
    }

    /// Delete the object at `path`. Used for best-effort cleanup when an
    /// insert fails after its image was already uploaded.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or the Storage API
    /// answers with a non-success status.
    pub async fn remove(&self, path: &str) -> Result<(), SupabaseError> {
        let url = format!("{}/object/{}/{path}", self.inner.storage_url, self.inner.bucket);
        let response = self.authorize(self.inner.http.delete(url)).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use crate::config::SupabaseConfig;

    use super::*;

    #[test]
    fn test_public_url_shape() {
        let client = SupabaseClient::new(&SupabaseConfig {
            url: "https://project.supabase.co".to_owned(),
            service_key: SecretString::from("key"),
            bucket: "images".to_owned(),
        });
        assert_eq!(
            client.public_url("products/1700000000000_my_photo.png"),
            "https://project.supabase.co/storage/v1/object/public/images/products/1700000000000_my_photo.png"
        );
    }
}
