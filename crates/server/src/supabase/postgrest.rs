//! Table operations over PostgREST.
//!
//! Each method maps to a single PostgREST call; there are no transactions
//! and no retries. Mutations ask for `return=representation` so handlers
//! can echo the affected rows back to the client.

use serde::Serialize;

use velan_grocery_core::{Table, UpsertTable};

use super::{SupabaseClient, SupabaseError};

impl SupabaseClient {
    /// List rows of `T`, sorted ascending by the table's order column,
    /// optionally filtered by column equality.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or PostgREST answers
    /// with a non-success status.
    pub async fn select<T: Table>(
        &self,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<T::Row>, SupabaseError> {
        let mut query = vec![
            ("select".to_owned(), "*".to_owned()),
            ("order".to_owned(), format!("{}.asc", T::ORDER_COLUMN)),
        ];
        if let Some((column, value)) = filter {
            query.push((column.to_owned(), format!("eq.{value}")));
        }

        let request = self
            .inner
            .http
            .get(self.table_url::<T>())
            .query(&query);
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Insert one row and return the stored representation.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or PostgREST rejects
    /// the insert (constraint violation, unknown column, ...).
    pub async fn insert<T: Table, I: Serialize + Sync>(
        &self,
        row: &I,
    ) -> Result<T::Row, SupabaseError> {
        let request = self
            .inner
            .http
            .post(self.table_url::<T>())
            .header("Prefer", "return=representation")
            // PostgREST takes inserts as an array of rows
            .json(&[row]);
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        let mut rows: Vec<T::Row> = response.json().await?;
        rows.pop().ok_or(SupabaseError::EmptyRepresentation(T::NAME))
    }

    /// Delete every row where `column` equals `value`, returning the
    /// deleted rows. Zero matches is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or PostgREST answers
    /// with a non-success status.
    pub async fn delete<T: Table>(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Vec<T::Row>, SupabaseError> {
        let request = self
            .inner
            .http
            .delete(self.table_url::<T>())
            .header("Prefer", "return=representation")
            .query(&[(column, format!("eq.{value}"))]);
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Insert-or-update one row keyed by the table's conflict column,
    /// last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or PostgREST rejects
    /// the upsert.
    pub async fn upsert<T: UpsertTable, I: Serialize + Sync>(
        &self,
        row: &I,
    ) -> Result<T::Row, SupabaseError> {
        let request = self
            .inner
            .http
            .post(self.table_url::<T>())
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .query(&[("on_conflict", T::CONFLICT_COLUMN)])
            .json(&[row]);
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        let mut rows: Vec<T::Row> = response.json().await?;
        rows.pop().ok_or(SupabaseError::EmptyRepresentation(T::NAME))
    }

    fn table_url<T: Table>(&self) -> String {
        format!("{}/{}", self.inner.rest_url, T::NAME)
    }
}
