//! Spreadsheet export

use super::NicoApi;
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::QueryParams;

impl<C: HttpClient> NicoApi<C> {
    /// Monthly inquiry report as `.xlsx` bytes
    pub async fn export_inquiries(&self, month: u32, year: i32) -> ClientResult<Vec<u8>> {
        let query = QueryParams::new().push("month", month).push("year", year);
        self.http().download("/api/inquiry/excel", &query).await
    }
}
