//! Monthly inquiry spreadsheet export (admins only)

use nico_client::HttpClient;
use shared::FieldErrors;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DashboardResult};
use crate::views::ViewContext;

/// Name the server's spreadsheet is saved under
pub fn export_file_name(month: u32, year: i32) -> String {
    format!("inquiry_{month}_{year}.xlsx")
}

fn check_period(month: Option<u32>, year: Option<i32>) -> Result<(u32, i32), FieldErrors> {
    let mut errors = FieldErrors::new();
    let (Some(month), Some(year)) = (month, year) else {
        errors.add("period", "Please select both month and year.");
        return Err(errors);
    };
    if !(1..=12).contains(&month) {
        errors.add("month", "Month must be between 1 and 12.");
        return Err(errors);
    }
    Ok((month, year))
}

/// Download the spreadsheet for `month`/`year` into `dir`
pub async fn export_inquiries<C: HttpClient>(
    ctx: &ViewContext<C>,
    month: Option<u32>,
    year: Option<i32>,
    dir: &Path,
) -> DashboardResult<PathBuf> {
    if !ctx.is_admin().await {
        ctx.notifier.error("Export is available to admins only");
        return Err(DashboardError::unavailable("Export is available to admins only"));
    }
    let (month, year) = match check_period(month, year) {
        Ok(period) => period,
        Err(errors) => {
            if let Some(message) = errors.first() {
                ctx.notifier.error(message);
            }
            return Err(errors.into());
        }
    };

    let bytes = match ctx.api.export_inquiries(month, year).await {
        Ok(bytes) => bytes,
        Err(e) => {
            ctx.notifier
                .request_failed(&e, "Error downloading the Excel file");
            return Err(e.into());
        }
    };

    let path = dir.join(export_file_name(month, year));
    tokio::fs::write(&path, &bytes).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to write export");
        ctx.notifier.error("Error saving the Excel file");
        DashboardError::from(e)
    })?;

    tracing::info!(path = %path.display(), size = bytes.len(), "Inquiry export saved");
    Ok(path)
}
