use crate::error::AppError;

/// Default page size when `limit` is omitted.
pub const DEFAULT_LIMIT: i64 = 10;
/// Largest page size a client may request.
pub const MAX_LIMIT: i64 = 50;

/// Validate a title (non-empty once trimmed).
pub fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }
    Ok(())
}

/// Turn 1-based `page` and `limit` into a `(skip, limit)` window.
pub fn page_window(page: Option<i64>, limit: Option<i64>) -> Result<(u64, i64), AppError> {
    let page = page.unwrap_or(1);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    if page < 1 {
        return Err(AppError::Validation("page must be >= 1".into()));
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let skip = (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| AppError::Validation("page is too large".into()))?;

    Ok((skip as u64, limit))
}
