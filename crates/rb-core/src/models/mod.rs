pub mod category;
pub mod recipe;
pub mod user;

/// Reject empty or whitespace-only required name fields.
#[track_caller]
pub fn require_name(name: &str, field: &str) -> crate::Result<()> {
    if name.trim().is_empty() {
        return Err(crate::CoreError::validation(
            format!("{field} must not be empty"),
            Some(field),
        ));
    }
    Ok(())
}
