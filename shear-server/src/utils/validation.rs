//! Input validation helpers
//!
//! Record-id parsing for path/body ids. DTO field rules live on the DTOs
//! themselves (validator derive).

use surrealdb::RecordId;

use crate::utils::AppError;

/// Parse a client-supplied id ("table:key") and check it targets the
/// expected table. A malformed or cross-table id is a validation error,
/// never a database error.
pub fn parse_record_id(id: &str, table: &str) -> Result<RecordId, AppError> {
    let record: RecordId = id
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid id: {id}")))?;
    if record.table() != table {
        return Err(AppError::validation(format!(
            "Invalid {table} id: {id}"
        )));
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_cross_table_ids() {
        assert!(parse_record_id("user:abc", "barbershop").is_err());
        assert!(parse_record_id("barbershop:abc", "barbershop").is_ok());
    }

    #[test]
    fn rejects_garbage_ids() {
        assert!(parse_record_id("not an id", "user").is_err());
    }
}
