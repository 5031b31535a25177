use thiserror::Error;

use crate::validation::FieldError;

#[derive(Error, Debug)]
pub enum StoreModelError {
    #[error("Validation failed: {}", render_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Database error during {operation} on {table}: {source}")]
    Database {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Could not assign a unique slug for '{base}' after {attempts} attempts")]
    SlugExhausted { base: String, attempts: u32 },
}

impl StoreModelError {
    pub fn database(table: &'static str, operation: &'static str, source: sqlx::Error) -> Self {
        StoreModelError::Database {
            table,
            operation,
            source,
        }
    }
}

fn render_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_field() {
        let error = StoreModelError::Validation(vec![
            FieldError::new("name", "Please enter a store name!"),
            FieldError::new("author", "You must supply an author"),
        ]);

        let message = error.to_string();
        assert!(message.contains("name: Please enter a store name!"));
        assert!(message.contains("author: You must supply an author"));
    }
}
