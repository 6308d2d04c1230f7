//! Schema record validation.
//!
//! Only what code generation needs is checked: a usable class name and
//! well-formed template parameters. Type expressions are never validated.

use crate::error::SchemaError;
use crate::record::SchemaRecord;

/// Validates a decoded record before code generation.
///
/// # Errors
/// Returns `SchemaError::MissingField` if `name` is absent or blank, or
/// `SchemaError::Validation` if a template parameter has an empty name.
pub fn validate_record(record: &SchemaRecord) -> Result<(), SchemaError> {
    if record.name.trim().is_empty() {
        return Err(SchemaError::missing_field("name"));
    }
    validate_template(record)?;
    Ok(())
}

fn validate_template(record: &SchemaRecord) -> Result<(), SchemaError> {
    for (index, param) in record.template.iter().enumerate() {
        if param.name.trim().is_empty() {
            return Err(SchemaError::Validation {
                message: format!(
                    "template parameter {} of '{}' has no name",
                    index, record.name
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TemplateParam;

    #[test]
    fn test_validate_ok() {
        let record = SchemaRecord::new("Widget");
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_validate_missing_name() {
        let err = validate_record(&SchemaRecord::default()).unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "missing required field 'name'");
    }

    #[test]
    fn test_validate_blank_name() {
        let err = validate_record(&SchemaRecord::new("   ")).unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_validate_unnamed_template_param() {
        let record =
            SchemaRecord::new("Widget").with_template_param(TemplateParam::new("typename", ""));
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(err, SchemaError::Validation { .. }));
    }
}
