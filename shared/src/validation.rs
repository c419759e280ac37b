//! Form validation for the Crop Advisor
//!
//! Only presence is checked: the month and soil values are forwarded exactly
//! as given and the service decides what it accepts.

use crate::error::ValidationError;
use crate::models::{FormFields, FormInput};

/// Validate raw form values and build the request input
///
/// The location is trimmed before the emptiness check; the other fields are
/// checked as given.
pub fn validate_form(fields: &FormFields) -> Result<FormInput, ValidationError> {
    let location = require(fields.location.trim(), "location")?;
    let month = require(&fields.month, "month")?;
    let n = require(&fields.n, "N")?;
    let p = require(&fields.p, "P")?;
    let k = require(&fields.k, "K")?;

    Ok(FormInput {
        location: location.to_string(),
        month: month.to_string(),
        n: n.to_string(),
        p: p.to_string(),
        k: k.to_string(),
    })
}

/// Fail with the field name when the value is empty
pub fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            location: "  Nashik ".to_string(),
            month: "June".to_string(),
            n: "90".to_string(),
            p: "42".to_string(),
            k: "43".to_string(),
        }
    }

    #[test]
    fn test_validate_form_valid() {
        let input = validate_form(&filled()).unwrap();
        assert_eq!(input.location, "Nashik");
        assert_eq!(input.month, "June");
        assert_eq!(input.n, "90");
        assert_eq!(input.ph(), 7);
    }

    #[test]
    fn test_validate_form_blank_location() {
        let fields = FormFields {
            location: "   ".to_string(),
            ..filled()
        };
        assert_eq!(
            validate_form(&fields),
            Err(ValidationError::MissingField("location"))
        );
    }

    #[test]
    fn test_validate_form_each_missing_field() {
        let cases: [(fn(&mut FormFields), &str); 4] = [
            (|f| f.month.clear(), "month"),
            (|f| f.n.clear(), "N"),
            (|f| f.p.clear(), "P"),
            (|f| f.k.clear(), "K"),
        ];

        for (clear, field) in cases {
            let mut fields = filled();
            clear(&mut fields);
            assert_eq!(
                validate_form(&fields),
                Err(ValidationError::MissingField(field))
            );
        }
    }

    #[test]
    fn test_validate_form_soil_values_not_trimmed() {
        // Whitespace-only soil values count as present, as in the form
        let fields = FormFields {
            n: " ".to_string(),
            ..filled()
        };
        assert_eq!(validate_form(&fields).unwrap().n, " ");
    }

    #[test]
    fn test_validate_form_month_passes_through() {
        for month in ["1", "jan", "june", "Kharif"] {
            let fields = FormFields {
                month: month.to_string(),
                ..filled()
            };
            let input = validate_form(&fields).unwrap();
            assert_eq!(input.query_pairs()[5].1, month);
        }
    }
}
