//! Form input validation for stockz.
//!
//! Valid products:
//! - A name that is not blank once trimmed
//! - A quantity that is a finite number, at least the configured minimum
//!
//! Quantities are deliberately not required to be whole numbers: `2.5` kg of
//! rice is a perfectly good stock line.

/// Error messages surfaced to the user, in the order [`validate`] reports them.
pub const NAME_REQUIRED: &str = "Product name is required!";
pub const INVALID_QUANTITY: &str = "Invalid quantity!";

/// Returns true if the product name has at least one non-whitespace character.
///
/// # Examples
/// ```
/// use stockzapp::validation::is_valid_product_name;
///
/// assert!(is_valid_product_name("Arroz"));
/// assert!(is_valid_product_name("  Feijão "));
/// assert!(!is_valid_product_name(""));
/// assert!(!is_valid_product_name("   "));
/// ```
pub fn is_valid_product_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Returns true if `quantity` is finite and not below `min`.
///
/// # Examples
/// ```
/// use stockzapp::validation::is_valid_quantity;
///
/// assert!(is_valid_quantity(1.0, 1.0));
/// assert!(is_valid_quantity(2.5, 1.0));
/// assert!(!is_valid_quantity(0.0, 1.0));
/// assert!(!is_valid_quantity(f64::NAN, 1.0));
/// assert!(!is_valid_quantity(f64::INFINITY, 1.0));
/// ```
pub fn is_valid_quantity(quantity: f64, min: f64) -> bool {
    quantity.is_finite() && quantity >= min
}

/// Validates a product form submission.
///
/// Returns every problem found, name first. An empty list means the input is valid.
pub fn validate(name: &str, quantity: f64, min: f64) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_valid_product_name(name) {
        errors.push(NAME_REQUIRED.to_string());
    }

    if !is_valid_quantity(quantity, min) {
        errors.push(quantity_error(min));
    }

    errors
}

/// Message shown when a form quantity is rejected.
pub fn quantity_error(min: f64) -> String {
    format!(
        "Quantity must be a number greater than or equal to {}!",
        format_quantity(min)
    )
}

/// Message shown when adding to an existing line would leave an unusable total.
pub fn merge_error(display_name: &str) -> String {
    format!("Total quantity of \"{}\" would be too large!", display_name)
}

/// Coerces raw text input into a quantity.
///
/// Surrounding whitespace is ignored and an empty field reads as `0`, so a blank
/// quantity fails validation with the regular "below minimum" message instead
/// of a parse error. Parsing is Rust's decimal float syntax: hex, binary and
/// octal prefixes (`0x10`) do not parse and become `NaN`, while `inf` and `nan`
/// spellings do parse. Either way the result fails [`is_valid_quantity`].
pub fn parse_quantity(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a quantity for display: whole numbers without a decimal point.
pub fn format_quantity(quantity: f64) -> String {
    format!("{}", quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_product_name("a"));
        assert!(is_valid_product_name("Leite Integral"));
    }

    #[test]
    fn test_blank_names() {
        assert!(!is_valid_product_name(""));
        assert!(!is_valid_product_name(" \t\n "));
    }

    #[test]
    fn test_quantity_at_minimum() {
        assert!(is_valid_quantity(1.0, 1.0));
        assert!(!is_valid_quantity(0.999, 1.0));
    }

    #[test]
    fn test_quantity_custom_minimum() {
        assert!(is_valid_quantity(0.0, 0.0));
        assert!(!is_valid_quantity(4.0, 5.0));
    }

    #[test]
    fn test_fractional_quantity_is_accepted() {
        assert!(is_valid_quantity(1.5, 1.0));
    }

    #[test]
    fn test_negative_and_non_finite_quantities() {
        assert!(!is_valid_quantity(-3.0, 1.0));
        assert!(!is_valid_quantity(f64::NAN, 1.0));
        assert!(!is_valid_quantity(f64::NEG_INFINITY, 1.0));
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate("Arroz", 5.0, 1.0).is_empty());
    }

    #[test]
    fn test_validate_reports_name_then_quantity() {
        let errors = validate(" ", f64::NAN, 1.0);
        assert_eq!(
            errors,
            vec![
                "Product name is required!".to_string(),
                "Quantity must be a number greater than or equal to 1!".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_quantity_only() {
        let errors = validate("Arroz", 0.0, 1.0);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("greater than or equal to 1"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), 5.0);
        assert_eq!(parse_quantity("  2.5 "), 2.5);
        assert_eq!(parse_quantity("1e2"), 100.0);
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("   "), 0.0);
        assert!(parse_quantity("abc").is_nan());
        assert!(parse_quantity("5 kg").is_nan());
    }

    #[test]
    fn test_parse_quantity_other_spellings_never_validate() {
        assert!(parse_quantity("0x10").is_nan());
        assert!(parse_quantity("0b11").is_nan());
        assert!(parse_quantity("0o7").is_nan());
        assert!(parse_quantity("inf").is_infinite());
        for raw in ["0x10", "0b11", "0o7", "inf", "-inf", "NaN"] {
            assert!(!is_valid_quantity(parse_quantity(raw), 1.0), "{}", raw);
        }
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(5.0), "5");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(0.5), "0.5");
    }
}
