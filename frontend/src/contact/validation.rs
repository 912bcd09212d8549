use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// Applied to the digits only, so "(917) 624-8550" and "+1 917 624 8550" both qualify.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern compiles")
});

const MIN_PHONE_DIGITS: usize = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    EmptyField,
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
    #[error("Please enter a valid phone number")]
    InvalidPhoneFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Empty,
    InvalidFormat,
}

/// One input of the contact form. The error slot holds at most one message at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
    error: Option<ValidationError>,
}

impl FormField {
    pub fn new(name: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            value: String::new(),
            required,
            kind,
            error: None,
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn validity(&self) -> Validity {
        match self.error {
            None => Validity::Valid,
            Some(ValidationError::EmptyField) => Validity::Empty,
            Some(_) => Validity::InvalidFormat,
        }
    }

    /// Replaces whatever error the field carried.
    pub fn show_error(&mut self, error: ValidationError) {
        self.clear_error();
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Validates the current value without touching the error slot.
    pub fn check(&self) -> Result<(), ValidationError> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(ValidationError::EmptyField)
            } else {
                Ok(())
            };
        }

        match self.kind {
            FieldKind::Text => Ok(()),
            FieldKind::Email if is_valid_email(&self.value) => Ok(()),
            FieldKind::Email => Err(ValidationError::InvalidEmailFormat),
            FieldKind::Phone if is_valid_phone(&self.value) => Ok(()),
            FieldKind::Phone => Err(ValidationError::InvalidPhoneFormat),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let digits = digits_only(phone);
    digits.len() >= MIN_PHONE_DIGITS && PHONE_RE.is_match(&digits)
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Display formatting applied on every keystroke in the phone input.
pub fn format_phone_as_typed(raw: &str) -> String {
    let digits = digits_only(raw);
    let len = digits.len();

    if len >= 6 {
        let rest = &digits[6..];
        if rest.is_empty() {
            format!("({}) {}", &digits[..3], &digits[3..6])
        } else {
            format!("({}) {}-{}", &digits[..3], &digits[3..6], rest)
        }
    } else if len > 3 {
        format!("({}) {}", &digits[..3], &digits[3..])
    } else {
        // "(917)" would trap backspace, so a bare area code stays unformatted
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_local_part_domain_and_dot() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jane.doe@example.co.uk"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a @b.c"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn phone_needs_ten_digits() {
        assert!(is_valid_phone("9176248550"));
        assert!(is_valid_phone("(917) 624-8550"));
        assert!(is_valid_phone("+1 917 624 8550"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("0176248550"));
        assert!(!is_valid_phone("12345678901234567"));
    }

    #[test]
    fn formats_phone_progressively() {
        assert_eq!(format_phone_as_typed("9176248550"), "(917) 624-8550");
        assert_eq!(format_phone_as_typed("917624"), "(917) 624");
        assert_eq!(format_phone_as_typed("9176"), "(917) 6");
        assert_eq!(format_phone_as_typed("91"), "91");
        assert_eq!(format_phone_as_typed("(917) "), "917");
        assert_eq!(format_phone_as_typed(""), "");
    }

    #[test]
    fn reformatting_keeps_digits() {
        let once = format_phone_as_typed("917-624-8550");
        let twice = format_phone_as_typed(&once);
        assert_eq!(once, twice);
        assert_eq!(digits_only(&twice), "9176248550");
        assert!(is_valid_phone(&twice));
    }

    #[test]
    fn whitespace_only_required_field_is_empty() {
        let mut field = FormField::new("name", FieldKind::Text, true);
        field.value = "   ".to_string();
        assert_eq!(field.check(), Err(ValidationError::EmptyField));
        field.show_error(ValidationError::EmptyField);
        assert_eq!(field.validity(), Validity::Empty);
    }

    #[test]
    fn optional_field_skips_format_check_when_empty() {
        let mut field = FormField::new("phone", FieldKind::Phone, false);
        assert_eq!(field.check(), Ok(()));

        field.value = "12345".to_string();
        assert_eq!(field.check(), Err(ValidationError::InvalidPhoneFormat));
        field.show_error(ValidationError::InvalidPhoneFormat);
        assert_eq!(field.validity(), Validity::InvalidFormat);
    }

    #[test]
    fn show_error_keeps_single_message() {
        let mut field = FormField::new("email", FieldKind::Email, true);
        field.show_error(ValidationError::EmptyField);
        field.show_error(ValidationError::InvalidEmailFormat);
        assert_eq!(field.error(), Some(ValidationError::InvalidEmailFormat));

        field.clear_error();
        field.clear_error();
        assert!(!field.has_error());
    }
}
