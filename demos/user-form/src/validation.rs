//! Field validation rules for the registration form.
//!
//! Each field is checked independently and only its first failing rule is
//! reported. Validation always starts from an empty error map.
//!
//! Lengths are counted in UTF-16 code units and "blank" uses the
//! ECMAScript whitespace set, so results match what a browser form reports
//! for the same input.

use crate::types::{FormData, FormErrors, FormField};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum username length, in UTF-16 code units
pub const USERNAME_MIN_LEN: usize = 3;

/// Minimum password length, in UTF-16 code units
pub const PASSWORD_MIN_LEN: usize = 8;

/// Inclusive age bounds
pub const AGE_RANGE: std::ops::RangeInclusive<i64> = 18..=120;

/// Error messages, one per failing rule
pub mod messages {
    /// Username is blank
    pub const USERNAME_REQUIRED: &str = "Username is required";
    /// Username shorter than the minimum
    pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
    /// Email is blank
    pub const EMAIL_REQUIRED: &str = "Email is required";
    /// Email does not look like `local@domain.tld`
    pub const EMAIL_INVALID: &str = "Invalid email format";
    /// Age is empty
    pub const AGE_REQUIRED: &str = "Age is required";
    /// Age is not a number or outside the allowed range
    pub const AGE_OUT_OF_RANGE: &str = "Age must be between 18 and 120";
    /// Password is empty
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    /// Password shorter than the minimum
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
    /// Confirmation is empty
    pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
    /// Confirmation differs from the password
    pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
}

/// ECMAScript whitespace and line terminators, as regex class members
///
/// Unlike Unicode `White_Space` this includes U+FEFF and excludes U+0085.
const JS_WHITESPACE_CLASS: &str = concat!(
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

#[allow(clippy::expect_used)] // pattern is built from constants
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^@{JS_WHITESPACE_CLASS}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Whitespace as ECMAScript `trim` and `\s` see it
const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_js_whitespace)
}

/// Length in UTF-16 code units
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Runs every rule against `data` and collects the failures
#[must_use]
pub fn validate(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::new();

    for field in FormField::ALL {
        if let Some(message) = check_field(data, field) {
            errors.insert(field, message);
        }
    }

    errors
}

/// First failing rule for a single field, if any
#[must_use]
pub fn check_field(data: &FormData, field: FormField) -> Option<&'static str> {
    match field {
        FormField::Username => check_username(&data.username),
        FormField::Email => check_email(&data.email),
        FormField::Age => check_age(&data.age),
        FormField::Password => check_password(&data.password),
        FormField::ConfirmPassword => check_confirm(&data.password, &data.confirm_password),
    }
}

fn check_username(username: &str) -> Option<&'static str> {
    if is_blank(username) {
        Some(messages::USERNAME_REQUIRED)
    } else if utf16_len(username) < USERNAME_MIN_LEN {
        Some(messages::USERNAME_TOO_SHORT)
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<&'static str> {
    if is_blank(email) {
        Some(messages::EMAIL_REQUIRED)
    } else if !EMAIL_PATTERN.is_match(email) {
        Some(messages::EMAIL_INVALID)
    } else {
        None
    }
}

fn check_age(age: &str) -> Option<&'static str> {
    if age.is_empty() {
        return Some(messages::AGE_REQUIRED);
    }

    match parse_leading_int(age) {
        Some(years) if AGE_RANGE.contains(&years) => None,
        _ => Some(messages::AGE_OUT_OF_RANGE),
    }
}

fn check_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(messages::PASSWORD_REQUIRED)
    } else if utf16_len(password) < PASSWORD_MIN_LEN {
        Some(messages::PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

fn check_confirm(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some(messages::CONFIRM_REQUIRED)
    } else if password != confirm {
        Some(messages::PASSWORDS_DIFFER)
    } else {
        None
    }
}

/// Lenient integer parse: leading whitespace, an optional sign, then as many
/// decimal digits as are present. Anything after the digits is ignored.
///
/// Returns `None` when no digit follows the optional sign. Values too large
/// for `i64` saturate, so an oversized age still parses and then fails the
/// range check. The counter's input parser rejects such values instead.
///
/// ```
/// use user_form::validation::parse_leading_int;
///
/// assert_eq!(parse_leading_int(" 42"), Some(42));
/// assert_eq!(parse_leading_int("25 years"), Some(25));
/// assert_eq!(parse_leading_int("-7"), Some(-7));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
#[must_use]
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start_matches(is_js_whitespace);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormData {
        FormData {
            username: "john_doe".to_string(),
            email: "john@example.com".to_string(),
            age: "25".to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&FormData::default());

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(FormField::Username), Some(messages::USERNAME_REQUIRED));
        assert_eq!(errors.get(FormField::Email), Some(messages::EMAIL_REQUIRED));
        assert_eq!(errors.get(FormField::Age), Some(messages::AGE_REQUIRED));
        assert_eq!(errors.get(FormField::Password), Some(messages::PASSWORD_REQUIRED));
        assert_eq!(errors.get(FormField::ConfirmPassword), Some(messages::CONFIRM_REQUIRED));
    }

    #[test]
    fn empty_form_messages_read_as_shown() {
        let errors = validate(&FormData::default());

        let shown: Vec<(String, &str)> =
            errors.iter().map(|(field, message)| (field.to_string(), message)).collect();
        assert_eq!(
            shown,
            [
                ("username".to_string(), "Username is required"),
                ("email".to_string(), "Email is required"),
                ("age".to_string(), "Age is required"),
                ("password".to_string(), "Password is required"),
                ("confirmPassword".to_string(), "Please confirm your password"),
            ]
        );
    }

    #[test]
    fn failure_messages_read_as_shown() {
        assert_eq!(check_username("ab"), Some("Username must be at least 3 characters"));
        assert_eq!(check_email("a@b"), Some("Invalid email format"));
        assert_eq!(check_age("17"), Some("Age must be between 18 and 120"));
        assert_eq!(check_password("short"), Some("Password must be at least 8 characters"));
        assert_eq!(check_confirm("password123", "password456"), Some("Passwords do not match"));
    }

    #[test]
    fn lengths_count_utf16_units() {
        // Each emoji is one char but two UTF-16 units
        assert_eq!(check_password("😀😀😀😀"), None);
        assert_eq!(check_password("😀😀😀"), Some(messages::PASSWORD_TOO_SHORT));
        assert_eq!(check_username("😀"), Some(messages::USERNAME_TOO_SHORT));
        assert_eq!(check_username("😀a"), None);
        assert_eq!(check_username("\u{E9}a"), Some(messages::USERNAME_TOO_SHORT));
    }

    #[test]
    fn blank_uses_ecmascript_whitespace() {
        assert_eq!(check_username("\u{FEFF}"), Some(messages::USERNAME_REQUIRED));
        assert_eq!(check_username(" \u{3000}\t"), Some(messages::USERNAME_REQUIRED));
        assert_eq!(check_email("\u{FEFF}"), Some(messages::EMAIL_REQUIRED));
        // NEL is not whitespace to ECMAScript
        assert_eq!(check_username("\u{85}"), Some(messages::USERNAME_TOO_SHORT));
    }

    #[test]
    fn email_pattern_uses_ecmascript_whitespace() {
        assert_eq!(check_email("a\u{FEFF}b@c.d"), Some(messages::EMAIL_INVALID));
        assert_eq!(check_email("a@b\u{3000}.c"), Some(messages::EMAIL_INVALID));
        assert_eq!(check_email("a\u{85}@b.c"), None);
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn username_rules() {
        assert_eq!(check_username("   "), Some(messages::USERNAME_REQUIRED));
        assert_eq!(check_username("ab"), Some(messages::USERNAME_TOO_SHORT));
        assert_eq!(check_username("abc"), None);
        // Length counts the raw value, surrounding spaces included
        assert_eq!(check_username(" ab"), None);
    }

    #[test]
    fn email_rules() {
        assert_eq!(check_email(" "), Some(messages::EMAIL_REQUIRED));
        for bad in ["invalid-email", "test@", "a@b", "a b@c.d", "a@@b.c", "@b.c", "a@.c", "a@b."] {
            assert_eq!(check_email(bad), Some(messages::EMAIL_INVALID), "{bad}");
        }
        for good in ["john@example.com", "a@b.c", "a@b..c", "first.last@sub.domain.org"] {
            assert_eq!(check_email(good), None, "{good}");
        }
    }

    #[test]
    fn age_rules() {
        assert_eq!(check_age(""), Some(messages::AGE_REQUIRED));
        assert_eq!(check_age("17"), Some(messages::AGE_OUT_OF_RANGE));
        assert_eq!(check_age("121"), Some(messages::AGE_OUT_OF_RANGE));
        assert_eq!(check_age("abc"), Some(messages::AGE_OUT_OF_RANGE));
        assert_eq!(check_age("99999999999999999999999"), Some(messages::AGE_OUT_OF_RANGE));
        assert_eq!(check_age("18"), None);
        assert_eq!(check_age("120"), None);
        assert_eq!(check_age("30.9"), None);
    }

    #[test]
    fn password_rules() {
        assert_eq!(check_password(""), Some(messages::PASSWORD_REQUIRED));
        assert_eq!(check_password("short"), Some(messages::PASSWORD_TOO_SHORT));
        assert_eq!(check_password("exactly8"), None);
    }

    #[test]
    fn confirmation_rules() {
        assert_eq!(check_confirm("password123", ""), Some(messages::CONFIRM_REQUIRED));
        assert_eq!(
            check_confirm("password123", "password456"),
            Some(messages::PASSWORDS_DIFFER)
        );
        assert_eq!(check_confirm("password123", "password123"), None);
    }

    #[test]
    fn fields_fail_independently() {
        let data = FormData {
            username: "ab".to_string(),
            age: "17".to_string(),
            ..valid()
        };
        let errors = validate(&data);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Username), Some(messages::USERNAME_TOO_SHORT));
        assert_eq!(errors.get(FormField::Age), Some(messages::AGE_OUT_OF_RANGE));
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("+19"), Some(19));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("007"), Some(7));
        assert_eq!(parse_leading_int("12abc34"), Some(12));
        assert_eq!(parse_leading_int("\u{FEFF}\u{A0}8"), Some(8));
    }
}
