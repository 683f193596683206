//! Declarative field schemas for the register, login, and wallet forms.
//!
//! Each field lists its rules in evaluation order; the first failing rule
//! supplies the message shown next to the field.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::sync::LazyLock;

use regex::Regex;

use super::{FormValues, ValidationErrors, parse_number};

/// ASCII word characters, `-` and `.` before the `@`; one or more dotted
/// labels; a 2 to 4 character top-level segment.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Characters that satisfy the password "special character" requirement.
pub const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '&', '*'];

/// Minimum password length in UTF-16 code units, as browsers count it.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Line terminators a browser regex `.` refuses to match.
const LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{2028}', '\u{2029}'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

impl InputKind {
    /// HTML `type` attribute.
    #[must_use]
    pub fn html_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
        }
    }
}

/// A single validation rule and the message it reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming.
    Required(&'static str),
    /// At least this many characters.
    MinChars(usize, &'static str),
    Email(&'static str),
    /// Uppercase letter, special character, digit, and minimum length.
    StrongPassword(&'static str),
    /// Must equal the named field.
    SameAs(&'static str, &'static str),
    /// Finite number.
    Numeric(&'static str),
}

impl Rule {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Required(m)
            | Self::MinChars(_, m)
            | Self::Email(m)
            | Self::StrongPassword(m)
            | Self::SameAs(_, m)
            | Self::Numeric(m) => m,
        }
    }

    fn accepts(self, value: &str, values: &FormValues) -> bool {
        match self {
            Self::Required(_) => !value.trim().is_empty(),
            Self::MinChars(min, _) => value.chars().count() >= min,
            Self::Email(_) => is_email(value),
            Self::StrongPassword(_) => is_strong_password(value),
            Self::SameAs(other, _) => value == values.get(other),
            Self::Numeric(_) => parse_number(value).is_some(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// First failing rule's message for `values`, if any.
    #[must_use]
    pub fn check(&self, values: &FormValues) -> Option<&'static str> {
        let value = values.get(self.name);
        self.rules.iter().find(|rule| !rule.accepts(value, values)).map(|rule| rule.message())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first failing message for each invalid field.
    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for field in self.fields {
            if let Some(message) = field.check(values) {
                errors.insert(field.name, message);
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Every field present and blank.
    #[must_use]
    pub fn initial_values(&self) -> FormValues {
        self.fields.iter().map(|field| (field.name, "")).collect()
    }
}

#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(value))
}

#[must_use]
pub fn is_strong_password(value: &str) -> bool {
    value.encode_utf16().count() >= PASSWORD_MIN_CHARS
        && !value.contains(LINE_TERMINATORS)
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.contains(PASSWORD_SPECIALS)
        && value.chars().any(|c| c.is_ascii_digit())
}

const EMAIL_RULES: &[Rule] = &[Rule::Required("Email is required"), Rule::Email("Invalid email format")];

pub static REGISTER: Schema = Schema {
    name: "register",
    fields: &[
        FieldSpec {
            name: "username",
            label: "Username",
            input: InputKind::Text,
            rules: &[
                Rule::Required("Username is required"),
                Rule::MinChars(4, "Username must be at least 4 characters"),
            ],
        },
        FieldSpec { name: "email", label: "Email", input: InputKind::Text, rules: EMAIL_RULES },
        FieldSpec {
            name: "password",
            label: "Password",
            input: InputKind::Password,
            rules: &[
                Rule::Required("Password is required"),
                Rule::StrongPassword(
                    "Password must contain at least one uppercase letter, one special character, and one number",
                ),
            ],
        },
        FieldSpec {
            name: "confirmPassword",
            label: "Confirm Password",
            input: InputKind::Password,
            rules: &[
                Rule::Required("Confirm Password is required"),
                Rule::SameAs("password", "Passwords must match"),
            ],
        },
    ],
};

pub static LOGIN: Schema = Schema {
    name: "login",
    fields: &[
        FieldSpec { name: "email", label: "Email", input: InputKind::Text, rules: EMAIL_RULES },
        FieldSpec {
            name: "password",
            label: "Password",
            input: InputKind::Password,
            rules: &[Rule::Required("Password is required")],
        },
    ],
};

pub static WALLET: Schema = Schema {
    name: "wallet",
    fields: &[
        FieldSpec {
            name: "accountBalance",
            label: "Account Balance",
            input: InputKind::Text,
            rules: &[
                Rule::Required("Account balance is required"),
                Rule::Numeric("Account balance must be a number"),
            ],
        },
        FieldSpec {
            name: "savingsAmount",
            label: "Savings Amount",
            input: InputKind::Text,
            rules: &[
                Rule::Required("Savings amount is required"),
                Rule::Numeric("Savings amount must be a number"),
            ],
        },
        FieldSpec {
            name: "cashInHand",
            label: "Cash in Hand",
            input: InputKind::Text,
            rules: &[Rule::Required("Cash in hand is required"), Rule::Numeric("Cash in hand must be a number")],
        },
    ],
};
