//! User record and the builder operations around it

use serde::{Deserialize, Serialize};

/// A user entry in the registry.
///
/// All three fields are kept as text, matching the JSON shape exchanged with
/// remote sources (`{"name", "surname", "age"}`). The age is only interpreted
/// as a number when ordering records, see [`age_of`].
///
/// Two records describe the same user when every field matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub surname: String,
    pub age: String,
}

impl User {
    /// Create a new user record, storing every field verbatim
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age: age.into(),
        }
    }

    /// Check whether all three fields equal the other record's fields
    pub fn same_user(&self, other: &User) -> bool {
        self.name == other.name && self.surname == other.surname && self.age == other.age
    }
}

/// Build a user record.
///
/// No validation is performed: empty strings and non-numeric ages are
/// accepted as given.
pub fn create_user(
    name: impl Into<String>,
    surname: impl Into<String>,
    age: impl Into<String>,
) -> User {
    User::new(name, surname, age)
}

/// Append a user to the end of a collection.
///
/// Duplicates are allowed.
pub fn add_user(user: User, users: &mut Vec<User>) {
    tracing::debug!(name = %user.name, surname = %user.surname, "Adding user to collection");
    users.push(user);
}

/// Project a user's textual age onto a number for comparisons.
///
/// Follows loose text-to-number coercion:
/// - Surrounding whitespace is ignored
/// - Blank text projects to `0.0`
/// - `0x`, `0o` and `0b` prefixes read unsigned hex, octal and binary
/// - `Infinity` (optionally signed) is the only spelling of infinity
/// - Otherwise the text must be a signed decimal with optional fraction and
///   exponent
///
/// Anything else, including `inf` and `nan`, projects to `NaN`. `NaN` fails
/// every ordering comparison, so the relative position of records with
/// non-numeric ages is left to the sort's insertion order and is not
/// otherwise defined.
pub fn age_of(user: &User) -> f64 {
    let trimmed = user.age.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    parse_number(trimmed).unwrap_or(f64::NAN)
}

fn parse_number(text: &str) -> Option<f64> {
    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(text) {
        return value;
    }

    // str::parse also takes "inf"/"nan" spellings, which must stay NaN
    let decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal {
        return None;
    }
    text.parse::<f64>().ok()
}

/// `Some(parsed)` when `text` carries a radix prefix, `None` otherwise
fn parse_prefixed_integer(text: &str) -> Option<Option<f64>> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    // from_str_radix would accept a leading sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(u64::from_str_radix(digits, radix).ok().map(|n| n as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_keeps_fields_verbatim() {
        let user = create_user("John", "Doe", "21");

        assert_eq!(user.name, "John");
        assert_eq!(user.surname, "Doe");
        assert_eq!(user.age, "21");
        assert_eq!(user, User::new("John", "Doe", "21"));
    }

    #[test]
    fn test_create_user_does_not_validate() {
        let user = create_user("", "", "not a number");

        assert!(user.name.is_empty());
        assert_eq!(user.age, "not a number");
    }

    #[test]
    fn test_add_user_appends() {
        let mut users = vec![create_user("Pierre", "Martin", "10")];
        let john = create_user("John", "Doe", "21");

        add_user(john.clone(), &mut users);

        assert_eq!(users.len(), 2);
        assert_eq!(users.last(), Some(&john));
    }

    #[test]
    fn test_add_user_allows_duplicates() {
        let mut users = Vec::new();
        let john = create_user("John", "Doe", "21");

        add_user(john.clone(), &mut users);
        add_user(john.clone(), &mut users);

        assert_eq!(users, vec![john.clone(), john]);
    }

    #[test]
    fn test_age_of_parses_numbers() {
        assert_eq!(age_of(&User::new("a", "b", "21")), 21.0);
        assert_eq!(age_of(&User::new("a", "b", " 4 ")), 4.0);
        assert_eq!(age_of(&User::new("a", "b", "2.5")), 2.5);
        assert_eq!(age_of(&User::new("a", "b", "-3")), -3.0);
    }

    #[test]
    fn test_age_of_blank_is_zero() {
        assert_eq!(age_of(&User::new("a", "b", "")), 0.0);
        assert_eq!(age_of(&User::new("a", "b", "   ")), 0.0);
    }

    #[test]
    fn test_age_of_non_numeric_is_nan() {
        assert!(age_of(&User::new("a", "b", "twenty")).is_nan());
        assert!(age_of(&User::new("a", "b", "21 years")).is_nan());
    }

    #[test]
    fn test_age_of_infinity_spellings() {
        assert_eq!(age_of(&User::new("a", "b", "Infinity")), f64::INFINITY);
        assert_eq!(age_of(&User::new("a", "b", "+Infinity")), f64::INFINITY);
        assert_eq!(age_of(&User::new("a", "b", "-Infinity")), f64::NEG_INFINITY);

        for age in ["inf", "INF", "infinity", "-inf", "nan", "NaN", "+nan"] {
            assert!(age_of(&User::new("a", "b", age)).is_nan(), "{age}");
        }
    }

    #[test]
    fn test_age_of_radix_prefixes() {
        assert_eq!(age_of(&User::new("a", "b", "0x10")), 16.0);
        assert_eq!(age_of(&User::new("a", "b", "0XfF")), 255.0);
        assert_eq!(age_of(&User::new("a", "b", "0b101")), 5.0);
        assert_eq!(age_of(&User::new("a", "b", "0o17")), 15.0);
        assert_eq!(age_of(&User::new("a", "b", " 0x10 ")), 16.0);
    }

    #[test]
    fn test_age_of_rejects_malformed_prefixes() {
        for age in ["0x", "0x+5", "-0x10", "0b102", "0o8", "0xg"] {
            assert!(age_of(&User::new("a", "b", age)).is_nan(), "{age}");
        }
    }

    #[test]
    fn test_age_of_decimal_forms() {
        assert_eq!(age_of(&User::new("a", "b", "+7")), 7.0);
        assert_eq!(age_of(&User::new("a", "b", ".5")), 0.5);
        assert_eq!(age_of(&User::new("a", "b", "5.")), 5.0);
        assert_eq!(age_of(&User::new("a", "b", "1e2")), 100.0);
        assert_eq!(age_of(&User::new("a", "b", "007")), 7.0);
        assert!(age_of(&User::new("a", "b", "1e")).is_nan());
        assert!(age_of(&User::new("a", "b", ".")).is_nan());
    }

    #[test]
    fn test_same_user_requires_all_fields() {
        let user = User::new("John", "Doe", "21");

        assert!(user.same_user(&User::new("John", "Doe", "21")));
        assert!(!user.same_user(&User::new("John", "Doe", "21.0")));
        assert!(!user.same_user(&User::new("John", "Smith", "21")));
        assert!(!user.same_user(&User::new("Jack", "Doe", "21")));
    }

    #[test]
    fn test_user_json_shape() {
        let user = User::new("John", "Doe", "21");
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"name": "John", "surname": "Doe", "age": "21"})
        );
    }
}
