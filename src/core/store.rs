//! Store traits for filtering and sorting

use crate::core::rank::{insertion_sort_by, sort_users};
use crate::core::registry::UserRegistry;
use crate::core::user::{User, age_of};
use serde_json::Value;

/// Trait for stores that support filtering and sorting
///
/// Implement this trait for stores that support generic querying with
/// filters and sorting capabilities.
pub trait QueryableStore<T> {
    /// Apply filters to a collection of records
    ///
    /// # Parameters
    /// - `data`: Collection of records to filter
    /// - `filter`: Filter criteria as JSON Value
    ///
    /// # Returns
    /// Filtered collection
    fn apply_filters(&self, data: Vec<T>, filter: &Value) -> Vec<T>;

    /// Apply sorting to a collection of records
    ///
    /// # Parameters
    /// - `data`: Collection of records to sort
    /// - `sort`: Sort expression (e.g., "field:asc" or "field:desc")
    ///
    /// # Returns
    /// Sorted collection
    fn apply_sort(&self, data: Vec<T>, sort: &str) -> Vec<T>;

    /// Get all records (unfiltered, unsorted)
    fn list_all(&self) -> Vec<T>;

    /// Filter then sort `list_all()`
    fn query(&self, filter: Option<&Value>, sort: Option<&str>) -> Vec<T> {
        let mut data = self.list_all();
        if let Some(filter) = filter {
            data = self.apply_filters(data, filter);
        }
        if let Some(sort) = sort {
            data = self.apply_sort(data, sort);
        }
        data
    }
}

/// Filters accepted by [`UserRegistry`]:
///
/// - Exact match: `{"name": "John"}`, `{"surname": "Doe"}`, `{"age": "21"}`
/// - Numeric age comparison: `{"age>": 18, "age<=": 65}`
///
/// Exact matches compare text: a JSON number is rendered with serde_json's
/// formatting first, so `{"age": 21}` matches `"21"` while `{"age": 21.0}`
/// only matches an age stored as `"21.0"`. Use the comparison keys for
/// numeric matching.
///
/// Unknown keys are ignored. Comparisons never match non-numeric ages.
impl QueryableStore<User> for UserRegistry {
    fn apply_filters(&self, data: Vec<User>, filter: &Value) -> Vec<User> {
        let mut result = data;

        if let Some(obj) = filter.as_object() {
            for (key, value) in obj {
                result = match key.as_str() {
                    "name" | "surname" | "age" => {
                        let expected = text_of(value);
                        result
                            .into_iter()
                            .filter(|u| field_of(u, key) == expected)
                            .collect()
                    }

                    "age>" | "age<" | "age>=" | "age<=" => {
                        let Some(threshold) = number_of(value) else {
                            tracing::debug!(filter = %key, "Ignoring non-numeric age threshold");
                            continue;
                        };
                        result
                            .into_iter()
                            .filter(|u| compare_age(age_of(u), key, threshold))
                            .collect()
                    }

                    _ => result,
                };
            }
        }

        result
    }

    fn apply_sort(&self, mut data: Vec<User>, sort: &str) -> Vec<User> {
        match sort {
            "age" | "age:asc" => {
                sort_users(&mut data);
            }
            "age:desc" => insertion_sort_by(&mut data, |a, b| age_of(a) < age_of(b)),

            "name" | "name:asc" => insertion_sort_by(&mut data, |a, b| a.name > b.name),
            "name:desc" => insertion_sort_by(&mut data, |a, b| a.name < b.name),

            "surname" | "surname:asc" => {
                insertion_sort_by(&mut data, |a, b| a.surname > b.surname)
            }
            "surname:desc" => insertion_sort_by(&mut data, |a, b| a.surname < b.surname),

            _ => tracing::debug!(sort = %sort, "Unknown sort expression, keeping order"),
        }

        data
    }

    fn list_all(&self) -> Vec<User> {
        self.users().to_vec()
    }
}

fn field_of<'a>(user: &'a User, field: &str) -> &'a str {
    match field {
        "name" => &user.name,
        "surname" => &user.surname,
        _ => &user.age,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn compare_age(age: f64, op: &str, threshold: f64) -> bool {
    match op {
        "age>" => age > threshold,
        "age<" => age < threshold,
        "age>=" => age >= threshold,
        _ => age <= threshold,
    }
}
