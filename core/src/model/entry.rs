use serde::{Deserialize, Serialize};

/// One logged unit of work, as supplied by the caller.
///
/// All fields are kept as raw text; how malformed values are treated is
/// decided by each calculation, not at load time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub sub_department: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub time_of_check: Option<String>,
}

impl Entry {
    pub fn new(sub_department: Option<&str>, quantity: Option<&str>, time_of_check: Option<&str>) -> Self {
        Self {
            sub_department: sub_department.map(str::to_string),
            quantity: quantity.map(str::to_string),
            time_of_check: time_of_check.map(str::to_string),
        }
    }

    /// Quantity parsed as a signed integer. `None` when absent or malformed.
    pub fn parsed_quantity(&self) -> Option<i64> {
        let raw = self.quantity.as_deref()?;
        match raw.parse::<i64>() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::debug!(quantity = raw, "unparseable quantity");
                None
            }
        }
    }

    /// Time of check in hours. `None` when absent or malformed.
    pub fn parsed_hours(&self) -> Option<f64> {
        let raw = self.time_of_check.as_deref()?;
        let hours = crate::time::parse_duration(raw);
        if hours.is_none() {
            tracing::debug!(time_of_check = raw, "unparseable time of check");
        }
        hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"subDepartment":"КЛН","quantity":"10","timeOfCheck":"1:00:00"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, Entry::new(Some("КЛН"), Some("10"), Some("1:00:00")));
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let entry: Entry = serde_json::from_str(r#"{"quantity":null}"#).unwrap();
        assert_eq!(entry, Entry::default());
    }

    #[test]
    fn test_parsed_quantity() {
        assert_eq!(Entry::new(None, Some("-5"), None).parsed_quantity(), Some(-5));
        assert_eq!(Entry::new(None, Some("+7"), None).parsed_quantity(), Some(7));
        assert_eq!(Entry::new(None, Some("five"), None).parsed_quantity(), None);
        assert_eq!(Entry::new(None, Some(" 5"), None).parsed_quantity(), None);
        assert_eq!(Entry::new(None, None, None).parsed_quantity(), None);
    }

    #[test]
    fn test_parsed_hours() {
        assert_eq!(Entry::new(None, None, Some("0:30:00")).parsed_hours(), Some(0.5));
        assert_eq!(Entry::new(None, None, Some("0:30")).parsed_hours(), None);
        assert_eq!(Entry::new(None, None, None).parsed_hours(), None);
    }
}
