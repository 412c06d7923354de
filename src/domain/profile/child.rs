//! Child record collected during the dialog.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Textual format accepted for birthdates (e.g. `2015-06-15`).
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// A child of the caregiver, filled in over several turns.
///
/// `preferred_activity_type` distinguishes "not yet asked" (`None`) from
/// "asked, no preference" (`Some("")`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub name: String,
    pub birthdate: NaiveDate,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_activity_type: Option<String>,
}

impl Child {
    /// Creates a child with no interests and no preference asked yet.
    pub fn new(name: impl Into<String>, birthdate: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthdate,
            interests: Vec::new(),
            preferred_activity_type: None,
        }
    }

    /// Parses a birthdate in [`BIRTHDATE_FORMAT`].
    pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(raw.trim(), BIRTHDATE_FORMAT)
    }

    pub fn has_interests(&self) -> bool {
        !self.interests.is_empty()
    }

    /// True once the preferred-activity question has been answered.
    pub fn preference_asked(&self) -> bool {
        self.preferred_activity_type.is_some()
    }

    /// A child is complete once interests exist and the preference was asked.
    pub fn is_complete(&self) -> bool {
        self.has_interests() && self.preference_asked()
    }

    /// Non-empty preferred activity type, if any.
    pub fn preference(&self) -> Option<&str> {
        self.preferred_activity_type
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }

    /// Age in whole years on the given date. Birthdates in the future yield 0.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        let mut years = date.year() - self.birthdate.year();
        if (date.month(), date.day()) < (self.birthdate.month(), self.birthdate.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod birthdate {
        use super::*;

        #[test]
        fn parses_iso_date() {
            assert_eq!(Child::parse_birthdate("2015-06-15").unwrap(), date(2015, 6, 15));
        }

        #[test]
        fn tolerates_surrounding_whitespace() {
            assert_eq!(Child::parse_birthdate("  2015-06-15 ").unwrap(), date(2015, 6, 15));
        }

        #[test]
        fn rejects_other_formats() {
            assert!(Child::parse_birthdate("06/15/2015").is_err());
            assert!(Child::parse_birthdate("June 15").is_err());
            assert!(Child::parse_birthdate("2015-13-01").is_err());
        }
    }

    mod completeness {
        use super::*;

        #[test]
        fn new_child_is_incomplete() {
            let child = Child::new("Maya", date(2016, 3, 2));
            assert!(!child.has_interests());
            assert!(!child.preference_asked());
            assert!(!child.is_complete());
        }

        #[test]
        fn interests_alone_are_not_enough() {
            let mut child = Child::new("Maya", date(2016, 3, 2));
            child.interests = vec!["music".to_string()];
            assert!(!child.is_complete());
        }

        #[test]
        fn empty_preference_counts_as_asked() {
            let mut child = Child::new("Maya", date(2016, 3, 2));
            child.interests = vec!["music".to_string()];
            child.preferred_activity_type = Some(String::new());
            assert!(child.is_complete());
            assert_eq!(child.preference(), None);
        }
    }

    mod age {
        use super::*;

        #[test]
        fn counts_whole_years() {
            let child = Child::new("Leo", date(2015, 6, 15));
            assert_eq!(child.age_on(date(2024, 6, 15)), 9);
        }

        #[test]
        fn subtracts_a_year_before_the_birthday() {
            let child = Child::new("Leo", date(2015, 6, 15));
            assert_eq!(child.age_on(date(2024, 6, 14)), 8);
        }

        #[test]
        fn future_birthdate_is_zero() {
            let child = Child::new("Leo", date(2030, 1, 1));
            assert_eq!(child.age_on(date(2024, 1, 1)), 0);
        }
    }

    #[test]
    fn serializes_camel_case_and_omits_unasked_preference() {
        let child = Child::new("Maya", date(2016, 3, 2));
        let json = serde_json::to_value(&child).unwrap();
        assert_eq!(json["birthdate"], "2016-03-02");
        assert!(json.get("preferredActivityType").is_none());
    }
}
