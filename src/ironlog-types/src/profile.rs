use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parses a stored gender column. Unrecognised strings count as unknown.
    pub fn parse_stored(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i32,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub created_at: NaiveDateTime,
}

impl UserProfile {
    /// Whole years lived on `today`, one less if the birthday hasn't come yet.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(birth_date: Option<NaiveDate>) -> UserProfile {
        UserProfile {
            id: 1,
            birth_date,
            gender: Some(Gender::Male),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn age_before_and_after_birthday() {
        let p = profile(NaiveDate::from_ymd_opt(1990, 6, 15));
        let before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(p.age_on(before), Some(34));
        assert_eq!(p.age_on(on), Some(35));
    }

    #[test]
    fn age_missing_birth_date() {
        let p = profile(None);
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), None);
    }

    #[test]
    fn age_future_birth_date_is_unknown() {
        let p = profile(NaiveDate::from_ymd_opt(2030, 1, 2));
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), None);
    }

    #[test]
    fn gender_round_trips_through_strings() {
        assert_eq!(Gender::parse_stored(Some("female")), Some(Gender::Female));
        assert_eq!(Gender::parse_stored(Some("other")), Some(Gender::Other));
        assert_eq!(Gender::parse_stored(Some("unknown")), None);
        assert_eq!(Gender::parse_stored(None), None);
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
    }
}
