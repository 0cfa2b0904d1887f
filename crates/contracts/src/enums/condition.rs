use serde::{Deserialize, Serialize};

/// Item condition as recorded by QA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    Sealed,
    Used,
    #[serde(rename = "Used Like New")]
    UsedLikeNew,
    Damaged,
    #[serde(rename = "As Is")]
    AsIs,
}

impl Condition {
    /// Wire value, also used as the option label
    pub fn code(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Sealed => "Sealed",
            Condition::Used => "Used",
            Condition::UsedLikeNew => "Used Like New",
            Condition::Damaged => "Damaged",
            Condition::AsIs => "As Is",
        }
    }

    pub fn all() -> Vec<Condition> {
        vec![
            Condition::New,
            Condition::Sealed,
            Condition::Used,
            Condition::UsedLikeNew,
            Condition::Damaged,
            Condition::AsIs,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Condition::UsedLikeNew).unwrap(),
            "\"Used Like New\""
        );
        assert_eq!(
            serde_json::from_str::<Condition>("\"As Is\"").unwrap(),
            Condition::AsIs
        );
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Condition::from_code("Sealed"), Some(Condition::Sealed));
        assert_eq!(Condition::from_code(""), None);
        assert_eq!(Condition::from_code("sealed"), None);
    }
}
