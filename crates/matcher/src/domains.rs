/// Built-in topics with a closed, hardcoded companion term list.
///
/// These are deliberate, auditable heuristics, not learned vocabularies: a
/// profile whose id names one of these domains earns a small boost per term
/// found in the candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinDomain {
    Basketball,
    Politics,
    Religion,
}

const BASKETBALL_TERMS: [&str; 12] = [
    "game", "score", "team", "player", "coach", "court", "shot", "rebound", "assist", "quarter",
    "timeout", "finals",
];

const POLITICS_TERMS: [&str; 11] = [
    "government", "bill", "law", "senate", "house", "vote", "campaign", "debate", "policy",
    "minister", "president",
];

const RELIGION_TERMS: [&str; 10] = [
    "blessed", "pray", "worship", "sacred", "holy", "divine", "scripture", "temple", "mosque",
    "synagogue",
];

impl BuiltinDomain {
    /// Map a profile id onto a built-in domain, if it names one
    #[must_use]
    pub fn from_profile_id(id: &str) -> Option<Self> {
        match id {
            "basketball" => Some(Self::Basketball),
            "politics" => Some(Self::Politics),
            "religion" => Some(Self::Religion),
            _ => None,
        }
    }

    /// The domain's closed term list
    #[must_use]
    pub const fn terms(self) -> &'static [&'static str] {
        match self {
            Self::Basketball => &BASKETBALL_TERMS,
            Self::Politics => &POLITICS_TERMS,
            Self::Religion => &RELIGION_TERMS,
        }
    }

    /// Count domain terms appearing as substrings of the lowercased text
    #[must_use]
    pub fn count_terms(self, lowered_text: &str) -> usize {
        self.terms()
            .iter()
            .filter(|term| lowered_text.contains(*term))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_profile_id() {
        assert_eq!(
            BuiltinDomain::from_profile_id("basketball"),
            Some(BuiltinDomain::Basketball)
        );
        assert_eq!(
            BuiltinDomain::from_profile_id("politics"),
            Some(BuiltinDomain::Politics)
        );
        assert_eq!(BuiltinDomain::from_profile_id("cooking"), None);
    }

    #[test]
    fn test_count_terms() {
        let text = "late in the fourth quarter the team called a timeout";
        assert_eq!(BuiltinDomain::Basketball.count_terms(text), 3);
        assert_eq!(BuiltinDomain::Religion.count_terms(text), 0);
    }
}
