//! Activity categories.
//!
//! The enum offers compile-time safety for category lookups and fixes the
//! order used by one-hot feature encodings.
//!
//! # Examples
//! ```
//! use leisure_core::Category;
//!
//! assert_eq!(Category::Culture.as_str(), "culture");
//! assert_eq!(Category::Hiking.to_string(), "hiking");
//! ```

/// Broad kind of leisure activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Museums, theatres and galleries.
    Culture,
    /// Parks, lakes and viewpoints.
    Nature,
    /// Walking and hiking trails.
    Hiking,
    /// Landmarks and guided tours.
    Sightseeing,
    /// Restaurants, tastings and markets.
    Food,
    /// Outings aimed at families.
    Family,
    /// Sports facilities and courses.
    Sport,
    /// Cinemas, bars and shows.
    Entertainment,
    /// Shops and boutiques.
    Shopping,
    /// One-off events and festivals.
    Event,
    /// Spas and relaxation.
    Wellness,
    /// Adrenaline activities.
    Action,
    /// Anything else.
    Leisure,
}

impl Category {
    /// Every category in encoding order.
    pub const ALL: [Self; 13] = [
        Self::Culture,
        Self::Nature,
        Self::Hiking,
        Self::Sightseeing,
        Self::Food,
        Self::Family,
        Self::Sport,
        Self::Entertainment,
        Self::Shopping,
        Self::Event,
        Self::Wellness,
        Self::Action,
        Self::Leisure,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use leisure_core::Category;
    ///
    /// assert_eq!(Category::Wellness.as_str(), "wellness");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Culture => "culture",
            Self::Nature => "nature",
            Self::Hiking => "hiking",
            Self::Sightseeing => "sightseeing",
            Self::Food => "food",
            Self::Family => "family",
            Self::Sport => "sport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Event => "event",
            Self::Wellness => "wellness",
            Self::Action => "action",
            Self::Leisure => "leisure",
        }
    }

    /// Stable position of the category inside [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Category::Food.to_string(), Category::Food.as_str());
    }

    #[rstest]
    fn index_follows_declaration_order() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[rstest]
    #[case("culture", Category::Culture)]
    #[case("  Hiking ", Category::Hiking)]
    #[case("SPORT", Category::Sport)]
    fn parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(raw), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Category::from_str("knitting").unwrap_err();
        assert!(err.contains("unknown category"));
    }
}
