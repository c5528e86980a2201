//! Closed vocabularies describing an activity beyond its category.
//!
//! `Setting` and `Audience` feed the one-hot and multi-hot blocks of the
//! recommender's feature vectors, so their variant order is part of the
//! encoding and must only ever be appended to.

use std::str::FromStr;

/// Whether an activity takes place inside, outside, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Setting {
    /// Sheltered venue.
    Indoor,
    /// Open-air activity.
    Outdoor,
    /// Partly inside, partly outside, or unknown.
    #[default]
    Mixed,
}

impl Setting {
    /// Every setting in encoding order.
    pub const ALL: [Self; 3] = [Self::Indoor, Self::Outdoor, Self::Mixed];

    /// Number of settings.
    pub const COUNT: usize = Self::ALL.len();

    /// Return the setting as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Mixed => "mixed",
        }
    }

    /// Stable position inside [`Setting::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|setting| setting.as_str() == wanted)
            .ok_or_else(|| format!("unknown setting '{s}'"))
    }
}

/// Target group an activity is aimed at.
///
/// # Examples
/// ```
/// use leisure_core::Audience;
///
/// let (known, unknown) = Audience::parse_list("family, children, pirates");
/// assert_eq!(known, vec![Audience::Family, Audience::Children]);
/// assert_eq!(unknown, vec!["pirates".to_owned()]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Audience {
    /// Suitable for everyone.
    Everyone,
    /// Families.
    Family,
    /// Couples.
    Couples,
    /// Students.
    Students,
    /// Seniors.
    Seniors,
    /// Children.
    Children,
    /// Teenagers.
    Teenagers,
    /// Groups of friends.
    Friends,
    /// Company outings.
    Companies,
    /// Culture enthusiasts.
    CultureLovers,
    /// Fashion enthusiasts.
    FashionLovers,
    /// Nature lovers.
    NatureLovers,
    /// Tourists.
    Tourists,
    /// Hikers.
    Hikers,
    /// Sporty people.
    Athletes,
    /// People with a sweet tooth.
    SweetTooths,
    /// Wellness seekers.
    WellnessSeekers,
    /// Car enthusiasts.
    CarLovers,
    /// Men.
    Men,
    /// Beer lovers.
    BeerLovers,
    /// Music lovers.
    MusicLovers,
    /// Architecture enthusiasts.
    ArchitectureLovers,
    /// Photographers.
    Photographers,
    /// Gourmets.
    Gourmets,
}

impl Audience {
    /// Every audience in encoding order.
    pub const ALL: [Self; 24] = [
        Self::Everyone,
        Self::Family,
        Self::Couples,
        Self::Students,
        Self::Seniors,
        Self::Children,
        Self::Teenagers,
        Self::Friends,
        Self::Companies,
        Self::CultureLovers,
        Self::FashionLovers,
        Self::NatureLovers,
        Self::Tourists,
        Self::Hikers,
        Self::Athletes,
        Self::SweetTooths,
        Self::WellnessSeekers,
        Self::CarLovers,
        Self::Men,
        Self::BeerLovers,
        Self::MusicLovers,
        Self::ArchitectureLovers,
        Self::Photographers,
        Self::Gourmets,
    ];

    /// Number of audiences.
    pub const COUNT: usize = Self::ALL.len();

    /// Return the audience as a `snake_case` `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Everyone => "everyone",
            Self::Family => "family",
            Self::Couples => "couples",
            Self::Students => "students",
            Self::Seniors => "seniors",
            Self::Children => "children",
            Self::Teenagers => "teenagers",
            Self::Friends => "friends",
            Self::Companies => "companies",
            Self::CultureLovers => "culture_lovers",
            Self::FashionLovers => "fashion_lovers",
            Self::NatureLovers => "nature_lovers",
            Self::Tourists => "tourists",
            Self::Hikers => "hikers",
            Self::Athletes => "athletes",
            Self::SweetTooths => "sweet_tooths",
            Self::WellnessSeekers => "wellness_seekers",
            Self::CarLovers => "car_lovers",
            Self::Men => "men",
            Self::BeerLovers => "beer_lovers",
            Self::MusicLovers => "music_lovers",
            Self::ArchitectureLovers => "architecture_lovers",
            Self::Photographers => "photographers",
            Self::Gourmets => "gourmets",
        }
    }

    /// Stable position inside [`Audience::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Split a comma-separated tag list into known audiences and the labels
    /// that matched none.
    ///
    /// Blank entries are ignored and duplicates collapse to one audience.
    #[must_use]
    pub fn parse_list(raw: &str) -> (Vec<Self>, Vec<String>) {
        let mut known: Vec<Self> = Vec::new();
        let mut unknown = Vec::new();
        for label in raw.split(',').map(str::trim).filter(|l| !l.is_empty()) {
            match label.parse::<Self>() {
                Ok(audience) if !known.contains(&audience) => known.push(audience),
                Ok(_) => {}
                Err(_) => unknown.push(label.to_owned()),
            }
        }
        (known, unknown)
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|audience| audience.as_str() == wanted)
            .ok_or_else(|| format!("unknown audience '{s}'"))
    }
}

/// Weather an activity needs to be enjoyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeatherPreference {
    /// Only worth doing in good weather.
    SunOnly,
    /// Weather does not matter.
    #[default]
    Any,
    /// Meant for bad-weather days.
    RainOnly,
}

impl FromStr for WeatherPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "sun_only" => Ok(Self::SunOnly),
            "any" => Ok(Self::Any),
            "rain_only" => Ok(Self::RainOnly),
            _ => Err(format!("unknown weather preference '{s}'")),
        }
    }
}
