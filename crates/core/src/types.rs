use serde::{Deserialize, Serialize};
use std::fmt;

/// The concrete kind of an ad creative. This set is closed: the per-kind
/// sub-kind tables and the campaign summary both iterate [`AdType::ALL`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AdType {
    Video,
    Display,
    Social,
}

impl AdType {
    /// Every known ad type, in display order.
    pub const ALL: [AdType; 3] = [AdType::Video, AdType::Display, AdType::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdType::Video => "Video",
            AdType::Display => "Display",
            AdType::Social => "Social",
        }
    }

    /// Look up an ad type by its display name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<AdType> {
        AdType::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for AdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_type_round_trip_by_name() {
        for ad_type in AdType::ALL {
            assert_eq!(AdType::from_name(ad_type.as_str()), Some(ad_type));
        }
        assert_eq!(AdType::from_name("Audio"), None);
    }
}
