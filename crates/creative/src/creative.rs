//! Ad creative entities. Each variant validates its sub-kind against the
//! registry at construction and on every later mutation; dimensional and
//! duration inputs are never rejected, only clamped.

use adboard_core::{AdError, AdResult, AdType};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::registry;

/// Height and width fall back to this when given a non-positive value.
pub const DEFAULT_DIMENSION: u32 = 1;
/// Video duration in seconds falls back to this when given a non-positive value.
pub const DEFAULT_DURATION: u32 = 5;

fn clamp_dimension(value: i32) -> u32 {
    if value > 0 {
        value as u32
    } else {
        DEFAULT_DIMENSION
    }
}

fn clamp_duration(value: i32) -> u32 {
    if value > 0 {
        value as u32
    } else {
        DEFAULT_DURATION
    }
}

/// Fields common to every creative variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AdBase {
    height: u32,
    width: u32,
    sub_kind: Option<String>,
    file_url: Option<String>,
    click_url: Option<String>,
}

impl AdBase {
    fn new(
        ad_type: AdType,
        sub_kind: Option<&str>,
        file_url: Option<&str>,
        click_url: Option<&str>,
    ) -> AdResult<Self> {
        let mut base = AdBase {
            height: DEFAULT_DIMENSION,
            width: DEFAULT_DIMENSION,
            sub_kind: None,
            file_url: file_url.map(str::to_owned),
            click_url: click_url.map(str::to_owned),
        };
        if let Some(sub_kind) = sub_kind {
            base.assign_sub_kind(ad_type, sub_kind)?;
        }
        Ok(base)
    }

    /// Validated assignment. On failure the prior sub-kind is untouched.
    fn assign_sub_kind(&mut self, ad_type: AdType, sub_kind: &str) -> AdResult<()> {
        if !registry::is_allowed(ad_type, sub_kind) {
            return Err(AdError::InvalidSubKind {
                ad_type,
                sub_kind: sub_kind.to_owned(),
            });
        }
        self.sub_kind = Some(sub_kind.to_owned());
        Ok(())
    }
}

macro_rules! impl_common_fields {
    ($ty:ident, $variant:ident, $ad_type:expr) => {
        impl $ty {
            pub fn height(&self) -> u32 {
                self.base.height
            }

            pub fn width(&self) -> u32 {
                self.base.width
            }

            pub fn sub_kind(&self) -> Option<&str> {
                self.base.sub_kind.as_deref()
            }

            pub fn file_url(&self) -> Option<&str> {
                self.base.file_url.as_deref()
            }

            pub fn click_url(&self) -> Option<&str> {
                self.base.click_url.as_deref()
            }

            /// Non-positive values clamp to [`DEFAULT_DIMENSION`].
            pub fn set_height(&mut self, value: i32) {
                self.base.height = clamp_dimension(value);
            }

            /// Non-positive values clamp to [`DEFAULT_DIMENSION`].
            pub fn set_width(&mut self, value: i32) {
                self.base.width = clamp_dimension(value);
            }

            /// Fails with [`AdError::InvalidSubKind`] if `sub_kind` is not
            /// registered for this variant; the prior value is retained.
            pub fn set_sub_kind(&mut self, sub_kind: &str) -> AdResult<()> {
                self.base.assign_sub_kind($ad_type, sub_kind)
            }

            pub fn set_file_url(&mut self, url: impl Into<String>) {
                self.base.file_url = Some(url.into());
            }

            pub fn set_click_url(&mut self, url: impl Into<String>) {
                self.base.click_url = Some(url.into());
            }
        }

        impl From<$ty> for Creative {
            fn from(ad: $ty) -> Creative {
                Creative::$variant(ad)
            }
        }
    };
}

// ─── Video ─────────────────────────────────────────────────────────────────

/// A video ad. Carries a duration in seconds on top of the common fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAd {
    #[serde(flatten)]
    base: AdBase,
    duration: u32,
}

impl VideoAd {
    pub fn new(
        sub_kind: Option<&str>,
        file_url: Option<&str>,
        click_url: Option<&str>,
        duration: i32,
    ) -> AdResult<Self> {
        Ok(Self {
            base: AdBase::new(AdType::Video, sub_kind, file_url, click_url)?,
            duration: clamp_duration(duration),
        })
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Non-positive values clamp to [`DEFAULT_DURATION`].
    pub fn set_duration(&mut self, seconds: i32) {
        self.duration = clamp_duration(seconds);
    }

    /// Placeholder capability: no transformation is performed.
    pub fn compress(&self) -> &'static str {
        const MSG: &str = "video compression is not implemented yet";
        warn!(ad_type = %AdType::Video, "{}", MSG);
        MSG
    }

    /// Placeholder capability: no transformation is performed.
    pub fn resize(&self) -> &'static str {
        const MSG: &str = "video cropping is not implemented yet";
        warn!(ad_type = %AdType::Video, "{}", MSG);
        MSG
    }
}

// ─── Display ───────────────────────────────────────────────────────────────

/// A display (banner/sidebar) ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAd {
    #[serde(flatten)]
    base: AdBase,
}

impl DisplayAd {
    pub fn new(
        sub_kind: Option<&str>,
        file_url: Option<&str>,
        click_url: Option<&str>,
    ) -> AdResult<Self> {
        Ok(Self {
            base: AdBase::new(AdType::Display, sub_kind, file_url, click_url)?,
        })
    }

    /// Placeholder capability: no transformation is performed.
    pub fn compress(&self) -> &'static str {
        const MSG: &str = "display ad compression is not implemented yet";
        warn!(ad_type = %AdType::Display, "{}", MSG);
        MSG
    }

    /// Placeholder capability: no transformation is performed.
    pub fn resize(&self) -> &'static str {
        const MSG: &str = "display ad resizing is not implemented yet";
        warn!(ad_type = %AdType::Display, "{}", MSG);
        MSG
    }
}

// ─── Social ────────────────────────────────────────────────────────────────

/// A social network ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAd {
    #[serde(flatten)]
    base: AdBase,
}

impl SocialAd {
    pub fn new(
        sub_kind: Option<&str>,
        file_url: Option<&str>,
        click_url: Option<&str>,
    ) -> AdResult<Self> {
        Ok(Self {
            base: AdBase::new(AdType::Social, sub_kind, file_url, click_url)?,
        })
    }

    /// Placeholder capability: no transformation is performed.
    pub fn compress(&self) -> &'static str {
        const MSG: &str = "social ad compression is not implemented yet";
        warn!(ad_type = %AdType::Social, "{}", MSG);
        MSG
    }

    /// Placeholder capability: no transformation is performed.
    pub fn resize(&self) -> &'static str {
        const MSG: &str = "social ad resizing is not implemented yet";
        warn!(ad_type = %AdType::Social, "{}", MSG);
        MSG
    }
}

impl_common_fields!(VideoAd, Video, AdType::Video);
impl_common_fields!(DisplayAd, Display, AdType::Display);
impl_common_fields!(SocialAd, Social, AdType::Social);

// ─── Creative ──────────────────────────────────────────────────────────────

/// One ad of any concrete variant. The set of variants is closed; campaigns
/// own creatives through this enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ad_type")]
pub enum Creative {
    Video(VideoAd),
    Display(DisplayAd),
    Social(SocialAd),
}

impl Creative {
    pub fn ad_type(&self) -> AdType {
        match self {
            Creative::Video(_) => AdType::Video,
            Creative::Display(_) => AdType::Display,
            Creative::Social(_) => AdType::Social,
        }
    }

    fn base(&self) -> &AdBase {
        match self {
            Creative::Video(ad) => &ad.base,
            Creative::Display(ad) => &ad.base,
            Creative::Social(ad) => &ad.base,
        }
    }

    fn base_mut(&mut self) -> &mut AdBase {
        match self {
            Creative::Video(ad) => &mut ad.base,
            Creative::Display(ad) => &mut ad.base,
            Creative::Social(ad) => &mut ad.base,
        }
    }

    pub fn height(&self) -> u32 {
        self.base().height
    }

    pub fn width(&self) -> u32 {
        self.base().width
    }

    pub fn sub_kind(&self) -> Option<&str> {
        self.base().sub_kind.as_deref()
    }

    pub fn file_url(&self) -> Option<&str> {
        self.base().file_url.as_deref()
    }

    pub fn click_url(&self) -> Option<&str> {
        self.base().click_url.as_deref()
    }

    /// Non-positive values clamp to [`DEFAULT_DIMENSION`].
    pub fn set_height(&mut self, value: i32) {
        self.base_mut().height = clamp_dimension(value);
    }

    /// Non-positive values clamp to [`DEFAULT_DIMENSION`].
    pub fn set_width(&mut self, value: i32) {
        self.base_mut().width = clamp_dimension(value);
    }

    /// Fails with [`AdError::InvalidSubKind`] if `sub_kind` is not registered
    /// for this creative's variant; the prior value is retained.
    pub fn set_sub_kind(&mut self, sub_kind: &str) -> AdResult<()> {
        let ad_type = self.ad_type();
        self.base_mut().assign_sub_kind(ad_type, sub_kind)
    }

    pub fn set_file_url(&mut self, url: impl Into<String>) {
        self.base_mut().file_url = Some(url.into());
    }

    pub fn set_click_url(&mut self, url: impl Into<String>) {
        self.base_mut().click_url = Some(url.into());
    }

    pub fn compress(&self) -> &'static str {
        match self {
            Creative::Video(ad) => ad.compress(),
            Creative::Display(ad) => ad.compress(),
            Creative::Social(ad) => ad.compress(),
        }
    }

    pub fn resize(&self) -> &'static str {
        match self {
            Creative::Video(ad) => ad.resize(),
            Creative::Display(ad) => ad.resize(),
            Creative::Social(ad) => ad.resize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_default_to_one() {
        let ad = DisplayAd::new(None, None, None).unwrap();
        assert_eq!(ad.height(), 1);
        assert_eq!(ad.width(), 1);
    }

    #[test]
    fn test_positive_dimensions_kept() {
        let mut ad = DisplayAd::new(None, None, None).unwrap();
        ad.set_height(100);
        ad.set_width(200);
        assert_eq!(ad.height(), 100);
        assert_eq!(ad.width(), 200);
    }

    #[test]
    fn test_non_positive_dimensions_clamp() {
        let mut ad = DisplayAd::new(None, None, None).unwrap();
        ad.set_height(0);
        ad.set_width(-1);
        assert_eq!(ad.height(), 1);
        assert_eq!(ad.width(), 1);
    }

    #[test]
    fn test_construct_with_valid_sub_kind() {
        let video = VideoAd::new(Some("Advertising"), None, None, 15).unwrap();
        assert_eq!(video.sub_kind(), Some("Advertising"));
        assert_eq!(video.duration(), 15);
    }

    #[test]
    fn test_construct_with_invalid_sub_kind() {
        let err = VideoAd::new(Some("Foo"), None, None, 5).unwrap_err();
        match err {
            AdError::InvalidSubKind { ad_type, sub_kind } => {
                assert_eq!(ad_type, AdType::Video);
                assert_eq!(sub_kind, "Foo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_construct_without_sub_kind() {
        let video = VideoAd::new(None, None, None, 5).unwrap();
        assert_eq!(video.sub_kind(), None);
    }

    #[test]
    fn test_every_registered_sub_kind_accepted() {
        for sub_kind in crate::registry::allowed_sub_kinds(AdType::Video).iter().copied() {
            assert!(VideoAd::new(Some(sub_kind), None, None, 5).is_ok());
        }
        for sub_kind in crate::registry::allowed_sub_kinds(AdType::Display).iter().copied() {
            assert!(DisplayAd::new(Some(sub_kind), None, None).is_ok());
        }
        for sub_kind in crate::registry::allowed_sub_kinds(AdType::Social).iter().copied() {
            assert!(SocialAd::new(Some(sub_kind), None, None).is_ok());
        }
    }

    #[test]
    fn test_rejected_assignment_keeps_prior_sub_kind() {
        let mut ad = SocialAd::new(Some("Post"), None, None).unwrap();
        assert!(ad.set_sub_kind("Banner").is_err());
        assert_eq!(ad.sub_kind(), Some("Post"));

        ad.set_sub_kind("Story").unwrap();
        assert_eq!(ad.sub_kind(), Some("Story"));
    }

    #[test]
    fn test_urls_assigned_unconditionally() {
        let mut ad = DisplayAd::new(None, None, None).unwrap();
        ad.set_file_url("http://www.example.com/file.jpg");
        ad.set_click_url("http://www.example.com/landing");
        assert_eq!(ad.file_url(), Some("http://www.example.com/file.jpg"));
        assert_eq!(ad.click_url(), Some("http://www.example.com/landing"));
    }

    #[test]
    fn test_duration_clamp() {
        let mut video = VideoAd::new(None, None, None, 5).unwrap();
        video.set_duration(30);
        assert_eq!(video.duration(), 30);
        video.set_duration(-1);
        assert_eq!(video.duration(), 5);
        video.set_duration(0);
        assert_eq!(video.duration(), 5);
    }

    #[test]
    fn test_duration_clamped_at_construction() {
        let video = VideoAd::new(None, None, None, 0).unwrap();
        assert_eq!(video.duration(), 5);
    }

    #[test]
    fn test_placeholder_capabilities() {
        let video: Creative = VideoAd::new(None, None, None, 5).unwrap().into();
        assert_eq!(video.compress(), "video compression is not implemented yet");
        assert_eq!(video.resize(), "video cropping is not implemented yet");

        let display: Creative = DisplayAd::new(None, None, None).unwrap().into();
        assert_eq!(
            display.compress(),
            "display ad compression is not implemented yet"
        );
        assert_eq!(
            display.resize(),
            "display ad resizing is not implemented yet"
        );

        let social: Creative = SocialAd::new(None, None, None).unwrap().into();
        assert_eq!(
            social.compress(),
            "social ad compression is not implemented yet"
        );
        assert_eq!(social.resize(), "social ad resizing is not implemented yet");
    }

    #[test]
    fn test_enum_delegation() {
        let mut creative: Creative = VideoAd::new(Some("Tutorial"), None, None, 10)
            .unwrap()
            .into();
        assert_eq!(creative.ad_type(), AdType::Video);
        assert_eq!(creative.sub_kind(), Some("Tutorial"));

        creative.set_height(-5);
        assert_eq!(creative.height(), 1);

        assert!(creative.set_sub_kind("Post").is_err());
        assert_eq!(creative.sub_kind(), Some("Tutorial"));
    }

    #[test]
    fn test_serde_tagging() {
        let creative: Creative = VideoAd::new(Some("Advertising"), None, None, 15)
            .unwrap()
            .into();
        let json = serde_json::to_value(&creative).unwrap();
        assert_eq!(json["ad_type"], "Video");
        assert_eq!(json["duration"], 15);

        let back: Creative = serde_json::from_value(json).unwrap();
        assert_eq!(back, creative);
    }
}
