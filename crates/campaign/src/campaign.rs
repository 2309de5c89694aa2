//! The campaign aggregate: a named, date-bounded owner of an ordered
//! creative collection.

use adboard_core::{AdError, AdResult, AdType};
use adboard_creative::Creative;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Maximum campaign name length, in characters.
pub const MAX_NAME_LEN: usize = 250;

/// An advertising campaign. The name is length-checked on every write; the
/// creative sequence is public and insertion-ordered, and callers mutate it
/// directly. Date ordering is not enforced (see `set_start_date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    name: String,
    pub creatives: Vec<Creative>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl Campaign {
    /// Fails with [`AdError::NameTooLong`] before any field is set if the
    /// name exceeds [`MAX_NAME_LEN`] characters.
    pub fn new(
        name: impl Into<String>,
        creatives: Vec<Creative>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AdResult<Self> {
        let name = name.into();
        check_name(&name)?;
        warn_if_inverted(start_date, end_date);
        Ok(Self {
            name,
            creatives,
            start_date,
            end_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same length check as construction; on failure the prior name is kept.
    pub fn rename(&mut self, new_name: impl Into<String>) -> AdResult<()> {
        let new_name = new_name.into();
        check_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Unconditional assignment. An inverted range (start after end) is
    /// logged but not rejected.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        warn_if_inverted(self.start_date, self.end_date);
    }

    /// Unconditional assignment. An inverted range (start after end) is
    /// logged but not rejected.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
        warn_if_inverted(self.start_date, self.end_date);
    }

    /// Creative count for one variant.
    pub fn count_of(&self, ad_type: AdType) -> usize {
        self.creatives
            .iter()
            .filter(|c| c.ad_type() == ad_type)
            .count()
    }
}

fn check_name(name: &str) -> AdResult<()> {
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(AdError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

fn warn_if_inverted(start: Option<NaiveDate>, end: Option<NaiveDate>) {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            warn!(%start, %end, "campaign start date is after its end date");
        }
    }
}

/// Operator-facing summary: name, dates when present, and a per-variant
/// creative count listing every known variant even at zero.
impl fmt::Display for Campaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Campaign name: {}", self.name)?;
        if let Some(start) = self.start_date {
            writeln!(f, "Start date: {}", start.format("%Y-%m-%d"))?;
        }
        if let Some(end) = self.end_date {
            writeln!(f, "End date: {}", end.format("%Y-%m-%d"))?;
        }
        writeln!(f, "Ads:")?;
        for ad_type in AdType::ALL {
            writeln!(f, "- {} {}", self.count_of(ad_type), ad_type)?;
        }
        Ok(())
    }
}
