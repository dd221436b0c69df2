// src/domain/content/disclosure.rs
//! Decides how much of a body a viewer gets to read.

use serde::{Deserialize, Serialize};

const ELLIPSIS: char = '…';

/// Share of the body revealed by a teaser. Premium articles reveal half,
/// gated lessons a quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeaserRatio {
    Half,
    Quarter,
}

impl TeaserRatio {
    pub fn divisor(self) -> usize {
        match self {
            TeaserRatio::Half => 2,
            TeaserRatio::Quarter => 4,
        }
    }

    /// First `len / divisor` characters (integer division) followed by `…`.
    pub fn truncate(self, text: &str) -> String {
        let keep = text.chars().count() / self.divisor();
        let mut teaser: String = text.chars().take(keep).collect();
        teaser.push(ELLIPSIS);
        teaser
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Not published and the viewer is not one of its editors.
    Unpublished,
    /// Company content is never previewed to anonymous viewers.
    IdentityRequired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disclosure {
    Full,
    Teaser { ratio: TeaserRatio, text: String },
    Denied(DenialReason),
}

impl Disclosure {
    pub fn is_denied(&self) -> bool {
        matches!(self, Disclosure::Denied(_))
    }
}

/// Facts about one (viewer, item) pair, already resolved by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureRequest {
    pub published: bool,
    pub anonymous: bool,
    /// Author, platform admin, or admin/editor of the owning company.
    pub full_reader: bool,
    /// Premium article or non-free lesson.
    pub gated: bool,
    /// Active enrollment, company membership or a PRO plan.
    pub entitled: bool,
    /// Set for company-owned lessons.
    pub deny_anonymous: bool,
    pub ratio: TeaserRatio,
}

impl DisclosureRequest {
    pub fn evaluate(&self, text: &str) -> Disclosure {
        if !self.published && !self.full_reader {
            return Disclosure::Denied(DenialReason::Unpublished);
        }
        if self.full_reader {
            return Disclosure::Full;
        }
        if self.anonymous && self.deny_anonymous {
            return Disclosure::Denied(DenialReason::IdentityRequired);
        }
        if self.gated && !self.entitled {
            return Disclosure::Teaser {
                ratio: self.ratio,
                text: self.ratio.truncate(text),
            };
        }
        Disclosure::Full
    }
}
