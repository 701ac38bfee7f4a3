//! Lifecycle phase classification.
//!
//! The phase of an item is derived, never stored. Normal-path phases follow
//! stage progress one-to-one:
//!
//! | progress | phase            |
//! |----------|------------------|
//! | 0        | `Ideas`          |
//! | 1        | `Started`        |
//! | 2        | `MaterialDone`   |
//! | 3        | `EditRequested`  |
//! | 4        | `PublishPending` |
//! | 5        | `Published`      |
//!
//! Two overrides preempt the normal path, highest first:
//! - `SponsoredBlocked` whenever the sponsorship carries a block reason
//! - `Delayed` when the item is flagged delayed and not yet fully published

use anyhow::bail;
use serde::{Deserialize, Serialize};

use super::item::Item;
use super::stage::Stage;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Ideas,
    Started,
    MaterialDone,
    EditRequested,
    PublishPending,
    Published,
    Delayed,
    SponsoredBlocked,
}

impl Phase {
    /// Every phase in display order: the normal path first, then overrides.
    pub const ALL: [Phase; 8] = [
        Phase::Ideas,
        Phase::Started,
        Phase::MaterialDone,
        Phase::EditRequested,
        Phase::PublishPending,
        Phase::Published,
        Phase::Delayed,
        Phase::SponsoredBlocked,
    ];

    const NORMAL_PATH: [Phase; 6] = [
        Phase::Ideas,
        Phase::Started,
        Phase::MaterialDone,
        Phase::EditRequested,
        Phase::PublishPending,
        Phase::Published,
    ];

    /// Normal-path phase for a stage progress count. Values above 5 clamp to
    /// `Published`.
    pub fn from_progress(progress: usize) -> Phase {
        Self::NORMAL_PATH[progress.min(Self::NORMAL_PATH.len() - 1)]
    }

    pub fn is_override(&self) -> bool {
        matches!(self, Phase::Delayed | Phase::SponsoredBlocked)
    }

    /// Human-readable label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Ideas => "Ideas",
            Phase::Started => "Started",
            Phase::MaterialDone => "Material done",
            Phase::EditRequested => "Edit requested",
            Phase::PublishPending => "Publish pending",
            Phase::Published => "Published",
            Phase::Delayed => "Delayed",
            Phase::SponsoredBlocked => "Sponsored (blocked)",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Ideas => write!(f, "ideas"),
            Phase::Started => write!(f, "started"),
            Phase::MaterialDone => write!(f, "material-done"),
            Phase::EditRequested => write!(f, "edit-requested"),
            Phase::PublishPending => write!(f, "publish-pending"),
            Phase::Published => write!(f, "published"),
            Phase::Delayed => write!(f, "delayed"),
            Phase::SponsoredBlocked => write!(f, "sponsored-blocked"),
        }
    }
}

impl std::str::FromStr for Phase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "ideas" | "idea" => Ok(Phase::Ideas),
            "started" => Ok(Phase::Started),
            "material-done" | "materialdone" => Ok(Phase::MaterialDone),
            "edit-requested" | "editrequested" => Ok(Phase::EditRequested),
            "publish-pending" | "publishpending" => Ok(Phase::PublishPending),
            "published" => Ok(Phase::Published),
            "delayed" => Ok(Phase::Delayed),
            "sponsored-blocked" | "sponsoredblocked" | "blocked" => Ok(Phase::SponsoredBlocked),
            _ => bail!(
                "Invalid phase: {s}. Use: ideas, started, material-done, edit-requested, \
                 publish-pending, published, delayed, sponsored-blocked"
            ),
        }
    }
}

/// Classify an item into exactly one phase.
pub fn phase(item: &Item) -> Phase {
    let progress = item.stages.progress();

    if item.sponsorship.is_blocked() {
        return Phase::SponsoredBlocked;
    }

    // A published item's delay flag is history, not an active state.
    if item.delayed && progress < Stage::ALL.len() {
        return Phase::Delayed;
    }

    Phase::from_progress(progress)
}
