//! Status and category enums for parish entities.
//!
//! Every enum here round-trips between its serde wire form and the string
//! stored in the database, so each one carries `as_str`, `Display`, and
//! `FromStr` alongside the serde derives.

use serde::{Deserialize, Serialize};

/// User role. Admin-gated procedures require [`Role::Admin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// The role as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// Event category for filtering the church calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Worship,
    Youth,
    Community,
    Outreach,
    Prayer,
    #[default]
    Other,
}

impl EventCategory {
    /// The category as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Worship => "worship",
            Self::Youth => "youth",
            Self::Community => "community",
            Self::Outreach => "outreach",
            Self::Prayer => "prayer",
            Self::Other => "other",
        }
    }
}

/// Prayer request moderation status.
///
/// A request starts `pending`. Admins approve it for the public wall or
/// archive it; archived requests never return to `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrayerStatus {
    #[default]
    Pending,
    Approved,
    Archived,
}

impl PrayerStatus {
    /// The status as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Archived => "archived",
        }
    }

    /// Whether a moderation transition from `self` to `next` is allowed.
    ///
    /// Approval is only reachable from `pending`, archiving is reachable
    /// from any state, and nothing ever moves back to `pending`. Writing a
    /// request's current status again is a permitted no-op.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved | Self::Pending)
                | (Self::Approved, Self::Approved)
                | (_, Self::Archived)
        )
    }
}

/// Contact message triage status.
///
/// Admins may set any status directly; the workflow is advisory, not
/// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Responded,
}

impl ContactStatus {
    /// The status as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Responded => "responded",
        }
    }
}

/// Newsletter subscription status. Unsubscribing never deletes the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Unsubscribed,
}

impl SubscriptionStatus {
    /// The status as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Unsubscribed => "unsubscribed",
        }
    }
}

/// Donation record status, set by admins (no payment gateway is attached).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl DonationStatus {
    /// The status as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Day of the week for recurring service times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// The day as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

macro_rules! impl_str_conversions {
    ($($ty:ident => [$(($variant:ident, $text:literal)),+ $(,)?]);+ $(;)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    match s {
                        $($text => Ok(Self::$variant),)+
                        _ => Err(format!(concat!("invalid ", stringify!($ty), ": {}"), s)),
                    }
                }
            }
        )+
    };
}

impl_str_conversions! {
    Role => [(User, "user"), (Admin, "admin")];
    EventCategory => [
        (Worship, "worship"),
        (Youth, "youth"),
        (Community, "community"),
        (Outreach, "outreach"),
        (Prayer, "prayer"),
        (Other, "other"),
    ];
    PrayerStatus => [(Pending, "pending"), (Approved, "approved"), (Archived, "archived")];
    ContactStatus => [(New, "new"), (Read, "read"), (Responded, "responded")];
    SubscriptionStatus => [(Active, "active"), (Unsubscribed, "unsubscribed")];
    DonationStatus => [(Pending, "pending"), (Completed, "completed"), (Failed, "failed")];
    DayOfWeek => [
        (Sunday, "sunday"),
        (Monday, "monday"),
        (Tuesday, "tuesday"),
        (Wednesday, "wednesday"),
        (Thursday, "thursday"),
        (Friday, "friday"),
        (Saturday, "saturday"),
    ];
}
