//! Domain models for the parish site.
//!
//! These are the types the API serves and stores: church content (events,
//! sermons, staff, church info, service times) and visitor interactions
//! (prayer requests, contact messages, newsletter subscriptions, donations).
//! Request payload types live beside the entity they create or patch.

pub mod church_info;
pub mod contact_message;
pub mod donation;
pub mod event;
pub mod newsletter;
pub mod prayer_request;
pub mod sermon;
pub mod service_time;
pub mod session;
pub mod staff;
pub mod user;

pub use church_info::{ChurchInfo, ChurchInfoUpdate};
pub use contact_message::{ContactMessage, NewContactMessage};
pub use donation::{Donation, NewDonation};
pub use event::{Event, EventUpdate, NewEvent};
pub use newsletter::{NewSubscription, NewsletterSubscription};
pub use prayer_request::{NewPrayerRequest, PrayerRequest};
pub use sermon::{NewSermon, Sermon, SermonUpdate};
pub use service_time::{NewServiceTime, ServiceTime, ServiceTimeUpdate};
pub use session::CurrentUser;
pub use session::keys as session_keys;
pub use staff::{NewStaffMember, StaffMember, StaffUpdate};
pub use user::{User, UserUpsert};
