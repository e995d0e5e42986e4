//! Seed the database with starter content.
//!
//! Gives a fresh deployment a church profile, a service schedule, a few
//! upcoming events, recent sermons, and a staff page, so the site renders
//! something before the admin has entered real content.
//!
//! Refuses to run when a church profile already exists, so it cannot
//! clobber a live site.

use chrono::{DateTime, Datelike, Duration, Utc};
use thiserror::Error;
use tracing::info;

use parish_core::{
    DayOfWeek, Email, EmailError, EventCategory, EventId, SermonId, ServiceTimeId, StaffId, UserId,
};
use parish_server::db::{Database, RepositoryError};
use parish_server::models::{ChurchInfoUpdate, Event, Sermon, ServiceTime, StaffMember};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] super::MissingDatabaseUrl),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A seed insert failed.
    #[error("Insert failed: {0}")]
    Insert(#[from] RepositoryError),

    /// A hard-coded seed email failed validation.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The database already has content.
    #[error("Database already seeded (church profile exists)")]
    AlreadySeeded,
}

/// Seed the database with starter content.
///
/// # Errors
///
/// Returns `SeedError::AlreadySeeded` if a church profile exists, or the
/// underlying error if an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url()?;

    info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    if db.church_info().get().await?.is_some() {
        return Err(SeedError::AlreadySeeded);
    }

    info!("Seeding database...");

    let now = Utc::now();
    seed_church_info(&db).await?;
    seed_service_times(&db, now).await?;
    seed_events(&db, now).await?;
    seed_sermons(&db, now).await?;
    seed_staff(&db, now).await?;

    info!("Database seeded successfully!");
    Ok(())
}

async fn seed_church_info(db: &Database) -> Result<(), SeedError> {
    let profile = ChurchInfoUpdate {
        name: "Community Church".to_string(),
        tagline: Some("A place where faith meets fellowship".to_string()),
        description: Some(
            "Welcome to Community Church, where we believe in the power of community, \
             faith, and service. Join us as we grow together in Christ."
                .to_string(),
        ),
        address: Some("123 Church Street, City, State 12345".to_string()),
        phone: Some("(555) 123-4567".to_string()),
        email: Some(Email::parse("info@communitychurch.org")?),
        logo_url: None,
        banner_url: None,
        facebook_url: None,
        instagram_url: None,
        youtube_url: None,
    };
    db.church_info().upsert(&profile).await?;
    info!("Added church profile: {}", profile.name);
    Ok(())
}

async fn seed_service_times(db: &Database, now: DateTime<Utc>) -> Result<(), SeedError> {
    let services = [
        ServiceTime {
            id: ServiceTimeId::generate(),
            name: "Sunday Morning Worship".to_string(),
            day_of_week: DayOfWeek::Sunday,
            time: "10:00 AM".to_string(),
            description: Some(
                "Join us for our main worship service with contemporary music and \
                 biblical teaching."
                    .to_string(),
            ),
            is_active: true,
            created_at: now,
        },
        ServiceTime {
            id: ServiceTimeId::generate(),
            name: "Sunday Evening Service".to_string(),
            day_of_week: DayOfWeek::Sunday,
            time: "6:00 PM".to_string(),
            description: Some(
                "A more intimate gathering focused on prayer and worship.".to_string(),
            ),
            is_active: true,
            created_at: now,
        },
        ServiceTime {
            id: ServiceTimeId::generate(),
            name: "Wednesday Bible Study".to_string(),
            day_of_week: DayOfWeek::Wednesday,
            time: "7:00 PM".to_string(),
            description: Some(
                "Dive deeper into God's Word with our midweek Bible study.".to_string(),
            ),
            is_active: true,
            created_at: now,
        },
    ];

    for service in &services {
        db.service_times().create(service).await?;
        info!("Added service time: {}", service.name);
    }
    Ok(())
}

async fn seed_events(db: &Database, now: DateTime<Utc>) -> Result<(), SeedError> {
    let created_by = UserId::new("admin");
    let events = [
        Event {
            id: EventId::generate(),
            title: "Community Outreach Day".to_string(),
            description: Some(
                "Join us as we serve our local community through various service \
                 projects. All ages welcome!"
                    .to_string(),
            ),
            event_date: now + Duration::days(7),
            end_date: None,
            location: Some("Various locations in the city".to_string()),
            image_url: None,
            category: EventCategory::Outreach,
            created_by: created_by.clone(),
            created_at: now,
            updated_at: now,
        },
        Event {
            id: EventId::generate(),
            title: "Youth Group Game Night".to_string(),
            description: Some(
                "An evening of fun, games, and fellowship for our youth (grades 6-12)."
                    .to_string(),
            ),
            event_date: now + Duration::days(14),
            end_date: None,
            location: Some("Church Youth Center".to_string()),
            image_url: None,
            category: EventCategory::Youth,
            created_by: created_by.clone(),
            created_at: now,
            updated_at: now,
        },
        Event {
            id: EventId::generate(),
            title: "Prayer & Worship Night".to_string(),
            description: Some(
                "A special evening dedicated to prayer and worship. Come and experience \
                 God's presence."
                    .to_string(),
            ),
            event_date: now + Duration::days(21),
            end_date: None,
            location: Some("Main Sanctuary".to_string()),
            image_url: None,
            category: EventCategory::Prayer,
            created_by,
            created_at: now,
            updated_at: now,
        },
    ];

    for event in &events {
        db.events().create(event).await?;
        info!("Added event: {}", event.title);
    }
    Ok(())
}

async fn seed_sermons(db: &Database, now: DateTime<Utc>) -> Result<(), SeedError> {
    let last_sunday = now - Duration::days(i64::from(now.weekday().num_days_from_sunday()));
    let sermons = [
        Sermon {
            id: SermonId::generate(),
            title: "Walking in Faith".to_string(),
            speaker: "Pastor John Smith".to_string(),
            description: Some(
                "Exploring what it means to truly walk by faith and not by sight in \
                 our daily lives."
                    .to_string(),
            ),
            sermon_date: last_sunday,
            video_url: None,
            audio_url: None,
            thumbnail_url: None,
            scripture: Some("2 Corinthians 5:7".to_string()),
            series: Some("Faith Foundations".to_string()),
            created_at: now,
            updated_at: now,
        },
        Sermon {
            id: SermonId::generate(),
            title: "The Power of Prayer".to_string(),
            speaker: "Pastor John Smith".to_string(),
            description: Some(
                "Understanding the importance and impact of prayer in the life of a \
                 believer."
                    .to_string(),
            ),
            sermon_date: last_sunday - Duration::days(7),
            video_url: None,
            audio_url: None,
            thumbnail_url: None,
            scripture: Some("James 5:16".to_string()),
            series: Some("Faith Foundations".to_string()),
            created_at: now,
            updated_at: now,
        },
        Sermon {
            id: SermonId::generate(),
            title: "Love Your Neighbor".to_string(),
            speaker: "Guest Speaker Sarah Johnson".to_string(),
            description: Some(
                "Practical ways to show Christ's love to those around us in our \
                 everyday lives."
                    .to_string(),
            ),
            sermon_date: last_sunday - Duration::days(14),
            video_url: None,
            audio_url: None,
            thumbnail_url: None,
            scripture: Some("Mark 12:31".to_string()),
            series: None,
            created_at: now,
            updated_at: now,
        },
    ];

    for sermon in &sermons {
        db.sermons().create(sermon).await?;
        info!("Added sermon: {}", sermon.title);
    }
    Ok(())
}

async fn seed_staff(db: &Database, now: DateTime<Utc>) -> Result<(), SeedError> {
    let members = [
        StaffMember {
            id: StaffId::generate(),
            name: "Pastor John Smith".to_string(),
            title: "Senior Pastor".to_string(),
            bio: Some(
                "Pastor John has been serving the congregation for over 15 years. He is \
                 passionate about teaching the Word of God and shepherding the church \
                 with love and wisdom."
                    .to_string(),
            ),
            photo_url: None,
            email: Some(Email::parse("pastor.john@communitychurch.org")?),
            phone: Some("(555) 123-4568".to_string()),
            display_order: 1,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        StaffMember {
            id: StaffId::generate(),
            name: "Pastor Mary Johnson".to_string(),
            title: "Associate Pastor".to_string(),
            bio: Some(
                "Pastor Mary leads our worship ministry and women's fellowship. Her \
                 heart for worship and prayer has blessed our congregation immensely."
                    .to_string(),
            ),
            photo_url: None,
            email: Some(Email::parse("pastor.mary@communitychurch.org")?),
            phone: Some("(555) 123-4569".to_string()),
            display_order: 2,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        StaffMember {
            id: StaffId::generate(),
            name: "Minister David Brown".to_string(),
            title: "Youth Pastor".to_string(),
            bio: Some(
                "Minister David works with our youth and young adults, helping them \
                 grow in their faith and discover their purpose in Christ."
                    .to_string(),
            ),
            photo_url: None,
            email: Some(Email::parse("youth@communitychurch.org")?),
            phone: Some("(555) 123-4570".to_string()),
            display_order: 3,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
    ];

    for member in &members {
        db.staff().create(member).await?;
        info!("Added staff member: {}", member.name);
    }
    Ok(())
}
