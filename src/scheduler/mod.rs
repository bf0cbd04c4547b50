//! Scheduled jobs.
//!
//! All jobs run every minute on one `tokio-cron-scheduler` instance. Errors are
//! logged and the job runs again on the next tick.

pub mod payments;
pub mod role_expiry;
pub mod voice_activity;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Cache, GuildId, Http};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    config::Config,
    error::AppError,
    service::payment::feed::{HttpPaymentFeed, PaymentFeed},
};

const EVERY_MINUTE: &str = "0 * * * * *";

/// Starts the role expiry, voice activity and payment feed jobs.
///
/// The payment feed job only runs when `PAYMENT_FEED_URL` is configured.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_http` - Discord HTTP client for removing expired roles
/// - `discord_cache` - Gateway cache holding current voice states
/// - `config` - Application configuration
/// - `http_client` - HTTP client for the payment feed
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    discord_cache: Arc<Cache>,
    config: &Config,
    http_client: reqwest::Client,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let guild_id = GuildId::new(config.guild_id);

    let job_db = db.clone();
    let job_http = discord_http.clone();
    let role_expiry_job = Job::new_async(EVERY_MINUTE, move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            let remover = role_expiry::HttpRoleRemover::new(&http, guild_id);
            if let Err(e) = role_expiry::process_expired_roles(&db, &remover).await {
                tracing::error!("Error processing expired roles: {}", e);
            }
        })
    })?;
    scheduler.add(role_expiry_job).await?;

    let job_db = db.clone();
    let job_cache = discord_cache.clone();
    let voice_activity_job = Job::new_async(EVERY_MINUTE, move |_uuid, _lock| {
        let db = job_db.clone();
        let cache = job_cache.clone();

        Box::pin(async move {
            if let Err(e) = voice_activity::process_voice_activity(&db, &cache, guild_id).await {
                tracing::error!("Error processing voice activity: {}", e);
            }
        })
    })?;
    scheduler.add(voice_activity_job).await?;

    if let Some(url) = config.payment_feed_url.clone() {
        let job_db = db.clone();
        let feed: Arc<dyn PaymentFeed> = Arc::new(HttpPaymentFeed::new(http_client, url));
        let payment_job = Job::new_async(EVERY_MINUTE, move |_uuid, _lock| {
            let db = job_db.clone();
            let feed = feed.clone();

            Box::pin(async move {
                if let Err(e) = payments::process_payment_feed(&db, feed.as_ref()).await {
                    tracing::error!("Error processing payment feed: {}", e);
                }
            })
        })?;
        scheduler.add(payment_job).await?;
    } else {
        tracing::info!("PAYMENT_FEED_URL not set, payment feed polling disabled");
    }

    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(())
}
