use anyhow::Result;
use curricula_core::application::{
    ports::{telemetry::ViewTracker, time::Clock},
    services::{ApplicationServices, Collaborators},
};
use curricula_core::config::AppConfig;
use curricula_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCompanyRepository,
        PostgresCourseRepository, PostgresEnrollmentRepository, PostgresTagRepository,
        PostgresUserRepository,
    },
    telemetry::{DisabledViewTracker, PostgresViewTracker},
    time::SystemClock,
};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let courses = Arc::new(PostgresCourseRepository::new(pool.clone()));
    let view_tracker: Arc<dyn ViewTracker> = if config.view_tracking() {
        Arc::new(PostgresViewTracker::new(pool.clone()))
    } else {
        Arc::new(DisabledViewTracker)
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = ApplicationServices::new(Collaborators {
        article_write_repo: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read_repo: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        course_write_repo: courses.clone(),
        course_read_repo: courses.clone(),
        chapter_repo: courses.clone(),
        lesson_repo: courses,
        company_repo: Arc::new(PostgresCompanyRepository::new(pool.clone())),
        enrollment_repo: Arc::new(PostgresEnrollmentRepository::new(pool.clone())),
        tag_repo: Arc::new(PostgresTagRepository::new(pool.clone())),
        user_repo: Arc::new(PostgresUserRepository::new(pool.clone())),
        view_tracker,
        clock,
    });

    tracing::info!(
        max_connections = config.database_max_connections(),
        view_tracking = config.view_tracking(),
        "content engine ready"
    );

    shutdown_signal().await?;
    drop(services);
    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            result = signal::ctrl_c() => result?,
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    signal::ctrl_c().await?;

    tracing::info!("shutdown signal received");
    Ok(())
}
