use task_reminder::config::ReminderConfig;
use task_reminder::db::{create_pool, run_migrations};
use task_reminder::notification::NotificationRepository;
use task_reminder::scheduler;
use task_reminder::task::TaskRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,task_reminder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ReminderConfig::from_env();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    let task_repository = TaskRepository::new(db.clone());
    let notification_repository = NotificationRepository::new(db.clone());

    let scanner = scheduler::start(task_repository, notification_repository, config);

    tracing::info!("Deadline scanner running, press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    scanner.stop().await;

    Ok(())
}
