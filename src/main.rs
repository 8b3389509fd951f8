use social_dashboard::{
    AppState, Config, Dashboard, Store, calendar::CalendarDate, jobs, notify::TerminalBell, router,
    scheduler::SystemClock,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let store = Store::new(config.data_dir.clone());
    store.ensure_dir().await?;

    let snapshot = store.load().await;
    let mut dashboard = Dashboard::hydrate(snapshot, config.rebase);
    let clock = Arc::new(SystemClock);
    let today = CalendarDate::today();
    if dashboard.roll_over(today) {
        info!(%today, "new day since last visit: daily fields reset");
        store.save_dashboard(&dashboard.state).await?;
    }
    info!(
        data_dir = %store.dir().display(),
        streak = dashboard.state.streak_data.current_streak,
        needs_baseline = dashboard.needs_baseline(),
        "dashboard loaded"
    );

    let state = AppState::new(
        store,
        dashboard,
        clock,
        config.posting_time,
        Arc::new(TerminalBell),
    );
    let jobs = jobs::spawn(&state);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    jobs.cancel();
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
