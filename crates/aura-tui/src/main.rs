mod action;
mod app;
mod app_state;
mod component;
mod components;
mod lifecycle;
mod sync;
mod theme;
mod widgets;

use tokio::sync::{mpsc, watch};

use aura_proto::config::Config;
use aura_proto::mailbox::Mailbox;
use aura_proto::merge::MergeOptions;
use aura_proto::store::AgentSources;

use lifecycle::{AgentLifecycle, ProcessAdapter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = aura_proto::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("tui.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "debug,aura_proto=debug".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // stderr still works before the alternate screen takes over.
    eprintln!("aura log: {}", log_path.display());

    tracing::info!("aura starting…");

    let config = Config::load().unwrap_or_default();
    let sources = AgentSources::new(&config.agent.state_dir);
    let mailbox = Mailbox::new(sources.inbox.clone());
    let merge_opts = MergeOptions {
        thought_max_chars: config.ui.thought_max_chars,
    };

    // ── Channels ─────────────────────────────────────────────────────────────
    // AppMessage: keyboard + snapshots into the App loop.
    let (tx, rx) = mpsc::channel::<app::AppMessage>(256);
    // Suppression gate: raised by the App while a drop is in progress.
    let (gate_tx, gate_rx) = watch::channel(false);

    // ── Poll task (StateStore → merge → App) ─────────────────────────────────
    let poll = sync::PollLoop::new(
        sources,
        merge_opts,
        config.polling.clone(),
        gate_rx,
        tx.clone(),
    );
    tokio::spawn(poll.run());

    // ── Run TUI ──────────────────────────────────────────────────────────────
    let app = app::App::new(config.ui.clone(), mailbox, gate_tx);
    app.run(tx, rx).await?;

    // ── Exit: ask the agent to shut down, with a grace delay ─────────────────
    ProcessAdapter::from_config(&config.agent)
        .request_shutdown()
        .await;

    tracing::info!("aura stopped");
    Ok(())
}
