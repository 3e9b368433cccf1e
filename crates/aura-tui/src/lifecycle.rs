//! Agent lifecycle port.
//!
//! The shell is launched alongside a long-lived agent process it does not
//! spawn or supervise. The only coupling is at exit: ask the agent to
//! terminate, give it a short grace window, then go. The port keeps the
//! exit sequence independent of how termination is actually delivered.

use std::time::Duration;

use tracing::{info, warn};

use aura_proto::config::AgentConfig;

pub trait AgentLifecycle {
    /// Ask the agent to terminate. Failures are non-fatal — the shell
    /// exits either way.
    async fn request_shutdown(&self);
}

/// Delivers shutdown by running a configured shell command (typically a
/// `pkill` of the agent's entry script), then waiting the grace delay.
pub struct ProcessAdapter {
    command: String,
    grace: Duration,
}

impl ProcessAdapter {
    pub fn from_config(agent: &AgentConfig) -> Self {
        Self {
            command: agent.shutdown_command.clone(),
            grace: Duration::from_millis(agent.shutdown_grace_ms),
        }
    }
}

impl AgentLifecycle for ProcessAdapter {
    async fn request_shutdown(&self) {
        if self.command.is_empty() {
            return;
        }
        info!("requesting agent shutdown: {}", self.command);

        #[cfg(unix)]
        let result = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .status()
            .await;
        #[cfg(windows)]
        let result = tokio::process::Command::new("cmd")
            .arg("/C")
            .arg(&self.command)
            .status()
            .await;

        match result {
            Ok(status) if !status.success() => {
                warn!("agent shutdown command exited with {}", status);
            }
            Err(e) => {
                warn!("agent shutdown command failed to run: {}", e);
            }
            _ => {}
        }

        tokio::time::sleep(self.grace).await;
    }
}
