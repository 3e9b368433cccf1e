//! Actions returned by components and dispatched by the App event loop.

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the shell (and ask the agent to shut down on the way out).
    Quit,
    /// Expand/collapse the log panel.
    ToggleLogs,
    /// Open the receive prompt and raise the poll-suppression gate.
    OpenReceive,
    /// Close the receive prompt without publishing; lower the gate.
    CancelReceive,
    /// Publish the dropped text to the mailbox (first path only) and
    /// resume polling.
    PublishDrop(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentId {
    Presence,
    Conversation,
    Mood,
    Monologue,
    LogPanel,
    DropOverlay,
}
