//! Core `AgentBuilder` structure and base functionality

use std::net::IpAddr;

use agentry_client::{AgentHandle, AgentSelector, ConnectionOptions};

/// Fluent builder for the connection options of a request.
///
/// Terminal methods select the agent through the selector the builder was
/// created with.
#[derive(Clone)]
pub struct AgentBuilder<'a> {
    pub(crate) selector: &'a AgentSelector,
    pub(crate) options: ConnectionOptions,
    pub(crate) debug_enabled: bool,
}

impl<'a> AgentBuilder<'a> {
    #[must_use]
    pub fn new(selector: &'a AgentSelector) -> Self {
        Self {
            selector,
            options: ConnectionOptions::default(),
            debug_enabled: false,
        }
    }

    /// Start from existing options instead of the defaults
    #[must_use]
    pub fn options(mut self, options: ConnectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Log each selection at debug level
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Bind outgoing sockets to `addr`
    #[must_use]
    pub fn local_address(mut self, addr: IpAddr) -> Self {
        self.options.local_address = Some(addr);
        self
    }

    /// Pool size for a newly built agent
    #[must_use]
    pub fn max_sockets(mut self, max: usize) -> Self {
        self.options.max_sockets = Some(max);
        self
    }

    /// Use `agent` verbatim, skipping selection
    #[must_use]
    pub fn agent(mut self, agent: impl Into<AgentHandle>) -> Self {
        self.options.agent = Some(agent.into());
        self
    }

    /// Opt out of pooling; selection yields [`AgentHandle::Disabled`]
    #[must_use]
    pub fn disable_pooling(mut self) -> Self {
        self.options.agent = Some(AgentHandle::Disabled);
        self
    }

    /// Options assembled so far
    #[must_use]
    pub fn connection_options(&self) -> &ConnectionOptions {
        &self.options
    }

    /// Finish building without selecting
    #[must_use]
    pub fn into_options(self) -> ConnectionOptions {
        self.options
    }
}

impl std::fmt::Debug for AgentBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentBuilder")
            .field("options", &self.options)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}
