//! Command registry: name → schema, privilege tier and handler.

use crate::{AuditSink, PlatformClient};
use async_trait::async_trait;
use fccbot_core::{AuditCategory, AuditEntry, CommandSpec, InteractionEvent, PrivilegeTier};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, instrument, warn};

/// How a command handler finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CommandOutcome {
    /// Every step succeeded.
    #[display("completed")]
    Completed,
    /// The user supplied bad input and was told so.
    #[display("invalid input")]
    InvalidInput,
    /// A step failed; the failure was logged and later steps skipped.
    #[display("aborted")]
    Aborted,
}

/// Handles one slash command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Schema installed on the platform.
    fn spec(&self) -> CommandSpec;

    /// Run the command for an event already cleared by the dispatcher.
    async fn handle(&self, event: &InteractionEvent) -> CommandOutcome;
}

/// A command as stored in the registry.
#[derive(Clone, derive_getters::Getters)]
pub struct RegisteredCommand {
    spec: CommandSpec,
    tier: PrivilegeTier,
    handler: Arc<dyn CommandHandler>,
}

impl std::fmt::Debug for RegisteredCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("spec", &self.spec)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}

/// Result of installing the registry on the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct InstallReport {
    /// Commands created successfully
    installed: Vec<String>,
    /// Commands that failed, with the error text
    failed: Vec<(String, String)>,
}

impl InstallReport {
    /// Whether every command was installed.
    pub fn all_installed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Registered commands in registration order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its spec name with the given tier.
    ///
    /// Registering a name twice replaces the earlier handler.
    pub fn register(&mut self, tier: PrivilegeTier, handler: Arc<dyn CommandHandler>) -> &mut Self {
        let spec = handler.spec();
        let name = spec.name().clone();
        let command = RegisteredCommand {
            spec,
            tier,
            handler,
        };

        match self.index.get(&name) {
            Some(&position) => {
                warn!(command = %name, "Command registered twice, replacing handler");
                self.commands[position] = command;
            }
            None => {
                self.index.insert(name, self.commands.len());
                self.commands.push(command);
            }
        }
        self
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredCommand> {
        self.index.get(name).map(|&position| &self.commands[position])
    }

    /// Schemas in registration order.
    pub fn specs(&self) -> Vec<&CommandSpec> {
        self.commands.iter().map(|command| &command.spec).collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Create every registered command on the platform.
    ///
    /// Failures are logged one by one and do not stop the remaining commands.
    /// A single ready entry is logged when all of them succeed.
    #[instrument(skip_all, fields(command_count = self.commands.len()))]
    pub async fn install(&self, client: &dyn PlatformClient, audit: &dyn AuditSink) -> InstallReport {
        let mut report = InstallReport::default();

        for command in &self.commands {
            let name = command.spec.name();
            match client.create_command(&command.spec).await {
                Ok(()) => {
                    info!(command = %name, tier = %command.tier, "Command installed");
                    report.installed.push(name.clone());
                }
                Err(e) => {
                    error!(command = %name, error = %e, "Command installation failed");
                    audit.send(AuditEntry::error(format!(
                        "Whilst adding {} command: {}",
                        name, e.kind
                    )));
                    report.failed.push((name.clone(), e.kind.to_string()));
                }
            }
        }

        if report.all_installed() {
            audit.send(AuditEntry::new(
                AuditCategory::Ready,
                "All commands successfully added",
            ));
        }

        report
    }
}

/// Installs a registry on the platform at most once.
///
/// Serenity fires `ready` again after every gateway reconnect; only the first
/// call reaches the platform.
pub struct CommandInstaller {
    registry: Arc<CommandRegistry>,
    client: Arc<dyn PlatformClient>,
    audit: Arc<dyn AuditSink>,
    installed: AtomicBool,
}

impl CommandInstaller {
    /// Create an installer that has not run yet.
    pub fn new(
        registry: Arc<CommandRegistry>,
        client: Arc<dyn PlatformClient>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            registry,
            client,
            audit,
            installed: AtomicBool::new(false),
        }
    }

    /// Install the registry unless an earlier call already did.
    ///
    /// Returns `None` when installation was skipped.
    pub async fn install_once(&self) -> Option<InstallReport> {
        if self.installed.swap(true, Ordering::SeqCst) {
            debug!("Commands already installed, skipping");
            return None;
        }
        Some(
            self.registry
                .install(self.client.as_ref(), self.audit.as_ref())
                .await,
        )
    }

    /// Whether installation has been attempted.
    pub fn has_run(&self) -> bool {
        self.installed.load(Ordering::SeqCst)
    }
}
