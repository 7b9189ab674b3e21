//! Fakes of the platform client, permission oracle and audit sink.
//!
//! The fake client and the recording audit sink write into one shared
//! journal, so tests can assert on the relative order of platform calls and
//! audit entries.

#![allow(dead_code)]

use async_trait::async_trait;
use fccbot_core::{
    AuditCategory, AuditEntry, CommandOption, CommandSpec, InteractionEvent, InteractionKind,
    InteractionReply, MemberRef,
};
use fccbot_error::{
    DiscordError, DiscordErrorKind, DiscordResult, SecurityError, SecurityErrorKind,
    SecurityResult,
};
use fccbot_security::PermissionOracle;
use fccbot_social::commands::standard_registry;
use fccbot_social::{AuditSink, InteractionDispatcher, PlatformClient};
use std::sync::{Arc, Mutex};

pub const RESOURCES_CHANNEL: &str = "555";
pub const EVENT_CHANNEL: &str = "300";
pub const TRIGGER_ID: &str = "1000";

/// Everything observable that happened during a test.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateCommand(String),
    Respond { content: String, ephemeral: bool },
    FetchMessages { channel_id: String, limit: u8, before: String },
    BulkDelete { channel_id: String, ids: Vec<String> },
    SendMessage { channel_id: String, content: String },
    ChannelName(String),
    Audit(AuditEntry),
}

impl Call {
    /// Calls that change state on the platform.
    pub fn is_side_effect(&self) -> bool {
        !matches!(self, Call::ChannelName(_) | Call::Audit(_))
    }
}

pub type Journal = Arc<Mutex<Vec<Call>>>;

/// Which fake platform calls fail.
#[derive(Debug, Clone, Default)]
pub struct Failures {
    pub respond: bool,
    pub fetch: bool,
    pub delete: bool,
    pub send: bool,
    pub channel_name: bool,
    pub create: Vec<String>,
}

fn simulated(what: &str) -> DiscordError {
    DiscordError::new(DiscordErrorKind::SerenityError(format!("simulated {} failure", what)))
}

pub struct FakeClient {
    journal: Journal,
    history: Vec<String>,
    failures: Failures,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            journal: Arc::new(Mutex::new(Vec::new())),
            history: Vec::new(),
            failures: Failures::default(),
        }
    }

    /// Messages preceding the trigger message, newest first.
    pub fn with_history(mut self, count: usize) -> Self {
        self.history = (0..count).map(|i| format!("{}", 900 - i)).collect();
        self
    }

    pub fn failing(mut self, failures: Failures) -> Self {
        self.failures = failures;
        self
    }

    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }

    fn record(&self, call: Call) {
        self.journal.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PlatformClient for FakeClient {
    async fn create_command(&self, spec: &CommandSpec) -> DiscordResult<()> {
        self.record(Call::CreateCommand(spec.name().clone()));
        if self.failures.create.contains(spec.name()) {
            return Err(DiscordError::new(DiscordErrorKind::CommandRegistrationFailed {
                command: spec.name().clone(),
                reason: "simulated".to_string(),
            }));
        }
        Ok(())
    }

    async fn respond(
        &self,
        _event: &InteractionEvent,
        reply: &InteractionReply,
    ) -> DiscordResult<()> {
        self.record(Call::Respond {
            content: reply.content().clone(),
            ephemeral: *reply.is_ephemeral(),
        });
        if self.failures.respond {
            return Err(simulated("respond"));
        }
        Ok(())
    }

    async fn fetch_messages(
        &self,
        channel_id: &str,
        limit: u8,
        before: &str,
    ) -> DiscordResult<Vec<String>> {
        self.record(Call::FetchMessages {
            channel_id: channel_id.to_string(),
            limit,
            before: before.to_string(),
        });
        if self.failures.fetch {
            return Err(DiscordError::new(DiscordErrorKind::MessageFetchFailed(
                "simulated fetch failure".to_string(),
            )));
        }
        Ok(self.history.iter().take(limit as usize).cloned().collect())
    }

    async fn bulk_delete(&self, channel_id: &str, message_ids: &[String]) -> DiscordResult<()> {
        self.record(Call::BulkDelete {
            channel_id: channel_id.to_string(),
            ids: message_ids.to_vec(),
        });
        if self.failures.delete {
            return Err(simulated("delete"));
        }
        Ok(())
    }

    async fn send_message(&self, channel_id: &str, content: &str) -> DiscordResult<()> {
        self.record(Call::SendMessage {
            channel_id: channel_id.to_string(),
            content: content.to_string(),
        });
        if self.failures.send {
            return Err(simulated("send"));
        }
        Ok(())
    }

    async fn channel_name(&self, channel_id: &str) -> DiscordResult<String> {
        self.record(Call::ChannelName(channel_id.to_string()));
        if self.failures.channel_name {
            return Err(simulated("channel lookup"));
        }
        Ok("general".to_string())
    }
}

pub struct RecordingAudit {
    journal: Journal,
}

impl RecordingAudit {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl AuditSink for RecordingAudit {
    fn send(&self, entry: AuditEntry) {
        self.journal.lock().unwrap().push(Call::Audit(entry));
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FakeOracle {
    Allow,
    Deny,
    Fail,
}

#[async_trait]
impl PermissionOracle for FakeOracle {
    async fn is_admin(&self, user_id: &str) -> SecurityResult<bool> {
        match self {
            FakeOracle::Allow => Ok(true),
            FakeOracle::Deny => Ok(false),
            FakeOracle::Fail => Err(SecurityError::new(SecurityErrorKind::LookupFailed {
                user_id: user_id.to_string(),
                reason: "simulated".to_string(),
            })),
        }
    }
}

/// Dispatcher over the standard registry with fake collaborators.
pub struct Harness {
    pub journal: Journal,
    pub client: Arc<FakeClient>,
    pub audit: Arc<RecordingAudit>,
    pub dispatcher: InteractionDispatcher,
}

impl Harness {
    pub fn new(client: FakeClient, oracle: FakeOracle) -> Self {
        let journal = client.journal();
        let client = Arc::new(client);
        let audit = Arc::new(RecordingAudit::new(journal.clone()));
        let registry = standard_registry(client.clone(), audit.clone(), RESOURCES_CHANNEL);
        let dispatcher =
            InteractionDispatcher::new(Arc::new(registry), Arc::new(oracle), audit.clone());
        Self {
            journal,
            client,
            audit,
            dispatcher,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.journal.lock().unwrap().clone()
    }

    pub fn side_effects(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(Call::is_side_effect)
            .collect()
    }

    pub fn audits(&self) -> Vec<AuditEntry> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Audit(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    pub fn audits_of(&self, category: AuditCategory) -> Vec<AuditEntry> {
        self.audits()
            .into_iter()
            .filter(|entry| *entry.category() == category)
            .collect()
    }

    pub fn responses(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Respond { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }
}

/// A slash command event from member `77` (`nelly`) in channel `300`.
pub fn command_event(name: &str, options: Vec<CommandOption>) -> InteractionEvent {
    InteractionEvent::builder()
        .id(TRIGGER_ID)
        .token("interaction-token")
        .kind(InteractionKind::ChatCommand)
        .member(MemberRef::new("77", "nelly"))
        .channel_id(EVENT_CHANNEL)
        .command_name(name)
        .options(options)
        .build()
        .expect("all fields set")
}
