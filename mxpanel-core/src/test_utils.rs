//! Test helper module.
//!
//! Mock repositories, an in-memory fake panel that speaks the wire format,
//! and factory methods for wired-up service contexts.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mxpanel_client::{PanelApi, PanelTransport};

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::traits::{AccountRepository, ServerRepository, SessionFactory, SessionScope};
use crate::types::{Account, CallerId, Server};

// ===== MockAccountRepository =====

pub struct MockAccountRepository {
    accounts: Mutex<HashMap<String, Account>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, account: Account) {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.id.clone(), account);
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Account>> {
        Ok(self.accounts.lock().unwrap().get(id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &str) -> CoreResult<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.owner_id == owner_id)
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(accounts)
    }
}

// ===== MockServerRepository =====

pub struct MockServerRepository {
    servers: Mutex<HashMap<String, Server>>,
}

impl MockServerRepository {
    pub fn new() -> Self {
        Self {
            servers: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, server: Server) {
        self.servers
            .lock()
            .unwrap()
            .insert(server.id.clone(), server);
    }
}

#[async_trait]
impl ServerRepository for MockServerRepository {
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Server>> {
        Ok(self.servers.lock().unwrap().get(id).cloned())
    }
}

// ===== FakePanel =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub command: String,
    pub params: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory panel speaking the real wire format.
///
/// Holds a mutable domain/mailbox state so created resources show up in
/// later listings, records every request, and can be told to reject the
/// next mutating command with a given `details` text.
pub struct FakePanel {
    domains: Mutex<Vec<String>>,
    mailboxes: Mutex<HashMap<String, Vec<String>>>,
    usage_body: Mutex<String>,
    config_body: Mutex<String>,
    zone_body: Mutex<String>,
    fail_next: Mutex<Option<String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakePanel {
    pub fn new() -> Self {
        Self {
            domains: Mutex::new(Vec::new()),
            mailboxes: Mutex::new(HashMap::new()),
            usage_body: Mutex::new("error=0".to_string()),
            config_body: Mutex::new("error=0".to_string()),
            zone_body: Mutex::new(String::new()),
            fail_next: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_domains(domains: &[&str]) -> Self {
        let panel = Self::new();
        *panel.domains.lock().unwrap() = domains.iter().map(ToString::to_string).collect();
        panel
    }

    pub fn add_mailbox(&self, domain: &str, prefix: &str) {
        self.mailboxes
            .lock()
            .unwrap()
            .entry(domain.to_string())
            .or_default()
            .push(prefix.to_string());
    }

    pub fn set_usage_body(&self, body: &str) {
        *self.usage_body.lock().unwrap() = body.to_string();
    }

    pub fn set_config_body(&self, body: &str) {
        *self.config_body.lock().unwrap() = body.to_string();
    }

    pub fn set_zone_body(&self, body: &str) {
        *self.zone_body.lock().unwrap() = body.to_string();
    }

    /// Reject the next mutating command with `error=1` and this detail text.
    pub fn fail_next(&self, details: &str) {
        *self.fail_next.lock().unwrap() = Some(details.to_string());
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn domains(&self) -> Vec<String> {
        self.domains.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Option<String> {
        self.fail_next.lock().unwrap().take()
    }

    fn respond(&self, method: &'static str, command: &str, params: &[(&str, &str)]) -> String {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            command: command.to_string(),
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        });

        let param = |key: &str| params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        match command {
            "/CMD_API_SHOW_DOMAINS" => list_body(&self.domains.lock().unwrap()),
            "/CMD_API_POP" => match param("action") {
                Some("list") => {
                    let domain = param("domain").unwrap_or_default();
                    let mailboxes = self.mailboxes.lock().unwrap();
                    list_body(mailboxes.get(domain).map_or(&[][..], Vec::as_slice))
                }
                Some("create") => {
                    if let Some(details) = self.take_failure() {
                        return failure_body(&details);
                    }
                    let domain = param("domain").unwrap_or_default().to_string();
                    let user = param("user").unwrap_or_default().to_string();
                    self.mailboxes
                        .lock()
                        .unwrap()
                        .entry(domain)
                        .or_default()
                        .push(user);
                    "error=0".to_string()
                }
                Some("delete") => {
                    if let Some(details) = self.take_failure() {
                        return failure_body(&details);
                    }
                    let domain = param("domain").unwrap_or_default();
                    let user = param("user").unwrap_or_default();
                    if let Some(list) = self.mailboxes.lock().unwrap().get_mut(domain) {
                        list.retain(|p| p != user);
                    }
                    "error=0".to_string()
                }
                Some("modify") => self
                    .take_failure()
                    .map_or_else(|| "error=0".to_string(), |d| failure_body(&d)),
                _ => failure_body("unknown action"),
            },
            "/CMD_API_DOMAIN" => {
                if let Some(details) = self.take_failure() {
                    return failure_body(&details);
                }
                if param("action") == Some("create") {
                    if let Some(domain) = param("domain") {
                        self.domains.lock().unwrap().push(domain.to_string());
                    }
                } else if let Some(domain) = param("select0") {
                    self.domains.lock().unwrap().retain(|d| d != domain);
                }
                "error=0".to_string()
            }
            "/CMD_API_SHOW_USER_USAGE" => self.usage_body.lock().unwrap().clone(),
            "/CMD_API_SHOW_USER_CONFIG" => self.config_body.lock().unwrap().clone(),
            "/CMD_API_DNS_CONTROL" => self.zone_body.lock().unwrap().clone(),
            "/CMD_API_LOGIN_KEYS" => self
                .take_failure()
                .map_or_else(|| "error=0".to_string(), |d| failure_body(&d)),
            _ => failure_body("unknown command"),
        }
    }
}

fn list_body(items: &[String]) -> String {
    if items.is_empty() {
        "error=0".to_string()
    } else {
        items
            .iter()
            .map(|item| format!("list[]={item}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn failure_body(details: &str) -> String {
    format!("error=1&details={}", details.replace(' ', "%20"))
}

#[async_trait]
impl PanelTransport for FakePanel {
    async fn get(&self, command: &str, query: &[(&str, &str)]) -> mxpanel_client::Result<String> {
        Ok(self.respond("GET", command, query))
    }

    async fn post(&self, command: &str, form: &[(&str, &str)]) -> mxpanel_client::Result<String> {
        Ok(self.respond("POST", command, form))
    }
}

// ===== FakeSessionFactory =====

pub struct FakeSessionFactory {
    panel: Arc<FakePanel>,
    scopes: Mutex<Vec<SessionScope>>,
}

impl FakeSessionFactory {
    pub fn new(panel: Arc<FakePanel>) -> Self {
        Self {
            panel,
            scopes: Mutex::new(Vec::new()),
        }
    }

    pub fn scopes(&self) -> Vec<SessionScope> {
        self.scopes.lock().unwrap().clone()
    }
}

impl SessionFactory for FakeSessionFactory {
    fn open(&self, _server: &Server, _account: &Account, scope: SessionScope) -> PanelApi {
        self.scopes.lock().unwrap().push(scope);
        PanelApi::new(Arc::clone(&self.panel) as Arc<dyn PanelTransport>)
    }
}

// ===== Factory methods =====

pub fn test_account() -> Account {
    Account {
        id: "acc1".to_string(),
        owner_id: "user1".to_string(),
        server_id: "srv1".to_string(),
        username: "client7".to_string(),
    }
}

pub fn test_server() -> Server {
    Server {
        id: "srv1".to_string(),
        hostname: "panel.example.net".to_string(),
        username: "admin".to_string(),
        api_key: "server-api-key".to_string(),
    }
}

pub fn owner() -> CallerId {
    CallerId::new("user1")
}

pub fn stranger() -> CallerId {
    CallerId::new("user2")
}

/// Context wired to a [`FakePanel`], pre-seeded with [`test_account`] and
/// [`test_server`].
pub fn create_test_context(
    panel: &Arc<FakePanel>,
) -> (
    Arc<ServiceContext>,
    Arc<FakeSessionFactory>,
    Arc<MockAccountRepository>,
    Arc<MockServerRepository>,
) {
    let account_repo = Arc::new(MockAccountRepository::new());
    account_repo.insert(test_account());
    let server_repo = Arc::new(MockServerRepository::new());
    server_repo.insert(test_server());
    let factory = Arc::new(FakeSessionFactory::new(Arc::clone(panel)));

    let ctx = Arc::new(ServiceContext::new(
        account_repo.clone(),
        server_repo.clone(),
        factory.clone(),
        CoreConfig::default(),
    ));

    (ctx, factory, account_repo, server_repo)
}
