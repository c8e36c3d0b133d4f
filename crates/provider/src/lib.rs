//! Declarative setup metadata for the hash-backed resource.
//!
//! The host auto-provisions a resource from three immutable tables built
//! here once at setup time: response/request schemas, pre-configured
//! action instances, and the HTTP operations binding paths to actions.
//! Alongside them sit the configuration-form definitions the host renders
//! for operators, and the flat component registry the host walks during
//! plugin registration.
//!
//! Everything in this crate is plain data; nothing here talks to a store
//! or dispatches a request.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as Json};

use hashgate_core::{Parameters, Result};

/// Schema name for the full-mapping response.
pub const SCHEMA_GET_ALL: &str = "Redis_GetAll";
/// Schema name for the single-field response.
pub const SCHEMA_GET: &str = "Redis_Get";
/// Schema name for the set request body.
pub const SCHEMA_SET: &str = "Redis_Set";
/// Host-supplied shared message schema for mutation outcomes.
pub const SCHEMA_MESSAGE: &str = "Message";

/// Action name for the full-mapping read.
pub const ACTION_GET_ALL: &str = "Redis_GetAll";
/// Action name for the single-field read.
pub const ACTION_GET: &str = "Redis_Get";
/// Action name for the field upsert.
pub const ACTION_SET: &str = "Redis_Set";
/// Action name for the field delete.
pub const ACTION_DELETE: &str = "Redis_Delete";

/// Which handler an action record binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Single-field read.
    Get,
    /// Full-mapping read.
    GetAll,
    /// Field upsert.
    Set,
    /// Field delete.
    Delete,
}

/// A named schema with its JSON source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDef {
    /// Schema name the operations reference.
    pub name: String,
    /// JSON Schema source.
    pub source: Json,
}

/// Configuration baked into an action instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Name of the provisioned connection.
    pub connection: String,
    /// The hash key.
    pub key: String,
}

/// A pre-configured action record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDef {
    /// Action name the operations reference.
    pub name: String,
    /// Handler this action binds to.
    pub kind: ActionKind,
    /// Instance configuration.
    pub config: ActionConfig,
}

/// An HTTP operation binding a method/path to an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDef {
    /// Operation name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// HTTP method.
    pub http_method: String,
    /// Path relative to the host-assigned base path.
    pub http_path: String,
    /// Success status code.
    pub http_code: u16,
    /// Request-body schema, when the operation takes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming: Option<String>,
    /// Response-body schema.
    pub outgoing: String,
    /// Action the operation dispatches to.
    pub action: String,
}

/// One element of a configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum FormElement {
    /// A connection selector.
    Connection {
        /// Field name.
        name: String,
        /// Display title.
        title: String,
        /// Operator-facing help text.
        help: String,
    },
    /// A plain input.
    Input {
        /// Field name.
        name: String,
        /// Display title.
        title: String,
        /// Input type, e.g. `text` or `number`.
        input_type: String,
        /// Operator-facing help text.
        help: String,
    },
}

impl FormElement {
    fn connection(name: &str, title: &str, help: &str) -> Self {
        FormElement::Connection {
            name: name.into(),
            title: title.into(),
            help: help.into(),
        }
    }

    fn input(name: &str, title: &str, input_type: &str, help: &str) -> Self {
        FormElement::Input {
            name: name.into(),
            title: title.into(),
            input_type: input_type.into(),
            help: help.into(),
        }
    }
}

/// The full setup handed to the host's registration interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    /// Schemas, in registration order.
    pub schemas: Vec<SchemaDef>,
    /// Pre-configured actions.
    pub actions: Vec<ActionDef>,
    /// HTTP operations.
    pub operations: Vec<OperationDef>,
}

/// Provider for the hash-backed resource.
///
/// Builds the setup tables from the operator's `{connection, key}`
/// parameters. Stateless; `setup` may be called once per provisioned
/// resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashResourceProvider;

impl HashResourceProvider {
    /// Provider name shown in the host's catalog.
    pub fn name(&self) -> &'static str {
        "Redis-Hash"
    }

    /// The operator form for provisioning a resource.
    pub fn configure(&self) -> Vec<FormElement> {
        vec![
            FormElement::connection(
                "connection",
                "Connection",
                "The Redis connection which should be used",
            ),
            FormElement::input("key", "Key", "text", "Name of the key"),
        ]
    }

    /// Build the setup tables.
    ///
    /// Requires a connection reference and a key; missing either is an
    /// operator mistake ([`hashgate_core::Error::Configuration`]).
    pub fn setup(&self, params: &Parameters) -> Result<Setup> {
        let connection = params.require_connection()?.to_string();
        let key = params.require_key()?.to_string();
        let config = ActionConfig { connection, key };

        Ok(Setup {
            schemas: schemas(),
            actions: actions(&config),
            operations: operations(),
        })
    }
}

fn schemas() -> Vec<SchemaDef> {
    vec![
        SchemaDef {
            name: SCHEMA_GET_ALL.into(),
            source: json!({
                "type": "object",
                "properties": {
                    "values": {
                        "type": "object",
                        "additionalProperties": { "type": "string" }
                    }
                }
            }),
        },
        SchemaDef {
            name: SCHEMA_GET.into(),
            source: json!({
                "type": "object",
                "properties": {
                    "value": { "type": "string" }
                }
            }),
        },
        SchemaDef {
            name: SCHEMA_SET.into(),
            source: json!({
                "type": "object",
                "properties": {
                    "value": { "type": "string" }
                },
                "required": ["value"]
            }),
        },
    ]
}

fn actions(config: &ActionConfig) -> Vec<ActionDef> {
    let action = |name: &str, kind: ActionKind| ActionDef {
        name: name.into(),
        kind,
        config: config.clone(),
    };

    vec![
        action(ACTION_GET_ALL, ActionKind::GetAll),
        action(ACTION_GET, ActionKind::Get),
        action(ACTION_SET, ActionKind::Set),
        action(ACTION_DELETE, ActionKind::Delete),
    ]
}

fn operations() -> Vec<OperationDef> {
    vec![
        OperationDef {
            name: "getAll".into(),
            description: "Returns a collection of fields".into(),
            http_method: "GET".into(),
            http_path: "/".into(),
            http_code: 200,
            incoming: None,
            outgoing: SCHEMA_GET_ALL.into(),
            action: ACTION_GET_ALL.into(),
        },
        OperationDef {
            name: "get".into(),
            description: "Returns a single field".into(),
            http_method: "GET".into(),
            http_path: "/:field".into(),
            http_code: 200,
            incoming: None,
            outgoing: SCHEMA_GET.into(),
            action: ACTION_GET.into(),
        },
        OperationDef {
            name: "set".into(),
            description: "Updates an existing field".into(),
            http_method: "PUT".into(),
            http_path: "/:field".into(),
            http_code: 200,
            incoming: Some(SCHEMA_SET.into()),
            outgoing: SCHEMA_MESSAGE.into(),
            action: ACTION_SET.into(),
        },
        OperationDef {
            name: "delete".into(),
            description: "Deletes an existing field".into(),
            http_method: "DELETE".into(),
            http_path: "/:field".into(),
            http_code: 200,
            incoming: None,
            outgoing: SCHEMA_MESSAGE.into(),
            action: ACTION_DELETE.into(),
        },
    ]
}

/// The shared action form: connection selector plus key input.
pub fn action_configure() -> Vec<FormElement> {
    vec![
        FormElement::connection(
            "connection",
            "Connection",
            "The Redis connection which should be used",
        ),
        FormElement::input("key", "Key", "text", "The key"),
    ]
}

/// The connection form: host and port inputs.
pub fn connection_configure() -> Vec<FormElement> {
    vec![
        FormElement::input("host", "Host", "text", "Host of the redis server"),
        FormElement::input("port", "Port", "text", "Port of the redis server"),
    ]
}

/// One component this plugin contributes to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Component {
    /// A connection type.
    Connection(&'static str),
    /// A request-handling action.
    Action(&'static str),
    /// A resource provider.
    Provider(&'static str),
}

/// The flat component registry walked at plugin registration.
pub fn components() -> Vec<Component> {
    vec![
        Component::Connection("Redis"),
        Component::Action("Redis-Hash-Get"),
        Component::Action("Redis-Hash-GetAll"),
        Component::Action("Redis-Hash-Set"),
        Component::Action("Redis-Hash-Delete"),
        Component::Provider("Redis-Hash"),
    ]
}
