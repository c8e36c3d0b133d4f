//! The request-handling actions.
//!
//! Each action is the host-facing face of one façade operation: resolve
//! the configured connection, read the configured key, pull the field out
//! of the request, delegate, wrap the body in a 200 response. The host
//! owns routing and error rendering; actions return [`Result`] and the
//! host maps failures through [`hashgate_core::ErrorBody`].

use hashgate_core::{Parameters, Request, Response, Result};
use hashgate_provider::{action_configure, FormElement};
use hashgate_store::{Connector, HashCommands, KeyFieldStore};

/// The `{configure, handle}` contract the host invokes on an action.
pub trait Action {
    /// Catalog name of this action.
    fn name(&self) -> &'static str;

    /// The operator form for configuring an instance: connection
    /// selector plus key input.
    fn configure(&self) -> Vec<FormElement> {
        action_configure()
    }

    /// Handle one request against one configured instance.
    fn handle(
        &self,
        request: &Request,
        params: &Parameters,
        connector: &dyn Connector,
    ) -> Result<Response>;
}

/// Open the configured connection as a façade.
fn open_store(
    params: &Parameters,
    connector: &dyn Connector,
) -> Result<KeyFieldStore<Box<dyn HashCommands>>> {
    let name = params.require_connection()?;
    let backend = connector.connect(name)?;
    Ok(KeyFieldStore::new(backend))
}

/// Returns a single field: `GET /:field`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashGet;

impl Action for HashGet {
    fn name(&self) -> &'static str {
        "Redis-Hash-Get"
    }

    fn handle(
        &self,
        request: &Request,
        params: &Parameters,
        connector: &dyn Connector,
    ) -> Result<Response> {
        let mut store = open_store(params, connector)?;
        let key = params.require_key()?;
        let field = request.require_argument("field")?;

        let body = store.get_field(key, field)?;
        Ok(Response::ok(body))
    }
}

/// Returns the full field mapping: `GET /`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashGetAll;

impl Action for HashGetAll {
    fn name(&self) -> &'static str {
        "Redis-Hash-GetAll"
    }

    fn handle(
        &self,
        _request: &Request,
        params: &Parameters,
        connector: &dyn Connector,
    ) -> Result<Response> {
        let mut store = open_store(params, connector)?;
        let key = params.require_key()?;

        let body = store.get_all_fields(key)?;
        Ok(Response::ok(body))
    }
}

/// Upserts a field from the request body: `PUT /:field`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashSet;

impl Action for HashSet {
    fn name(&self) -> &'static str {
        "Redis-Hash-Set"
    }

    fn handle(
        &self,
        request: &Request,
        params: &Parameters,
        connector: &dyn Connector,
    ) -> Result<Response> {
        let mut store = open_store(params, connector)?;
        let key = params.require_key()?;
        let field = request.require_argument("field")?;

        let body = store.set_field(key, field, request.payload())?;
        Ok(Response::ok(body))
    }
}

/// Deletes one or more fields: `DELETE /:field`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashDelete;

impl Action for HashDelete {
    fn name(&self) -> &'static str {
        "Redis-Hash-Delete"
    }

    fn handle(
        &self,
        request: &Request,
        params: &Parameters,
        connector: &dyn Connector,
    ) -> Result<Response> {
        let mut store = open_store(params, connector)?;
        let key = params.require_key()?;
        let selector = request.field_selector()?;

        let body = store.delete_fields(key, &selector)?;
        Ok(Response::ok(body))
    }
}
