//! Host-group and user-group kinds.
//!
//! Groups are the degenerate case of the reconciliation loop: the name is the
//! whole record, there are no batch dependencies, and creation takes nothing
//! but the name. The two classes differ only in API method names and the id
//! key in the reply.

use super::{RecordKind, Submission, classify};
use crate::error::ProvisionError;
use crate::inventory;
use crate::record;
use serde_json::json;
use std::path::Path;
use zbxrpc::Rpc;

/// Which group entity a [`GroupKind`] provisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupClass {
    /// `hostgroup.*` methods, ids under `groupids`.
    Host,
    /// `usergroup.*` methods, ids under `usrgrpids`.
    User,
}

impl GroupClass {
    fn create_method(self) -> &'static str {
        match self {
            Self::Host => "hostgroup.create",
            Self::User => "usergroup.create",
        }
    }

    fn ids_key(self) -> &'static str {
        match self {
            Self::Host => "groupids",
            Self::User => "usrgrpids",
        }
    }
}

/// Groups provisioned from a one-name-per-line list.
#[derive(Debug, Clone, Copy)]
pub struct GroupKind {
    pub class: GroupClass,
}

impl RecordKind for GroupKind {
    type Row = String;
    type Prepared = String;
    type Batch = ();

    fn label(&self) -> &'static str {
        match self.class {
            GroupClass::Host => "host group",
            GroupClass::User => "user group",
        }
    }

    fn load(&self, path: &Path) -> Result<Vec<(usize, String)>, ProvisionError> {
        record::load_names(path)
    }

    fn prepare(&self, _rpc: &dyn Rpc) -> Result<(), ProvisionError> {
        Ok(())
    }

    fn screen(&self, _row: &String) -> Option<String> {
        // the name-list parser never yields empty names
        None
    }

    fn derive(&self, row: &String) -> Result<String, ProvisionError> {
        Ok(row.clone())
    }

    fn primary_name<'a>(&self, prepared: &'a String) -> &'a str {
        prepared
    }

    fn fallback_name(&self, row: &String) -> String {
        row.clone()
    }

    fn exists(&self, rpc: &dyn Rpc, name: &str) -> Result<bool, ProvisionError> {
        match self.class {
            GroupClass::Host => inventory::hostgroup_exists(rpc, name),
            GroupClass::User => inventory::usergroup_exists(rpc, name),
        }
    }

    fn create(
        &self,
        rpc: &dyn Rpc,
        prepared: &String,
        _batch: &(),
    ) -> Result<Submission, ProvisionError> {
        let response = rpc.call(self.class.create_method(), json!({"name": prepared}))?;
        Ok(classify(response, self.class.ids_key()))
    }
}
