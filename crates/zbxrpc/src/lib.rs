//! # zbxrpc
//!
//! Minimal blocking client for the Zabbix JSON-RPC API.
//!
//! This crate provides:
//! - The JSON-RPC 2.0 envelope types Zabbix uses ([`RpcRequest`],
//!   [`RpcResponse`], [`ApiError`])
//! - [`ZabbixClient`], a blocking `ureq`-based client with `user.login`
//!   session handling
//! - The [`Rpc`] trait, the single call primitive everything above the
//!   transport depends on
//! - [`MockRpc`] for tests that need to observe or script API traffic
//!
//! ## Example
//!
//! ```no_run
//! use zbxrpc::{Rpc, ZabbixClient};
//! use serde_json::json;
//!
//! let mut client = ZabbixClient::new("http://zabbix.example.com/api_jsonrpc.php");
//! client.login("Admin", "zabbix")?;
//!
//! let response = client.call(
//!     "hostgroup.get",
//!     json!({"output": ["groupid", "name"], "filter": {"name": ["Linux servers"]}}),
//! )?;
//! if let Some(error) = response.error {
//!     eprintln!("rejected: {}", error);
//! }
//! # Ok::<(), zbxrpc::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod mock;
pub mod types;

pub use client::{Rpc, ZabbixClient};
pub use error::{Error, Result};
pub use mock::MockRpc;
pub use types::{ApiError, RpcRequest, RpcResponse};
