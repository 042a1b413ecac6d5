//! Node records and node-derived identifiers.
//!
//! A node's identity is its `{ip, port}` endpoint and nothing else: whatever
//! other attributes the surrounding system attaches to a node, they never
//! influence its NID.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;
use crate::id::{Id, compute_id};

/// A participating node as seen by the identity layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Address the node listens on.
    pub ip: String,
    /// Port the node listens on.
    pub port: u16,
    /// Extra attributes carried by the surrounding system. Ignored by
    /// identity derivation.
    #[serde(default)]
    pub attrs: BTreeMap<String, serde_json::Value>,
}

impl Node {
    /// Create a node with no extra attributes.
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self {
            ip: ip.into(),
            port,
            attrs: BTreeMap::new(),
        }
    }

    /// Build a node from a dynamic JSON record.
    ///
    /// The record must be an object with a string `ip` and an integer `port`
    /// in `0..=65535`; every other field lands in `attrs`. This is the entry
    /// point for records of unknown shape — the typed constructor cannot
    /// produce an invalid node.
    pub fn from_value(value: serde_json::Value) -> Result<Self, IdentityError> {
        let serde_json::Value::Object(mut map) = value else {
            return Err(IdentityError::InvalidNode("expected a JSON object"));
        };

        let ip = match map.remove("ip") {
            Some(serde_json::Value::String(ip)) => ip,
            _ => return Err(IdentityError::InvalidNode("missing or non-string ip")),
        };

        let port = match map.remove("port") {
            Some(serde_json::Value::Number(n)) => n
                .as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .ok_or(IdentityError::InvalidNode("port out of range"))?,
            _ => return Err(IdentityError::InvalidNode("missing or non-integer port")),
        };

        Ok(Self {
            ip,
            port,
            attrs: map.into_iter().collect(),
        })
    }
}

/// Reduced record hashed for NID derivation. Field order: `ip`, then `port`.
#[derive(Serialize)]
struct Endpoint<'a> {
    ip: &'a str,
    port: u16,
}

/// Compute a node's identifier over its `{ip, port}` projection.
///
/// Two nodes with identical `ip` and `port` produce identical NIDs
/// regardless of their other attributes.
pub fn compute_nid(node: &Node) -> Result<Id, IdentityError> {
    compute_id(&Endpoint {
        ip: &node.ip,
        port: node.port,
    })
}

/// Compute a node's short identifier: the first 5 hex characters of its NID.
///
/// See [`Id::short`] — a display label, never a uniqueness guarantee.
pub fn compute_sid(node: &Node) -> Result<String, IdentityError> {
    Ok(compute_nid(node)?.short())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nid_ignores_extra_attrs() {
        let plain = Node::new("10.0.0.1", 8080);
        let mut decorated = Node::new("10.0.0.1", 8080);
        decorated
            .attrs
            .insert("region".to_string(), serde_json::json!("eu-west"));
        decorated
            .attrs
            .insert("weight".to_string(), serde_json::json!(3));

        assert_eq!(
            compute_nid(&plain).unwrap(),
            compute_nid(&decorated).unwrap(),
            "attrs must not influence the NID"
        );
    }

    #[test]
    fn test_nid_changes_with_endpoint() {
        let base = Node::new("10.0.0.1", 8080);
        let other_port = Node::new("10.0.0.1", 8081);
        let other_ip = Node::new("10.0.0.2", 8080);

        assert_ne!(compute_nid(&base).unwrap(), compute_nid(&other_port).unwrap());
        assert_ne!(compute_nid(&base).unwrap(), compute_nid(&other_ip).unwrap());
    }

    #[test]
    fn test_nid_deterministic() {
        let node = Node::new("192.168.1.10", 9000);
        assert_eq!(compute_nid(&node).unwrap(), compute_nid(&node).unwrap());
    }

    #[test]
    fn test_sid_is_nid_prefix() {
        let node = Node::new("192.168.1.10", 9000);
        let nid = compute_nid(&node).unwrap().to_string();
        let sid = compute_sid(&node).unwrap();
        assert_eq!(sid.len(), 5);
        assert_eq!(sid, nid[..5], "SID must be the first 5 hex chars of the NID");
    }

    #[test]
    fn test_from_value_full_record() {
        let node = Node::from_value(serde_json::json!({
            "ip": "10.0.0.1",
            "port": 8080,
            "status": "alive",
            "generation": 4,
        }))
        .unwrap();

        assert_eq!(node.ip, "10.0.0.1");
        assert_eq!(node.port, 8080);
        assert_eq!(node.attrs.len(), 2);
        assert_eq!(node.attrs["status"], serde_json::json!("alive"));
    }

    #[test]
    fn test_from_value_matches_typed_constructor() {
        let dynamic =
            Node::from_value(serde_json::json!({"ip": "10.0.0.1", "port": 8080, "x": 1})).unwrap();
        let typed = Node::new("10.0.0.1", 8080);
        assert_eq!(
            compute_nid(&dynamic).unwrap(),
            compute_nid(&typed).unwrap(),
            "both construction paths must derive the same NID"
        );
    }

    #[test]
    fn test_from_value_missing_ip() {
        let err = Node::from_value(serde_json::json!({"port": 8080})).unwrap_err();
        assert!(err.to_string().contains("ip"), "unexpected error: {err}");
    }

    #[test]
    fn test_from_value_missing_port() {
        let err = Node::from_value(serde_json::json!({"ip": "10.0.0.1"})).unwrap_err();
        assert!(err.to_string().contains("port"), "unexpected error: {err}");
    }

    #[test]
    fn test_from_value_port_out_of_range() {
        let err =
            Node::from_value(serde_json::json!({"ip": "10.0.0.1", "port": 70000})).unwrap_err();
        assert!(matches!(err, IdentityError::InvalidNode(_)));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = Node::from_value(serde_json::json!(["10.0.0.1", 8080])).unwrap_err();
        assert!(matches!(err, IdentityError::InvalidNode(_)));
    }
}
