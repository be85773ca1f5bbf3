use log::warn;
use std::env;
use uuid::Uuid;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Process settings read once at startup (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Identifier of this node, fixed for the lifetime of the process.
    pub node_id: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("invalid PORT {:?}, falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let node_id = lookup("NODE_ID")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(generate_node_id);

        Self {
            host,
            port,
            node_id,
        }
    }
}

/// Random UUID v4 rendered without dashes.
pub fn generate_node_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::{Settings, generate_node_id};
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]);
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.port, 5000);
        assert_eq!(s.node_id.len(), 32);
    }

    #[test]
    fn overrides() {
        let s = settings(&[("HOST", "0.0.0.0"), ("PORT", "8080"), ("NODE_ID", " node-1 ")]);
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.port, 8080);
        assert_eq!(s.node_id, "node-1");
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(settings(&[("PORT", "eighty")]).port, 5000);
    }

    #[test]
    fn node_ids_have_no_dashes_and_differ() {
        let a = generate_node_id();
        let b = generate_node_id();
        assert!(!a.contains('-'));
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
