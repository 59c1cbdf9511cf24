//! Id generation for nodes, edges, maps and share links.
//!
//! Ids are always produced through an injected `IdGenerator` so callers
//! decide between random ids (production) and sequential ids (tests, replay).

use uuid::Uuid;

pub const NODE_PREFIX: &str = "node";
pub const EDGE_PREFIX: &str = "edge";
pub const MINDMAP_PREFIX: &str = "mindmap";
pub const SHARE_PREFIX: &str = "share";

pub trait IdGenerator {
    /// Produce a fresh id of the form `<prefix>_<unique part>`
    fn new_id(&mut self, prefix: &str) -> String;
}

/// Random v4 uuids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&mut self, prefix: &str) -> String {
        format!("{}_{}", prefix, Uuid::new_v4())
    }
}

/// Deterministic ids: `<prefix>_<seed>-<n>`, or `<prefix>_<n>` without a seed
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    seed: String,
    count: u32,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&mut self, prefix: &str) -> String {
        self.count += 1;
        if self.seed.is_empty() {
            format!("{}_{}", prefix, self.count)
        } else {
            format!("{}_{}-{}", prefix, self.seed, self.count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = SequentialIdGenerator::new();

        assert_eq!(gen.new_id(NODE_PREFIX), "node_1");
        assert_eq!(gen.new_id(EDGE_PREFIX), "edge_2");
        assert_eq!(gen.new_id(NODE_PREFIX), "node_3");
    }

    #[test]
    fn test_seeded_ids() {
        let mut gen = SequentialIdGenerator::from_seed("abc");

        assert_eq!(gen.new_id(MINDMAP_PREFIX), "mindmap_abc-1");
        assert_eq!(gen.seed(), "abc");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut gen = UuidIdGenerator;
        let a = gen.new_id(SHARE_PREFIX);
        let b = gen.new_id(SHARE_PREFIX);

        assert!(a.starts_with("share_"));
        assert_ne!(a, b);
    }
}
