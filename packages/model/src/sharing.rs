//! Ownership checks, favorites, public share links and cloning.
//!
//! Every write is restricted to the single owner of a map. Reads through a
//! share link only succeed while the map is public and the link matches.

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::id_generator::{IdGenerator, MINDMAP_PREFIX, SHARE_PREFIX};
use crate::mindmap::{Edge, Mindmap, Node};

pub const CLONE_TITLE_SUFFIX: &str = " (copy)";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("User {actor} does not own mindmap {map_id}")]
    NotOwner { actor: String, map_id: String },

    #[error("Mindmap is not public or the share link is invalid")]
    NotPublic,
}

/// Partial update from the editor's save action. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MindmapUpdate {
    pub title: Option<String>,
    pub nodes: Option<Vec<Node>>,
    pub edges: Option<Vec<Edge>>,
}

impl Mindmap {
    pub fn ensure_owner(&self, actor: &str) -> Result<(), AccessError> {
        if self.owner == actor {
            Ok(())
        } else {
            Err(AccessError::NotOwner {
                actor: actor.to_string(),
                map_id: self.id.clone(),
            })
        }
    }

    pub fn update(&mut self, actor: &str, update: MindmapUpdate) -> Result<(), AccessError> {
        self.ensure_owner(actor)?;

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(nodes) = update.nodes {
            self.nodes = nodes;
        }
        if let Some(edges) = update.edges {
            self.edges = edges;
        }
        Ok(())
    }

    pub fn set_favorite(&mut self, actor: &str, favorite: bool) -> Result<(), AccessError> {
        self.ensure_owner(actor)?;
        self.favorite = favorite;
        Ok(())
    }

    /// Issue a fresh share id and make the map public.
    ///
    /// Returns the share path `/public/<share id>`. Publishing again rotates
    /// the id, invalidating older links.
    pub fn publish(&mut self, actor: &str, ids: &mut dyn IdGenerator) -> Result<String, AccessError> {
        self.ensure_owner(actor)?;

        let share_id = ids.new_id(SHARE_PREFIX);
        debug!(map_id = %self.id, share_id = %share_id, "Publishing mindmap");

        self.public_share_id = Some(share_id.clone());
        self.is_public = true;
        Ok(format!("/public/{}", share_id))
    }

    /// Read-only access through a share link
    pub fn shared_view(&self, share_id: &str) -> Result<&Mindmap, AccessError> {
        match &self.public_share_id {
            Some(current) if self.is_public && current == share_id => Ok(self),
            _ => Err(AccessError::NotPublic),
        }
    }

    /// Copy the map's content into a new private map owned by `new_owner`
    pub fn clone_for(&self, new_owner: &str, ids: &mut dyn IdGenerator) -> Mindmap {
        let id = ids.new_id(MINDMAP_PREFIX);
        debug!(source = %self.id, clone = %id, "Cloning mindmap");

        Mindmap {
            id,
            title: format!("{}{}", self.title, CLONE_TITLE_SUFFIX),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            owner: new_owner.to_string(),
            favorite: false,
            is_public: false,
            public_share_id: None,
            created_at: Some(Utc::now()),
        }
    }

    /// Clone through a share link; only public maps can be cloned this way
    pub fn clone_shared(
        &self,
        share_id: &str,
        new_owner: &str,
        ids: &mut dyn IdGenerator,
    ) -> Result<Mindmap, AccessError> {
        Ok(self.shared_view(share_id)?.clone_for(new_owner, ids))
    }
}
