//! # Block Mutations
//!
//! Operations on a page's block list.
//!
//! ## Mutation Semantics
//!
//! ### AddBlock
//! - Appends a block with a fresh id and the type's default content
//! - Stacks below existing blocks: `x = 0`, `y = 100 * blocks before insert`
//!
//! ### UpdateBlock
//! - Replaces the block with the same id, at the same index
//! - Stored `id` and `type` always win over the caller's values
//! - Missing id is a no-op
//!
//! ### SetContentField
//! - Copies the current content, changes one key, then updates
//!
//! ### DeleteBlock
//! - Removes the block with the given id
//! - Missing id is a no-op, so deleting twice equals deleting once

use crate::document::Document;
use crate::registry::BlockRegistry;
use folio_common::{Block, BlockKind, Position};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Vertical distance between stacked blocks on the canvas
pub const BLOCK_SPACING: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new block of the given type
    #[serde(rename_all = "camelCase")]
    AddBlock { block_type: BlockKind },

    /// Replace a block's content, style and position
    UpdateBlock { block: Block },

    /// Set a single content key, keeping the others
    #[serde(rename_all = "camelCase")]
    SetContentField {
        block_id: String,
        field: String,
        value: Value,
    },

    /// Remove a block
    #[serde(rename_all = "camelCase")]
    DeleteBlock { block_id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block type must not be empty")]
    EmptyBlockType,
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub enum MutationResult {
    /// A block was appended
    Added { block: Block, version: u64 },

    /// An existing block was changed or removed
    Applied { version: u64 },

    /// Nothing changed (stale block id)
    Noop { reason: String },
}

impl MutationResult {
    pub fn changed(&self) -> bool {
        !matches!(self, MutationResult::Noop { .. })
    }
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddBlock { .. } => "add_block",
            Mutation::UpdateBlock { .. } => "update_block",
            Mutation::SetContentField { .. } => "set_content_field",
            Mutation::DeleteBlock { .. } => "delete_block",
        }
    }

    /// Validate without applying
    pub fn validate(&self) -> Result<(), MutationError> {
        match self {
            Mutation::AddBlock { block_type } if block_type.as_str().trim().is_empty() => {
                Err(MutationError::EmptyBlockType)
            }
            _ => Ok(()),
        }
    }

    /// Apply mutation to the document
    pub fn apply(
        &self,
        doc: &mut Document,
        registry: &BlockRegistry,
    ) -> Result<MutationResult, MutationError> {
        self.validate()?;

        let changed = match self {
            Mutation::AddBlock { block_type } => {
                let block = Self::apply_add(doc, registry, block_type);
                doc.version += 1;
                return Ok(MutationResult::Added {
                    block,
                    version: doc.version,
                });
            }

            Mutation::UpdateBlock { block } => Self::apply_update(doc, block.clone()),

            Mutation::SetContentField {
                block_id,
                field,
                value,
            } => Self::apply_set_content(doc, block_id, field, value),

            Mutation::DeleteBlock { block_id } => Self::apply_delete(doc, block_id),
        };

        if changed {
            doc.version += 1;
            Ok(MutationResult::Applied {
                version: doc.version,
            })
        } else {
            Ok(MutationResult::Noop {
                reason: format!("{}: block not found", self.name()),
            })
        }
    }

    fn apply_add(doc: &mut Document, registry: &BlockRegistry, kind: &BlockKind) -> Block {
        let block = Block {
            id: doc.fresh_block_id(),
            kind: kind.clone(),
            content: registry.default_content(kind),
            style: Map::new(),
            position: Position::new(0, doc.len() as i64 * BLOCK_SPACING),
        };
        doc.push_block(block.clone());
        block
    }

    fn apply_update(doc: &mut Document, block: Block) -> bool {
        match doc.position_of(&block.id) {
            Some(index) => {
                doc.replace_block(index, block);
                true
            }
            None => false,
        }
    }

    fn apply_set_content(doc: &mut Document, block_id: &str, field: &str, value: &Value) -> bool {
        let Some(existing) = doc.find_block(block_id) else {
            return false;
        };

        let mut updated = existing.clone();
        updated.content.insert(field.to_string(), value.clone());
        Self::apply_update(doc, updated)
    }

    fn apply_delete(doc: &mut Document, block_id: &str) -> bool {
        match doc.position_of(block_id) {
            Some(index) => {
                doc.remove_block(index);
                true
            }
            None => false,
        }
    }
}
