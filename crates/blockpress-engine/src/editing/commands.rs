use crate::editing::document::{Block, BlockId, BlockKind, BlockType, ContentDocument};

/// Direction for neighbor swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Edits that can be applied to a content document.
///
/// Every command is synchronous and total: unknown ids and boundary moves
/// are silent no-ops, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Append a fresh block of the given type at the end of the document.
    AddBlock { block_type: BlockType },
    /// Replace a block's value (and caption, for image blocks). Id, type and
    /// position are never touched.
    UpdateBlock {
        id: BlockId,
        value: String,
        caption: Option<String>,
    },
    /// Remove the matching block without renumbering the others.
    DeleteBlock { id: BlockId },
    /// Swap the block at `index` with its immediate neighbor.
    MoveBlock { index: usize, direction: Direction },
}

/// Apply a command; returns whether the document was structurally changed.
pub(crate) fn apply_command(doc: &mut ContentDocument, cmd: &Cmd) -> bool {
    match cmd {
        Cmd::AddBlock { block_type } => {
            doc.push_block(Block::new(*block_type));
            true
        }
        Cmd::UpdateBlock { id, value, caption } => update_block(doc, id, value, caption.as_ref()),
        Cmd::DeleteBlock { id } => doc.remove_block(id),
        Cmd::MoveBlock { index, direction } => move_block(doc, *index, *direction),
    }
}

fn update_block(
    doc: &mut ContentDocument,
    id: &BlockId,
    new_value: &str,
    new_caption: Option<&String>,
) -> bool {
    let Some(block) = doc.block_mut(id) else {
        return false;
    };
    match &mut block.kind {
        BlockKind::Heading { value }
        | BlockKind::Paragraph { value }
        | BlockKind::Video { value } => {
            *value = new_value.to_string();
        }
        BlockKind::Image { value, caption } => {
            *value = new_value.to_string();
            if let Some(new_caption) = new_caption {
                *caption = Some(new_caption.clone());
            }
        }
    }
    true
}

fn move_block(doc: &mut ContentDocument, index: usize, direction: Direction) -> bool {
    let neighbor = match direction {
        Direction::Up => {
            if index == 0 {
                return false;
            }
            index - 1
        }
        Direction::Down => index + 1,
    };
    if index >= doc.len() || neighbor >= doc.len() {
        return false;
    }
    doc.swap_blocks(index, neighbor);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three_block_doc() -> ContentDocument {
        ContentDocument::from_blocks(vec![
            heading("a", "A"),
            heading("b", "B"),
            heading("c", "C"),
        ])
    }

    fn heading(id: &str, value: &str) -> Block {
        Block {
            id: BlockId::from(id),
            kind: BlockKind::Heading {
                value: value.to_string(),
            },
        }
    }

    fn ids(doc: &ContentDocument) -> Vec<&str> {
        doc.blocks().iter().map(|b| b.id.as_str()).collect()
    }

    // ============ AddBlock command tests ============

    #[test]
    fn test_add_block_appends_at_the_end() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::AddBlock {
            block_type: BlockType::Image,
        });

        assert!(changed);
        assert_eq!(doc.len(), 4);
        let added = &doc.blocks()[3];
        assert_eq!(added.kind.block_type(), BlockType::Image);
        assert_eq!(added.kind.value(), "");
        assert_eq!(added.kind.caption(), Some(""));
    }

    // ============ UpdateBlock command tests ============

    #[test]
    fn test_update_block_replaces_value_only() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::UpdateBlock {
            id: BlockId::from("b"),
            value: "New title".to_string(),
            caption: None,
        });

        assert!(changed);
        assert_eq!(doc.blocks()[1].kind.value(), "New title");
        assert_eq!(ids(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_update_block_sets_image_caption() {
        let mut doc = ContentDocument::from_blocks(vec![Block {
            id: BlockId::from("i"),
            kind: BlockKind::Image {
                value: String::new(),
                caption: Some(String::new()),
            },
        }]);

        doc.apply(&Cmd::UpdateBlock {
            id: BlockId::from("i"),
            value: "https://cdn.example/pic.jpg".to_string(),
            caption: Some("A caption".to_string()),
        });

        assert_eq!(doc.blocks()[0].kind.value(), "https://cdn.example/pic.jpg");
        assert_eq!(doc.blocks()[0].kind.caption(), Some("A caption"));
    }

    #[test]
    fn test_update_block_keeps_caption_when_none_supplied() {
        let mut doc = ContentDocument::from_blocks(vec![Block {
            id: BlockId::from("i"),
            kind: BlockKind::Image {
                value: "old.jpg".to_string(),
                caption: Some("Keep me".to_string()),
            },
        }]);

        doc.apply(&Cmd::UpdateBlock {
            id: BlockId::from("i"),
            value: "new.jpg".to_string(),
            caption: None,
        });

        assert_eq!(doc.blocks()[0].kind.value(), "new.jpg");
        assert_eq!(doc.blocks()[0].kind.caption(), Some("Keep me"));
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::UpdateBlock {
            id: BlockId::from("missing"),
            value: "x".to_string(),
            caption: None,
        });

        assert!(!changed);
        assert_eq!(doc, three_block_doc());
    }

    // ============ DeleteBlock command tests ============

    #[test]
    fn test_delete_block_removes_only_the_match() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::DeleteBlock {
            id: BlockId::from("b"),
        });

        assert!(changed);
        assert_eq!(ids(&doc), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::DeleteBlock {
            id: BlockId::from("missing"),
        });

        assert!(!changed);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_operations_after_delete_are_noops_for_that_id() {
        let mut doc = three_block_doc();
        doc.apply(&Cmd::DeleteBlock {
            id: BlockId::from("b"),
        });
        assert_eq!(doc.len(), 2);

        let update = doc.apply(&Cmd::UpdateBlock {
            id: BlockId::from("b"),
            value: "ghost".to_string(),
            caption: None,
        });
        let delete = doc.apply(&Cmd::DeleteBlock {
            id: BlockId::from("b"),
        });

        assert!(!update);
        assert!(!delete);
        assert_eq!(ids(&doc), vec!["a", "c"]);
    }

    // ============ MoveBlock command tests ============

    #[test]
    fn test_move_up_swaps_with_previous() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::MoveBlock {
            index: 1,
            direction: Direction::Up,
        });

        assert!(changed);
        assert_eq!(ids(&doc), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_down_swaps_with_next() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::MoveBlock {
            index: 1,
            direction: Direction::Down,
        });

        assert!(changed);
        assert_eq!(ids(&doc), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_move_first_up_is_a_noop() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::MoveBlock {
            index: 0,
            direction: Direction::Up,
        });

        assert!(!changed);
        assert_eq!(ids(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_last_down_is_a_noop() {
        let mut doc = three_block_doc();

        let changed = doc.apply(&Cmd::MoveBlock {
            index: 2,
            direction: Direction::Down,
        });

        assert!(!changed);
        assert_eq!(ids(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_out_of_range_index_is_a_noop() {
        let mut doc = three_block_doc();

        let up = doc.apply(&Cmd::MoveBlock {
            index: 9,
            direction: Direction::Up,
        });
        let down = doc.apply(&Cmd::MoveBlock {
            index: 9,
            direction: Direction::Down,
        });

        assert!(!up);
        assert!(!down);
        assert_eq!(ids(&doc), vec!["a", "b", "c"]);
    }
}
