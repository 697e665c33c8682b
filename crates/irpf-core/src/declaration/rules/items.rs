//! Splitting a section into item chunks.

use tracing::debug;

use super::patterns::ITEM_ANCHOR;

/// Text of one item, from its anchor line up to the next anchor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChunk<'a> {
    /// Two-digit group code from the anchor.
    pub group: &'a str,
    /// Two-digit item code from the anchor.
    pub code: &'a str,
    /// Anchor line and every following line that belongs to the item.
    pub text: &'a str,
}

impl<'a> ItemChunk<'a> {
    /// The anchor line.
    pub fn first_line(&self) -> &'a str {
        self.text.lines().next().unwrap_or(self.text)
    }
}

/// Split a section into items, in document order.
///
/// An item starts at every line beginning with two two-digit tokens
/// (`GG CC ...`). Text before the first anchor is not part of any item.
pub fn split_items(section: &str) -> Vec<ItemChunk<'_>> {
    let anchors: Vec<_> = ITEM_ANCHOR.captures_iter(section).collect();

    let items: Vec<ItemChunk<'_>> = anchors
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let whole = caps.get(0)?;
            let end = anchors
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(section.len());

            Some(ItemChunk {
                group: caps.get(1)?.as_str(),
                code: caps.get(2)?.as_str(),
                text: &section[whole.start()..end],
            })
        })
        .collect();

    debug!("Found {} item anchors in section", items.len());
    items
}
