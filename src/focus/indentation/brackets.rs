//! Bracket index
//!
//!     Every bracket token of the buffer, in position order, with its nesting depth and the
//!     index of its partner. Matching is done once, in a single forward pass with one stack per
//!     bracket kind, so a lookup is a binary search by position followed by an index hop.
//!
//!     Only tokens categorized `paren.lparen` / `paren.rparen` are indexed. A brace inside a
//!     string or a comment is part of a string or comment token and is never seen here.
//!
//!     Kinds are matched independently: a `}` pairs with the nearest unmatched `{` before it
//!     regardless of any `(` or `[` in between. That is the same answer a backward scan from
//!     the `}` counting only braces would give.

use crate::focus::document::{BracketPosition, Position};
use crate::focus::token::{LineTokens, TokenCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketEntry {
    pub position: Position,
    pub glyph: char,
    /// Number of enclosing brackets of the same kind.
    pub depth: usize,
    /// Index of the matching bracket in the index, if it has one.
    pub partner: Option<usize>,
}

impl BracketEntry {
    pub fn is_open(&self) -> bool {
        matches!(self.glyph, '(' | '[' | '{')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketIndex {
    entries: Vec<BracketEntry>,
}

/// Slot of a bracket kind in the per-kind stacks, plus whether it opens.
fn kind_of(glyph: char) -> Option<(usize, bool)> {
    match glyph {
        '(' => Some((0, true)),
        ')' => Some((0, false)),
        '[' => Some((1, true)),
        ']' => Some((1, false)),
        '{' => Some((2, true)),
        '}' => Some((2, false)),
        _ => None,
    }
}

impl BracketIndex {
    /// Index the bracket tokens of consecutive lines, the first being row 0.
    pub fn build<'a>(lines: impl IntoIterator<Item = &'a LineTokens>) -> Self {
        let mut entries: Vec<BracketEntry> = Vec::new();
        let mut open: [Vec<usize>; 3] = Default::default();

        for (row, line) in lines.into_iter().enumerate() {
            for token in line.tokens.iter().filter(|t| t.category.is_paren()) {
                for (offset, glyph) in token.lexeme.chars().enumerate() {
                    let Some((kind, opens)) = kind_of(glyph) else {
                        continue;
                    };
                    let idx = entries.len();
                    let position = Position::new(row, token.start_column + offset);
                    if opens {
                        entries.push(BracketEntry {
                            position,
                            glyph,
                            depth: open[kind].len(),
                            partner: None,
                        });
                        open[kind].push(idx);
                    } else {
                        let partner = open[kind].pop();
                        let depth = partner.map_or(0, |p| entries[p].depth);
                        if let Some(p) = partner {
                            entries[p].partner = Some(idx);
                        }
                        entries.push(BracketEntry {
                            position,
                            glyph,
                            depth,
                            partner,
                        });
                    }
                }
            }
        }

        tracing::trace!(brackets = entries.len(), "bracket index built");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[BracketEntry] {
        &self.entries
    }

    /// The bracket at exactly `position`.
    pub fn get(&self, position: Position) -> Option<&BracketEntry> {
        self.entries
            .binary_search_by(|entry| entry.position.cmp(&position))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Position of the partner of the bracket at `position`.
    pub fn matching(&self, position: Position) -> Option<BracketPosition> {
        let partner = self.get(position)?.partner?;
        Some(self.entries[partner].position)
    }
}
