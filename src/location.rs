//! Decoding of opaque source-location tokens.
//!
//! Every named IR node carries an optional location token produced by the
//! upstream parser. A token is a semicolon-separated list of integers:
//!
//! - `line;column;offset` for a zero-length range at a single position
//! - `startLine;startColumn;startOffset;endLine;endColumn;endOffset`
//!
//! Either form may carry one trailing integer naming the source-document
//! index (multi-document services). Absent, malformed, or truncated tokens
//! decode to the zero range at document 0, never an error.

use serde::Serialize;

/// A position within a source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

/// A half-open range within a source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// The result of decoding a location token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoded {
    pub range: Range,
    pub source_index: usize,
}

/// Decode a location token into a concrete range and source-document index.
pub fn decode(token: Option<&str>) -> Decoded {
    let Some(token) = token else {
        return Decoded::default();
    };

    let parts: Vec<u32> = token
        .split(';')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .unwrap_or_default();

    let position = |line: u32, column: u32, offset: u32| Position {
        line,
        column,
        offset,
    };

    match parts.as_slice() {
        [l, c, o] => Decoded {
            range: Range {
                start: position(*l, *c, *o),
                end: position(*l, *c, *o),
            },
            source_index: 0,
        },
        [l, c, o, idx] => Decoded {
            range: Range {
                start: position(*l, *c, *o),
                end: position(*l, *c, *o),
            },
            source_index: *idx as usize,
        },
        [sl, sc, so, el, ec, eo] => Decoded {
            range: Range {
                start: position(*sl, *sc, *so),
                end: position(*el, *ec, *eo),
            },
            source_index: 0,
        },
        [sl, sc, so, el, ec, eo, idx] => Decoded {
            range: Range {
                start: position(*sl, *sc, *so),
                end: position(*el, *ec, *eo),
            },
            source_index: *idx as usize,
        },
        _ => Decoded::default(),
    }
}
