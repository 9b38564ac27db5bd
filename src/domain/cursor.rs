//! Pagination cursors for trade history endpoints.
//!
//! Exchanges page their public trade history in one of two ways: by trade id
//! or by unix timestamp. Each client declares its [`CursorKind`]; the poller
//! threads whatever [`Cursor`] the client hands back into the next call.

use std::fmt;

/// How an exchange interprets the `since` argument of its history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    /// Exclusive lower bound on trade id.
    ById,
    /// Exclusive lower bound on unix time in seconds.
    ByTimestamp,
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById => f.write_str("by-id"),
            Self::ByTimestamp => f.write_str("by-timestamp"),
        }
    }
}

/// Position in an exchange's trade history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The exchange's own "most recent window" of trades.
    #[default]
    Latest,
    /// Trades with an id greater than this one.
    Id(i64),
    /// Trades newer than this unix time.
    Timestamp(i64),
}

impl Cursor {
    /// Pagination kind this cursor belongs to; `Latest` fits any.
    #[must_use]
    pub const fn kind(&self) -> Option<CursorKind> {
        match self {
            Self::Latest => None,
            Self::Id(_) => Some(CursorKind::ById),
            Self::Timestamp(_) => Some(CursorKind::ByTimestamp),
        }
    }

    /// Whether this cursor can be handed to a client paging by `kind`.
    #[must_use]
    pub fn fits(&self, kind: CursorKind) -> bool {
        self.kind().map_or(true, |k| k == kind)
    }

    /// Raw bound, if any.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self {
            Self::Latest => None,
            Self::Id(v) | Self::Timestamp(v) => Some(*v),
        }
    }

    /// Move to `next`, refusing to go backwards within the same kind.
    ///
    /// A `Latest` answer from the client leaves the cursor where it was.
    #[must_use]
    pub fn advance(self, next: Cursor) -> Cursor {
        match (self, next) {
            (current, Self::Latest) => current,
            (Self::Id(a), Self::Id(b)) => Self::Id(a.max(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Self::Timestamp(a.max(b)),
            (_, next) => next,
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Id(id) => write!(f, "id>{id}"),
            Self::Timestamp(ts) => write!(f, "ts>{ts}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_fits_every_kind() {
        assert!(Cursor::Latest.fits(CursorKind::ById));
        assert!(Cursor::Latest.fits(CursorKind::ByTimestamp));
        assert!(Cursor::Id(1).fits(CursorKind::ById));
        assert!(!Cursor::Id(1).fits(CursorKind::ByTimestamp));
        assert!(!Cursor::Timestamp(1).fits(CursorKind::ById));
    }

    #[test]
    fn advance_never_regresses() {
        assert_eq!(Cursor::Id(9).advance(Cursor::Id(7)), Cursor::Id(9));
        assert_eq!(Cursor::Id(7).advance(Cursor::Id(9)), Cursor::Id(9));
        assert_eq!(
            Cursor::Timestamp(100).advance(Cursor::Timestamp(90)),
            Cursor::Timestamp(100)
        );
    }

    #[test]
    fn advance_from_latest_takes_next() {
        assert_eq!(Cursor::Latest.advance(Cursor::Id(3)), Cursor::Id(3));
        assert_eq!(Cursor::Id(3).advance(Cursor::Latest), Cursor::Id(3));
        assert_eq!(Cursor::Latest.advance(Cursor::Latest), Cursor::Latest);
    }

    #[test]
    fn display() {
        assert_eq!(Cursor::Latest.to_string(), "latest");
        assert_eq!(Cursor::Id(9).to_string(), "id>9");
        assert_eq!(Cursor::Timestamp(5).to_string(), "ts>5");
        assert_eq!(CursorKind::ById.to_string(), "by-id");
    }
}
