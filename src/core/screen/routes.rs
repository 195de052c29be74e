//=========================================================================
// Screen Routes
//=========================================================================
//
// Maps (screen, finish code) to the next screen.
//
// A screen reports 0 while running and a nonzero outcome code once it
// is done. The code's meaning is screen specific (Title: 1 = options,
// 2 = gameplay), so routing lives in a table instead of being spread
// through per-screen branches.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::ScreenId;

//=== FinishCode ==========================================================

/// Which nonzero finish codes a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishCode {
    /// Any nonzero code.
    Any,

    /// Exactly this code.
    Code(i32),
}

impl FinishCode {
    fn accepts(self, code: i32) -> bool {
        match self {
            Self::Any => code != 0,
            Self::Code(expected) => code != 0 && code == expected,
        }
    }
}

//=== ScreenRoutes ========================================================

/// Routing table from finished screens to their successors.
#[derive(Debug, Clone, Default)]
pub struct ScreenRoutes {
    routes: HashMap<ScreenId, Vec<(FinishCode, ScreenId)>>,
}

impl ScreenRoutes {
    /// Creates an empty table; every finish code is unrouted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The game's flow:
    ///
    /// ```text
    /// Logo ──any──► Title ──1──► Options ──any──► Title
    ///                 └───2──► Gameplay ──1──► Ending ──1──► Title
    /// ```
    pub fn game() -> Self {
        Self::new()
            .with_route(ScreenId::Logo, FinishCode::Any, ScreenId::Title)
            .with_route(ScreenId::Title, FinishCode::Code(1), ScreenId::Options)
            .with_route(ScreenId::Title, FinishCode::Code(2), ScreenId::Gameplay)
            .with_route(ScreenId::Options, FinishCode::Any, ScreenId::Title)
            .with_route(ScreenId::Gameplay, FinishCode::Code(1), ScreenId::Ending)
            .with_route(ScreenId::Ending, FinishCode::Code(1), ScreenId::Title)
    }

    /// Builder form of [`add_route`](Self::add_route).
    pub fn with_route(mut self, from: ScreenId, on: FinishCode, to: ScreenId) -> Self {
        self.add_route(from, on, to);
        self
    }

    /// Adds a route. An existing route for the same `(from, on)` is
    /// replaced.
    pub fn add_route(&mut self, from: ScreenId, on: FinishCode, to: ScreenId) {
        let entries = self.routes.entry(from).or_default();
        match entries.iter_mut().find(|(code, _)| *code == on) {
            Some(entry) => entry.1 = to,
            None => entries.push((on, to)),
        }
    }

    /// Resolves the successor of `from` for `code`.
    ///
    /// Code 0 never routes. Exact codes win over [`FinishCode::Any`].
    pub fn resolve(&self, from: ScreenId, code: i32) -> Option<ScreenId> {
        if code == 0 {
            return None;
        }
        let entries = self.routes.get(&from)?;

        entries
            .iter()
            .find(|(on, _)| *on == FinishCode::Code(code))
            .or_else(|| entries.iter().find(|(on, _)| on.accepts(code)))
            .map(|&(_, to)| to)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
