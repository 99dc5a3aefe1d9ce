//! # Navigation Stack
//!
//! The screens the shopper walked through, newest last.
//!
//! ```text
//! navigate(Login)    [Home]                 ──► [Home, Login]
//! navigate(Home)     [Home, Login]          ──► [Home]            (pops back)
//! go_back()          [Home]                 ──► [Home]            (root stays)
//! ```

use padaria_core::{Route, Screen};
use tracing::debug;

/// Stack of routes. Never empty; the root is Home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator {
            stack: vec![Route::Home],
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The route on top of the stack.
    pub fn current(&self) -> &Route {
        // The stack always holds the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_screen(&self) -> Screen {
        self.current().screen()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Goes to `route`.
    ///
    /// If a route for the same screen is already on the stack, everything
    /// above it is popped and its payload is replaced. Otherwise pushes.
    pub fn navigate(&mut self, route: Route) {
        let screen = route.screen();
        match self.stack.iter().rposition(|r| r.screen() == screen) {
            Some(index) => {
                self.stack.truncate(index + 1);
                self.stack[index] = route;
            }
            None => self.stack.push(route),
        }
        debug!(screen = ?screen, depth = self.stack.len(), "Navigated");
    }

    /// Pops the current route. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        debug!(screen = ?self.current_screen(), "Went back");
        true
    }

    /// Drops the whole history and shows Home.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
        self.stack[0] = Route::Home;
    }
}
