// SPDX-License-Identifier: MPL-2.0
//! Stack of modal menus.
//!
//! The stack keeps every opened menu factory but materializes only the top
//! one. Closing a submenu therefore returns to its parent menu rather than to
//! the base controls.

/// Builds the renderable node of a menu.
pub trait MenuFactory {
    type Node;

    fn build(&self) -> Self::Node;
}

impl<N, F> MenuFactory for F
where
    F: Fn() -> N,
{
    type Node = N;

    fn build(&self) -> N {
        self()
    }
}

/// What a push or pop did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackChange {
    /// The first menu was opened on an empty stack.
    Opened,
    /// A menu was pushed on top of, or popped back to, another menu.
    Replaced,
    /// The last menu was closed.
    Emptied,
    /// Close on an empty stack.
    Unchanged,
}

#[derive(Debug)]
pub struct MenuStack<F: MenuFactory> {
    entries: Vec<F>,
    current: Option<F::Node>,
}

impl<F: MenuFactory> Default for MenuStack<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            current: None,
        }
    }
}

impl<F: MenuFactory> MenuStack<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `factory` and materializes it as the current menu.
    pub fn push(&mut self, factory: F) -> StackChange {
        let was_empty = self.entries.is_empty();
        self.current = Some(factory.build());
        self.entries.push(factory);
        if was_empty {
            StackChange::Opened
        } else {
            StackChange::Replaced
        }
    }

    /// Pops the top menu and materializes the one below it, if any.
    pub fn pop(&mut self) -> StackChange {
        if self.entries.pop().is_none() {
            return StackChange::Unchanged;
        }
        self.current = self.entries.last().map(MenuFactory::build);
        if self.current.is_some() {
            StackChange::Replaced
        } else {
            StackChange::Emptied
        }
    }

    /// The materialized top menu.
    #[must_use]
    pub fn current(&self) -> Option<&F::Node> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Named = fn() -> &'static str;

    fn menu_a() -> &'static str {
        "A"
    }

    fn menu_b() -> &'static str {
        "B"
    }

    #[test]
    fn push_materializes_top() {
        let mut stack: MenuStack<Named> = MenuStack::new();
        assert_eq!(stack.push(menu_a), StackChange::Opened);
        assert_eq!(stack.current(), Some(&"A"));
        assert_eq!(stack.push(menu_b), StackChange::Replaced);
        assert_eq!(stack.current(), Some(&"B"));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn pop_restores_previous_menu() {
        let mut stack: MenuStack<Named> = MenuStack::new();
        stack.push(menu_a);
        stack.push(menu_b);

        assert_eq!(stack.pop(), StackChange::Replaced);
        assert_eq!(stack.current(), Some(&"A"));
        assert_eq!(stack.pop(), StackChange::Emptied);
        assert_eq!(stack.current(), None);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn pop_on_empty_stack_is_noop() {
        let mut stack: MenuStack<Named> = MenuStack::new();
        assert_eq!(stack.pop(), StackChange::Unchanged);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn only_top_entry_is_built() {
        let builds = Cell::new(0);
        let factory = || {
            builds.set(builds.get() + 1);
            builds.get()
        };
        let mut stack = MenuStack::new();
        stack.push(&factory);
        stack.push(&factory);
        stack.push(&factory);
        assert_eq!(builds.get(), 3);

        stack.pop();
        assert_eq!(builds.get(), 4);
        assert_eq!(stack.current(), Some(&4));
    }
}
