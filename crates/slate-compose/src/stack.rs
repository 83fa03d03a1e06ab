//! Ancestry of the region being rendered.

use std::sync::Arc;

use crate::resolved::ResolvedRegion;

/// One level of nesting: the region being rendered and its container size.
#[derive(Clone, Debug, PartialEq)]
pub struct Ancestor {
    /// Region whose render is in progress.
    pub region: Arc<ResolvedRegion>,
    /// Container size requested for that render.
    pub container_size: u32,
}

/// Per-request stack of regions currently being rendered.
///
/// The innermost entry is the parent of any region resolved while it is on
/// the stack. Entries are only pushed and popped by
/// [`Composition`](crate::Composition) through a scope guard, so the stack
/// is balanced on every exit path from a render.
#[derive(Debug, Default)]
pub struct AncestryStack {
    frames: Vec<Ancestor>,
}

impl AncestryStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost region, the parent of regions resolved now.
    #[must_use]
    pub fn parent(&self) -> Option<&ResolvedRegion> {
        self.frames.last().map(|frame| frame.region.as_ref())
    }

    /// Container size of the innermost render.
    #[must_use]
    pub fn container_size(&self) -> Option<u32> {
        self.frames.last().map(|frame| frame.container_size)
    }

    /// Number of nested renders in progress.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check whether no render is in progress.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Entries from outermost to innermost.
    pub fn iter(&self) -> impl Iterator<Item = &Ancestor> {
        self.frames.iter()
    }

    /// Region names from outermost to innermost.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.frames.iter().map(|frame| frame.region.name()).collect()
    }

    pub(crate) fn push(&mut self, region: Arc<ResolvedRegion>, container_size: u32) {
        self.frames.push(Ancestor {
            region,
            container_size,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Ancestor> {
        self.frames.pop()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use slate_model::RegionModel;

    use super::*;

    fn resolved(name: &str) -> Arc<ResolvedRegion> {
        Arc::new(ResolvedRegion::Stored(Arc::new(RegionModel::new(name).unwrap())))
    }

    #[test]
    fn test_empty_stack() {
        let stack = AncestryStack::new();

        assert!(stack.is_empty());
        assert!(stack.parent().is_none());
        assert!(stack.container_size().is_none());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_push_pop_order() {
        let mut stack = AncestryStack::new();
        stack.push(resolved("Main"), 12);
        stack.push(resolved("Sidebar"), 4);

        assert_eq!(stack.names(), vec!["Main", "Sidebar"]);
        assert_eq!(stack.parent().map(ResolvedRegion::name), Some("Sidebar"));
        assert_eq!(stack.container_size(), Some(4));

        let popped = stack.pop().unwrap();
        assert_eq!(popped.region.name(), "Sidebar");
        assert_eq!(stack.parent().map(ResolvedRegion::name), Some("Main"));
        assert_eq!(stack.container_size(), Some(12));
    }

    #[test]
    fn test_iter_outermost_first() {
        let mut stack = AncestryStack::new();
        stack.push(resolved("A"), 1);
        stack.push(resolved("B"), 2);

        let sizes: Vec<u32> = stack.iter().map(|a| a.container_size).collect();
        assert_eq!(sizes, vec![1, 2]);
    }
}
