// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state tracking with an explicit subscribe/unsubscribe contract.
//!
//! ## Usage
//!
//! 1) Build a [`HoverLocator`] over a selection result.
//! 2) Wrap it in a [`HoverTracker`] and register observers with
//!    [`HoverTracker::subscribe`].
//! 3) While [`HoverTracker::is_active`] is true, attach a platform pointer-move
//!    listener and forward each event to [`HoverTracker::on_pointer_move`];
//!    detach the platform listener whenever `is_active` turns false or the
//!    tracker is dropped.
//!
//! Observers are notified on every processed event; the returned
//! [`HoverEvent`] transitions additionally report element changes, so callers
//! that only care about enter/leave can ignore the per-event callbacks.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::locator::HoverLocator;
use crate::types::{Ancestry, BoundsProvider, HoverEvent, HoverInfo, PointerEvent};

/// An observer of the hover state, invoked after each processed pointer event
/// with the new state (`None` when the pointer is over no tracked element).
pub type HoverObserver<K> = Box<dyn FnMut(Option<&HoverInfo<K>>)>;

/// Cancellation handle returned by [`HoverTracker::subscribe`].
///
/// Not cloneable and consumed by [`HoverTracker::unsubscribe`], so an observer
/// can be removed at most once; the type system enforces the exactly-once
/// guarantee.
#[derive(Debug)]
pub struct Subscription {
    slot: usize,
}

/// Maintains the "currently hovered element" over a fixed element list.
///
/// The element list is fixed per selection run; swap it with
/// [`HoverTracker::set_elements`] when a new selection is made, which resets
/// the hover state. Pointer events are processed strictly in call order, each
/// one fully resolved (match-or-none, bounds queried) before returning.
pub struct HoverTracker<K, A, B> {
    locator: HoverLocator<K, A, B>,
    current: Option<HoverInfo<K>>,
    observers: Vec<Option<HoverObserver<K>>>,
}

impl<K: core::fmt::Debug, A, B> core::fmt::Debug for HoverTracker<K, A, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverTracker")
            .field("current", &self.current)
            .field("observers", &self.observers.iter().flatten().count())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, A: Ancestry<K>, B: BoundsProvider<K>> HoverTracker<K, A, B> {
    /// Create a tracker around a locator. The initial state is none.
    pub fn new(locator: HoverLocator<K, A, B>) -> Self {
        Self {
            locator,
            current: None,
            observers: Vec::new(),
        }
    }

    /// The current hover state.
    pub fn hovered(&self) -> Option<&HoverInfo<K>> {
        self.current.as_ref()
    }

    /// The tracked element list, in document order.
    pub fn elements(&self) -> &[K] {
        self.locator.elements()
    }

    /// True iff the tracked element list is non-empty.
    ///
    /// Embedders should attach their platform pointer-move listener only while
    /// this is true; an inactive tracker ignores events.
    pub fn is_active(&self) -> bool {
        !self.locator.elements().is_empty()
    }

    /// Register an observer. Returns the handle that removes it again.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(Option<&HoverInfo<K>>) + 'static,
    {
        let observer: HoverObserver<K> = Box::new(observer);
        let slot = match self.observers.iter().position(|o| o.is_none()) {
            Some(free) => {
                self.observers[free] = Some(observer);
                free
            }
            None => {
                self.observers.push(Some(observer));
                self.observers.len() - 1
            }
        };
        Subscription { slot }
    }

    /// Remove an observer. Consumes the handle; the observer receives no
    /// further notifications.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        if let Some(slot) = self.observers.get_mut(subscription.slot) {
            *slot = None;
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.iter().flatten().count()
    }

    /// Replace the tracked element list, resetting the hover state to none.
    ///
    /// Returns the leave transition for the previously hovered element, if any;
    /// observers are notified of the reset in that case.
    pub fn set_elements(&mut self, elements: Vec<K>) -> Vec<HoverEvent<K>> {
        self.locator.set_elements(elements);
        let old = self.current.take();
        let transitions = transition(old.map(|i| i.element), None);
        if old.is_some() {
            self.notify();
        }
        transitions
    }

    /// Process one pointer-move event.
    ///
    /// Resolves the event against the element list, updates the hover state,
    /// notifies observers, and returns the enter/leave transitions (empty when
    /// the hovered element did not change). Inactive trackers return without
    /// doing anything.
    pub fn on_pointer_move(&mut self, event: &PointerEvent<K>) -> Vec<HoverEvent<K>> {
        if !self.is_active() {
            return Vec::new();
        }
        let next = self.locator.locate(event);
        let transitions = transition(self.current.map(|i| i.element), next.map(|i| i.element));
        self.current = next;
        self.notify();
        transitions
    }

    fn notify(&mut self) {
        let current = self.current;
        for observer in self.observers.iter_mut().flatten() {
            observer(current.as_ref());
        }
    }
}

/// Leave the old element (if any), then enter the new one (if any); nothing
/// when they are the same element.
fn transition<K: Copy + Eq>(old: Option<K>, new: Option<K>) -> Vec<HoverEvent<K>> {
    if old == new {
        return Vec::new();
    }
    let mut out = Vec::new();
    if let Some(o) = old {
        out.push(HoverEvent::Leave(o));
    }
    if let Some(n) = new {
        out.push(HoverEvent::Enter(n));
    }
    out
}
