//! Drag Tracker: pointer events to a "drag in progress" signal.
//!
//! `DragState` is a plain value. Every transition consumes the old state and
//! returns the new one together with the side effect the caller must apply.

/// Pointer state over the text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub is_down: bool,
    /// Set once the pointer moved while down. Only cleared by the next
    /// pointer-down, not by pointer-up.
    pub is_dragging: bool,
}

/// Side effect requested by a drag transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    None,
    /// Hide and clear both suggestion panels.
    SuppressPanels,
}

/// Coarse phase of the pointer sub-automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Idle,
    Selecting,
    Dragging,
}

impl DragState {
    /// Pointer pressed on the field: a fresh interaction always starts clean.
    pub fn pointer_down(self) -> (Self, DragEffect) {
        let next = Self {
            is_down: true,
            is_dragging: false,
        };
        (next, DragEffect::SuppressPanels)
    }

    /// Pointer moved. Only meaningful while the button is held; each such
    /// move re-suppresses panels in case a stray response rendered mid-drag.
    pub fn pointer_move(self) -> (Self, DragEffect) {
        if !self.is_down {
            return (self, DragEffect::None);
        }
        let next = Self {
            is_dragging: true,
            ..self
        };
        (next, DragEffect::SuppressPanels)
    }

    /// Pointer released anywhere in the document.
    pub fn pointer_up(self) -> (Self, DragEffect) {
        let next = Self {
            is_down: false,
            ..self
        };
        (next, DragEffect::None)
    }

    pub fn phase(&self) -> PointerPhase {
        match (self.is_down, self.is_dragging) {
            (true, true) => PointerPhase::Dragging,
            (true, false) => PointerPhase::Selecting,
            (false, _) => PointerPhase::Idle,
        }
    }
}
