//! Fuzzy watchface slot dispatcher
//!
//! Decides which slots are stale on every tick and walks each stale slot
//! through `Idle -> SlidingOut -> Refreshing -> SlidingIn -> Idle`. The
//! caller runs the animations and reports back when each one stops.

use chrono::NaiveDateTime;

use super::{Slot, SlotKind, SlotState, StaleSlots, NUM_SLOTS};
use crate::{system::units::TimeUnits, words::Phrase};

pub struct Dispatcher {
    slots: [Slot; NUM_SLOTS],
    /// Time of the previous tick
    last_tick: Option<NaiveDateTime>,
    /// Candidate text for staleness checks
    scratch: Phrase,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            slots: SlotKind::ALL.map(Slot::new),
            last_tick: None,
            scratch: Phrase::new(),
        }
    }

    /// Fill every slot right away and let all of them slide in
    pub fn show_immediately(&mut self, time: &NaiveDateTime) {
        for slot in self.slots.iter_mut() {
            slot.kind.render(time, &mut slot.text);
            slot.state = SlotState::SlidingIn;
            slot.pending = None;
        }
        self.last_tick = Some(*time);
    }

    /// Handle a clock tick.
    ///
    /// Returns the slots whose text changed and which started sliding out.
    /// Slots that are still animating only remember `time` and catch up once
    /// they are idle again.
    pub fn tick(&mut self, time: &NaiveDateTime) -> StaleSlots {
        let units = TimeUnits::between(self.last_tick.as_ref(), time);
        self.last_tick = Some(*time);

        let mut stale = StaleSlots::NONE;
        if !units.contains(TimeUnits::MINUTE) {
            return stale;
        }

        for slot in self.slots.iter_mut() {
            if slot.is_animating() {
                slot.pending = Some(*time);
                continue;
            }

            slot.kind.render(time, &mut self.scratch);
            if self.scratch != slot.text {
                #[cfg(feature = "defmt")]
                defmt::debug!("Update slot {}", slot.kind);
                slot.pending = Some(*time);
                slot.state = SlotState::SlidingOut;
                stale.insert(slot.kind);
            }
        }

        stale
    }

    /// The slide out animation of `kind` finished.
    ///
    /// Writes the new text and moves the slot on to sliding in. Returns the
    /// text to show, or `None` if the slot was not sliding out.
    pub fn slide_out_finished(&mut self, kind: SlotKind) -> Option<&Phrase> {
        let last_tick = self.last_tick;
        let slot = &mut self.slots[kind.index()];
        if slot.state != SlotState::SlidingOut {
            #[cfg(feature = "defmt")]
            defmt::warn!("Slot {} finished sliding out while {}", kind, slot.state);
            return None;
        }

        slot.state = SlotState::Refreshing;
        if let Some(time) = slot.pending.or(last_tick) {
            slot.kind.render(&time, &mut slot.text);
        }
        slot.state = SlotState::SlidingIn;

        Some(&slot.text)
    }

    /// The slide out animation of `kind` was stopped before it finished.
    ///
    /// The slot keeps its old text and is checked again on the next tick.
    pub fn slide_out_cancelled(&mut self, kind: SlotKind) {
        let slot = &mut self.slots[kind.index()];
        if slot.state == SlotState::SlidingOut {
            slot.state = SlotState::Idle;
            slot.pending = None;
        }
    }

    /// The slide in animation of `kind` finished.
    ///
    /// Returns `true` if time moved on during the animation and the slot
    /// started sliding out again.
    pub fn slide_in_finished(&mut self, kind: SlotKind) -> bool {
        let slot = &mut self.slots[kind.index()];
        if slot.state != SlotState::SlidingIn {
            return false;
        }

        slot.state = SlotState::Idle;
        let Some(time) = slot.pending.take() else {
            return false;
        };

        slot.kind.render(&time, &mut self.scratch);
        if self.scratch == slot.text {
            return false;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Slot {} fell behind, updating again", kind);
        slot.pending = Some(time);
        slot.state = SlotState::SlidingOut;
        true
    }

    pub fn slot(&self, kind: SlotKind) -> &Slot {
        &self.slots[kind.index()]
    }

    pub fn text(&self, kind: SlotKind) -> &str {
        self.slot(kind).text.as_str()
    }

    pub fn state(&self, kind: SlotKind) -> SlotState {
        self.slot(kind).state
    }

    pub fn slots(&self) -> &[Slot; NUM_SLOTS] {
        &self.slots
    }
}
