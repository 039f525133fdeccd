//! Doors gated on a set of switches.
//!
//! A [`Door`] waits for every switch id in `waiting_for` to be deactivated.
//! Each deactivation removes its id; when the set runs empty the door opens,
//! exactly once. Open doors never close again. A closed door blocks actors
//! like a wall; see [`crate::systems::collision`].

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashSet;

#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Door {
    pub id: u32,
    pub is_closed: bool,
    pub waiting_for: FxHashSet<u32>,
}

impl Door {
    /// A door with nothing to wait for starts open.
    pub fn new(id: u32, waiting_for: impl IntoIterator<Item = u32>) -> Self {
        let waiting_for: FxHashSet<u32> = waiting_for.into_iter().collect();
        Self {
            id,
            is_closed: !waiting_for.is_empty(),
            waiting_for,
        }
    }

    /// Handle a switch deactivation.
    ///
    /// Unknown ids are ignored. Returns `true` only on the call that opens
    /// the door.
    pub fn on_switch_event(&mut self, switch_id: u32) -> bool {
        self.waiting_for.remove(&switch_id);
        if self.is_closed && self.waiting_for.is_empty() {
            self.is_closed = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_opens_when_last_switch_fires() {
        let mut door = Door::new(7, [1, 2, 3]);
        assert!(door.is_closed);
        assert!(!door.on_switch_event(1));
        assert!(!door.on_switch_event(2));
        assert!(door.is_closed);
        assert!(door.on_switch_event(3));
        assert!(!door.is_closed);
    }

    #[test]
    fn test_repeated_id_is_noop() {
        let mut door = Door::new(7, [1, 2, 3]);
        door.on_switch_event(1);
        assert!(!door.on_switch_event(1));
        assert!(door.is_closed);
        assert_eq!(door.waiting_for.len(), 2);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut door = Door::new(1, [5]);
        assert!(!door.on_switch_event(99));
        assert!(door.is_closed);
    }

    #[test]
    fn test_opens_exactly_once() {
        let mut door = Door::new(7, [1, 2, 3]);
        let opened: usize = [1, 2, 3, 1, 3]
            .into_iter()
            .filter(|id| door.on_switch_event(*id))
            .count();
        assert_eq!(opened, 1);
        assert!(!door.is_closed);
    }

    #[test]
    fn test_empty_waiting_set_is_open_at_construction() {
        let mut door = Door::new(2, [0u32; 0]);
        assert!(!door.is_closed);
        assert!(!door.on_switch_event(1));
        assert!(!door.is_closed);
    }
}
