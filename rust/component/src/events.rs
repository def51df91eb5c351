//! Broadcasting a follower's output to its subscribers.

use std::rc::{Rc, Weak};


/// Receives the output of a follower once per tick.
pub trait AmplitudeListener {
    /// Called with the latest output value, in `[0, 1]`.
    fn amplitude_changed(&self, amplitude: f32);
}

/// Identifies a listener added to a [`Broadcaster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Delivers each value to every live listener.
///
/// Listeners are held weakly: dropping the last `Rc` to a listener
/// unsubscribes it, and it is pruned on the next broadcast.
#[derive(Default)]
pub struct Broadcaster {
    listeners: Vec<(ListenerId, Weak<dyn AmplitudeListener>)>,
    next_id: u64,
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Broadcaster {
    /// Subscribe `listener` to every subsequent broadcast.
    pub fn add<L: AmplitudeListener + 'static>(&mut self, listener: &Rc<L>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let listener: Rc<dyn AmplitudeListener> = listener.clone();
        self.listeners.push((id, Rc::downgrade(&listener)));
        id
    }

    /// Unsubscribe a listener. Returns `false` if it was not subscribed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of subscribed listeners that are still alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners
            .iter()
            .filter(|(_, listener)| listener.strong_count() > 0)
            .count()
    }

    /// `true` if no live listener is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `amplitude` to every live listener, in subscription order.
    pub fn broadcast(&mut self, amplitude: f32) {
        self.listeners.retain(|(_, listener)| {
            if let Some(listener) = listener.upgrade() {
                listener.amplitude_changed(amplitude);
                true
            } else {
                false
            }
        });
    }
}
