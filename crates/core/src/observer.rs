/// Receives events from a solver and optionally returns a control action.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and so is
/// `()`, which ignores every event.
pub trait Observer<E, A> {
    /// Handles a single event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_ignores_events() {
        let action: Option<u8> = ().observe(&42);
        assert!(action.is_none());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut obs = |event: &usize| -> Option<()> {
            seen.push(*event);
            None
        };

        for i in 0..3 {
            obs.observe(&i);
        }

        assert_eq!(seen, vec![0, 1, 2]);
    }
}
