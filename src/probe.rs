use crate::environment::Environment;

/// Failure-open existence check of a dotted property chain.
///
/// Absent properties, missing parents, malformed paths and getters that fail
/// all read as `false`; this never panics or propagates an error.
pub fn probe(env: &dyn Environment, path: &str) -> bool {
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return false;
    }
    match env.lookup(path) {
        Ok(present) => present,
        Err(err) => {
            tracing::trace!(path, %err, "capability probe failed, treating as absent");
            false
        }
    }
}

/// Convenience wrapper binding [`probe`] to one environment.
#[derive(Clone, Copy)]
pub(crate) struct Probe<'e> {
    env: &'e dyn Environment,
}

impl<'e> Probe<'e> {
    pub fn new(env: &'e dyn Environment) -> Self {
        Self { env }
    }

    pub fn has(&self, path: &str) -> bool {
        probe(self.env, path)
    }

    pub fn lacks(&self, path: &str) -> bool {
        !self.has(path)
    }

    pub fn env(&self) -> &'e dyn Environment {
        self.env
    }

    /// `document.createEvent('TouchEvent')` succeeded.
    pub fn touch_events(&self) -> bool {
        match self.env.create_touch_event() {
            Ok(()) => true,
            Err(err) => {
                tracing::trace!(%err, "touch event creation failed");
                false
            }
        }
    }

    pub fn text(&self, path: &str) -> Option<&'e str> {
        self.env.text(path)
    }
}
