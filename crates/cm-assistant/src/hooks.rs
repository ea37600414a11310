//! Caller-supplied side-effect capabilities.

use cm_catalog::Vehicle;

/// Receives vehicles the shopper asked to save.
///
/// Invoked synchronously, at most once per matched `add_to_garage` request.
/// Implementations that need I/O should hand the work off (spawn, channel)
/// rather than block; the assistant does not wait on it. Panics propagate.
pub trait GarageHook: Send + Sync {
    fn add_to_garage(&self, vehicle: &Vehicle);
}

impl<F> GarageHook for F
where
    F: Fn(&Vehicle) + Send + Sync,
{
    fn add_to_garage(&self, vehicle: &Vehicle) {
        self(vehicle)
    }
}

/// The set of hooks available to one request. All optional.
#[derive(Clone, Copy, Default)]
pub struct Hooks<'a> {
    pub garage: Option<&'a dyn GarageHook>,
}

impl<'a> Hooks<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_garage(hook: &'a dyn GarageHook) -> Self {
        Self { garage: Some(hook) }
    }

    /// Invoke the garage hook if present. Returns whether it ran.
    pub(crate) fn add_to_garage(&self, vehicle: &Vehicle) -> bool {
        match self.garage {
            Some(hook) => {
                hook.add_to_garage(vehicle);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Hooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("garage", &self.garage.is_some())
            .finish()
    }
}
