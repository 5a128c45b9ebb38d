//! Simulated indoor climate.

use std::future::Future;

use ecosmart_app::ports::IndoorClimate;
use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::insight::IndoorState;

/// Indoor climate port backed by a fixed snapshot.
#[derive(Debug)]
pub struct VirtualClimate {
    state: IndoorState,
}

impl VirtualClimate {
    /// Default indoor snapshot: warm, dry and stuffy with the window open
    /// while heating runs.
    pub const DEFAULT_STATE: IndoorState = IndoorState {
        temp: 23.0,
        humidity: 28.0,
        co2: 1100.0,
        window_open: true,
        heating_on: true,
    };

    #[must_use]
    pub fn new(state: IndoorState) -> Self {
        Self { state }
    }
}

impl Default for VirtualClimate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STATE)
    }
}

impl IndoorClimate for VirtualClimate {
    fn current(&self) -> impl Future<Output = Result<IndoorState, EcoSmartError>> + Send {
        let state = self.state;
        async move { Ok(state) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_start_with_default_snapshot() {
        let climate = VirtualClimate::default();
        let state = climate.current().await.unwrap();
        assert_eq!(state, VirtualClimate::DEFAULT_STATE);
        assert!(state.window_open && state.heating_on);
    }

    #[tokio::test]
    async fn should_return_configured_snapshot() {
        let closed = IndoorState {
            window_open: false,
            ..VirtualClimate::DEFAULT_STATE
        };
        let climate = VirtualClimate::new(closed);
        assert_eq!(climate.current().await.unwrap(), closed);
    }
}
