//! In-memory implementation of [`ZoneRepository`].

use std::future::Future;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ecosmart_app::ports::ZoneRepository;
use ecosmart_domain::error::{EcoSmartError, NotFoundError};
use ecosmart_domain::id::ZoneId;
use ecosmart_domain::zone::Zone;

use crate::error::StoreError;

/// Zones kept in display order.
#[derive(Debug, Default)]
pub struct InMemoryZoneRepository {
    zones: RwLock<Vec<Zone>>,
}

impl InMemoryZoneRepository {
    /// Create a repository holding `zones`.
    #[must_use]
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones: RwLock::new(zones),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Zone>>, StoreError> {
        self.zones.read().map_err(|_| StoreError::Poisoned("zone"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Zone>>, StoreError> {
        self.zones.write().map_err(|_| StoreError::Poisoned("zone"))
    }

    fn modify_one<T>(
        &self,
        id: &ZoneId,
        change: impl FnOnce(&mut Zone) -> Result<T, EcoSmartError>,
    ) -> Result<(Zone, T), EcoSmartError> {
        let mut zones = self.write()?;
        let slot = zones.iter_mut().find(|z| &z.id == id).ok_or_else(|| {
            NotFoundError {
                entity: "Zone",
                id: id.to_string(),
            }
        })?;
        let mut draft = slot.clone();
        let outcome = change(&mut draft)?;
        *slot = draft.clone();
        Ok((draft, outcome))
    }

    fn modify_every<T>(
        &self,
        change: impl FnOnce(&mut Vec<Zone>) -> T,
    ) -> Result<(Vec<Zone>, T), EcoSmartError> {
        let mut zones = self.write()?;
        let outcome = change(&mut *zones);
        Ok((zones.clone(), outcome))
    }
}

impl ZoneRepository for InMemoryZoneRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Zone>, EcoSmartError>> + Send {
        let result = self
            .read()
            .map(|zones| zones.to_vec())
            .map_err(EcoSmartError::from);
        async { result }
    }

    fn get_by_id(
        &self,
        id: &ZoneId,
    ) -> impl Future<Output = Result<Option<Zone>, EcoSmartError>> + Send {
        let result = self
            .read()
            .map(|zones| zones.iter().find(|z| &z.id == id).cloned())
            .map_err(EcoSmartError::from);
        async { result }
    }

    fn modify<T, F>(
        &self,
        id: &ZoneId,
        change: F,
    ) -> impl Future<Output = Result<(Zone, T), EcoSmartError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Zone) -> Result<T, EcoSmartError> + Send,
    {
        let result = self.modify_one(id, change);
        async { result }
    }

    fn modify_all<T, F>(
        &self,
        change: F,
    ) -> impl Future<Output = Result<(Vec<Zone>, T), EcoSmartError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Vec<Zone>) -> T + Send,
    {
        let result = self.modify_every(change);
        async { result }
    }
}
