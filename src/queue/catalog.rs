use std::collections::BTreeSet;

use super::store::SpecializationCatalogStore;
use super::QueueError;

/// Every specialization the store knows, including those with no
/// appointments right now.
pub fn list_specializations<S>(store: &S) -> Result<BTreeSet<String>, QueueError>
where
    S: SpecializationCatalogStore + ?Sized,
{
    Ok(store.fetch_specializations()?.into_iter().collect())
}

/// Fails with `UnknownSpecialization` unless `name` is in the catalog
/// (exact, case-sensitive).
pub fn ensure_known_specialization<S>(store: &S, name: &str) -> Result<(), QueueError>
where
    S: SpecializationCatalogStore + ?Sized,
{
    if store.fetch_specializations()?.iter().any(|s| s == name) {
        Ok(())
    } else {
        tracing::warn!(specialization = name, "Filter names an unknown specialization");
        Err(QueueError::UnknownSpecialization(name.to_string()))
    }
}
