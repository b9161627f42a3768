//! Generic CRUD calls over a [`Resource`] collection

use crate::shared::fetch_all::fetch_all;
use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::common::{EntityId, ListResponse, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn list<R, Q>(client: &ApiClient, query: &Q) -> Result<ListResponse<R>, ApiError>
where
    R: Resource + DeserializeOwned,
    Q: Serialize + ?Sized,
{
    client.get_with(&R::collection_path(), query).await
}

pub async fn fetch_by_id<R>(client: &ApiClient, id: R::Id) -> Result<R, ApiError>
where
    R: Resource + DeserializeOwned,
{
    client.get(&R::item_path(id)).await
}

/// Several records by id, concurrently; fails with the first error
pub async fn fetch_by_ids<R>(client: &ApiClient, ids: &[R::Id]) -> Result<Vec<R>, ApiError>
where
    R: Resource + DeserializeOwned,
{
    fetch_all(ids.iter().map(|&id| fetch_by_id::<R>(client, id))).await
}

pub async fn create<R, D>(client: &ApiClient, dto: &D) -> Result<R, ApiError>
where
    R: Resource + DeserializeOwned,
    D: Serialize,
{
    let created: R = client.post(&R::collection_path(), dto).await?;
    log::info!("{} created: {}", R::full_name(), created.id().as_string());
    Ok(created)
}

pub async fn update<R, D>(client: &ApiClient, id: R::Id, dto: &D) -> Result<R, ApiError>
where
    R: Resource + DeserializeOwned,
    D: Serialize,
{
    client.put(&R::item_path(id), dto).await
}

pub async fn delete<R>(client: &ApiClient, id: R::Id) -> Result<(), ApiError>
where
    R: Resource,
{
    let path = R::item_path(id);
    client.delete(&path).await?;
    log::info!("{} deleted: {}", R::full_name(), path);
    Ok(())
}
