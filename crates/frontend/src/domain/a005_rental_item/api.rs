use crate::shared::crud;
use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a005_rental_item::aggregate::{
    RentalItem, RentalItemDto, RentalItemId, RentalItemQuery,
};
use contracts::domain::common::ListResponse;

pub async fn list(client: &ApiClient, query: &RentalItemQuery) -> Result<ListResponse<RentalItem>, ApiError> {
    crud::list::<RentalItem, _>(client, query).await
}

pub async fn fetch_by_id(client: &ApiClient, id: RentalItemId) -> Result<RentalItem, ApiError> {
    crud::fetch_by_id::<RentalItem>(client, id).await
}

pub async fn create(client: &ApiClient, dto: &RentalItemDto) -> Result<RentalItem, ApiError> {
    crud::create::<RentalItem, _>(client, dto).await
}

pub async fn update(client: &ApiClient, id: RentalItemId, dto: &RentalItemDto) -> Result<RentalItem, ApiError> {
    crud::update::<RentalItem, _>(client, id, dto).await
}

pub async fn delete(client: &ApiClient, id: RentalItemId) -> Result<(), ApiError> {
    crud::delete::<RentalItem>(client, id).await
}
