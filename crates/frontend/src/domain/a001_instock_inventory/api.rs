use contracts::domain::a001_instock_inventory::{
    AuctionSelectionRequest, InstockInventory, InstockQuery, ScrapedData,
};
use contracts::shared::page::{PageRequest, PageResponse};
use contracts::shared::requests::{DistinctRequest, SkuRequest};

use crate::shared::api_utils::{api_config, sku_path};
use crate::shared::http::{post_ack, post_json, post_json_with_timeout, put_json, ApiError};

const INVENTORY: &str = "/inventoryController";

pub async fn fetch_page(
    request: PageRequest<InstockQuery>,
) -> Result<PageResponse<InstockInventory>, ApiError> {
    post_json(&format!("{}/getInstockByPage", INVENTORY), &request).await
}

pub async fn update_record(record: &InstockInventory) -> Result<(), ApiError> {
    let path = sku_path(&format!("{}/updateInstockBySku", INVENTORY), record.sku);
    put_json(&path, record).await
}

/// Stage every item matching the filter into auction lot `request.lot`
pub async fn add_selection_to_auction(request: &AuctionSelectionRequest) -> Result<(), ApiError> {
    post_ack(&format!("{}/addSelectionToAuction", INVENTORY), Some(request)).await
}

/// Pull title, price and image from the item's source listing
pub async fn scrape_by_sku(sku: i64) -> Result<ScrapedData, ApiError> {
    post_json_with_timeout(
        &format!("{}/scrapeInfoBySkuAmazon", INVENTORY),
        &SkuRequest::new(sku),
        api_config().scrape_timeout_ms,
    )
    .await
}

/// Distinct values of one inventory field, for the name filters
pub async fn fetch_distinct(field: &str) -> Result<Vec<String>, ApiError> {
    post_json("/adminController/getInstockDistinct", &DistinctRequest::new(field)).await
}
