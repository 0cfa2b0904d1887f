use contracts::domain::a002_qa_record::{QaQuery, QaRecord};
use contracts::shared::page::{PageRequest, PageResponse};
use contracts::shared::requests::{ProblemFlagRequest, SkuRequest};

use crate::shared::api_utils::sku_path;
use crate::shared::http::{get_json, patch_json, post_json, put_json, ApiError};

const ADMIN: &str = "/adminController";

pub async fn fetch_page(request: PageRequest<QaQuery>) -> Result<PageResponse<QaRecord>, ApiError> {
    post_json(&format!("{}/getQARecordsByPage", ADMIN), &request).await
}

pub async fn update_record(record: &QaRecord) -> Result<(), ApiError> {
    let path = sku_path(&format!("{}/updateQARecordBySku", ADMIN), record.sku);
    put_json(&path, record).await
}

pub async fn fetch_problem_records() -> Result<Vec<QaRecord>, ApiError> {
    get_json(&format!("{}/getProblemRecords", ADMIN)).await
}

pub async fn set_problematic(sku: i64, is_problem: bool) -> Result<(), ApiError> {
    let path = sku_path(&format!("{}/setProblematicBySku", ADMIN), sku);
    patch_json(&path, &ProblemFlagRequest { is_problem }).await
}

/// Photos taken for the item, in upload order
pub async fn fetch_image_urls(sku: i64) -> Result<Vec<String>, ApiError> {
    post_json("/imageController/getUrlsBySku", &SkuRequest::new(sku)).await
}
