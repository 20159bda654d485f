use crate::domain::content::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u64,
}

impl<T, U: Into<T>> From<Page<U>> for Paginated<T> {
    fn from(page: Page<U>) -> Self {
        let pages = page.pages();
        let request = page.request;
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
            page: request.page(),
            limit: request.limit(),
            pages,
        }
    }
}
