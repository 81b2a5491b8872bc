use crate::domain::model::{Cuisine, QueryDescriptor, QueryShape};
use crate::utils::error::{RecipeError, Result};
use url::Url;

/// 第一頁視窗的預設大小
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// 組出一次查詢的完整描述。limit 下限為 1。
pub fn build(
    cuisine: Cuisine,
    search_text: impl Into<String>,
    offset: usize,
    limit: usize,
    shape: QueryShape,
) -> QueryDescriptor {
    QueryDescriptor {
        cuisine,
        search_text: search_text.into(),
        offset,
        limit: limit.max(1),
        shape,
    }
}

/// 第一頁查詢（offset 0）
pub fn first_page(
    cuisine: Cuisine,
    search_text: impl Into<String>,
    shape: QueryShape,
    page_size: usize,
) -> QueryDescriptor {
    build(cuisine, search_text, 0, page_size, shape)
}

impl QueryDescriptor {
    /// 將描述轉成完整請求 URL。所有參數值（含料理類別與搜尋文字）
    /// 都走標準的查詢字串編碼；憑證一律由呼叫端提供。
    pub fn to_url(&self, endpoint: &str, app_id: &str, app_key: &str) -> Result<Url> {
        let mut url = Url::parse(endpoint).map_err(|e| RecipeError::Config {
            message: format!("Invalid service endpoint '{}': {}", endpoint, e),
        })?;

        {
            let mut pairs = url.query_pairs_mut();
            match self.shape {
                QueryShape::TypedFilter => {
                    pairs.append_pair("type", "public");
                    pairs.append_pair("cuisineType", &self.cuisine.normalized());
                    pairs.append_pair("q", &self.search_text);
                }
                QueryShape::Keyword => {
                    pairs.append_pair("q", self.cuisine.as_str());
                }
            }
            pairs.append_pair("from", &self.offset.to_string());
            pairs.append_pair("to", &(self.offset + self.limit).to_string());
            pairs.append_pair("app_id", app_id);
            pairs.append_pair("app_key", app_key);
        }

        Ok(url)
    }
}
