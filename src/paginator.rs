use async_trait::async_trait;
use tracing::{debug, info, warn};

#[cfg(test)]
use mockall::automock;

use crate::config::PaginationOptions;
use crate::error::AdapterError;
use crate::pagination::{PageItem, PageRequest, PaginatedResponse};

/// Fetches a single page of a list endpoint.
///
/// Implemented by the HTTP layer, which owns authentication, retries and
/// rate limiting. This crate only drives it.
#[cfg_attr(test, automock(type Item = serde_json::Value;))]
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: PageItem + Send;

    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<PaginatedResponse<Self::Item>, AdapterError>;
}

/// Fetch pages until the source runs out of records or `max_pages` is hit.
pub async fn collect_all<S>(
    source: &S,
    options: &PaginationOptions,
) -> Result<Vec<S::Item>, AdapterError>
where
    S: PageSource + ?Sized,
{
    let mut records = Vec::new();
    let mut request = PageRequest::first(options.page_size);
    let mut pages: u32 = 0;

    loop {
        let page = source.fetch_page(request.clone()).await?;
        pages += 1;

        debug!(
            "Fetched page {} with {} records ({} total)",
            pages,
            page.records().len(),
            page.total_records()
        );

        let next_token = page
            .more_records_available()
            .then(|| page.next_page_token().to_string());
        records.extend(page.into_records());

        let Some(token) = next_token else {
            break;
        };

        if pages >= options.max_pages {
            warn!(
                "Stopping after {} pages, more records are available",
                options.max_pages
            );
            break;
        }

        if request.next_page_token.as_deref() == Some(token.as_str()) {
            warn!("Page source returned the same token twice: {}", token);
            break;
        }

        request = PageRequest::first(options.page_size).with_token(token);
    }

    info!("Collected {} records from {} pages", records.len(), pages);
    Ok(records)
}
