/*
[INPUT]:  Page-fetching closure returning Paginated<T> responses
[OUTPUT]: Flat async Stream over items spanning every page
[POS]:    HTTP layer - pagination driver for list endpoints
[UPDATE]: When list metadata shape or stop conditions change
*/

use std::collections::VecDeque;
use std::future::Future;

use futures_util::stream::{self, Stream};

use crate::http::error::Result;
use crate::types::Paginated;

struct PageCursor<T, F> {
    fetch: F,
    next_page: u32,
    buffered: VecDeque<T>,
    finished: bool,
}

/// Drive a paginated list endpoint page by page, yielding individual items.
///
/// The closure receives the 1-based page number to fetch. Iteration stops
/// after the page reported by `meta.total_pages`, on the first empty page,
/// or on the first error (which is yielded before the stream ends).
pub fn stream_pages<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<T>>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<Paginated<T>>>,
{
    let cursor = PageCursor {
        fetch,
        next_page: 1,
        buffered: VecDeque::new(),
        finished: false,
    };

    stream::try_unfold(cursor, |mut cursor| async move {
        loop {
            if let Some(item) = cursor.buffered.pop_front() {
                return Ok(Some((item, cursor)));
            }
            if cursor.finished {
                return Ok(None);
            }

            let Paginated { data, meta } = (cursor.fetch)(cursor.next_page).await?;
            cursor.finished = data.is_empty() || meta.page_number >= meta.total_pages;
            cursor.next_page += 1;
            cursor.buffered = data.into();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::error::RinglineError;
    use crate::types::PaginationMeta;
    use futures_util::TryStreamExt;

    fn page(items: Vec<u32>, page_number: u32, total_pages: u32) -> Paginated<u32> {
        Paginated {
            data: items,
            meta: PaginationMeta {
                total_pages,
                total_results: 5,
                page_number,
                page_size: 3,
            },
        }
    }

    #[tokio::test]
    async fn yields_items_across_pages() {
        let stream = stream_pages(|page_number| async move {
            match page_number {
                1 => Ok(page(vec![1, 2, 3], 1, 2)),
                2 => Ok(page(vec![4, 5], 2, 2)),
                n => panic!("unexpected page fetch: {n}"),
            }
        });

        let items: Vec<u32> = stream.try_collect().await.unwrap();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn stops_on_empty_page() {
        let stream = stream_pages(|page_number| async move {
            match page_number {
                1 => Ok(page(vec![1], 1, 10)),
                _ => Ok(page(vec![], 2, 10)),
            }
        });

        let items: Vec<u32> = stream.try_collect().await.unwrap();
        assert_eq!(items, vec![1]);
    }

    #[tokio::test]
    async fn surfaces_fetch_errors() {
        let stream = stream_pages(|page_number| async move {
            match page_number {
                1 => Ok(page(vec![1, 2], 1, 3)),
                _ => Err(RinglineError::Config("boom".to_string())),
            }
        });

        let mut collected = Vec::new();
        let mut stream = std::pin::pin!(stream);
        let err = loop {
            match stream.try_next().await {
                Ok(Some(item)) => collected.push(item),
                Ok(None) => panic!("stream ended without surfacing the error"),
                Err(e) => break e,
            }
        };

        assert_eq!(collected, vec![1, 2]);
        assert!(matches!(err, RinglineError::Config(_)));
    }
}
