use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::error::Error;

const MAX_PAGE_SIZE: i64 = 100;
const DEFAULT_PAGE_SIZE: i64 = 50;

/// Shared `limit`/`offset` query parameters.
#[derive(Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page size, at most 100. Defaults to 50.
    pub limit: Option<i64>,
    /// Rows to skip. Defaults to 0.
    pub offset: Option<i64>,
}

impl PageQuery {
    /// Validates the page bounds before any storage access.
    pub fn resolve(&self) -> Result<(u64, u64), Error> {
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = self.offset.unwrap_or(0);

        if limit < 1 || limit > MAX_PAGE_SIZE {
            return Err(Error::Validation(format!(
                "Limit must fall between 1 and {MAX_PAGE_SIZE}"
            )));
        }

        if offset < 0 {
            return Err(Error::Validation("Offset cannot be negative".to_string()));
        }

        Ok((limit as u64, offset as u64))
    }
}

#[cfg(test)]
mod tests {
    mod resolve {
        use crate::server::{controller::util::pagination::PageQuery, error::Error};

        /// Defaults apply when neither parameter is given
        #[test]
        fn defaults_when_absent() {
            let query = PageQuery {
                limit: None,
                offset: None,
            };

            assert_eq!(query.resolve().unwrap(), (50, 0));
        }

        /// A limit above the cap is rejected before touching storage
        #[test]
        fn rejects_oversized_limit() {
            let query = PageQuery {
                limit: Some(101),
                offset: None,
            };

            assert!(matches!(query.resolve(), Err(Error::Validation(_))));
        }

        /// A negative offset is rejected
        #[test]
        fn rejects_negative_offset() {
            let query = PageQuery {
                limit: Some(10),
                offset: Some(-1),
            };

            assert!(matches!(query.resolve(), Err(Error::Validation(_))));
        }
    }
}
