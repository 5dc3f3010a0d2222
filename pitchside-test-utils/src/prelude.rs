pub use crate::error::TestError;
pub use crate::fixtures::account::*;
pub use crate::fixtures::catalog::*;
pub use crate::fixtures::{date, datetime};
pub use crate::setup::{
    create_account_tables, create_catalog_tables, test_context, test_context_with_account_tables,
    test_context_with_all_tables, test_context_with_catalog_tables, TestContext,
};
