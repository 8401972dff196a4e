pub mod lookup;
pub mod note;
pub mod perfume;

use serde::Serialize;

/// One page of list results together with the total number of rows matching
/// the filter set (ignoring pagination).
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub count: i64,
}
