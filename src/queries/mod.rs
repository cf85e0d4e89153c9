pub mod ads_queries;
pub mod category_queries;
