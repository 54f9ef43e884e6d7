pub mod aggregation_service;
pub mod dataset_service;
pub mod export_service;
pub mod index_service;
pub mod report_service;
