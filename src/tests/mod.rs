pub mod support;

mod subject_catalog_flow;
