// handlers/mod.rs - one module per resource
pub mod admissions;
pub mod colleges;
pub mod research_papers;
pub mod root;
