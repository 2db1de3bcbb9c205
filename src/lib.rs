pub mod alignment;
pub mod cli;
pub mod commands;
pub mod lineage_snps;
