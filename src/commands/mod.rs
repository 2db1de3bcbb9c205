pub mod all_snps;
