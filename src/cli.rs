use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive singleton, defining and representative SNPs for each lineage
    /// in a multiple-sequence alignment
    AllSnps {
        /// Aligned FASTA file (may be gzip, bzip2 or xz compressed)
        #[arg(short = 'a', long = "alignment")]
        alignment: String,

        /// CSV file assigning sequence identifiers to lineages, no header
        #[arg(short = 'l', long = "lineages")]
        lineages: String,

        /// Identifier of the reference sequence within the alignment
        #[arg(long, default_value = "Wuhan/WH04/2020")]
        reference_id: String,

        /// Output CSV of singleton SNPs to mask
        #[arg(long = "mask-out", default_value = "mask.csv")]
        mask_out: String,

        /// Output CSV of defining SNPs per lineage
        #[arg(long = "defining-snps-out", default_value = "defining_snps.csv")]
        defining_snps_out: String,

        /// Output CSV of representative sequences per lineage
        #[arg(
            long = "representative-seqs-out",
            default_value = "representative_seqs.csv"
        )]
        representative_seqs_out: String,

        /// Minimum inclusion percentage for a defining SNP (default: 90)
        #[arg(long = "defining-cut-off", default_value_t = 90.0)]
        defining_cut_off: f64,

        /// Minimum inclusion percentage for a SNP to need a representative (default: 10)
        #[arg(long = "represent-cut-off", default_value_t = 10.0)]
        represent_cut_off: f64,
    },
}
