mod alignment;
mod cli;
mod commands;
mod lineage_snps;

use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::AllSnps {
            alignment,
            lineages,
            reference_id,
            mask_out,
            defining_snps_out,
            representative_seqs_out,
            defining_cut_off,
            represent_cut_off,
        } => commands::all_snps::run(
            &alignment,
            &lineages,
            &reference_id,
            &mask_out,
            &defining_snps_out,
            &representative_seqs_out,
            defining_cut_off,
            represent_cut_off,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
