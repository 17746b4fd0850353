use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_halflife::cli::{Cli, Commands, EnrichArgs, IsoformArgs, ValidateArgs};
use kira_halflife::ctx::{Ctx, EnrichSettings, IsoformSettings, Task, ValidateSettings};
use kira_halflife::io;
use kira_halflife::pipeline::Pipeline;
use kira_halflife::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_halflife::pipeline::stage1_proteins::Stage1Proteins;
use kira_halflife::pipeline::stage2_complexes::Stage2Complexes;
use kira_halflife::pipeline::stage3_enrich::Stage3Enrich;
use kira_halflife::pipeline::stage4_isoforms::Stage4Isoforms;
use kira_halflife::pipeline::stage5_output::Stage5Output;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enrich(args) => run_enrich(args)?,
        Commands::Isoforms(args) => run_isoforms(args)?,
        Commands::Validate(args) => run_validate(args)?,
    }

    Ok(())
}

fn run_enrich(args: EnrichArgs) -> Result<()> {
    let task = Task::Enrich(EnrichSettings {
        complexes_path: args.complexes,
        organism: args.organism,
        metric: args.metric.into(),
        homologs_path: args.homologs,
        tissue_table_path: args.tissue_table,
    });
    let mut ctx = Ctx::new(
        args.ned,
        task,
        args.out,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.threads = args.threads;

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Proteins::new()),
        Box::new(Stage2Complexes::new()),
        Box::new(Stage3Enrich::new()),
        Box::new(Stage5Output::new()),
    ]);
    pipeline.run(&mut ctx)?;

    if let Some(run) = &ctx.enrichment {
        println!("{}", run.outcome.triple());
    }
    print_summary(&ctx)
}

fn run_isoforms(args: IsoformArgs) -> Result<()> {
    let task = Task::Isoforms(IsoformSettings {
        expression_path: args.expression,
        fallback_expression_path: args.fallback_expression,
        protein_map_path: args.protein_map,
        tissues_path: args.tissues,
        skip_tissues: args.skip_tissue,
        output_path: args.output,
    });
    let mut ctx = Ctx::new(
        args.ned,
        task,
        std::path::PathBuf::from("."),
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.threads = args.threads;

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Proteins::new()),
        Box::new(Stage4Isoforms::new()),
        Box::new(Stage5Output::new()),
    ]);
    pipeline.run(&mut ctx)?;
    print_summary(&ctx)
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let task = Task::Validate(ValidateSettings {
        complexes_path: args.complexes,
        homologs_path: args.homologs,
        organism: args.organism,
    });
    let mut ctx = Ctx::new(
        args.ned,
        task,
        std::path::PathBuf::from("."),
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );

    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Proteins::new()),
        Box::new(Stage2Complexes::new()),
    ]);
    pipeline.run(&mut ctx)?;

    println!("kira-halflife validate ok");
    println!("records: {}", ctx.records.len());
    println!(
        "classified: {}",
        ctx.records.iter().filter(|r| r.decay.is_classified()).count()
    );
    if let Some(homologs) = &ctx.homologs {
        println!("homolog pairs: {}", homologs.len());
    }
    if ctx.task.complexes_path().is_some() {
        println!("complexes: {}/{}", ctx.complexes.len(), ctx.complexes_in_file);
    }
    print_warnings(&ctx);
    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
