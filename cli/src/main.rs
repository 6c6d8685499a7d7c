use clap::Parser;
use graphsearch::colors::ColorScheme;
use graphsearch::display::{display_comparison, display_graph_summary, display_report};
use graphsearch::json_output::{create_json_error, create_json_output, print_json_output};
use graphsearch::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = run(&args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(error.exit_code());
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), CliError> {
    // Resolved before the file is touched so a typo fails fast.
    let algorithm = resolve_method(args.method.as_deref())?;
    let config = RunConfig::from(args);
    let app = GraphSearchApp::load(&args.file)?;

    if args.verbose && !args.json {
        display_graph_summary(&app, colors);
        println!();
    }

    if args.all {
        return run_comparison(&app, &config, args.json, colors);
    }

    let report = app.run(algorithm, &config, colors)?;
    if args.json {
        print_json_output(&create_json_output(&app.graph_path, &report));
    } else {
        if args.steps {
            println!();
        }
        display_report(&app, &report, args.quiet, colors);
    }
    Ok(())
}

fn run_comparison(
    app: &GraphSearchApp,
    config: &RunConfig,
    json: bool,
    colors: &ColorScheme,
) -> Result<(), CliError> {
    let runs = app.run_all(config, colors);

    if json {
        let outputs: Vec<_> = runs
            .iter()
            .map(|(algorithm, run)| match run {
                Ok(report) => create_json_output(&app.graph_path, report),
                Err(error) => create_json_error(&app.graph_path, *algorithm, error.to_string()),
            })
            .collect();
        print_json_output(&outputs);
    } else {
        display_comparison(app, &runs, colors);
    }

    match runs.into_iter().find_map(|(_, run)| run.err()) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
