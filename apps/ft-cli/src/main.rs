use clap::{Args, Parser, Subcommand};
use ft_table::{
    GenerationOptions, GenerationProgressEvent, GenerationStage, TableConfig, TableResult,
    generate_table_with_progress,
};
use ft_webbook::{Component, IsothermQuery, ServiceConventions, WebBookClient};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ft-cli")]
#[command(
    about = "fluidtab - H2O and CO2 property tables from the NIST Chemistry WebBook",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a property table from command-line parameters
    Generate {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Generate a property table from a YAML parameter file
    GenerateFrom {
        /// Path to the YAML file (min_temp, max_temp, n_temp, min_press, max_press, n_press, component)
        config_path: PathBuf,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Print the request URL of a single isotherm without contacting the service
    QueryUrl {
        /// The component name, either 'CO2' or 'H2O'
        #[arg(short, long)]
        component: String,
        /// Isotherm temperature in degree Celsius
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f64,
        /// The minimum pressure in Pascal
        #[arg(long)]
        min_press: f64,
        /// The maximum pressure in Pascal
        #[arg(long)]
        max_press: f64,
        /// The number of pressure sampling points
        #[arg(long)]
        n_press: usize,
        /// Service endpoint
        #[arg(long, default_value = ft_webbook::DEFAULT_ENDPOINT)]
        endpoint: String,
    },
}

#[derive(Args)]
struct TableArgs {
    /// The minimum temperature in degree Celsius
    #[arg(long, allow_negative_numbers = true)]
    min_temp: f64,
    /// The maximum temperature in degree Celsius
    #[arg(long, allow_negative_numbers = true)]
    max_temp: f64,
    /// The number of temperature sampling points; min_temp is the first, max_temp the last
    #[arg(long)]
    n_temp: usize,
    /// The minimum pressure in Pascal
    #[arg(long)]
    min_press: f64,
    /// The maximum pressure in Pascal
    #[arg(long)]
    max_press: f64,
    /// The number of pressure sampling points; min_press is the first, max_press the last
    #[arg(long)]
    n_press: usize,
    /// The component name, either 'CO2' or 'H2O'
    #[arg(short, long)]
    component: String,
}

impl From<TableArgs> for TableConfig {
    fn from(args: TableArgs) -> Self {
        TableConfig {
            min_temp: args.min_temp,
            max_temp: args.max_temp,
            n_temp: args.n_temp,
            min_press: args.min_press,
            max_press: args.max_press,
            n_press: args.n_press,
            component: args.component,
        }
    }
}

#[derive(Args)]
struct RunArgs {
    /// Directory the table file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// Number of isotherms queried concurrently
    #[arg(long, default_value_t = 4)]
    workers: usize,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    /// Service endpoint
    #[arg(long, default_value = ft_webbook::DEFAULT_ENDPOINT)]
    endpoint: String,
}

impl RunArgs {
    fn options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .with_workers(self.workers)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_endpoint(self.endpoint.clone())
    }
}

fn main() -> TableResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { table, run } => cmd_generate(&table.into(), &run),
        Commands::GenerateFrom { config_path, run } => cmd_generate_from(&config_path, &run),
        Commands::QueryUrl {
            component,
            temperature,
            min_press,
            max_press,
            n_press,
            endpoint,
        } => cmd_query_url(&component, temperature, min_press, max_press, n_press, &endpoint),
    }
}

fn cmd_generate_from(config_path: &Path, run: &RunArgs) -> TableResult<()> {
    println!("Loading parameters: {}", config_path.display());
    let config = TableConfig::from_yaml_file(config_path)?;
    cmd_generate(&config, run)
}

fn cmd_generate(config: &TableConfig, run: &RunArgs) -> TableResult<()> {
    let options = run.options();
    let client = WebBookClient::with_endpoint(options.endpoint.clone(), options.timeout);

    let last_emit = Mutex::new(Instant::now());
    let progress = |event: GenerationProgressEvent| {
        if let Ok(mut last) = last_emit.lock() {
            let emit_now = event.stage != GenerationStage::QueryingIsotherms
                || last.elapsed().as_millis() >= 100
                || event
                    .isotherm
                    .as_ref()
                    .is_some_and(|i| i.completed == i.total);
            if emit_now {
                render_cli_progress(&event);
                *last = Instant::now();
            }
        }
    };

    let table = generate_table_with_progress(config, options.workers, &client, Some(&progress))?;
    clear_progress_line();

    let path = table.save(&run.output_dir, chrono::Local::now().date_naive())?;
    tracing::info!(path = %path.display(), rows = table.len(), "table written");
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    println!("✓ {} rows for {}", table.len(), table.component());
    println!("A file {} has been generated.", name);
    Ok(())
}

fn cmd_query_url(
    component: &str,
    temperature: f64,
    min_press: f64,
    max_press: f64,
    n_press: usize,
    endpoint: &str,
) -> TableResult<()> {
    let component: Component = component.parse()?;
    let sweep = ft_table::PressureSweep::new(min_press, max_press, n_press)?;
    let query = IsothermQuery::new(
        component,
        temperature,
        sweep.min_pa,
        sweep.max_pa,
        sweep.increment(),
    );
    println!("{}", query.url(endpoint, &ServiceConventions::default()));
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &GenerationProgressEvent) {
    match (&event.stage, &event.isotherm) {
        (GenerationStage::QueryingIsotherms, Some(iso)) => {
            let width = 28usize;
            let fraction = iso.fraction_complete();
            let filled = ((fraction * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            print!(
                "\r[{}] {:>6.2}%  isotherms={}/{}  elapsed={:.1}s",
                bar,
                fraction * 100.0,
                iso.completed,
                iso.total,
                event.elapsed_wall_s
            );
            let _ = io::stdout().flush();
        }
        _ => {
            let mut line = format!(
                "\r{}  elapsed={:.2}s",
                event.stage.label(),
                event.elapsed_wall_s
            );
            if let Some(msg) = &event.message {
                line.push_str(&format!("  {}", msg));
            }
            print!("{}", line);
            let _ = io::stdout().flush();
        }
    }
}
