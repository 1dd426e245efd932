use libela::{Error, StressJob, StressReport, StressValues};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "libela_stress",
    about = "Derives and evaluates the stress of a hyperelastic model given in a JSON job file"
)]
struct Options {
    /// Path of the JSON job file
    job: String,

    /// Writes a JSON report to this path
    #[structopt(short, long)]
    output: Option<String>,

    /// Verbosity (-v: info, -vv: debug, -vvv: trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<(), Error> {
    // parse options
    let options = Options::from_args();

    // logging
    let filter = match options.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // run
    let job = StressJob::read_json(&options.job)?;
    tracing::info!(job = options.job.as_str(), "running stress job");
    let response = job.run()?;

    // message
    let title = format!(
        "{} · {} · {} stress",
        response.model,
        response.options.protocol.name(),
        response.options.stress_type.name()
    );
    let thin_line = format!("{:─^1$}", "", title.chars().count());
    println!("\n{}", title);
    println!("{}", thin_line);
    for c in &response.components {
        println!(
            "T{}{}({}) = {}",
            c.component.0 + 1,
            c.component.1 + 1,
            c.arg_names().join(", "),
            c.expression
        );
    }
    println!("{}", thin_line);
    match &response.values {
        StressValues::Scalar(x) => println!("{}", x),
        StressValues::Array(v) => println!("{:?}", v.as_data()),
        StressValues::Pair(a, b) => println!("{:?}\n{:?}", a.as_data(), b.as_data()),
    }
    if let Some(path) = &response.plot_path {
        println!("figure saved to {}", path);
    }

    // report
    if let Some(path) = &options.output {
        StressReport::new(&response).write_json(path)?;
        println!("report saved to {}", path);
    }
    println!();
    Ok(())
}
