use covid19_indonesia::{pipeline, Analysis, Config, Covid19Error};
use std::error::Error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG=info (or debug) shows fetch and transform progress.
    env_logger::init();

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<(), Covid19Error> {
    let config = Config::from_env()?;
    println!(
        "Fetching COVID-19 data for {} from {}",
        config.province, config.base_url
    );

    let analysis = pipeline::run(&config).await?;
    print_report(&analysis)?;

    #[cfg(feature = "charts")]
    render_charts(&config, &analysis)?;

    Ok(())
}

fn print_report(analysis: &Analysis) -> Result<(), Covid19Error> {
    println!("\n{}\n", analysis.national);
    println!("{}\n", analysis.province);

    let daily = analysis.daily.collect()?;
    println!("Daily series, shape {:?}:", daily.shape());
    println!("{}", daily.head(Some(5)));
    println!("{}", daily.tail(Some(5)));

    let weekly = analysis.weekly.collect()?;
    println!("Weekly totals ({} weeks):", weekly.height());
    println!("{}", weekly.tail(Some(8)));

    let cumulative = analysis.cumulative.collect()?;
    println!("Cumulative totals:");
    println!("{}", cumulative.tail(Some(5)));
    Ok(())
}

#[cfg(feature = "charts")]
fn render_charts(config: &Config, analysis: &Analysis) -> Result<(), Covid19Error> {
    use covid19_indonesia::render::{region_label, render_all};

    let charts = render_all(
        &analysis.daily.collect()?,
        &analysis.weekly.collect()?,
        &analysis.cumulative.collect()?,
        &region_label(&config.province),
    )?;
    for chart in &charts {
        match &config.output_dir {
            Some(dir) => {
                let path = chart.write_html(dir)?;
                println!("Wrote {}", path.display());
            }
            None => chart.show(),
        }
    }
    Ok(())
}
