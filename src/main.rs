use std::fs::File;
use std::rc::Rc;

use anyhow::Context;
use log::warn;

use grindmetrics::configuration::Configuration;
use grindmetrics::metrics::aggregate;
use grindmetrics::metrics::kpi::{
    self,
    KpiRecord
};
use grindmetrics::metrics::kpicache::{
    KpiCacheBackend,
    RefCellBackend
};
use grindmetrics::report::chartseries;
use grindmetrics::report::kpitable::{
    KpiRow,
    KpiTable
};
use grindmetrics::sales::salesloader;
use grindmetrics::sales::salesseries;
use grindmetrics::sample::builtinsamples::{
    builtin_samples,
    BASELINE_SAMPLE_NAME
};
use grindmetrics::sample::distributionsample::DistributionSample;

struct Args {
    config: Option<String>,
    sales: Option<String>,
    series: Option<String>
}

/// Parse command-line arguments.
/// --config <json>   named samples + baseline + sales path
/// --sales <csv>     sales report (overrides the configured path)
/// --series <json>   write chart series and the KPI table as JSON
fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args { config: None, sales: None, series: None };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                parsed.config = Some(args[i + 1].clone());
                i += 2;
            }
            "--sales" if i + 1 < args.len() => {
                parsed.sales = Some(args[i + 1].clone());
                i += 2;
            }
            "--series" if i + 1 < args.len() => {
                parsed.series = Some(args[i + 1].clone());
                i += 2;
            }
            _ => i += 1
        }
    }
    parsed
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let argv: Vec<String> = std::env::args().collect();
    let args = parse_args(&argv);

    let (samples, baseline_name, configured_sales) = load_samples(&args)?;
    anyhow::ensure!(!samples.is_empty(), "no valid samples to analyze");

    // KPI 表：經由呼叫端持有的快取逐樣本計算。
    let cache = RefCellBackend::new();
    let kpis: Vec<KpiRecord> = samples
        .iter()
        .map(|sample| {
            cache.get_or_compute(Rc::as_ptr(sample) as usize, || kpi::extract(sample))
        })
        .collect();
    let table = KpiTable::from_rows(
        samples
            .iter()
            .zip(&kpis)
            .map(|(sample, kpi)| KpiRow::new(sample.name().to_owned(), *kpi))
            .collect()
    );

    println!("Key grind metrics");
    println!("{}", table.render_text());

    print_executive_summary(&samples, &kpis, &baseline_name);

    if let Some(path) = &args.series {
        write_chart_series(&samples, &table, path)?;
    }

    if let Some(path) = args.sales.as_ref().or(configured_sales.as_ref()) {
        print_sales_report(path)?;
    }

    Ok(())
}

type LoadedSamples = (Vec<Rc<DistributionSample>>, String, Option<String>);

fn load_samples(args: &Args) -> anyhow::Result<LoadedSamples> {
    match &args.config {
        Some(path) => {
            let config = Configuration::new();
            let failures = config
                .from_reader(path)
                .with_context(|| format!("cannot load configuration '{path}'"))?;
            if !failures.is_empty() {
                warn!("{} sample(s) skipped during load", failures.len());
            }
            let samples = config.sample_manager().values();
            let baseline = config
                .baseline()
                .unwrap_or_else(|| BASELINE_SAMPLE_NAME.to_owned());
            Ok((samples, baseline, config.sales_file()))
        }
        None => Ok((builtin_samples(), BASELINE_SAMPLE_NAME.to_owned(), None))
    }
}

fn print_executive_summary(
    samples: &[Rc<DistributionSample>],
    kpis: &[KpiRecord],
    baseline_name: &str
) {
    let Some(baseline_idx) = samples.iter().position(|s| s.name() == baseline_name) else {
        warn!("baseline sample '{baseline_name}' not found; skipping executive summary");
        return;
    };

    let candidates: Vec<KpiRecord> = kpis
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != baseline_idx)
        .map(|(_, kpi)| *kpi)
        .collect();

    match aggregate::summarize(baseline_name, &kpis[baseline_idx], &candidates) {
        Err(error) => warn!("{error}"),
        Ok(summary) => {
            println!("Executive takeaway (baseline: {})", summary.baseline_name());
            println!(
                "  D50: {:.0} um baseline vs {:.0} um candidate mean",
                summary.baseline().d50(),
                summary.candidate_mean().d50()
            );
            println!(
                "  fines <100 um: {:+.2} pp vs candidates (magnitude {:.2})",
                summary.fines_delta().signed(),
                summary.fines_delta().absolute()
            );
            println!(
                "  oversize >1000 um: {:+.2} pp vs candidates (magnitude {:.2})",
                summary.oversize_delta().signed(),
                summary.oversize_delta().absolute()
            );
            println!("  span: {:+.2} vs candidates", summary.span_delta().signed());
            println!();
        }
    }
}

fn write_chart_series(
    samples: &[Rc<DistributionSample>],
    table: &KpiTable,
    path: &str
) -> anyhow::Result<()> {
    let payload = serde_json::json!({
        "kpi_table": table.to_json(),
        "cumulative": chartseries::cumulative_series(samples),
        "density": chartseries::density_series(samples)
    });
    let file = File::create(path).with_context(|| format!("cannot write chart series '{path}'"))?;
    serde_json::to_writer_pretty(file, &payload)?;
    println!("Chart series written to {path}");
    Ok(())
}

fn print_sales_report(path: &str) -> anyhow::Result<()> {
    let records = salesloader::load_sales_csv(path)
        .with_context(|| format!("cannot load sales data '{path}'"))?;

    let daily = salesseries::daily_sales(&records);
    let summary = salesseries::summary(&daily);

    println!("Sales overview ({path})");
    println!("  total: ${:.2}", summary.total_sales());
    println!("  average daily: ${:.2}", summary.avg_daily_sales());
    if let Some(last_day) = summary.last_day() {
        println!("  last day: {last_day}");
    }
    println!();

    println!("Monthly sales");
    for month in salesseries::monthly_sales(&records) {
        match month.growth_pct() {
            Some(growth) => println!("  {}  ${:>12.2}  {:+.2}%", month.month(), month.total(), growth),
            None => println!("  {}  ${:>12.2}", month.month(), month.total())
        }
    }
    println!();

    println!("Top products");
    for product in salesseries::top_products(&records, 10) {
        println!("  {:<40} ${:>12.2}", product.title(), product.total());
    }
    println!();

    println!("Sales by store");
    for store in salesseries::store_sales(&records) {
        println!("  {:<20} ${:>12.2}", store.store(), store.total());
    }

    Ok(())
}
