use env_logger::Env;
use sched_trace_plot::plot::PngRenderer;
use sched_trace_plot::report::{generate_report, parse_cli, summary_line};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    let base = parse_cli();
    let mut renderer = PngRenderer::default();
    let written = generate_report(base.as_deref(), Path::new("."), &mut renderer)?;
    println!("{}", summary_line(&written));
    Ok(())
}
