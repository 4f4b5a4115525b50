use anyhow::Result;
use redgulch::harness::{run_scripted, RunOptions};

fn parse_args() -> Result<RunOptions> {
    let mut opts = RunOptions::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let v = args.next().ok_or_else(|| anyhow::anyhow!("--seed needs a value"))?;
                opts.seed = v.parse()?;
            }
            "--frames" => {
                let v = args.next().ok_or_else(|| anyhow::anyhow!("--frames needs a value"))?;
                opts.frames = v.parse()?;
            }
            "--dt" => {
                let v = args.next().ok_or_else(|| anyhow::anyhow!("--dt needs a value"))?;
                opts.dt = v.parse()?;
            }
            other => anyhow::bail!("unknown argument: {other} (expected --seed/--frames/--dt)"),
        }
    }
    Ok(opts)
}

fn main() -> Result<()> {
    // Info-level logging by default; RUST_LOG overrides.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,redgulch=info"),
    )
    .format_timestamp_secs()
    .try_init();

    let opts = parse_args()?;
    log::info!(
        "scripted run: seed {} for {} frames at dt {:.4}s",
        opts.seed,
        opts.frames,
        opts.dt
    );
    let report = run_scripted(&opts)?;
    log::info!(
        "done: {} frames ({:.1}s sim), {} | score {} currency {} wave {} kills {}",
        report.frames_run,
        report.sim_time_s,
        if report.survived { "survived" } else { "defeated" },
        report.score,
        report.currency,
        report.wave,
        report.hostile_kills
    );
    log::info!(
        "peak actors {}, {} chunks resident, {} audio cues, {} commentary, {:.1} deg recoil",
        report.peak_actors,
        report.loaded_chunks,
        report.audio_cues,
        report.commentary_events,
        report.recoil_total_deg
    );
    Ok(())
}
