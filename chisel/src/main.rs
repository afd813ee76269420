//! Demo host harness for the extension pack.
//!
//! Stands in for the block runtime: registers both extensions, runs a short
//! noise sweep, and bridges OSC traffic through the relay until interrupted.

mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chisel_blocks::{NoiseExtension, OscExtension};
use chisel_ext::{Arguments, Extension};
use chisel_relay::RelayClient;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => HostConfig::load(&PathBuf::from(path))?,
        None => HostConfig::default(),
    };

    let noise = NoiseExtension::new();
    log::info!(
        "registered extension:\n{}",
        serde_json::to_string_pretty(&noise.info())?
    );

    let seed = config
        .demo_seed
        .unwrap_or_else(|| f64::from(rand::random::<u16>()));
    demo_noise_sweep(&noise, seed)?;

    let cancel = CancellationToken::new();
    match RelayClient::connect(&config.relay(), cancel.clone()).await {
        Ok(client) => {
            let osc = OscExtension::new(Arc::new(client));
            log::info!(
                "registered extension:\n{}",
                serde_json::to_string_pretty(&osc.info())?
            );
            run_osc_loop(&osc, &config).await?;
        }
        Err(e) => log::warn!("{e}; OSC blocks are unavailable this run"),
    }

    cancel.cancel();
    Ok(())
}

/// Evaluate all three noise blocks along a short line, as a script would.
fn demo_noise_sweep(noise: &NoiseExtension, seed: f64) -> Result<()> {
    log::info!("noise sweep with seed {seed}");
    for i in 0..8 {
        let x = f64::from(i) * 0.25;
        let args = Arguments::new()
            .with("X", x)
            .with("Y", 0.5)
            .with("SEED", seed);
        let perlin = noise.execute("perlinNoise", &args)?;
        let simplex = noise.execute("simplexNoise", &args)?;
        let curl_x = noise.execute("curlNoise", &args.clone().with("DIMENSION", "x"))?;
        log::info!("x={x:.2} perlin={perlin} simplex={simplex} curl.x={curl_x}");
    }
    Ok(())
}

/// Push a heartbeat and poll `/test` once per second until ctrl-c.
async fn run_osc_loop(osc: &OscExtension, config: &HostConfig) -> Result<()> {
    log::info!("polling /test once per second; ctrl-c to stop");
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let mut beat: u64 = 0;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("shutting down");
                return Ok(());
            }
            _ = ticker.tick() => {
                beat += 1;
                osc.execute(
                    "oscSender",
                    &Arguments::new()
                        .with("PORT", f64::from(config.send_port))
                        .with("ADDRESS", "/heartbeat")
                        .with("VALUE", beat as f64),
                )?;
                let value = osc.execute(
                    "oscReceive",
                    &Arguments::new()
                        .with("PORT", f64::from(config.receive_port))
                        .with("ADDRESS", "/test"),
                )?;
                log::info!("/test = {value}");
            }
        }
    }
}
