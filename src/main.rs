use anyhow::Context;
use log::info;

use qrstyle::BatchJob;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("QR code generator");
    BatchJob::default().run().context("QR code batch failed")?;
    Ok(())
}
