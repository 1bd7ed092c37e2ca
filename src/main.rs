use {
    anyhow::Context,
    buildnum::BuildNumberCalculator,
    std::io::{self, Write},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let build_number = BuildNumberCalculator::default().build_number();
    log::info!("build number {build_number}");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{build_number}").context("failed to write build number")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
