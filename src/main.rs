use zebra::{
    error::Result,
    puzzle::render::render_arrangement,
    solver::{
        driver::{SearchDriver, MAX_ATTEMPTS},
        stats::render_failure_stats,
    },
};

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let driver = SearchDriver::new();
    let (solution, stats) = driver.run(&mut rand::thread_rng())?;

    match solution {
        Some(sim) => {
            println!("Found solution after {} attempts", stats.attempts);
            println!("{}", render_arrangement(&sim)?);
            println!("{}", render_failure_stats(&stats));
        }
        None => println!("Gave up after {} attempts", MAX_ATTEMPTS),
    }

    Ok(())
}
