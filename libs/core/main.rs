use anyhow::Result;
use clap::Parser;
use tracing::info;

use rec_core::cli::{init_tracing, Cli};
use rec_core::session::{render_table, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config()?;
    let session = Session::train(&config)?;

    let summary = session.summary();
    info!(
        train_rows = summary.train_rows,
        test_rows = summary.test_rows,
        final_loss = summary.report.final_loss(),
        test_mse = summary.test_mse,
        test_rating_mse = summary.test_rating_mse,
        "Training complete"
    );

    let rows = session.top_k(&cli.user, cli.top_k)?;
    println!("Top {} restaurants for {}", rows.len(), cli.user);
    print!("{}", render_table(&rows));
    Ok(())
}
