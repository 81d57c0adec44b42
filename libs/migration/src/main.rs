use migration::Migrator;
use sea_orm_migration::cli;

/// `DATABASE_URL` selects the target database, e.g. `migration up` or `migration fresh`.
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
