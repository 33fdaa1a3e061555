use crate::db::CredentialMode;
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::{settings_path, store_config};
use crate::store::RecordStore;

pub fn run() -> Result<()> {
    let store = RecordStore::new(store_config());
    let config = store.config();
    let db_path = config.db_path();

    println!("Settings:   {}", settings_path().display());
    println!("Data dir:   {}", config.data_dir.display());
    println!("Database:   {}", db_path.display());
    let credentials = match config.credentials {
        CredentialMode::Trusted => "trusted (no key)",
        CredentialMode::Passphrase(_) => "passphrase (OUTLAY_DB_KEY)",
    };
    println!("Key mode:   {credentials}");
    println!("Timeout:    {}s", config.busy_timeout.as_secs());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {}", format_bytes(size));

        let conn = store.connect()?;

        let expenses: i64 = conn.query_row("SELECT count(*) FROM expenses", [], |r| r.get(0))?;
        let categories: i64 =
            conn.query_row("SELECT count(DISTINCT category) FROM expenses", [], |r| r.get(0))?;
        let months: i64 = conn.query_row(
            "SELECT count(DISTINCT substr(date, 1, 7)) FROM expenses",
            [],
            |r| r.get(0),
        )?;

        println!();
        println!("Expenses:    {expenses}");
        println!("Categories:  {categories}");
        println!("Months:      {months}");
    } else {
        println!();
        println!("Database not found. Run `outlay init` to set up.");
    }

    Ok(())
}
