use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path, store_config};
use crate::store::RecordStore;

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;

    let store = RecordStore::new(store_config());
    store.init()?;

    println!("Initialized outlay at {}", resolved.display());
    println!();
    println!("Try these next:");
    println!("  outlay add 12.50 Food \"lunch with Sam\"");
    println!("  outlay list --month {}", chrono::Local::now().format("%Y-%m"));
    println!("  outlay chart categories");
    Ok(())
}
