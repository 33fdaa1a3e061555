use crate::error::Result;
use crate::settings::store_config;
use crate::store::RecordStore;

pub fn run(ids: &[i64]) -> Result<()> {
    let store = RecordStore::new(store_config());
    let removed = store.delete(ids)?;
    log::debug!("deleted {removed} of {} requested expenses", ids.len());

    println!("Deleted {removed} record(s)");
    Ok(())
}
