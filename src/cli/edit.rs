use crate::error::Result;
use crate::fmt;
use crate::models::ExpenseDraft;
use crate::settings::store_config;
use crate::store::RecordStore;

pub fn run(id: i64, date: &str, category: &str, amount: &str, desc: Option<String>) -> Result<()> {
    let draft = ExpenseDraft::parse(date, category, amount, desc.as_deref().unwrap_or(""))?;

    let store = RecordStore::new(store_config());
    store.update(id, &draft)?;
    log::debug!("updated expense {id}");

    println!(
        "Updated expense #{id}: {} {} {}",
        draft.date,
        draft.category,
        fmt::amount(draft.amount)
    );
    Ok(())
}
