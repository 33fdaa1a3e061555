use crate::error::Result;
use crate::fmt;
use crate::models::ExpenseDraft;
use crate::settings::store_config;
use crate::store::RecordStore;

pub fn run(
    amount: &str,
    category: &str,
    description: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let draft = ExpenseDraft::parse(&date, category, amount, description.as_deref().unwrap_or(""))?;

    let store = RecordStore::new(store_config());
    let id = store.insert(&draft)?;
    log::debug!("inserted expense {id}");

    println!(
        "Added expense #{id}: {} {} {}",
        draft.date,
        draft.category,
        fmt::amount(draft.amount)
    );
    Ok(())
}
