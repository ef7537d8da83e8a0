//! Demonstration binary: a fixed sequence of stock operations against the
//! default snapshot path.

use stockbook_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, OperationLog};
use stockbook_persistence::{DEFAULT_SNAPSHOT_PATH, reload, save};

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let mut inventory = Inventory::new();
    let mut log = OperationLog::new();

    inventory.add("apple", 10, Some(&mut log));
    inventory.remove("apple", 3);
    // Absent item: absorbed without an error.
    inventory.remove("orange", 1);

    tracing::debug!(entries = log.len(), "mutations applied");

    println!("Apple stock: {}", inventory.quantity("apple")?);
    println!("Low items: {:?}", inventory.low_stock(DEFAULT_LOW_STOCK_THRESHOLD));

    save(&inventory, DEFAULT_SNAPSHOT_PATH)?;
    reload(&mut inventory, DEFAULT_SNAPSHOT_PATH)?;

    println!("Items Report");
    print!("{inventory}");

    Ok(())
}
