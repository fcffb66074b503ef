use anyhow::Result;
use log::LevelFilter;
use maxheap_rs::MaxHeap;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let mut heap = MaxHeap::from([14, 3, 8, 9, 10, 80, 60]);
    heap.insert(70);
    heap.insert(25);
    heap.insert(2);
    log::info!("built heap with {} items", heap.len());

    while !heap.is_empty() {
        println!("{}", heap.pop_max()?);
    }
    Ok(())
}
