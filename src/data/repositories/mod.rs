pub mod item;

pub use item::ItemRepository;
