//! Builder example for creational-patterns.
//!
//! Run with: `cargo run --example builder`

use creational_patterns::builder::{Builder, ConcreteBuilder1, Director};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let director = Director;
    let mut builder = ConcreteBuilder1::new();

    println!("Standard basic product:");
    director.build_minimal_viable_product(&mut builder);
    println!("{}", builder.product().list_parts());

    println!("Standard full featured product:");
    director.build_full_featured_product(&mut builder);
    let full = builder.product();
    debug!(parts = full.parts().len(), "full product assembled");
    println!("{}", full.list_parts());

    println!("Custom product:");
    builder.produce_part_a();
    builder.produce_part_c();
    println!("{}", builder.product().list_parts());
}
