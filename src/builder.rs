//! Builder: assemble a product step by step, optionally driven by a [`Director`].
//!
//! ```rust
//! use creational_patterns::builder::{ConcreteBuilder1, Director};
//!
//! let mut builder = ConcreteBuilder1::new();
//! Director.build_full_featured_product(&mut builder);
//! assert_eq!(builder.product().to_string(), "Product parts: PartA1,PartB1,PartC1");
//! ```

use std::fmt;

/// The building steps shared by every builder.
pub trait Builder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);
}

/// Product assembled by [`ConcreteBuilder1`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product1 {
    parts: Vec<String>,
}

impl Product1 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn list_parts(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Product1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product parts: {}", self.parts.join(","))
    }
}

/// Builds [`Product1`] values. All steps work on the same product until it is taken.
#[derive(Debug, Default)]
pub struct ConcreteBuilder1 {
    product: Product1,
}

impl ConcreteBuilder1 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the product under construction.
    pub fn reset(&mut self) {
        self.product = Product1::new();
    }

    /// Takes the finished product and leaves the builder ready for the next one.
    pub fn product(&mut self) -> Product1 {
        std::mem::take(&mut self.product)
    }
}

impl Builder for ConcreteBuilder1 {
    fn produce_part_a(&mut self) {
        self.product.add("PartA1");
    }

    fn produce_part_b(&mut self) {
        self.product.add("PartB1");
    }

    fn produce_part_c(&mut self) {
        self.product.add("PartC1");
    }
}

/// Runs the building steps in fixed sequences. Works with any [`Builder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn build_minimal_viable_product(&self, builder: &mut impl Builder) {
        builder.produce_part_a();
    }

    pub fn build_full_featured_product(&self, builder: &mut impl Builder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_product() {
        let mut builder = ConcreteBuilder1::new();
        Director.build_minimal_viable_product(&mut builder);
        assert_eq!(builder.product().list_parts(), "Product parts: PartA1");
    }

    #[test]
    fn test_full_product() {
        let mut builder = ConcreteBuilder1::new();
        Director.build_full_featured_product(&mut builder);
        let product = builder.product();
        assert_eq!(product.parts(), ["PartA1", "PartB1", "PartC1"]);
    }

    #[test]
    fn test_product_resets_builder() {
        let mut builder = ConcreteBuilder1::new();
        Director.build_full_featured_product(&mut builder);
        let _ = builder.product();

        assert!(builder.product().parts().is_empty());
    }

    #[test]
    fn test_custom_sequence_without_director() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_a();
        builder.produce_part_c();
        assert_eq!(
            builder.product().to_string(),
            "Product parts: PartA1,PartC1"
        );
    }

    #[test]
    fn test_reset_discards_parts() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_b();
        builder.reset();
        builder.produce_part_c();
        assert_eq!(builder.product().parts(), ["PartC1"]);
    }

    #[test]
    fn test_director_drives_any_builder() {
        #[derive(Default)]
        struct Counting(u8);

        impl Builder for Counting {
            fn produce_part_a(&mut self) {
                self.0 += 1;
            }
            fn produce_part_b(&mut self) {
                self.0 += 10;
            }
            fn produce_part_c(&mut self) {
                self.0 += 100;
            }
        }

        let mut counting = Counting::default();
        Director.build_full_featured_product(&mut counting);
        Director.build_minimal_viable_product(&mut counting);
        assert_eq!(counting.0, 112);
    }

    #[test]
    fn test_product_add() {
        let mut product = Product1::new();
        product.add("Custom");
        product.add(String::from("Extra"));
        assert_eq!(product.to_string(), "Product parts: Custom,Extra");
    }
}
