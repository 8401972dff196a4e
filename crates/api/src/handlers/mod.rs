pub mod lookups;
pub mod notes;
pub mod perfumes;
