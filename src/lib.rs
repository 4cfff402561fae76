//! blockrand - Permuted block randomization
//!
//! Assigns subjects to treatment groups in balanced, randomly ordered blocks.
//! Every block contains each treatment the same number of times; the order
//! inside each block is an independent uniform permutation.
//!
//! # Architecture
//!
//! - **Randomizer**: validation, block planning, Fisher-Yates shuffle
//! - **Random sources**: injectable uniform sources (seeded, entropy, scripted)
//! - **Config**: CLI + TOML, parameter bounds as policy
//! - **Output**: text, JSON and CSV renderers
//!
//! # Example
//!
//! ```
//! let result = blockrand::generate(24, 6, 3);
//! assert!(result.is_success());
//! assert_eq!(result.sequence().len(), 24);
//! ```

pub mod config;
pub mod output;
pub mod random;
pub mod randomizer;

// Re-export commonly used types
pub use config::Config;
pub use random::RandomSource;
pub use randomizer::{
    generate, Allocation, Assignment, BlockRandomizer, GenerationError, GenerationRequest,
    GenerationResult, Policy, TreatmentLabel,
};

/// Result type used by the application layers
pub type Result<T> = anyhow::Result<T>;
