//! # Netcontrol Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── debug_benchmarks.rs   # Hot-path cost of debug gates
//! └── src/
//!     └── integration/          # Cross-crate scenarios
//!         ├── flows.rs          # Bootstrap, operator commands, rendering
//!         └── concurrency.rs    # Multi-threaded flag mutation
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p nc-tests
//!
//! # By category
//! cargo test -p nc-tests integration::flows::
//! cargo test -p nc-tests integration::concurrency::
//!
//! # Benchmarks
//! cargo bench -p nc-tests
//! ```
