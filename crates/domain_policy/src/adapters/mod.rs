//! Adapters for the policy repository port
//!
//! - **InMemoryPolicyRepository**: process-lifetime store; records vanish on restart

pub mod in_memory;

pub use in_memory::InMemoryPolicyRepository;
