pub use bundle::{ChainSegment, MultiChainCompact, SegmentWitness};
pub use execution::{ChainExecution, Execution};
pub use repayment::Repayment;

mod bundle;
mod execution;
mod repayment;
