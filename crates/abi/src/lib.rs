pub use spoke_pool::{ISpokePool, IntentFillPayload, SegmentData};

mod spoke_pool;
