mod block_ack;
mod cf_end;
mod rts_cts_ack;

pub use block_ack::{BarControl, BlockAck, BlockAckRequest};
pub use cf_end::{CfEnd, CfEndAck, PsPoll};
pub use rts_cts_ack::{Ack, Cts, Rts};
