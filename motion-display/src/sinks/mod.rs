pub mod readout;

pub use readout::ReadoutSink;
